//! SSE Core Parser
//!
//! Incremental, pull-based parser for Server-Sent Events. Turns a byte
//! stream into [`Event`]s one at a time without buffering more than one
//! event's worth of input.
//!
//! # Architecture
//!
//! - **source.rs** - `ByteSource` trait (read + close) and `ReaderSource`
//! - **field.rs** - `Field` / `FieldName`, line classification
//! - **tokenizer.rs** - `FieldTokenizer`, bytes to fields, size bound
//! - **assembler.rs** - `EventBuilder`, fields to events
//! - **stream.rs** - `Stream`, the `recv` / `close` interface
//! - **config.rs** - `StreamConfig`
//! - **error.rs** - `Error`
//!
//! # Example
//!
//! ```
//! use sse_core::{ReaderSource, Stream};
//!
//! let input = "event: greeting\ndata: Hello,\ndata: World!\n\n";
//! let mut stream = Stream::new(ReaderSource::new(input.as_bytes()));
//!
//! while let Some(event) = stream.recv()? {
//!     assert_eq!(event.kind(), "greeting");
//!     assert_eq!(event.data, "Hello,\nWorld!");
//! }
//! stream.close()?;
//! # Ok::<(), sse_core::Error>(())
//! ```

pub mod assembler;
pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod source;
pub mod stream;
pub mod tokenizer;

pub use assembler::EventBuilder;
pub use config::{StreamConfig, DEFAULT_MAX_EVENT_SIZE};
pub use error::{Error, Result};
pub use event::{Event, DEFAULT_EVENT_TYPE};
pub use field::{Field, FieldName};
pub use source::{ByteSource, ReaderSource};
pub use stream::Stream;
pub use tokenizer::{Ending, FieldTokenizer};
