//! Read an SSE stream from stdin and print each event.
//!
//! ```text
//! curl -sN https://example.com/events | cargo run --example stdin_events
//! RUST_LOG=sse_core=trace cargo run --example stdin_events < capture.txt
//! ```

use std::io;

use sse_core::{ReaderSource, Stream, StreamConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), sse_core::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let max_event_size = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);
    let config = StreamConfig::new().max_event_size(max_event_size);

    let mut stream = Stream::with_config(ReaderSource::new(io::stdin().lock()), config);
    while let Some(event) = stream.recv()? {
        println!("{:?} [{}] {:?}", event.last_event_id, event.kind(), event.data);
    }
    stream.close()
}
