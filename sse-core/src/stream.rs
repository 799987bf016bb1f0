//! Caller-facing pull interface.
//!
//! [`Stream`] ties a [`FieldTokenizer`] to an [`EventBuilder`] and yields
//! one [`Event`] per call to [`recv`](Stream::recv).
//!
//! ```text
//!            recv() ──▶ Event          recv() ──▶ Ok(None)
//!   Open ───────────────────▶ Open ─────────────────────▶ Exhausted
//!    │                                                     │
//!    │ error                                               │ close()
//!    ▼                                                     ▼
//!  Failed ───────────────── close() ──────────────────▶ Closed
//! ```
//!
//! Every state other than `Open` answers `recv` with `Ok(None)` without
//! reading from the source again.

use std::time::Duration;

use tracing::debug;

use crate::assembler::EventBuilder;
use crate::config::StreamConfig;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::source::ByteSource;
use crate::tokenizer::FieldTokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Exhausted,
    Failed,
    Closed,
}

/// Reads SSE events one at a time from a byte source.
///
/// The stream keeps the last event id between calls, so each returned
/// event carries the id in effect when it was dispatched.
///
/// ```
/// use sse_core::{ReaderSource, Stream};
///
/// let input = "id: 1\ndata: First\n\ndata: Second\n\n";
/// let mut stream = Stream::new(ReaderSource::new(input.as_bytes()));
///
/// let first = stream.recv().unwrap().unwrap();
/// assert_eq!((first.last_event_id.as_str(), first.data.as_str()), ("1", "First"));
///
/// let second = stream.recv().unwrap().unwrap();
/// assert_eq!((second.last_event_id.as_str(), second.data.as_str()), ("1", "Second"));
///
/// assert!(stream.recv().unwrap().is_none());
/// stream.close().unwrap();
/// ```
#[derive(Debug)]
pub struct Stream<S> {
    tokenizer: FieldTokenizer<S>,
    builder: EventBuilder,
    config: StreamConfig,
    state: State,
    source_closed: bool,
}

impl<S: ByteSource> Stream<S> {
    /// Stream with the default 64 KiB event limit.
    pub fn new(source: S) -> Self {
        Self::with_config(source, StreamConfig::default())
    }

    /// Stream with explicit configuration.
    pub fn with_config(source: S, config: StreamConfig) -> Self {
        Self {
            tokenizer: FieldTokenizer::new(source, config.effective_max_event_size()),
            builder: EventBuilder::new(),
            config,
            state: State::Open,
            source_closed: false,
        }
    }

    /// Receive the next event.
    ///
    /// Blocks on the source until an event is complete. Returns `Ok(None)`
    /// at end of stream, after [`close`](Self::close), and after an error
    /// has been returned once. If the input ends with fields pending but no
    /// final blank line, those fields are still dispatched as an event.
    pub fn recv(&mut self) -> Result<Option<Event>> {
        if self.state != State::Open {
            return Ok(None);
        }

        loop {
            let field = match self.tokenizer.next_field() {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    self.state = State::Failed;
                    return Err(e);
                }
            };
            if let Some(event) = self.builder.apply(&field) {
                return Ok(Some(event));
            }
        }

        // Input ended: flush whatever is pending, clean ending or not
        if let Some(event) = self.builder.dispatch() {
            return Ok(Some(event));
        }
        debug!(ending = ?self.tokenizer.ending(), "event stream exhausted");
        self.state = State::Exhausted;
        Ok(None)
    }

    /// Close the stream and the underlying source.
    ///
    /// Idempotent: the source is closed on the first call only. A failure
    /// from the source is reported from that first call, and the stream
    /// counts as closed either way.
    pub fn close(&mut self) -> Result<()> {
        self.state = State::Closed;
        if self.source_closed {
            return Ok(());
        }
        self.source_closed = true;
        debug!("closing event stream");
        self.tokenizer.get_mut().close().map_err(Error::Close)
    }

    /// True once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// Last event id seen so far; empty if none.
    pub fn last_event_id(&self) -> &str {
        self.builder.last_event_id()
    }

    /// Reconnection time from the most recent valid `retry` field.
    pub fn retry(&self) -> Option<Duration> {
        self.builder.retry()
    }

    /// Configuration the stream was built with.
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &S {
        self.tokenizer.get_ref()
    }

    /// Give back the source without closing it.
    pub fn into_inner(self) -> S {
        self.tokenizer.into_inner()
    }
}

impl<S: ByteSource> Iterator for Stream<S> {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv().transpose()
    }
}
