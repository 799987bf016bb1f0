//! Test infrastructure for the SSE parser
//!
//! Provides scripted byte sources and seeded chunk generators.

#![allow(dead_code)]

mod generators;
mod source;

pub use generators::Gen;
pub use source::{ChunkedSource, SourceLog};

use sse_core::{Event, Stream, StreamConfig};

/// Shorthand for building an expected event.
pub fn ev(id: &str, kind: &str, data: &str) -> Event {
    Event {
        last_event_id: id.to_string(),
        event_type: kind.to_string(),
        data: data.to_string(),
    }
}

/// Drain a stream, stopping at end of stream or the first error.
pub fn collect<S: sse_core::ByteSource>(stream: &mut Stream<S>) -> (Vec<Event>, Option<sse_core::Error>) {
    let mut events = Vec::new();
    loop {
        match stream.recv() {
            Ok(Some(event)) => events.push(event),
            Ok(None) => return (events, None),
            Err(e) => return (events, Some(e)),
        }
    }
}

/// Parse `input` delivered in reads of the given sizes (cycled).
pub fn parse_chunked(input: &[u8], sizes: &[usize], config: StreamConfig) -> (Vec<Event>, Option<sse_core::Error>) {
    let (source, _) = ChunkedSource::new(input, sizes);
    let mut stream = Stream::with_config(source, config);
    collect(&mut stream)
}

/// Parse `input` delivered in a single read.
pub fn parse(input: &[u8]) -> Vec<Event> {
    let (events, err) = parse_chunked(input, &[usize::MAX], StreamConfig::default());
    assert!(err.is_none(), "unexpected error: {:?}", err);
    events
}
