//! Error types for the SSE parser.
//!
//! End of stream is not an error: [`Stream::recv`](crate::Stream::recv)
//! returns `Ok(None)` for it. Everything here is terminal for the stream
//! that produced it.

use std::io;

use thiserror::Error;

/// Errors surfaced by the tokenizer and the stream.
#[derive(Debug, Error)]
pub enum Error {
    /// The event in progress did not fit in the configured buffer bound.
    #[error("event exceeds the maximum size of {limit} bytes")]
    EventTooLarge { limit: usize },

    /// The byte source failed while reading.
    #[error("failed to read from event source: {0}")]
    Read(#[source] io::Error),

    /// The byte source failed while closing. The stream is closed anyway.
    #[error("failed to close event source: {0}")]
    Close(#[source] io::Error),
}

impl Error {
    /// True for the size-limit violation.
    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::EventTooLarge { .. })
    }

    /// The underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Read(e) | Self::Close(e) => Some(e),
            Self::EventTooLarge { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
