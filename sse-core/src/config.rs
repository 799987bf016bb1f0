//! Stream configuration.

/// Default bound on the bytes of a single event: 64 KiB.
pub const DEFAULT_MAX_EVENT_SIZE: usize = 64 * 1024;

/// Configures how a [`Stream`](crate::Stream) behaves.
///
/// The default limit is enough for most event streams; raise it only when
/// single events carry large payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StreamConfig {
    /// Maximum length in bytes of the byte sequence representing one event,
    /// line terminators included. Zero selects [`DEFAULT_MAX_EVENT_SIZE`].
    pub max_event_size: usize,
}

impl StreamConfig {
    /// Configuration with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum event size. Zero restores the default.
    pub fn max_event_size(mut self, bytes: usize) -> Self {
        self.max_event_size = bytes;
        self
    }

    /// The limit actually enforced.
    #[inline]
    pub fn effective_max_event_size(&self) -> usize {
        if self.max_event_size == 0 {
            DEFAULT_MAX_EVENT_SIZE
        } else {
            self.max_event_size
        }
    }
}
