//! Events returned to the caller.

/// Event type assumed by consumers when the stream names none.
pub const DEFAULT_EVENT_TYPE: &str = "message";

/// One dispatched event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Most recent `id` seen on the stream, possibly from an earlier event.
    pub last_event_id: String,
    /// Value of the `event` field; empty when none was sent.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub event_type: String,
    /// `data` lines joined with `\n`.
    pub data: String,
}

impl Event {
    /// Event type with the `"message"` default applied.
    pub fn kind(&self) -> &str {
        if self.event_type.is_empty() {
            DEFAULT_EVENT_TYPE
        } else {
            &self.event_type
        }
    }

    /// Iterate over the individual `data` lines.
    pub fn data_lines(&self) -> impl Iterator<Item = &str> {
        self.data.split('\n')
    }
}
