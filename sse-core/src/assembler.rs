//! Event assembler: stage two of the parser.
//!
//! [`EventBuilder`] folds fields into the event in progress and hands out a
//! finished [`Event`] at each dispatch boundary. It owns all state that
//! crosses field boundaries:
//!
//! - `last_event_id` is sticky and survives dispatch
//! - `event_type` and `data` are reset after every dispatch
//! - `dirty` records whether any field took effect since the last dispatch
//!
//! `data` keeps a `\n` after every line; exactly one is trimmed when the
//! event is built.

use std::time::Duration;

use memchr::memchr;
use tracing::{debug, trace};

use crate::event::Event;
use crate::field::{Field, FieldName};

/// Accumulator for the event in progress.
#[derive(Debug, Clone, Default)]
pub struct EventBuilder {
    last_event_id: String,
    event_type: String,
    data: String,
    dirty: bool,
    retry: Option<Duration>,
}

impl EventBuilder {
    /// Empty builder: no pending fields, empty last event id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one field into the pending event.
    ///
    /// Returns the finished event when `field` is a boundary and something
    /// was accumulated.
    pub fn apply(&mut self, field: &Field<'_>) -> Option<Event> {
        match field.name {
            FieldName::Data => {
                self.data.push_str(&field.value_str());
                self.data.push('\n');
                self.dirty = true;
            }
            FieldName::Event => {
                self.event_type.clear();
                self.event_type.push_str(&field.value_str());
                self.dirty = true;
            }
            FieldName::Id => {
                // Ids containing NUL are ignored outright
                if memchr(0, field.value).is_none() {
                    self.last_event_id.clear();
                    self.last_event_id.push_str(&field.value_str());
                    self.dirty = true;
                } else {
                    debug!("ignoring id field containing a NUL byte");
                }
            }
            FieldName::Retry => {
                match parse_retry(field.value) {
                    Some(ms) => self.retry = Some(Duration::from_millis(ms)),
                    None => trace!(value = %field.value_str(), "ignoring invalid retry value"),
                }
                self.dirty = true;
            }
            FieldName::Comment => {}
            FieldName::Unknown => {
                trace!(
                    name = %String::from_utf8_lossy(field.raw_name),
                    "ignoring unknown field"
                );
            }
            FieldName::Boundary => return self.dispatch(),
        }
        None
    }

    /// Build the pending event if anything was accumulated, and reset.
    ///
    /// Used at boundaries and when the input ends without a final blank
    /// line.
    pub fn dispatch(&mut self) -> Option<Event> {
        if !self.dirty {
            return None;
        }

        let mut data = std::mem::take(&mut self.data);
        if data.ends_with('\n') {
            data.pop();
        }
        let event = Event {
            last_event_id: self.last_event_id.clone(),
            event_type: std::mem::take(&mut self.event_type),
            data,
        };
        self.dirty = false;

        trace!(
            id = %event.last_event_id,
            kind = %event.kind(),
            len = event.data.len(),
            "dispatching event"
        );
        Some(event)
    }

    /// True when fields have been accumulated since the last dispatch.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The sticky last event id.
    #[inline]
    pub fn last_event_id(&self) -> &str {
        &self.last_event_id
    }

    /// Most recent valid `retry` value.
    #[inline]
    pub fn retry(&self) -> Option<Duration> {
        self.retry
    }
}

/// `retry` values are ASCII digits only; anything else is ignored.
fn parse_retry(value: &[u8]) -> Option<u64> {
    if value.is_empty() || !value.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(value).ok()?.parse().ok()
}
