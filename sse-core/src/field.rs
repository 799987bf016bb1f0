//! Field records produced by the tokenizer.
//!
//! One line of the event stream becomes one [`Field`]. Classification
//! follows the SSE line grammar:
//!
//! ```text
//! ""               -> Boundary           (dispatch the pending event)
//! ": keepalive"    -> Comment            value "keepalive"
//! "data: hello"    -> Data               value "hello"
//! "data:hello"     -> Data               value "hello"
//! "data:  two"     -> Data               value " two"  (one space stripped)
//! "data"           -> Data               value ""
//! "x-custom: 1"    -> Unknown            value "1"
//! ```

use std::borrow::Cow;

use memchr::memchr;

/// Field names, as a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// `data`: one line of the event payload
    Data,
    /// `event`: the event type
    Event,
    /// `id`: the last event id
    Id,
    /// `retry`: reconnection time in milliseconds
    Retry,
    /// A line starting with `:`
    Comment,
    /// An empty line
    Boundary,
    /// Any other name
    Unknown,
}

/// Recognized names. Matching is case-sensitive.
static FIELD_NAMES: phf::Map<&'static [u8], FieldName> = phf::phf_map! {
    b"data" => FieldName::Data,
    b"event" => FieldName::Event,
    b"id" => FieldName::Id,
    b"retry" => FieldName::Retry,
};

impl FieldName {
    /// Classify a raw field name.
    #[inline]
    pub fn from_bytes(name: &[u8]) -> Self {
        FIELD_NAMES.get(name).copied().unwrap_or(Self::Unknown)
    }

    /// Wire spelling for the recognized names; `None` for the others.
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            Self::Data => Some("data"),
            Self::Event => Some("event"),
            Self::Id => Some("id"),
            Self::Retry => Some("retry"),
            Self::Comment | Self::Boundary | Self::Unknown => None,
        }
    }
}

/// A classified line, borrowed from the tokenizer's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: FieldName,
    /// Name bytes as they appeared on the wire (empty for comments and
    /// boundaries).
    pub raw_name: &'a [u8],
    /// Bytes after the first colon, at most one leading space removed.
    pub value: &'a [u8],
}

impl<'a> Field<'a> {
    /// Classify one line. `line` excludes its terminator.
    pub fn parse(line: &'a [u8]) -> Self {
        if line.is_empty() {
            return Self {
                name: FieldName::Boundary,
                raw_name: &[],
                value: &[],
            };
        }

        match memchr(b':', line) {
            Some(0) => Self {
                name: FieldName::Comment,
                raw_name: &[],
                value: strip_one_space(&line[1..]),
            },
            Some(colon) => {
                let raw_name = &line[..colon];
                Self {
                    name: FieldName::from_bytes(raw_name),
                    raw_name,
                    value: strip_one_space(&line[colon + 1..]),
                }
            }
            None => Self {
                name: FieldName::from_bytes(line),
                raw_name: line,
                value: &[],
            },
        }
    }

    /// Value decoded as UTF-8, invalid sequences replaced.
    #[inline]
    pub fn value_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.value)
    }

    /// True for an empty line.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.name == FieldName::Boundary
    }
}

#[inline]
fn strip_one_space(value: &[u8]) -> &[u8] {
    match value {
        [b' ', rest @ ..] => rest,
        _ => value,
    }
}
