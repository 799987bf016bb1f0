//! Field tokenizer: stage one of the parser.
//!
//! Pulls bytes from a [`ByteSource`] into a growable buffer, cuts them into
//! lines and classifies each line as a [`Field`]. Only the unconsumed tail
//! of the input is kept: every complete line is handed out and then dropped
//! from the buffer on the next refill.
//!
//! # Line endings
//!
//! `\n`, `\r\n` and a bare `\r` all end a line. A `\r` that happens to be
//! the last buffered byte ends its line right away; if the next read starts
//! with `\n`, that byte is swallowed so `\r\n` split across two reads is
//! still a single terminator.
//!
//! # Size bound
//!
//! The bytes of the event in progress (every line since the last blank
//! line, terminators included, plus the partial line being read) may not
//! exceed `max_event_size`. Reads are sized so the unconsumed part of the
//! buffer never holds more than `max_event_size + 1` bytes.

use memchr::memchr2;
use tracing::warn;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::source::ByteSource;

/// Upper bound on a single read from the source.
const READ_CHUNK: usize = 8 * 1024;

/// UTF-8 byte-order mark, skipped once at the start of the input.
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// How the input ended, once the tokenizer has no more fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Input was empty or ended right after a line terminator.
    Clean,
    /// Input ended inside a line. That line was still returned as a field.
    Unterminated,
    /// An error was returned; nothing more will be read.
    Failed,
}

/// Incremental line tokenizer over a byte source.
#[derive(Debug)]
pub struct FieldTokenizer<S> {
    source: S,
    buf: Vec<u8>,
    /// Start of the unconsumed bytes in `buf`
    pos: usize,
    /// Bytes of complete lines consumed since the last boundary
    event_len: usize,
    max_event_size: usize,
    /// Previous line ended with `\r` at the end of the buffer
    skip_lf: bool,
    /// BOM check still pending
    at_start: bool,
    /// Source reported end of input
    eof: bool,
    /// Last line was returned without a terminator
    unterminated: bool,
    ending: Option<Ending>,
}

impl<S: ByteSource> FieldTokenizer<S> {
    /// Create a tokenizer reading from `source`.
    ///
    /// `max_event_size` must be positive; callers resolve defaults through
    /// [`StreamConfig`](crate::StreamConfig).
    pub fn new(source: S, max_event_size: usize) -> Self {
        let max_event_size = max_event_size.max(1);
        Self {
            source,
            buf: Vec::with_capacity(READ_CHUNK.min(max_event_size.saturating_add(1))),
            pos: 0,
            event_len: 0,
            max_event_size,
            skip_lf: false,
            at_start: true,
            eof: false,
            unterminated: false,
            ending: None,
        }
    }

    /// Advance to the next field.
    ///
    /// Returns `Ok(None)` once the input is exhausted; [`ending`](Self::ending)
    /// then tells how. Errors are fatal: after one, and after the first
    /// `None`, every call returns `Ok(None)` without touching the source.
    pub fn next_field(&mut self) -> Result<Option<Field<'_>>> {
        if self.ending.is_some() {
            return Ok(None);
        }

        loop {
            if self.skip_lf && self.pos < self.buf.len() {
                if self.buf[self.pos] == b'\n' {
                    self.pos += 1;
                }
                self.skip_lf = false;
            }

            if self.at_start {
                let avail = &self.buf[self.pos..];
                if avail.len() < BOM.len() && BOM.starts_with(avail) && !self.eof {
                    self.fill()?;
                    continue;
                }
                if avail.starts_with(BOM) {
                    self.pos += BOM.len();
                }
                self.at_start = false;
            }

            let avail = &self.buf[self.pos..];
            if let Some(i) = memchr2(b'\n', b'\r', avail) {
                let mut consumed = i + 1;
                if avail[i] == b'\r' {
                    match avail.get(i + 1) {
                        Some(b'\n') => consumed += 1,
                        Some(_) => {}
                        None => self.skip_lf = true,
                    }
                }

                if i == 0 {
                    self.event_len = 0;
                } else {
                    self.event_len += consumed;
                    if self.event_len > self.max_event_size {
                        return Err(self.too_large());
                    }
                }

                let start = self.pos;
                self.pos += consumed;
                return Ok(Some(Field::parse(&self.buf[start..start + i])));
            }

            let partial = avail.len();
            if self.event_len + partial > self.max_event_size {
                return Err(self.too_large());
            }

            if self.eof {
                if partial == 0 {
                    self.ending = Some(if self.unterminated {
                        Ending::Unterminated
                    } else {
                        Ending::Clean
                    });
                    return Ok(None);
                }
                let start = self.pos;
                self.pos = self.buf.len();
                self.unterminated = true;
                return Ok(Some(Field::parse(&self.buf[start..])));
            }

            self.fill()?;
        }
    }

    /// How the input ended, or `None` while fields may still follow.
    #[inline]
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// The enforced size bound.
    #[inline]
    pub fn max_event_size(&self) -> usize {
        self.max_event_size
    }

    /// Bytes read from the source but not yet handed out as fields.
    #[inline]
    pub fn buffered(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Give back the source. Buffered bytes are discarded.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Read more bytes, compacting the buffer first.
    fn fill(&mut self) -> Result<()> {
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }

        let len = self.buf.len();
        let want = self.max_event_size.saturating_add(1).saturating_sub(len).clamp(1, READ_CHUNK);
        self.buf.resize(len + want, 0);

        let read = loop {
            match self.source.read(&mut self.buf[len..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buf.truncate(len);
                    self.ending = Some(Ending::Failed);
                    return Err(Error::Read(e));
                }
            }
        };

        self.buf.truncate(len + read);
        if read == 0 {
            self.eof = true;
        }
        Ok(())
    }

    fn too_large(&mut self) -> Error {
        warn!(limit = self.max_event_size, "event exceeds maximum size");
        self.ending = Some(Ending::Failed);
        Error::EventTooLarge {
            limit: self.max_event_size,
        }
    }
}
