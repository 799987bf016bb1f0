//! Scripted byte source
//!
//! Hands out input in reads of fixed sizes and records what the stream did
//! with it, so tests can assert on close counts and reads after close.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use sse_core::ByteSource;

/// What happened to a [`ChunkedSource`], shared with the test.
#[derive(Debug, Default)]
pub struct SourceLog {
    pub reads: usize,
    pub closes: usize,
    pub reads_after_close: usize,
}

/// Byte source delivering `input` in reads of `sizes` bytes, cycling.
pub struct ChunkedSource {
    input: Vec<u8>,
    pos: usize,
    sizes: Vec<usize>,
    next_size: usize,
    close_error: Option<io::ErrorKind>,
    read_error: Option<(usize, io::ErrorKind)>,
    log: Rc<RefCell<SourceLog>>,
}

impl ChunkedSource {
    pub fn new(input: &[u8], sizes: &[usize]) -> (Self, Rc<RefCell<SourceLog>>) {
        let log = Rc::new(RefCell::new(SourceLog::default()));
        let sizes = if sizes.is_empty() { vec![usize::MAX] } else { sizes.to_vec() };
        let source = Self {
            input: input.to_vec(),
            pos: 0,
            sizes,
            next_size: 0,
            close_error: None,
            read_error: None,
            log: Rc::clone(&log),
        };
        (source, log)
    }

    /// Make `close` fail with `kind`.
    pub fn failing_close(mut self, kind: io::ErrorKind) -> Self {
        self.close_error = Some(kind);
        self
    }

    /// Make reads fail with `kind` once `offset` bytes have been delivered.
    pub fn failing_read_at(mut self, offset: usize, kind: io::ErrorKind) -> Self {
        self.read_error = Some((offset, kind));
        self
    }
}

impl ByteSource for ChunkedSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        {
            let mut log = self.log.borrow_mut();
            log.reads += 1;
            if log.closes > 0 {
                log.reads_after_close += 1;
            }
        }

        if let Some((offset, kind)) = self.read_error {
            if self.pos >= offset {
                return Err(io::Error::new(kind, "scripted read failure"));
            }
        }

        let mut size = self.sizes[self.next_size % self.sizes.len()].max(1);
        self.next_size += 1;
        if let Some((offset, _)) = self.read_error {
            size = size.min(offset - self.pos);
        }

        let n = size.min(buf.len()).min(self.input.len() - self.pos);
        buf[..n].copy_from_slice(&self.input[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn close(&mut self) -> io::Result<()> {
        self.log.borrow_mut().closes += 1;
        match self.close_error {
            Some(kind) => Err(io::Error::new(kind, "scripted close failure")),
            None => Ok(()),
        }
    }
}
