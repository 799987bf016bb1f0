//! Byte sources the parser reads from.
//!
//! The parser needs exactly two things from a transport: a blocking read
//! into a caller-provided buffer, and a way to release it. Anything that
//! can do both (an in-memory buffer, a file, a socket, an HTTP body) can
//! back a [`Stream`](crate::Stream).

use std::io::{self, Read};

/// A readable, closable byte source.
pub trait ByteSource {
    /// Read bytes into `buf`, blocking until at least one byte is available.
    ///
    /// Returns `Ok(0)` at end of input, with the same meaning as
    /// [`Read::read`].
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Release the source. The stream calls this at most once.
    fn close(&mut self) -> io::Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Adapts any [`Read`] into a [`ByteSource`].
///
/// Closing drops the reader, which releases whatever it holds (file
/// handles, sockets). Reads after close report end of input.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: Option<R>,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader: Some(reader) }
    }

    /// Borrow the reader, if it has not been closed.
    pub fn get_ref(&self) -> Option<&R> {
        self.reader.as_ref()
    }

    /// Take the reader back, if it has not been closed.
    pub fn into_inner(self) -> Option<R> {
        self.reader
    }

    /// True once `close` has run.
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.reader.as_mut() {
            Some(reader) => reader.read(buf),
            None => Ok(0),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        self.reader = None;
        Ok(())
    }
}

impl<R: Read> From<R> for ReaderSource<R> {
    fn from(reader: R) -> Self {
        Self::new(reader)
    }
}
