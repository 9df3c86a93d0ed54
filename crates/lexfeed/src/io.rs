//! `std::io::Read` adapter, behind the `std` feature.

use alloc::{vec, vec::Vec};
use std::io::{ErrorKind, Read};

use crate::source::ByteSource;

/// A [`ByteSource`] over any [`std::io::Read`], buffered in chunks.
///
/// An I/O error ends the stream, exactly like end of input; the error is
/// retained and can be fetched with [`Self::take_error`] after the stream
/// reports [`EndOfInput`](crate::CodePoint::EndOfInput). This mirrors how a
/// C++ `istream` folds failure into EOF, but keeps the cause recoverable.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    buf: Vec<u8>,
    pos: usize,
    len: usize,
    error: Option<std::io::Error>,
    done: bool,
}

impl<R: Read> ReadSource<R> {
    const CHUNK: usize = 8 * 1024;

    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: vec![0; Self::CHUNK],
            pos: 0,
            len: 0,
            error: None,
            done: false,
        }
    }

    /// Returns the I/O error that ended the stream, if any, leaving `None`
    /// in its place.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    /// Unwraps the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn refill(&mut self) {
        self.pos = 0;
        self.len = 0;
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    break;
                }
                Ok(n) => {
                    self.len = n;
                    break;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    self.error = Some(e);
                    self.done = true;
                    break;
                }
            }
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Option<u8> {
        if self.pos == self.len {
            if self.done {
                return None;
            }
            self.refill();
            if self.pos == self.len {
                return None;
            }
        }
        let byte = self.buf[self.pos];
        self.pos += 1;
        Some(byte)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use std::io::{self, Read};

    use super::ReadSource;
    use crate::{ByteSource, CodePoint, InputStream};

    #[test]
    fn reads_through_a_reader() {
        let mut input = InputStream::new(ReadSource::new(&b"hi\r\nthere"[..]));
        assert_eq!(input.get(), CodePoint::Scalar('h'));
        assert_eq!(input.get(), CodePoint::Scalar('i'));
        assert_eq!(input.get(), CodePoint::Scalar('\n'));
        assert_eq!((input.line(), input.column()), (2, 1));
    }

    struct FailAfterOne {
        sent: bool,
    }

    impl Read for FailAfterOne {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                Err(io::Error::other("disk on fire"))
            } else {
                self.sent = true;
                buf[0] = b'x';
                Ok(1)
            }
        }
    }

    #[test]
    fn io_error_ends_the_stream_and_is_retained() {
        let mut source = ReadSource::new(FailAfterOne { sent: false });
        assert_eq!(source.next_byte(), Some(b'x'));
        assert_eq!(source.next_byte(), None);
        assert_eq!(source.next_byte(), None);
        let err = source.take_error().expect("error should be retained");
        assert_eq!(err.to_string(), "disk on fire");
        assert!(source.take_error().is_none());
    }
}
