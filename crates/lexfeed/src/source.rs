//! Byte source abstraction the decoder pulls from.
//!
//! The decoder never needs pushback: CRLF pairing is resolved one layer up in
//! [`InputStream`](crate::InputStream), which already buffers ahead. A source
//! therefore only has to hand out octets forward, one at a time.

/// A forward-only supplier of octets.
///
/// `None` is the out-of-band end signal, distinct from every byte value.
/// Once a source has returned `None` it should keep returning `None`.
pub trait ByteSource {
    /// Consumes and returns the next octet, or `None` at end of input.
    fn next_byte(&mut self) -> Option<u8>;
}

/// A source over an in-memory byte slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Creates a source reading `bytes` front to back.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl<'a> From<&'a [u8]> for SliceSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for SliceSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }
}

/// Adapter making any byte iterator a [`ByteSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator<Item = u8>> IterSource<I> {
    /// Wraps `iter`.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator<Item = u8>> ByteSource for IterSource<I> {
    fn next_byte(&mut self) -> Option<u8> {
        self.iter.next()
    }
}
