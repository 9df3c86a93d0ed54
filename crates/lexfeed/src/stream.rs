//! The consumer-facing input stream.
//!
//! Owns the byte source outright and layers three things over the raw
//! decoder:
//!
//! - bounded lookahead via [`InputStream::peek`], backed by the fixed
//!   capacity FIFO in [`crate::lookahead`];
//! - line-ending normalization: CR, LF and CRLF all come out as a single
//!   LF, and nothing else is altered;
//! - 1-based line/column bookkeeping, advanced only by [`InputStream::get`].
//!
//! Malformed input is a data condition, not an error: the decoder's
//! [`CodePoint::Invalid`] marker flows through `get`/`peek` like any other
//! value. Misusing the API (peeking past [`InputStream::MAX_PEEK`]) is a
//! caller bug and panics.

use crate::{
    code_point::CodePoint, decoder, error::StreamError, lookahead::LookaheadBuffer,
    source::ByteSource,
};

/// A normalizing, position-tracking stream of [`CodePoint`]s.
pub struct InputStream<S> {
    source: S,
    buffer: LookaheadBuffer,
    line: u32,
    column: u32,
    // Set after a CR was normalized to LF; an immediately following LF
    // belongs to the same CRLF pair and is dropped.
    skip_line_feed: bool,
    ended: bool,
}

impl<S: ByteSource> InputStream<S> {
    /// Largest offset accepted by [`Self::peek`].
    ///
    /// Offsets must stay below `capacity - 1`: the spare slot belongs to
    /// normalization, which buffers a CR's replacement LF while the fate of
    /// the following code point is still undecided.
    pub const MAX_PEEK: u8 = (LookaheadBuffer::CAPACITY - 2) as u8;

    /// Creates a stream over `source`, positioned at line 1, column 1.
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffer: LookaheadBuffer::new(),
            line: 1,
            column: 1,
            skip_line_feed: false,
            ended: false,
        }
    }

    /// Consumes and returns the next normalized code point.
    ///
    /// Returns [`CodePoint::EndOfInput`] forever once the source is
    /// exhausted. Consuming an LF bumps the line and resets the column;
    /// consuming any other scalar (or an invalid marker) bumps the column.
    pub fn get(&mut self) -> CodePoint {
        self.fill(1);
        let cp = self.buffer.pop_front();
        match cp {
            CodePoint::Scalar('\n') => {
                self.line += 1;
                self.column = 1;
            }
            CodePoint::EndOfInput => {}
            _ => self.column += 1,
        }
        cp
    }

    /// Returns the normalized code point `offset` positions ahead without
    /// consuming anything. `peek(0)` is the next [`Self::get`] result.
    /// Never touches line/column; repeated calls return the same value.
    ///
    /// # Panics
    ///
    /// If `offset` exceeds [`Self::MAX_PEEK`]. That is a contract violation
    /// by the caller, not a recoverable condition.
    pub fn peek(&mut self, offset: u8) -> CodePoint {
        assert!(
            offset <= Self::MAX_PEEK,
            "peek offset {offset} exceeds the lookahead limit {}",
            Self::MAX_PEEK
        );
        let offset = usize::from(offset);
        self.fill(offset + 1);
        self.buffer.get(offset)
    }

    /// 1-based line of the code point the next [`Self::get`] returns.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the code point the next [`Self::get`] returns.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Like [`Self::get`], but rejects the two code points a lexer for a
    /// textual language never wants to see raw: the invalid-sequence marker
    /// and NUL. The offending code point is consumed either way, so the
    /// stream stays usable after an error.
    ///
    /// # Errors
    ///
    /// [`StreamError::InvalidSequence`] or [`StreamError::NulByte`], carrying
    /// the position of the rejected code point.
    pub fn get_checked(&mut self) -> Result<CodePoint, StreamError> {
        let (line, column) = (self.line, self.column);
        match self.get() {
            CodePoint::Invalid => Err(StreamError::InvalidSequence { line, column }),
            CodePoint::Scalar('\0') => Err(StreamError::NulByte { line, column }),
            cp => Ok(cp),
        }
    }

    /// Decodes until the buffer holds at least `needed` normalized entries.
    ///
    /// Each decoded value pushes at most one entry, so a fill can never
    /// overshoot the buffer capacity. End of input is sticky: after it has
    /// been pushed once the source is never consulted again.
    fn fill(&mut self, needed: usize) {
        while self.buffer.len() < needed {
            if self.ended {
                self.buffer.push_back(CodePoint::EndOfInput);
                continue;
            }
            let cp = decoder::decode(&mut self.source);
            if self.skip_line_feed {
                self.skip_line_feed = false;
                if cp == CodePoint::Scalar('\n') {
                    continue;
                }
            }
            match cp {
                CodePoint::Scalar('\r') => {
                    self.buffer.push_back(CodePoint::Scalar('\n'));
                    self.skip_line_feed = true;
                }
                CodePoint::EndOfInput => {
                    self.ended = true;
                    self.buffer.push_back(cp);
                }
                _ => self.buffer.push_back(cp),
            }
        }
    }
}
