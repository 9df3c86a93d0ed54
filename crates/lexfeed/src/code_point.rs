/// One decoded unit of the input stream.
///
/// A scanner built on top of [`InputStream`](crate::InputStream) switches on
/// all three variants: real characters, the marker left behind by a malformed
/// UTF-8 sequence, and end of input. End of input is a value rather than
/// `None` so that lookahead past the end of a file is an ordinary peek, not a
/// special case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePoint {
    /// A valid Unicode scalar value.
    Scalar(char),
    /// Replacement marker for one malformed UTF-8 byte run.
    Invalid,
    /// The source is exhausted. Sticky: once returned by
    /// [`InputStream::get`](crate::InputStream::get), every later read
    /// returns it again.
    EndOfInput,
}

impl CodePoint {
    /// Numeric form of [`CodePoint::Invalid`]: the first value above the
    /// Unicode scalar range, so it compares greater than any real code point.
    pub const INVALID_SENTINEL: u32 = 0x11_0000;

    /// Numeric form of [`CodePoint::EndOfInput`], distinct from both scalars
    /// and [`Self::INVALID_SENTINEL`].
    pub const END_OF_INPUT_SENTINEL: u32 = 0x11_0001;

    /// Numeric view, for table-driven lexers that index on code point
    /// values. Scalars map to themselves; the sentinels map to values
    /// strictly above `0x10FFFF`.
    #[must_use]
    pub fn to_u32(self) -> u32 {
        match self {
            CodePoint::Scalar(ch) => u32::from(ch),
            CodePoint::Invalid => Self::INVALID_SENTINEL,
            CodePoint::EndOfInput => Self::END_OF_INPUT_SENTINEL,
        }
    }

    /// The scalar value, if this is one.
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            CodePoint::Scalar(ch) => Some(ch),
            _ => None,
        }
    }

    /// Whether this is a real character rather than a sentinel.
    #[must_use]
    pub fn is_scalar(self) -> bool {
        matches!(self, CodePoint::Scalar(_))
    }

    /// Whether this is the invalid-sequence marker.
    #[must_use]
    pub fn is_invalid(self) -> bool {
        matches!(self, CodePoint::Invalid)
    }

    /// Whether this is the end-of-input sentinel.
    #[must_use]
    pub fn is_end_of_input(self) -> bool {
        matches!(self, CodePoint::EndOfInput)
    }
}

impl From<char> for CodePoint {
    fn from(ch: char) -> Self {
        CodePoint::Scalar(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::CodePoint;

    #[test]
    fn sentinels_sort_above_every_scalar() {
        assert!(CodePoint::INVALID_SENTINEL > u32::from(char::MAX));
        assert!(CodePoint::END_OF_INPUT_SENTINEL > CodePoint::INVALID_SENTINEL);
        assert_eq!(CodePoint::Scalar('\u{10FFFF}').to_u32(), 0x10_FFFF);
    }

    #[test]
    fn conversions() {
        assert_eq!(CodePoint::from('a'), CodePoint::Scalar('a'));
        assert_eq!(CodePoint::Scalar('a').as_char(), Some('a'));
        assert_eq!(CodePoint::Invalid.as_char(), None);
        assert!(CodePoint::Scalar('\0').is_scalar());
        assert!(CodePoint::Invalid.is_invalid());
        assert!(CodePoint::EndOfInput.is_end_of_input());
    }
}
