use thiserror::Error;

/// Rejection raised by [`InputStream::get_checked`](crate::InputStream::get_checked).
///
/// `line` and `column` locate the offending code point, i.e. what
/// [`line`](crate::InputStream::line) / [`column`](crate::InputStream::column)
/// reported just before the read. The plain [`get`](crate::InputStream::get)
/// path never produces these; it hands the caller
/// [`CodePoint::Invalid`](crate::CodePoint::Invalid) and lets the lexer
/// decide.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// A malformed UTF-8 byte run was consumed.
    #[error("invalid UTF-8 sequence at line {line}, column {column}")]
    InvalidSequence {
        /// 1-based line of the rejected sequence.
        line: u32,
        /// 1-based column of the rejected sequence.
        column: u32,
    },
    /// A NUL code point was consumed.
    #[error("NUL code point at line {line}, column {column}")]
    NulByte {
        /// 1-based line of the NUL.
        line: u32,
        /// 1-based column of the NUL.
        column: u32,
    },
}
