//! Strict UTF-8 decoding, one scalar per call.
//!
//! The accepted byte patterns, per RFC 3629:
//!
//! ```text
//!   Code Points         1st      2nd      3rd      4th
//! --------------------------------------------------------
//! U+0000....U+007F     00..7F
//! U+0080....U+07FF     C2..DF   80..BF
//! U+0800....U+0FFF     E0       A0..BF   80..BF
//! U+1000....U+CFFF     E1..EC   80..BF   80..BF
//! U+D000....U+D7FF     ED       80..9F   80..BF
//! U+E000....U+FFFF     EE..EF   80..BF   80..BF
//! U+10000...U+3FFFF    F0       90..BF   80..BF   80..BF
//! U+40000...U+FFFFF    F1..F3   80..BF   80..BF   80..BF
//! U+100000..U+10FFFF   F4       80..8F   80..BF   80..BF
//! ```
//!
//! The narrowed second-byte ranges after `E0`, `ED`, `F0` and `F4` are what
//! reject overlong encodings, UTF-16 surrogates, and values past U+10FFFF at
//! the earliest possible byte, so no range check on the accumulated value is
//! needed afterwards.

use crate::{code_point::CodePoint, source::ByteSource};

const CONT_MIN: u8 = 0x80;
const CONT_MAX: u8 = 0xBF;

/// Reads one continuation byte and folds its six payload bits into `acc`.
///
/// A byte outside `min..=max` (or end of input) aborts the sequence. The
/// offending byte stays consumed; the next `decode` call starts at the byte
/// after it.
fn continuation(source: &mut impl ByteSource, acc: u32, min: u8, max: u8) -> Option<u32> {
    match source.next_byte() {
        Some(byte) if (min..=max).contains(&byte) => Some((acc << 6) | u32::from(byte & 0x3F)),
        _ => None,
    }
}

/// Decodes the next UTF-8 sequence from `source`.
///
/// Returns [`CodePoint::EndOfInput`] when no byte is available, the decoded
/// scalar for a well-formed sequence, and [`CodePoint::Invalid`] for a
/// malformed one. Between one and four bytes are consumed; on a malformed
/// sequence everything up to and including the byte that failed validation
/// is consumed, so well-formed input resumes decoding on the very next call.
pub fn decode(source: &mut impl ByteSource) -> CodePoint {
    let Some(first) = source.next_byte() else {
        return CodePoint::EndOfInput;
    };

    let value = match first {
        0x00..=0x7F => Some(u32::from(first)),
        0xC2..=0xDF => continuation(source, u32::from(first & 0x1F), CONT_MIN, CONT_MAX),
        0xE0..=0xEF => {
            let acc = u32::from(first & 0x0F);
            let acc = match first {
                0xE0 => continuation(source, acc, 0xA0, CONT_MAX),
                0xED => continuation(source, acc, CONT_MIN, 0x9F),
                _ => continuation(source, acc, CONT_MIN, CONT_MAX),
            };
            acc.and_then(|acc| continuation(source, acc, CONT_MIN, CONT_MAX))
        }
        0xF0..=0xF4 => {
            let acc = u32::from(first & 0x07);
            let acc = match first {
                0xF0 => continuation(source, acc, 0x90, CONT_MAX),
                0xF4 => continuation(source, acc, CONT_MIN, 0x8F),
                _ => continuation(source, acc, CONT_MIN, CONT_MAX),
            };
            acc.and_then(|acc| continuation(source, acc, CONT_MIN, CONT_MAX))
                .and_then(|acc| continuation(source, acc, CONT_MIN, CONT_MAX))
        }
        // Stray continuation bytes, the overlong-only leaders C0/C1, and
        // leaders past F4. Exactly one octet consumed.
        _ => None,
    };

    // The leading-byte tables above admit only scalar values, so this cannot
    // produce a surrogate or an out-of-range value.
    match value.and_then(char::from_u32) {
        Some(ch) => CodePoint::Scalar(ch),
        None => CodePoint::Invalid,
    }
}
