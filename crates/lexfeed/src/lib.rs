//! Front-end input plumbing for a lexical scanner: a strict UTF-8 decoder, a
//! bounded lookahead buffer, and a line/column-tracking stream that
//! normalizes line endings (CR, LF, CRLF) to LF.
//!
//! The stream never fails on malformed input. Each malformed byte run decodes
//! to one [`CodePoint::Invalid`] marker and decoding resumes at the next
//! unconsumed byte; callers that want hard rejection instead use
//! [`InputStream::get_checked`].
//!
//! ```rust
//! use lexfeed::{CodePoint, InputStream, SliceSource};
//!
//! let mut input = InputStream::new(SliceSource::from("fn main()\r\n"));
//! assert_eq!(input.peek(0), CodePoint::Scalar('f'));
//! assert_eq!(input.get(), CodePoint::Scalar('f'));
//! assert_eq!((input.line(), input.column()), (1, 2));
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod code_point;
mod decoder;
mod error;
mod lookahead;
mod source;
mod stream;

#[cfg(feature = "std")]
mod io;

pub use code_point::CodePoint;
pub use decoder::decode;
pub use error::StreamError;
#[cfg(feature = "std")]
pub use io::ReadSource;
pub use source::{ByteSource, IterSource, SliceSource};
pub use stream::InputStream;
