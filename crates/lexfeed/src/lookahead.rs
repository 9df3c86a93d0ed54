//! Bounded FIFO of decoded, already-normalized code points.
//!
//! Purely mechanical storage between the decoder and the stream's consumer;
//! it knows nothing about UTF-8 or line endings. Capacity is fixed at 255 so
//! every reachable position fits an 8-bit lookahead offset. All operations
//! are checked: violating a precondition is a bug in the stream, not a data
//! condition, and panics immediately.

use alloc::collections::VecDeque;

use crate::code_point::CodePoint;

#[derive(Debug)]
pub(crate) struct LookaheadBuffer {
    data: VecDeque<CodePoint>,
}

impl LookaheadBuffer {
    /// Hard ceiling on buffered entries, the largest 8-bit index plus one.
    pub(crate) const CAPACITY: usize = 255;

    pub(crate) fn new() -> Self {
        Self {
            data: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn push_back(&mut self, cp: CodePoint) {
        assert!(
            self.data.len() < Self::CAPACITY,
            "lookahead buffer overflow"
        );
        self.data.push_back(cp);
    }

    pub(crate) fn pop_front(&mut self) -> CodePoint {
        self.data
            .pop_front()
            .expect("pop_front on empty lookahead buffer")
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn front(&self) -> CodePoint {
        *self.data.front().expect("front on empty lookahead buffer")
    }

    pub(crate) fn get(&self, index: usize) -> CodePoint {
        assert!(
            index < self.data.len(),
            "lookahead index {index} out of range (len {})",
            self.data.len()
        );
        self.data[index]
    }
}
