//! Source location types for tracking positions in assembly text.

use serde::{Deserialize, Serialize};

/// A span of source text, represented as byte offsets.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at `offset`, as captured before a token is consumed.
    pub const fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }
}
