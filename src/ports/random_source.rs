//! Random source port - Interface for the advisor's fallback selection.
//!
//! The advisor picks a default prompt uniformly at random when no keyword
//! rule matches. Injecting the source lets tests pin the choice or run a
//! seeded, reproducible sequence.

/// Port for uniform index selection.
///
/// Implementations must be thread-safe; the advisor is shared across
/// request handlers behind an `Arc`.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

/// Always returns the same index, wrapped into range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}
