//! Wrap-around index arithmetic over a fixed number of cards.

/// Valid positions `0..len` with modulo stepping in both directions.
///
/// Every stepping method returns `None` for an empty ring instead of
/// dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexRing {
    len: usize,
}

impl IndexRing {
    pub const fn new(len: usize) -> Self {
        Self { len }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn contains(&self, index: usize) -> bool {
        index < self.len
    }

    /// Starting position: the middle card, rounding down.
    pub fn middle(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.len / 2)
    }

    /// Index after `index`, wrapping to the first card.
    pub fn next(&self, index: usize) -> Option<usize> {
        (!self.is_empty()).then(|| (index % self.len + 1) % self.len)
    }

    /// Index before `index`, wrapping to the last card.
    pub fn prev(&self, index: usize) -> Option<usize> {
        (!self.is_empty()).then(|| (index % self.len + self.len - 1) % self.len)
    }
}
