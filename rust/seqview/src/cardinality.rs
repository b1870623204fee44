//! Conservative element-count bounds of a view.
//!
//! A [`Cardinality`] never evaluates a view; it is derived from the bounds of the
//! sub-view and the parameters of the node on top of it. Every operation here is
//! pure and O(1). Bounds are allowed to be looser than the truth, never tighter:
//! for every reachable state of the source, `min <= count <= max` (when `max` is
//! known).

use std::fmt;

/// Guaranteed lower bound and optional guaranteed upper bound of a view's count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardinality {
    min: usize,
    max: Option<usize>,
}

impl Cardinality {
    /// Nothing is known: `0..=unbounded`.
    pub const UNKNOWN: Cardinality = Cardinality { min: 0, max: None };

    /// Always empty.
    pub const EMPTY: Cardinality = Cardinality::exactly(0);

    /// A count that can never change (e.g. a fixed-size array source).
    pub const fn exactly(count: usize) -> Cardinality {
        Cardinality {
            min: count,
            max: Some(count),
        }
    }

    /// Creates bounds from their parts.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `max < min`.
    pub fn new(min: usize, max: Option<usize>) -> Cardinality {
        debug_assert!(max.is_none_or(|max| min <= max));
        Cardinality { min, max }
    }

    /// Guaranteed lower bound.
    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Guaranteed upper bound, if one is known.
    #[inline]
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Returns `true` if the bounds prove the count is always `count`.
    pub fn is_exactly(&self, count: usize) -> bool {
        self.min == count && self.max == Some(count)
    }

    /// Returns `true` if the bounds prove the view is always empty.
    pub fn is_always_empty(&self) -> bool {
        self.max == Some(0)
    }

    /// Returns `true` if `count` lies within the bounds.
    pub fn admits(&self, count: usize) -> bool {
        self.min <= count && self.max.is_none_or(|max| count <= max)
    }

    /// Bounds after removing `amount` elements from either end.
    pub fn skip(self, amount: usize) -> Cardinality {
        Cardinality {
            min: self.min.saturating_sub(amount),
            max: self.max.map(|max| max.saturating_sub(amount)),
        }
    }

    /// Bounds after keeping at most `amount` elements from either end.
    pub fn take(self, amount: usize) -> Cardinality {
        Cardinality {
            min: self.min.min(amount),
            max: Some(self.max.map_or(amount, |max| max.min(amount))),
        }
    }

    /// Bounds after enforcing that at least `minimum` elements exist.
    ///
    /// The upper bound is unchanged: enforcement never adds elements, it only
    /// turns a short count into an access error.
    pub fn require(self, minimum: usize) -> Cardinality {
        Cardinality {
            min: self.min.max(minimum),
            max: self.max,
        }
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Cardinality::UNKNOWN
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{}..={max}", self.min),
            None => write!(f, "{}..", self.min),
        }
    }
}
