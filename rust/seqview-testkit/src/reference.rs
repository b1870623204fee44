//! Eager slicing of plain slices with the clamping semantics of views.
//!
//! Amounts larger than the input clamp instead of panicking.

pub fn skip_first<T>(values: &[T], amount: usize) -> &[T] {
    &values[amount.min(values.len())..]
}

pub fn skip_last<T>(values: &[T], amount: usize) -> &[T] {
    &values[..values.len().saturating_sub(amount)]
}

pub fn take_first<T>(values: &[T], amount: usize) -> &[T] {
    &values[..amount.min(values.len())]
}

pub fn take_last<T>(values: &[T], amount: usize) -> &[T] {
    &values[values.len().saturating_sub(amount)..]
}

/// A slicing step, for describing chains of operations in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    SkipFirst(usize),
    SkipLast(usize),
    TakeFirst(usize),
    TakeLast(usize),
}

impl Slice {
    /// All four steps with the given amount.
    pub fn all(amount: usize) -> [Slice; 4] {
        [
            Slice::SkipFirst(amount),
            Slice::SkipLast(amount),
            Slice::TakeFirst(amount),
            Slice::TakeLast(amount),
        ]
    }

    pub fn amount(self) -> usize {
        match self {
            Slice::SkipFirst(n) | Slice::SkipLast(n) | Slice::TakeFirst(n) | Slice::TakeLast(n) => {
                n
            }
        }
    }

    pub fn apply<T>(self, values: &[T]) -> &[T] {
        match self {
            Slice::SkipFirst(n) => skip_first(values, n),
            Slice::SkipLast(n) => skip_last(values, n),
            Slice::TakeFirst(n) => take_first(values, n),
            Slice::TakeLast(n) => take_last(values, n),
        }
    }
}

/// Applies `steps` left to right.
pub fn apply_all<'a, T>(values: &'a [T], steps: &[Slice]) -> &'a [T] {
    steps.iter().fold(values, |acc, step| step.apply(acc))
}
