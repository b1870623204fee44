//! Count enforcement ("require" / "exact" slicing).
//!
//! `require(minimum)` checks the current count once, eagerly, and then returns
//! a view that re-checks the live count on every access. The oracle lets the
//! check disappear entirely when the minimum is already guaranteed (e.g. over a
//! fixed-size source), and the check is always pushed down through slicing
//! nodes so it ends up directly on the base, merged with any existing check.

use seqview_common::{Error, Result, verify_arg};

use crate::leaf::Leaf;
use crate::view::{Node, View};

/// Passes `count` through if it satisfies `minimum`, otherwise reports a
/// broken view.
#[inline]
pub(crate) fn check_minimum(count: usize, minimum: usize) -> Result<usize> {
    if count < minimum {
        log::debug!("broken view: {count} elements available, {minimum} required");
        return Err(Error::broken_view(minimum, count));
    }
    Ok(count)
}

impl<L: Leaf> View<L> {
    /// Returns a view failing every access while this view holds fewer than
    /// `minimum` elements.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `minimum` exceeds the current count, plus every
    /// error [`View::count`] reports.
    pub fn require(&self, minimum: usize) -> Result<View<L>> {
        let count = self.count()?;
        verify_arg!(minimum, minimum <= count);
        Ok(self.push_require(minimum))
    }

    /// Rewrites `CountCheck(self, minimum)` into its canonical form. The
    /// current count is known to satisfy `minimum`.
    pub(crate) fn push_require(&self, minimum: usize) -> View<L> {
        if minimum <= self.min_count() {
            log::trace!("require({minimum}) eliminated: guaranteed by {self:?}");
            return self.clone();
        }
        match self.node() {
            Node::SkipFirst { sub, amount } => {
                sub.push_require(minimum.saturating_add(*amount)).skip_first(*amount)
            }
            Node::SkipLast { sub, amount } => {
                sub.push_require(minimum.saturating_add(*amount)).skip_last(*amount)
            }
            Node::TakeFirst { sub, amount } => {
                debug_assert!(minimum <= *amount);
                sub.push_require(minimum).take_first(*amount)
            }
            Node::TakeLast { sub, amount } => {
                debug_assert!(minimum <= *amount);
                sub.push_require(minimum).take_last(*amount)
            }
            Node::CountCheck { sub, minimum: enforced } => {
                log::trace!("require({minimum}) merged into CountCheck({enforced})");
                sub.push_require(minimum.max(*enforced))
            }
            Node::Base(leaf) => match leaf.rewrap(|inner| inner.push_require(minimum)) {
                Some(leaf) => {
                    log::trace!("require({minimum}) pushed into the adapted list view");
                    View::from_leaf(leaf)
                }
                None => View::new(Node::CountCheck {
                    sub: self.clone(),
                    minimum,
                }),
            },
            Node::Empty => View::new(Node::CountCheck {
                sub: self.clone(),
                minimum,
            }),
        }
    }

    /// `skip_first(amount)`, failing fast instead of clamping when fewer than
    /// `amount` elements exist.
    pub fn skip_first_exact(&self, amount: usize) -> Result<View<L>> {
        Ok(self.require(amount)?.skip_first(amount))
    }

    /// `skip_last(amount)`, failing fast instead of clamping.
    pub fn skip_last_exact(&self, amount: usize) -> Result<View<L>> {
        Ok(self.require(amount)?.skip_last(amount))
    }

    /// `take_first(amount)`, failing fast when fewer than `amount` elements
    /// exist, now or at any later access.
    pub fn take_first_exact(&self, amount: usize) -> Result<View<L>> {
        Ok(self.require(amount)?.take_first(amount))
    }

    /// `take_last(amount)`, failing fast instead of clamping.
    pub fn take_last_exact(&self, amount: usize) -> Result<View<L>> {
        Ok(self.require(amount)?.take_last(amount))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use seqview_common::ErrorKind;

    use crate::{ListView, LiveVec};

    #[test]
    fn test_require_checks_eagerly() {
        let source = LiveVec::from(vec![1, 2, 3]);
        let err = source.view().require(4).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
        assert!(source.view().require(3).is_ok());
    }

    #[test]
    fn test_require_is_lazy_afterwards() {
        let source = LiveVec::from(vec![1, 2, 3]);
        let view = source.view().require(3).unwrap();
        assert_eq!(format!("{view:?}"), "CountCheck(3, Base)");
        assert_eq!(view.min_count(), 3);

        source.pop();
        assert_eq!(
            view.count().unwrap_err().into_kind(),
            ErrorKind::BrokenView {
                required: 3,
                actual: 2
            }
        );
        assert!(view.get(0).unwrap_err().is_broken_view());
        assert!(view.to_vec().unwrap_err().is_broken_view());

        source.push(9);
        assert_eq!(view.to_vec().unwrap(), vec![1, 2, 9]);
    }

    #[test]
    fn test_require_eliminated_by_oracle() {
        let source = Rc::new(RefCell::new([1, 2, 3, 4]));
        let base = ListView::over(&source);
        assert!(base.require(2).unwrap().ptr_eq(&base));

        let view = base.take_first_exact(2).unwrap();
        assert_eq!(format!("{view:?}"), "TakeFirst(2, Base)");

        let live = LiveVec::from(vec![1, 2, 3]);
        let checked = live.view().require(2).unwrap();
        assert!(checked.require(1).unwrap().ptr_eq(&checked));
        assert!(live.view().require(0).is_ok());
    }

    #[test]
    fn test_require_pushed_through_slices() {
        let source = LiveVec::from((0..10).collect::<Vec<_>>());
        let view = source.view().skip_first(2).skip_last(3).require(4).unwrap();
        assert_eq!(
            format!("{view:?}"),
            "SkipLast(3, SkipFirst(2, CountCheck(9, Base)))"
        );

        let view = source.view().take_last(6).require(5).unwrap();
        assert_eq!(format!("{view:?}"), "TakeLast(6, CountCheck(5, Base))");
    }

    #[test]
    fn test_checks_merge() {
        let source = LiveVec::from((0..10).collect::<Vec<_>>());
        let view = source
            .view()
            .require(3)
            .unwrap()
            .skip_first(2)
            .require(6)
            .unwrap();
        assert_eq!(format!("{view:?}"), "SkipFirst(2, CountCheck(8, Base))");
        let view = view.take_first_exact(5).unwrap();
        assert_eq!(
            format!("{view:?}"),
            "TakeFirst(5, SkipFirst(2, CountCheck(8, Base)))"
        );
    }

    #[test]
    fn test_exact_slices() {
        let source = LiveVec::from(vec![1, 2, 3, 4]);
        let view = source.view();
        assert_eq!(view.skip_first_exact(1).unwrap().to_vec().unwrap(), vec![2, 3, 4]);
        assert_eq!(view.skip_last_exact(4).unwrap().to_vec().unwrap(), Vec::<i32>::new());
        assert_eq!(view.take_last_exact(2).unwrap().to_vec().unwrap(), vec![3, 4]);
        assert!(view.take_first_exact(5).is_err());
        assert!(view.skip_last_exact(5).is_err());

        let taken = view.take_first_exact(3).unwrap();
        source.truncate(2);
        assert!(taken.count().unwrap_err().is_broken_view());
        // The clamping variant keeps working on the same source.
        assert_eq!(view.take_first(3).count().unwrap(), 2);
    }
}
