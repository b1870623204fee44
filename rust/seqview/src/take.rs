//! Take nodes: keeping a bounded run of elements from the front or the back.

use crate::leaf::Leaf;
use crate::view::{End, Node, View};

impl<L: Leaf> View<L> {
    /// Keeps at most the first `amount` elements.
    pub fn take_first(&self, amount: usize) -> View<L> {
        self.take(End::First, amount)
    }

    /// Keeps at most the last `amount` elements.
    ///
    /// The window start is relative to the sub-view's count at access time.
    pub fn take_last(&self, amount: usize) -> View<L> {
        self.take(End::Last, amount)
    }

    fn take(&self, end: End, amount: usize) -> View<L> {
        if self.max_count().is_some_and(|max| max <= amount) {
            log::trace!("take({amount}) on {self:?} keeps everything");
            return self.clone();
        }
        if amount == 0 {
            return View::empty();
        }
        if let Node::Base(leaf) = self.node()
            && let Some(leaf) = leaf.rewrap(|inner| inner.take(end, amount))
        {
            log::trace!("take({amount}) pushed into the adapted list view");
            return View::from_leaf(leaf);
        }
        match (end, self.node()) {
            (End::First, Node::TakeFirst { sub, amount: inner }) => {
                log::trace!("take({amount}) fused into TakeFirst({inner})");
                sub.take(end, amount.min(*inner))
            }
            (End::Last, Node::TakeLast { sub, amount: inner }) => {
                log::trace!("take({amount}) fused into TakeLast({inner})");
                sub.take(end, amount.min(*inner))
            }
            (End::First, _) => View::new(Node::TakeFirst {
                sub: self.clone(),
                amount,
            }),
            (End::Last, _) => View::new(Node::TakeLast {
                sub: self.clone(),
                amount,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::{ListView, LiveVec, Node, View};

    #[test]
    fn test_take_all_is_identity() {
        let source = Rc::new(RefCell::new([1, 2, 3]));
        let base = ListView::over(&source);
        assert!(base.take_first(3).ptr_eq(&base));
        assert!(base.take_last(10).ptr_eq(&base));

        let live = LiveVec::from(vec![1, 2, 3]);
        let taken = live.view().take_first(2);
        assert!(taken.take_first(2).ptr_eq(&taken));
        assert!(taken.take_last(5).ptr_eq(&taken));
    }

    #[test]
    fn test_take_zero_is_empty() {
        let live = LiveVec::from(vec![1, 2, 3]);
        let view = live.view().take_last(0);
        assert!(view.ptr_eq(&View::empty()));
        assert_eq!(view.count().unwrap(), 0);
    }

    #[test]
    fn test_take_fusion() {
        let live = LiveVec::from((0..10).collect::<Vec<_>>());
        let base = live.view();
        let view = base.take_first(6).take_first(4);
        assert!(view.sub().unwrap().ptr_eq(&base));
        assert!(matches!(view.node(), Node::TakeFirst { amount: 4, .. }));

        let view = base.take_last(6).take_last(4);
        assert!(view.sub().unwrap().ptr_eq(&base));
        assert_eq!(view.to_vec().unwrap(), vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_take_last_follows_source() {
        let live = LiveVec::from(vec![1, 2, 3]);
        let view = live.view().take_last(2);
        assert_eq!(view.to_vec().unwrap(), vec![2, 3]);
        live.push(4);
        assert_eq!(view.to_vec().unwrap(), vec![3, 4]);
        live.truncate(1);
        assert_eq!(view.to_vec().unwrap(), vec![1]);
        assert!(view.get(1).is_err());
    }

    #[test]
    fn test_mixed_families() {
        let live = LiveVec::from((0..10).collect::<Vec<_>>());
        let view = live.view().take_first(8).skip_first(2).take_last(3);
        assert_eq!(format!("{view:?}"), "TakeLast(3, SkipFirst(2, TakeFirst(8, Base)))");
        assert_eq!(view.max_count(), Some(3));
        assert_eq!(view.to_vec().unwrap(), vec![5, 6, 7]);
    }
}
