//! Skip nodes: removing a run of elements from the front or the back.

use crate::leaf::Leaf;
use crate::view::{End, Node, View};

impl<L: Leaf> View<L> {
    /// Removes the first `amount` elements; shorter views become empty.
    ///
    /// Indexed access at `i` reads the sub-view at `i + amount`.
    pub fn skip_first(&self, amount: usize) -> View<L> {
        self.skip(End::First, amount)
    }

    /// Removes the last `amount` elements; shorter views become empty.
    ///
    /// The cut-off point is relative to the sub-view's count at access time, so
    /// it moves as the source grows or shrinks.
    pub fn skip_last(&self, amount: usize) -> View<L> {
        self.skip(End::Last, amount)
    }

    fn skip(&self, end: End, amount: usize) -> View<L> {
        if amount == 0 {
            return self.clone();
        }
        if self.max_count().is_some_and(|max| max <= amount) {
            log::trace!("skip({amount}) on {self:?} is always empty");
            return View::empty();
        }
        if let Node::Base(leaf) = self.node()
            && let Some(leaf) = leaf.rewrap(|inner| inner.skip(end, amount))
        {
            log::trace!("skip({amount}) pushed into the adapted list view");
            return View::from_leaf(leaf);
        }
        match (end, self.node()) {
            (End::First, Node::SkipFirst { sub, amount: inner }) => {
                log::trace!("skip({amount}) fused into SkipFirst({inner})");
                sub.skip(end, inner.saturating_add(amount))
            }
            (End::Last, Node::SkipLast { sub, amount: inner }) => {
                log::trace!("skip({amount}) fused into SkipLast({inner})");
                sub.skip(end, inner.saturating_add(amount))
            }
            (End::First, _) => View::new(Node::SkipFirst {
                sub: self.clone(),
                amount,
            }),
            (End::Last, _) => View::new(Node::SkipLast {
                sub: self.clone(),
                amount,
            }),
        }
    }
}
