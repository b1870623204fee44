//! Enumeration of views.
//!
//! Two mechanisms exist:
//!
//! - **Window visitation** ([`View::try_for_each`] and friends, both view kinds):
//!   the chain of nodes is folded into a single `(skip, limit)` window that is
//!   applied at the leaf, so removed prefixes and suffixes are skipped at the
//!   enumeration layer instead of being read and dropped.
//! - **Cursor iteration** ([`ListView::iter`], list views only): an external
//!   iterator whose shape is picked per node by the strategy selector. A node
//!   either re-reads the view by index on every step ([`Strategy::Indexed`]) or
//!   delegates to the cursor of its sub-view ([`Strategy::Delegated`]). The
//!   choice only affects cost; both produce the same elements, and both stop
//!   at the live end of the view if the source shrinks mid-iteration. The one
//!   difference under mutation: a delegated `TakeLast` cursor fixes the start
//!   of its window at the first `next`, while an indexed one re-resolves it
//!   on every step.

use std::ops::ControlFlow;

use seqview_common::{Result, try_or_ret_some_err};

use crate::count_check::check_minimum;
use crate::leaf::{IndexedLeaf, Leaf, ListLeaf};
use crate::view::{ListView, Node, View};

/// How a list cursor walks a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Repeated indexed access against the node itself, re-reading its count
    /// on every step.
    Indexed,
    /// The sub-view's own cursor, with a prefix skipped and/or a length limit.
    Delegated,
}

/// Options for [`ListView::iter_with`].
#[derive(Debug, Clone, Default)]
pub struct EnumerationConfig {
    /// Forces one strategy for every node; `None` lets each node choose.
    pub strategy: Option<Strategy>,
}

impl EnumerationConfig {
    pub fn with_strategy(strategy: Strategy) -> EnumerationConfig {
        EnumerationConfig {
            strategy: Some(strategy),
        }
    }
}

impl<L: Leaf> Node<L> {
    /// The strategy a cursor uses for this node unless overridden.
    ///
    /// Nodes whose first element is not the first element of their sub-view
    /// (`SkipFirst`, `TakeLast`) use indexed access; the others delegate.
    pub fn preferred_strategy(&self) -> Strategy {
        match self {
            Node::SkipFirst { .. } | Node::TakeLast { .. } => Strategy::Indexed,
            Node::Empty
            | Node::Base(_)
            | Node::SkipLast { .. }
            | Node::TakeFirst { .. }
            | Node::CountCheck { .. } => Strategy::Delegated,
        }
    }
}

impl<L: Leaf> View<L> {
    /// Feeds the elements, in order, to `f` until it breaks.
    ///
    /// Count-enforcement checks run before the first element. The source is
    /// borrowed while `f` runs, so `f` must not mutate it.
    pub fn try_for_each<F>(&self, mut f: F) -> Result<ControlFlow<()>>
    where
        F: FnMut(L::Item) -> ControlFlow<()>,
    {
        self.visit_window(0, usize::MAX, &mut f)
    }

    pub fn for_each<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(L::Item),
    {
        self.try_for_each(|item| {
            f(item);
            ControlFlow::Continue(())
        })?;
        Ok(())
    }

    /// Copies the current elements into a new vector.
    pub fn to_vec(&self) -> Result<Vec<L::Item>> {
        let mut items = Vec::with_capacity(self.count()?);
        self.for_each(|item| items.push(item))?;
        Ok(items)
    }

    /// Linear search for `item`.
    pub fn contains(&self, item: &L::Item) -> Result<bool>
    where
        L::Item: PartialEq,
    {
        Ok(self.position(item)?.is_some())
    }

    /// Position of the first element equal to `item`, by linear search.
    pub fn position(&self, item: &L::Item) -> Result<Option<usize>>
    where
        L::Item: PartialEq,
    {
        let mut index = 0;
        let flow = self.try_for_each(|candidate| {
            if candidate == *item {
                ControlFlow::Break(())
            } else {
                index += 1;
                ControlFlow::Continue(())
            }
        })?;
        Ok(flow.is_break().then_some(index))
    }

    /// Visits at most `limit` elements of this view, starting at `skip`.
    pub(crate) fn visit_window(
        &self,
        skip: usize,
        limit: usize,
        visitor: &mut dyn FnMut(L::Item) -> ControlFlow<()>,
    ) -> Result<ControlFlow<()>> {
        match self.node() {
            Node::Empty => Ok(ControlFlow::Continue(())),
            Node::Base(leaf) => leaf.visit(skip, limit, visitor),
            Node::SkipFirst { sub, amount } => {
                sub.visit_window(skip.saturating_add(*amount), limit, visitor)
            }
            Node::SkipLast { .. } | Node::TakeFirst { .. } => {
                let count = self.count()?;
                let limit = limit.min(count.saturating_sub(skip));
                match self.sub() {
                    Some(sub) if limit > 0 => sub.visit_window(skip, limit, visitor),
                    _ => Ok(ControlFlow::Continue(())),
                }
            }
            Node::TakeLast { sub, amount } => {
                let sub_count = sub.count()?;
                let count = sub_count.min(*amount);
                let limit = limit.min(count.saturating_sub(skip));
                if limit == 0 {
                    return Ok(ControlFlow::Continue(()));
                }
                sub.visit_window(sub_count - count + skip, limit, visitor)
            }
            Node::CountCheck { sub, minimum } => {
                check_minimum(sub.count()?, *minimum)?;
                sub.visit_window(skip, limit, visitor)
            }
        }
    }
}

impl<T: Clone + 'static> ListView<T> {
    /// Iterates the elements with the per-node strategy selection.
    ///
    /// Nothing is read until the first call to `next`. Every item is a
    /// `Result`; after the first error the iterator is exhausted.
    pub fn iter(&self) -> ListIter<T> {
        self.iter_with(&EnumerationConfig::default())
    }

    pub fn iter_with(&self, config: &EnumerationConfig) -> ListIter<T> {
        ListIter {
            state: IterState::Pending {
                view: self.clone(),
                config: config.clone(),
            },
        }
    }
}

impl<'a, T: Clone + 'static> IntoIterator for &'a ListView<T> {
    type Item = Result<T>;
    type IntoIter = ListIter<T>;

    fn into_iter(self) -> ListIter<T> {
        self.iter()
    }
}

/// Cursor iterator over a [`ListView`].
pub struct ListIter<T: Clone + 'static> {
    state: IterState<T>,
}

enum IterState<T: Clone + 'static> {
    Pending {
        view: ListView<T>,
        config: EnumerationConfig,
    },
    Running(Cursor<T>),
    Done,
}

impl<T: Clone + 'static> Iterator for ListIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        if let IterState::Pending { view, config } = &self.state {
            let built = Cursor::build(view, config);
            match built {
                Ok(cursor) => self.state = IterState::Running(cursor),
                Err(err) => {
                    self.state = IterState::Done;
                    return Some(Err(err));
                }
            }
        }
        let IterState::Running(cursor) = &mut self.state else {
            return None;
        };
        let item = cursor.next();
        if !matches!(item, Some(Ok(_))) {
            self.state = IterState::Done;
        }
        item
    }
}

enum Cursor<T: Clone + 'static> {
    Empty,
    /// Positional reads straight from the leaf.
    Leaf { leaf: ListLeaf<T>, next: usize },
    /// Positional reads through the whole view.
    Indexed { view: ListView<T>, next: usize },
    /// Discards `pending` leading items of the inner cursor.
    Skipping { inner: Box<Cursor<T>>, pending: usize },
    /// Stops once `yielded` reaches the live count of `view`.
    Limited {
        inner: Box<Cursor<T>>,
        view: ListView<T>,
        yielded: usize,
    },
    /// Re-checks the enforced minimum of `sub` before every item.
    Checked {
        inner: Box<Cursor<T>>,
        sub: ListView<T>,
        minimum: usize,
    },
}

impl<T: Clone + 'static> Cursor<T> {
    fn build(view: &ListView<T>, config: &EnumerationConfig) -> Result<Cursor<T>> {
        let node = view.node();
        let strategy = config
            .strategy
            .unwrap_or_else(|| node.preferred_strategy());
        let cursor = match (strategy, node) {
            (_, Node::Empty) => Cursor::Empty,
            (_, Node::Base(leaf)) => Cursor::Leaf {
                leaf: leaf.clone(),
                next: 0,
            },
            (Strategy::Indexed, _) => Cursor::Indexed {
                view: view.clone(),
                next: 0,
            },
            (Strategy::Delegated, Node::SkipFirst { sub, amount }) => Cursor::Skipping {
                inner: Box::new(Cursor::build(sub, config)?),
                pending: *amount,
            },
            (Strategy::Delegated, Node::SkipLast { sub, .. } | Node::TakeFirst { sub, .. }) => {
                Cursor::Limited {
                    inner: Box::new(Cursor::build(sub, config)?),
                    view: view.clone(),
                    yielded: 0,
                }
            }
            (Strategy::Delegated, Node::TakeLast { sub, amount }) => {
                let sub_count = sub.count()?;
                let count = sub_count.min(*amount);
                Cursor::Limited {
                    inner: Box::new(Cursor::Skipping {
                        inner: Box::new(Cursor::build(sub, config)?),
                        pending: sub_count - count,
                    }),
                    view: view.clone(),
                    yielded: 0,
                }
            }
            (Strategy::Delegated, Node::CountCheck { sub, minimum }) => {
                check_minimum(sub.count()?, *minimum)?;
                Cursor::Checked {
                    inner: Box::new(Cursor::build(sub, config)?),
                    sub: sub.clone(),
                    minimum: *minimum,
                }
            }
        };
        Ok(cursor)
    }

    fn next(&mut self) -> Option<Result<T>> {
        match self {
            Cursor::Empty => None,
            Cursor::Leaf { leaf, next } => {
                let item = try_or_ret_some_err!(leaf.try_get(*next))?;
                *next += 1;
                Some(Ok(item))
            }
            Cursor::Indexed { view, next } => {
                let item = try_or_ret_some_err!(view.try_get(*next))?;
                *next += 1;
                Some(Ok(item))
            }
            Cursor::Skipping { inner, pending } => {
                while *pending > 0 {
                    *pending -= 1;
                    try_or_ret_some_err!(inner.next()?);
                }
                inner.next()
            }
            Cursor::Limited {
                inner,
                view,
                yielded,
            } => {
                if *yielded >= try_or_ret_some_err!(view.count()) {
                    return None;
                }
                *yielded += 1;
                inner.next()
            }
            Cursor::Checked {
                inner,
                sub,
                minimum,
            } => {
                try_or_ret_some_err!(check_minimum(try_or_ret_some_err!(sub.count()), *minimum));
                inner.next()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::LinkedList;
    use std::ops::ControlFlow;
    use std::rc::Rc;

    use super::*;
    use crate::{CollectionView, LiveVec};

    fn collect_with(view: &ListView<i32>, strategy: Option<Strategy>) -> Result<Vec<i32>> {
        view.iter_with(&EnumerationConfig { strategy }).collect()
    }

    #[test]
    fn test_preferred_strategy() {
        let source = LiveVec::from(vec![1, 2, 3, 4]);
        let base = source.view();
        assert_eq!(base.node().preferred_strategy(), Strategy::Delegated);
        assert_eq!(base.skip_first(1).node().preferred_strategy(), Strategy::Indexed);
        assert_eq!(base.take_last(1).node().preferred_strategy(), Strategy::Indexed);
        assert_eq!(base.take_first(1).node().preferred_strategy(), Strategy::Delegated);
        assert_eq!(base.skip_last(1).node().preferred_strategy(), Strategy::Delegated);
    }

    #[test]
    fn test_strategies_agree() {
        let source = LiveVec::from((0..12).collect::<Vec<_>>());
        let views = [
            source.view(),
            source.view().skip_first(3),
            source.view().skip_last(2).take_last(7),
            source.view().take_first(9).skip_first(1).take_last(5),
            source.view().require(10).unwrap().skip_last(4).skip_first(2),
            source.view().take_last(20),
        ];
        for view in &views {
            let expected = view.to_vec().unwrap();
            for strategy in [None, Some(Strategy::Indexed), Some(Strategy::Delegated)] {
                assert_eq!(collect_with(view, strategy).unwrap(), expected, "{view:?}");
            }
        }
    }

    #[test]
    fn test_iter_is_lazy() {
        let source = LiveVec::from(vec![1, 2, 3]);
        let view = source.view().take_first_exact(3).unwrap();
        let mut iter = view.iter();
        source.pop();
        assert!(iter.next().unwrap().unwrap_err().is_broken_view());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_checked_cursor_rechecks_every_step() {
        let source = LiveVec::from(vec![1, 2, 3]);
        let view = source.view().require(3).unwrap();
        let mut iter = view.iter();
        assert_eq!(iter.next().unwrap().unwrap(), 1);
        source.pop();
        assert!(iter.next().unwrap().unwrap_err().is_broken_view());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_indexed_cursor_sees_growth() {
        let source = LiveVec::from(vec![1, 2, 3]);
        let view = source.view().skip_first(1);
        let mut iter = view.iter();
        assert_eq!(iter.next().unwrap().unwrap(), 2);
        source.push(4);
        let rest: Vec<i32> = iter.map(|item| item.unwrap()).collect();
        assert_eq!(rest, vec![3, 4]);
    }

    #[test]
    fn test_for_loop() {
        let source = LiveVec::from(vec![5, 6]);
        let view = source.view();
        let mut sum = 0;
        for item in &view {
            sum += item.unwrap();
        }
        assert_eq!(sum, 11);
    }

    #[test]
    fn test_try_for_each_breaks() {
        let source = LiveVec::from((0..100).collect::<Vec<_>>());
        let view = source.view().skip_first(10);
        let mut seen = Vec::new();
        let flow = view
            .try_for_each(|item| {
                seen.push(item);
                if seen.len() == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();
        assert!(flow.is_break());
        assert_eq!(seen, vec![10, 11, 12]);
    }

    #[test]
    fn test_position_and_contains() {
        let source = LiveVec::from(vec![4, 8, 15, 16, 23, 42]);
        let view = source.view().skip_first(1).take_first(3);
        assert_eq!(view.position(&15).unwrap(), Some(1));
        assert_eq!(view.position(&4).unwrap(), None);
        assert!(view.contains(&16).unwrap());
        assert!(!view.contains(&23).unwrap());
    }

    #[test]
    fn test_collection_window() {
        let source = Rc::new(RefCell::new((0..8).collect::<LinkedList<i32>>()));
        let view = CollectionView::over(&source)
            .skip_first(1)
            .take_last(5)
            .skip_last(1)
            .take_first(3);
        assert_eq!(view.to_vec().unwrap(), vec![3, 4, 5]);
        source.borrow_mut().push_back(8);
        assert_eq!(view.to_vec().unwrap(), vec![4, 5, 6]);
    }

    #[test]
    fn test_cursors_stop_at_live_end() {
        for strategy in [Strategy::Indexed, Strategy::Delegated] {
            let source = LiveVec::from((0..6).collect::<Vec<_>>());
            let view = source.view().skip_last(1);
            let mut iter = view.iter_with(&EnumerationConfig::with_strategy(strategy));
            assert_eq!(iter.next().unwrap().unwrap(), 0);
            source.truncate(3);
            assert_eq!(iter.next().unwrap().unwrap(), 1, "{strategy:?}");
            assert!(iter.next().is_none(), "{strategy:?}");

            let view = source.view().take_first(5);
            let mut iter = view.iter_with(&EnumerationConfig::with_strategy(strategy));
            assert_eq!(iter.next().unwrap().unwrap(), 0);
            source.truncate(2);
            let rest: Vec<i32> = iter.map(|item| item.unwrap()).collect();
            assert_eq!(rest, vec![1], "{strategy:?}");
        }
    }
}
