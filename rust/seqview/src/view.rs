//! The view node algebra.
//!
//! A [`View`] is an immutable, reference-counted node describing how to derive
//! elements from a live source. Nodes are never mutated after construction and
//! never cache anything: every `count`, indexed access or enumeration re-reads
//! the source through the chain of nodes.
//!
//! Views are only created through smart constructors (`skip_first`,
//! `take_last`, `require`, ...) which run the rewrite rules keeping every
//! composition flat: at most one node per slicing family and side on a path,
//! and at most one count-enforcement node, sitting directly on the base.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;
use std::rc::{Rc, Weak};

use seqview_common::{Error, Result};

use crate::cardinality::Cardinality;
use crate::count_check::check_minimum;
use crate::leaf::{CollectionLeaf, IndexedLeaf, Leaf, ListLeaf};
use crate::source::{RandomAccess, Sequence};

/// A view over a random-access source: sized, indexable and enumerable.
pub type ListView<T> = View<ListLeaf<T>>;

/// A view over a count-and-enumerate source: sized and enumerable.
pub type CollectionView<T> = View<CollectionLeaf<T>>;

/// The node kinds a view is made of.
pub enum Node<L: Leaf> {
    /// The canonical empty view.
    Empty,
    /// Identity view over the source.
    Base(L),
    /// Removes the first `amount` elements of `sub`.
    SkipFirst { sub: View<L>, amount: usize },
    /// Removes the last `amount` elements of `sub`.
    SkipLast { sub: View<L>, amount: usize },
    /// Keeps at most the first `amount` elements of `sub`.
    TakeFirst { sub: View<L>, amount: usize },
    /// Keeps at most the last `amount` elements of `sub`.
    TakeLast { sub: View<L>, amount: usize },
    /// Transparent pass-through that fails every access while `sub` holds fewer
    /// than `minimum` elements.
    CountCheck { sub: View<L>, minimum: usize },
}

impl<L: Leaf> Node<L> {
    /// The wrapped view, `None` for `Empty` and `Base`.
    pub fn sub(&self) -> Option<&View<L>> {
        match self {
            Node::Empty | Node::Base(_) => None,
            Node::SkipFirst { sub, .. }
            | Node::SkipLast { sub, .. }
            | Node::TakeFirst { sub, .. }
            | Node::TakeLast { sub, .. }
            | Node::CountCheck { sub, .. } => Some(sub),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Node::Empty => "Empty",
            Node::Base(_) => "Base",
            Node::SkipFirst { .. } => "SkipFirst",
            Node::SkipLast { .. } => "SkipLast",
            Node::TakeFirst { .. } => "TakeFirst",
            Node::TakeLast { .. } => "TakeLast",
            Node::CountCheck { .. } => "CountCheck",
        }
    }
}

/// The end of a view a slicing operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    First,
    Last,
}

/// An immutable handle to a view node.
///
/// Cloning is a reference-count increment; two clones are the same view
/// ([`View::ptr_eq`]).
pub struct View<L: Leaf>(Rc<Node<L>>);

impl<L: Leaf> Clone for View<L> {
    fn clone(&self) -> Self {
        View(self.0.clone())
    }
}

impl<L: Leaf> View<L> {
    pub(crate) fn new(node: Node<L>) -> View<L> {
        View(Rc::new(node))
    }

    pub(crate) fn from_rc(node: Rc<Node<L>>) -> View<L> {
        View(node)
    }

    /// Wraps a leaf handle as a `Base` view with no slicing applied.
    pub fn from_leaf(leaf: L) -> View<L> {
        View::new(Node::Base(leaf))
    }

    #[inline]
    pub fn node(&self) -> &Node<L> {
        &self.0
    }

    /// The view this node wraps, `None` for `Empty` and `Base`.
    #[inline]
    pub fn sub(&self) -> Option<&View<L>> {
        self.0.sub()
    }

    /// Returns `true` if both handles refer to the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &View<L>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Creates a handle that does not keep the node alive.
    pub fn downgrade(&self) -> WeakView<L> {
        WeakView(Rc::downgrade(&self.0))
    }

    /// Number of nodes on the path from this view down to its leaf.
    pub fn depth(&self) -> usize {
        1 + self.sub().map_or(0, View::depth)
    }

    /// Current element count, re-read from the source.
    ///
    /// # Errors
    ///
    /// `BrokenView` if a count-enforcement node on the path is no longer
    /// satisfied; `SourceReleased`/`SourceBorrowed` if the source is unavailable.
    pub fn count(&self) -> Result<usize> {
        match self.node() {
            Node::Empty => Ok(0),
            Node::Base(leaf) => leaf.count(),
            Node::SkipFirst { sub, amount } | Node::SkipLast { sub, amount } => {
                Ok(sub.count()?.saturating_sub(*amount))
            }
            Node::TakeFirst { sub, amount } | Node::TakeLast { sub, amount } => {
                Ok(sub.count()?.min(*amount))
            }
            Node::CountCheck { sub, minimum } => check_minimum(sub.count()?, *minimum),
        }
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.count()? == 0)
    }

    /// Count bounds derived without evaluating the view.
    ///
    /// Recomputed on every call from the sub-view bounds.
    pub fn cardinality(&self) -> Cardinality {
        match self.node() {
            Node::Empty => Cardinality::EMPTY,
            Node::Base(leaf) => leaf.cardinality(),
            Node::SkipFirst { sub, amount } | Node::SkipLast { sub, amount } => {
                sub.cardinality().skip(*amount)
            }
            Node::TakeFirst { sub, amount } | Node::TakeLast { sub, amount } => {
                sub.cardinality().take(*amount)
            }
            Node::CountCheck { sub, minimum } => sub.cardinality().require(*minimum),
        }
    }

    /// Guaranteed lower bound of the count.
    pub fn min_count(&self) -> usize {
        self.cardinality().min()
    }

    /// Guaranteed upper bound of the count, if known.
    pub fn max_count(&self) -> Option<usize> {
        self.cardinality().max()
    }

    /// Elements `range.start..range.end` of this view, clamped to its end.
    pub fn slice(&self, range: Range<usize>) -> View<L> {
        let len = range.end.saturating_sub(range.start);
        self.skip_first(range.start).take_first(len)
    }
}

impl<L: IndexedLeaf> View<L> {
    /// Reads the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `index` is not below the count at the time of the
    /// call, plus every error [`View::count`] reports.
    pub fn get(&self, index: usize) -> Result<L::Item> {
        let count = self.count()?;
        if index >= count {
            return Err(Error::index_out_of_range(index, count));
        }
        self.resolve(index)
    }

    /// Like [`View::get`], but an index past the end yields `Ok(None)`.
    pub fn try_get(&self, index: usize) -> Result<Option<L::Item>> {
        let count = self.count()?;
        if index >= count {
            return Ok(None);
        }
        self.resolve(index).map(Some)
    }

    pub fn first(&self) -> Result<Option<L::Item>> {
        self.try_get(0)
    }

    pub fn last(&self) -> Result<Option<L::Item>> {
        match self.count()? {
            0 => Ok(None),
            count => self.resolve(count - 1).map(Some),
        }
    }

    /// Maps `index` down to the leaf. The caller has checked it against the
    /// current count, which also ran every count-enforcement check on the path.
    fn resolve(&self, index: usize) -> Result<L::Item> {
        match self.node() {
            Node::Empty => Err(Error::index_out_of_range(index, 0)),
            Node::Base(leaf) => match leaf.try_get(index)? {
                Some(item) => Ok(item),
                None => Err(Error::index_out_of_range(index, leaf.count()?)),
            },
            Node::SkipFirst { sub, amount } => sub.resolve(index + amount),
            Node::TakeLast { sub, amount } => {
                let sub_count = sub.count()?;
                sub.resolve(sub_count - sub_count.min(*amount) + index)
            }
            Node::SkipLast { sub, .. }
            | Node::TakeFirst { sub, .. }
            | Node::CountCheck { sub, .. } => sub.resolve(index),
        }
    }
}

impl<T: Clone + 'static> ListView<T> {
    /// A live view over a random-access source owned elsewhere.
    ///
    /// The view holds a weak reference: dropping the last `Rc` to the source
    /// makes every later access fail with `SourceReleased`. Fixed-size
    /// sources (arrays) are recognized by the cardinality oracle.
    pub fn over<S>(source: &Rc<RefCell<S>>) -> ListView<T>
    where
        S: RandomAccess<Item = T> + 'static,
    {
        View::from_leaf(ListLeaf::over(source))
    }

    /// Presents this list view as a plain collection view.
    pub fn as_collection(&self) -> CollectionView<T> {
        View::from_leaf(CollectionLeaf::List(self.clone()))
    }
}

impl<T: Clone + 'static> CollectionView<T> {
    /// A live view over a count-and-enumerate source owned elsewhere.
    pub fn over<S>(source: &Rc<RefCell<S>>) -> CollectionView<T>
    where
        S: Sequence<Item = T> + 'static,
    {
        View::from_leaf(CollectionLeaf::over(source))
    }
}

impl<L: Leaf> fmt::Debug for View<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Empty | Node::Base(_) => f.write_str(self.node().name()),
            Node::SkipFirst { sub, amount }
            | Node::SkipLast { sub, amount }
            | Node::TakeFirst { sub, amount }
            | Node::TakeLast { sub, amount } => {
                write!(f, "{}({amount}, {sub:?})", self.node().name())
            }
            Node::CountCheck { sub, minimum } => write!(f, "CountCheck({minimum}, {sub:?})"),
        }
    }
}

/// A non-owning handle to a view node.
pub struct WeakView<L: Leaf>(Weak<Node<L>>);

impl<L: Leaf> WeakView<L> {
    pub fn upgrade(&self) -> Option<View<L>> {
        self.0.upgrade().map(View)
    }

    /// Returns `true` while some [`View`] still keeps the node alive.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl<L: Leaf> Clone for WeakView<L> {
    fn clone(&self) -> Self {
        WeakView(self.0.clone())
    }
}
