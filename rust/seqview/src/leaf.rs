//! Leaf handles: the non-owning references a `Base` view node holds.
//!
//! A view composition always bottoms out at exactly one leaf. The set of leaf
//! kinds is closed: [`ListLeaf`] for random-access sources and
//! [`CollectionLeaf`] for count-and-enumerate sources.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

use seqview_common::{Error, Result};

use crate::cardinality::Cardinality;
use crate::source::{RandomAccess, Sequence};
use crate::view::ListView;

/// Type-erased access to the source underneath a `Base` node.
pub trait Leaf: Clone + 'static {
    type Item: Clone + 'static;

    /// Reads the current element count of the source.
    fn count(&self) -> Result<usize>;

    /// Count bounds that hold for every state of the source.
    ///
    /// Must under-claim when in doubt (e.g. when the source is unavailable).
    fn cardinality(&self) -> Cardinality;

    /// Feeds at most `limit` elements, starting after `skip` leading ones, to
    /// `visitor` until it breaks.
    ///
    /// The source stays borrowed while the visitor runs.
    fn visit(
        &self,
        skip: usize,
        limit: usize,
        visitor: &mut dyn FnMut(Self::Item) -> ControlFlow<()>,
    ) -> Result<ControlFlow<()>>;

    /// For a leaf presenting another list view, a leaf presenting `f(view)`
    /// instead. Lets slicing and count enforcement go into the wrapped view
    /// rather than stacking on top of the adapter.
    fn rewrap(
        &self,
        _f: impl FnOnce(&ListView<Self::Item>) -> ListView<Self::Item>,
    ) -> Option<Self> {
        None
    }
}

/// A [`Leaf`] whose source supports positional access.
pub trait IndexedLeaf: Leaf {
    /// Reads the element at `index`, `None` if it lies past the current end.
    fn try_get(&self, index: usize) -> Result<Option<Self::Item>>;
}

/// Handle to a random-access source.
pub enum ListLeaf<T> {
    /// The backing vector of a [`LiveVec`](crate::LiveVec).
    Shared(Weak<RefCell<Vec<T>>>),
    /// The backing vector of a [`LiveVec`](crate::LiveVec) adapted through
    /// [`ListAdapter`](crate::ListAdapter). Converting a view that is exactly
    /// this leaf back to a mutable list yields the `LiveVec` again.
    Adapted(Weak<RefCell<Vec<T>>>),
    /// Any other random-access container.
    Dyn(Weak<RefCell<dyn RandomAccess<Item = T>>>),
}

impl<T> Clone for ListLeaf<T> {
    fn clone(&self) -> Self {
        match self {
            ListLeaf::Shared(weak) => ListLeaf::Shared(weak.clone()),
            ListLeaf::Adapted(weak) => ListLeaf::Adapted(weak.clone()),
            ListLeaf::Dyn(weak) => ListLeaf::Dyn(weak.clone()),
        }
    }
}

impl<T: Clone + 'static> ListLeaf<T> {
    pub fn over<S>(source: &Rc<RefCell<S>>) -> ListLeaf<T>
    where
        S: RandomAccess<Item = T> + 'static,
    {
        let weak: Weak<RefCell<S>> = Rc::downgrade(source);
        let weak: Weak<RefCell<dyn RandomAccess<Item = T>>> = weak;
        ListLeaf::Dyn(weak)
    }

    fn with_source<R>(&self, f: impl FnOnce(&dyn RandomAccess<Item = T>) -> R) -> Result<R> {
        match self {
            ListLeaf::Shared(weak) | ListLeaf::Adapted(weak) => {
                let source = weak.upgrade().ok_or_else(Error::source_released)?;
                let guard = source.try_borrow().map_err(|_| Error::source_borrowed())?;
                Ok(f(&*guard))
            }
            ListLeaf::Dyn(weak) => {
                let source = weak.upgrade().ok_or_else(Error::source_released)?;
                let guard = source.try_borrow().map_err(|_| Error::source_borrowed())?;
                Ok(f(&*guard))
            }
        }
    }
}

impl<T: Clone + 'static> Leaf for ListLeaf<T> {
    type Item = T;

    fn count(&self) -> Result<usize> {
        self.with_source(|source| source.len())
    }

    fn cardinality(&self) -> Cardinality {
        match self {
            // A live vector can be resized by its owner at any time.
            ListLeaf::Shared(_) | ListLeaf::Adapted(_) => Cardinality::UNKNOWN,
            ListLeaf::Dyn(_) => self
                .with_source(|source| source.fixed_len())
                .ok()
                .flatten()
                .map_or(Cardinality::UNKNOWN, Cardinality::exactly),
        }
    }

    fn visit(
        &self,
        skip: usize,
        limit: usize,
        visitor: &mut dyn FnMut(T) -> ControlFlow<()>,
    ) -> Result<ControlFlow<()>> {
        self.with_source(|source| {
            let end = source.len().min(skip.saturating_add(limit));
            for index in skip..end {
                if let Some(item) = source.at(index)
                    && visitor(item.clone()).is_break()
                {
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        })
    }
}

impl<T: Clone + 'static> IndexedLeaf for ListLeaf<T> {
    fn try_get(&self, index: usize) -> Result<Option<T>> {
        self.with_source(|source| source.at(index).cloned())
    }
}

/// Handle to a count-and-enumerate source.
pub enum CollectionLeaf<T: Clone + 'static> {
    Dyn(Weak<RefCell<dyn Sequence<Item = T>>>),
    /// A list view presented as a plain collection.
    List(ListView<T>),
}

impl<T: Clone + 'static> Clone for CollectionLeaf<T> {
    fn clone(&self) -> Self {
        match self {
            CollectionLeaf::Dyn(weak) => CollectionLeaf::Dyn(weak.clone()),
            CollectionLeaf::List(view) => CollectionLeaf::List(view.clone()),
        }
    }
}

impl<T: Clone + 'static> CollectionLeaf<T> {
    pub fn over<S>(source: &Rc<RefCell<S>>) -> CollectionLeaf<T>
    where
        S: Sequence<Item = T> + 'static,
    {
        let weak: Weak<RefCell<S>> = Rc::downgrade(source);
        let weak: Weak<RefCell<dyn Sequence<Item = T>>> = weak;
        CollectionLeaf::Dyn(weak)
    }

    fn with_source<R>(
        weak: &Weak<RefCell<dyn Sequence<Item = T>>>,
        f: impl FnOnce(&dyn Sequence<Item = T>) -> R,
    ) -> Result<R> {
        let source = weak.upgrade().ok_or_else(Error::source_released)?;
        let guard = source.try_borrow().map_err(|_| Error::source_borrowed())?;
        Ok(f(&*guard))
    }
}

impl<T: Clone + 'static> Leaf for CollectionLeaf<T> {
    type Item = T;

    fn count(&self) -> Result<usize> {
        match self {
            CollectionLeaf::Dyn(weak) => Self::with_source(weak, |source| source.len()),
            CollectionLeaf::List(view) => view.count(),
        }
    }

    fn cardinality(&self) -> Cardinality {
        match self {
            CollectionLeaf::Dyn(weak) => Self::with_source(weak, |source| source.fixed_len())
                .ok()
                .flatten()
                .map_or(Cardinality::UNKNOWN, Cardinality::exactly),
            CollectionLeaf::List(view) => view.cardinality(),
        }
    }

    fn visit(
        &self,
        skip: usize,
        limit: usize,
        visitor: &mut dyn FnMut(T) -> ControlFlow<()>,
    ) -> Result<ControlFlow<()>> {
        match self {
            CollectionLeaf::Dyn(weak) => Self::with_source(weak, |source| {
                for item in source.elements().skip(skip).take(limit) {
                    if visitor(item.clone()).is_break() {
                        return ControlFlow::Break(());
                    }
                }
                ControlFlow::Continue(())
            }),
            CollectionLeaf::List(view) => view.visit_window(skip, limit, visitor),
        }
    }

    fn rewrap(&self, f: impl FnOnce(&ListView<T>) -> ListView<T>) -> Option<Self> {
        match self {
            CollectionLeaf::Dyn(_) => None,
            CollectionLeaf::List(view) => Some(CollectionLeaf::List(f(view))),
        }
    }
}
