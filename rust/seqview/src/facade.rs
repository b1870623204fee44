//! Mutable-collection facades.
//!
//! [`MutableCollection`] and [`MutableList`] describe the shape expected by
//! code that works with growable containers. Views enter that shape through
//! [`ReadOnlyCollection`] / [`ReadOnlyList`], which answer every mutating call
//! with a `ReadOnly` error. [`ListAdapter`] and [`CollectionAdapter`] go the
//! other way: they hold either a read-only facade or a [`LiveVec`], and turn
//! either into a view without stacking wrappers.

use std::ops::ControlFlow;

use seqview_common::{Error, ErrorKind, Result, verify_arg};

use crate::leaf::{CollectionLeaf, ListLeaf};
use crate::live_vec::LiveVec;
use crate::view::{CollectionView, ListView, Node};

/// A sized container with membership tests and in-place mutation.
pub trait MutableCollection<T> {
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Returns `true` if every mutating method fails with `ReadOnly`.
    fn is_read_only(&self) -> bool;

    fn contains(&self, item: &T) -> Result<bool>;

    /// Clones all elements into `dest[start..start + len]`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `start > dest.len()`, `DestBufferTooSmall` if the
    /// elements do not fit after `start`.
    fn copy_to(&self, dest: &mut [T], start: usize) -> Result<()>;

    fn add(&mut self, item: T) -> Result<()>;

    /// Removes the first element equal to `item`; `Ok(false)` if none exists.
    fn remove(&mut self, item: &T) -> Result<bool>;

    fn clear(&mut self) -> Result<()>;
}

/// A [`MutableCollection`] with positional access.
pub trait MutableList<T>: MutableCollection<T> {
    fn get(&self, index: usize) -> Result<T>;

    fn set(&mut self, index: usize, item: T) -> Result<()>;

    fn index_of(&self, item: &T) -> Result<Option<usize>>;

    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    fn remove_at(&mut self, index: usize) -> Result<T>;
}

pub(crate) fn check_copy_dest(dest_len: usize, start: usize, count: usize) -> Result<()> {
    verify_arg!(start, start <= dest_len);
    if dest_len - start < count {
        return Err(ErrorKind::DestBufferTooSmall.into());
    }
    Ok(())
}

/// Clones the elements of `view` into `dest` from `start` on, one by one.
///
/// The count read up front bounds the copy; if the visit produces more
/// elements than that (it cannot without the source being mutated in between),
/// the extra ones are reported as `DestBufferTooSmall`.
fn copy_view_to<L: crate::Leaf>(
    view: &crate::View<L>,
    dest: &mut [L::Item],
    start: usize,
) -> Result<()> {
    check_copy_dest(dest.len(), start, view.count()?)?;
    let mut slots = dest[start..].iter_mut();
    let flow = view.try_for_each(|item| match slots.next() {
        Some(slot) => {
            *slot = item;
            ControlFlow::Continue(())
        }
        None => ControlFlow::Break(()),
    })?;
    if flow.is_break() {
        return Err(ErrorKind::DestBufferTooSmall.into());
    }
    Ok(())
}

/// A list view presented as a read-only [`MutableList`].
#[derive(Clone)]
pub struct ReadOnlyList<T: Clone + 'static> {
    view: ListView<T>,
}

impl<T: Clone + 'static> ReadOnlyList<T> {
    pub fn new(view: ListView<T>) -> ReadOnlyList<T> {
        ReadOnlyList { view }
    }

    /// The wrapped view, pointer-identical to the one the facade was made from.
    pub fn view(&self) -> &ListView<T> {
        &self.view
    }

    pub fn into_view(self) -> ListView<T> {
        self.view
    }
}

impl<T: Clone + PartialEq + 'static> MutableCollection<T> for ReadOnlyList<T> {
    fn len(&self) -> Result<usize> {
        self.view.count()
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn contains(&self, item: &T) -> Result<bool> {
        self.view.contains(item)
    }

    fn copy_to(&self, dest: &mut [T], start: usize) -> Result<()> {
        copy_view_to(&self.view, dest, start)
    }

    fn add(&mut self, _item: T) -> Result<()> {
        Err(Error::read_only("add"))
    }

    fn remove(&mut self, _item: &T) -> Result<bool> {
        Err(Error::read_only("remove"))
    }

    fn clear(&mut self) -> Result<()> {
        Err(Error::read_only("clear"))
    }
}

impl<T: Clone + PartialEq + 'static> MutableList<T> for ReadOnlyList<T> {
    fn get(&self, index: usize) -> Result<T> {
        self.view.get(index)
    }

    fn set(&mut self, _index: usize, _item: T) -> Result<()> {
        Err(Error::read_only("set"))
    }

    fn index_of(&self, item: &T) -> Result<Option<usize>> {
        self.view.position(item)
    }

    fn insert(&mut self, _index: usize, _item: T) -> Result<()> {
        Err(Error::read_only("insert"))
    }

    fn remove_at(&mut self, _index: usize) -> Result<T> {
        Err(Error::read_only("remove_at"))
    }
}

/// A collection view presented as a read-only [`MutableCollection`].
#[derive(Clone)]
pub struct ReadOnlyCollection<T: Clone + 'static> {
    view: CollectionView<T>,
}

impl<T: Clone + 'static> ReadOnlyCollection<T> {
    pub fn new(view: CollectionView<T>) -> ReadOnlyCollection<T> {
        ReadOnlyCollection { view }
    }

    pub fn view(&self) -> &CollectionView<T> {
        &self.view
    }

    pub fn into_view(self) -> CollectionView<T> {
        self.view
    }
}

impl<T: Clone + PartialEq + 'static> MutableCollection<T> for ReadOnlyCollection<T> {
    fn len(&self) -> Result<usize> {
        self.view.count()
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn contains(&self, item: &T) -> Result<bool> {
        self.view.contains(item)
    }

    fn copy_to(&self, dest: &mut [T], start: usize) -> Result<()> {
        copy_view_to(&self.view, dest, start)
    }

    fn add(&mut self, _item: T) -> Result<()> {
        Err(Error::read_only("add"))
    }

    fn remove(&mut self, _item: &T) -> Result<bool> {
        Err(Error::read_only("remove"))
    }

    fn clear(&mut self) -> Result<()> {
        Err(Error::read_only("clear"))
    }
}

/// A list-shaped container that can be turned into a [`ListView`].
#[derive(Clone)]
pub enum ListAdapter<T: Clone + 'static> {
    /// A facade over an existing view; converts back to that exact view.
    ReadOnly(ReadOnlyList<T>),
    /// Shared mutable storage, with the live view it is presented as.
    ///
    /// The view is created once, so [`ListAdapter::view`] keeps returning the
    /// same node and [`ListView::to_mutable`] on that node finds this storage
    /// again.
    Live {
        source: LiveVec<T>,
        view: ListView<T>,
    },
}

impl<T: Clone + 'static> ListAdapter<T> {
    /// A view over the adapted container.
    ///
    /// A read-only facade is unwrapped instead of wrapped again.
    pub fn view(&self) -> ListView<T> {
        match self {
            ListAdapter::ReadOnly(facade) => facade.view().clone(),
            ListAdapter::Live { view, .. } => view.clone(),
        }
    }

    pub fn into_view(self) -> ListView<T> {
        match self {
            ListAdapter::ReadOnly(facade) => facade.into_view(),
            ListAdapter::Live { view, .. } => view,
        }
    }

    /// Adapts shared mutable storage.
    pub fn live(source: LiveVec<T>) -> ListAdapter<T> {
        let view = source.adapted_view();
        ListAdapter::Live { source, view }
    }

    fn as_dyn(&self) -> &dyn MutableList<T>
    where
        T: PartialEq,
    {
        match self {
            ListAdapter::ReadOnly(facade) => facade,
            ListAdapter::Live { source, .. } => source,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn MutableList<T>
    where
        T: PartialEq,
    {
        match self {
            ListAdapter::ReadOnly(facade) => facade,
            ListAdapter::Live { source, .. } => source,
        }
    }
}

impl<T: Clone + PartialEq + 'static> MutableCollection<T> for ListAdapter<T> {
    fn len(&self) -> Result<usize> {
        self.as_dyn().len()
    }

    fn is_read_only(&self) -> bool {
        self.as_dyn().is_read_only()
    }

    fn contains(&self, item: &T) -> Result<bool> {
        self.as_dyn().contains(item)
    }

    fn copy_to(&self, dest: &mut [T], start: usize) -> Result<()> {
        self.as_dyn().copy_to(dest, start)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.as_dyn_mut().add(item)
    }

    fn remove(&mut self, item: &T) -> Result<bool> {
        self.as_dyn_mut().remove(item)
    }

    fn clear(&mut self) -> Result<()> {
        self.as_dyn_mut().clear()
    }
}

impl<T: Clone + PartialEq + 'static> MutableList<T> for ListAdapter<T> {
    fn get(&self, index: usize) -> Result<T> {
        self.as_dyn().get(index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<()> {
        self.as_dyn_mut().set(index, item)
    }

    fn index_of(&self, item: &T) -> Result<Option<usize>> {
        self.as_dyn().index_of(item)
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.as_dyn_mut().insert(index, item)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        self.as_dyn_mut().remove_at(index)
    }
}

/// A collection-shaped container that can be turned into a [`CollectionView`].
#[derive(Clone)]
pub enum CollectionAdapter<T: Clone + 'static> {
    ReadOnly(ReadOnlyCollection<T>),
    Live {
        source: LiveVec<T>,
        view: CollectionView<T>,
    },
}

impl<T: Clone + 'static> CollectionAdapter<T> {
    pub fn view(&self) -> CollectionView<T> {
        match self {
            CollectionAdapter::ReadOnly(facade) => facade.view().clone(),
            CollectionAdapter::Live { view, .. } => view.clone(),
        }
    }

    pub fn into_view(self) -> CollectionView<T> {
        match self {
            CollectionAdapter::ReadOnly(facade) => facade.into_view(),
            CollectionAdapter::Live { view, .. } => view,
        }
    }

    pub fn live(source: LiveVec<T>) -> CollectionAdapter<T> {
        let view = source.adapted_view().as_collection();
        CollectionAdapter::Live { source, view }
    }

    fn as_dyn(&self) -> &dyn MutableCollection<T>
    where
        T: PartialEq,
    {
        match self {
            CollectionAdapter::ReadOnly(facade) => facade,
            CollectionAdapter::Live { source, .. } => source,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn MutableCollection<T>
    where
        T: PartialEq,
    {
        match self {
            CollectionAdapter::ReadOnly(facade) => facade,
            CollectionAdapter::Live { source, .. } => source,
        }
    }
}

impl<T: Clone + PartialEq + 'static> MutableCollection<T> for CollectionAdapter<T> {
    fn len(&self) -> Result<usize> {
        self.as_dyn().len()
    }

    fn is_read_only(&self) -> bool {
        self.as_dyn().is_read_only()
    }

    fn contains(&self, item: &T) -> Result<bool> {
        self.as_dyn().contains(item)
    }

    fn copy_to(&self, dest: &mut [T], start: usize) -> Result<()> {
        self.as_dyn().copy_to(dest, start)
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.as_dyn_mut().add(item)
    }

    fn remove(&mut self, item: &T) -> Result<bool> {
        self.as_dyn_mut().remove(item)
    }

    fn clear(&mut self) -> Result<()> {
        self.as_dyn_mut().clear()
    }
}

/// The storage behind a view that is exactly an adapted [`LiveVec`].
fn adapted_source<T: Clone + 'static>(view: &ListView<T>) -> Option<LiveVec<T>> {
    match view.node() {
        Node::Base(ListLeaf::Adapted(weak)) => weak.upgrade().map(LiveVec::from_shared),
        _ => None,
    }
}

impl<T: Clone + 'static> ListView<T> {
    /// Presents this view as a mutable list.
    ///
    /// A view obtained from [`ListAdapter::Live`] converts back to that
    /// adapter; every other view gets a read-only facade.
    pub fn to_mutable(&self) -> ListAdapter<T> {
        match adapted_source(self) {
            Some(source) => ListAdapter::Live {
                source,
                view: self.clone(),
            },
            None => ListAdapter::ReadOnly(ReadOnlyList::new(self.clone())),
        }
    }
}

impl<T: Clone + 'static> CollectionView<T> {
    pub fn to_mutable(&self) -> CollectionAdapter<T> {
        let source = match self.node() {
            Node::Base(CollectionLeaf::List(inner)) => adapted_source(inner),
            _ => None,
        };
        match source {
            Some(source) => CollectionAdapter::Live {
                source,
                view: self.clone(),
            },
            None => CollectionAdapter::ReadOnly(ReadOnlyCollection::new(self.clone())),
        }
    }
}

impl<T: Clone + 'static> From<ListView<T>> for ListAdapter<T> {
    fn from(view: ListView<T>) -> Self {
        view.to_mutable()
    }
}

impl<T: Clone + 'static> From<LiveVec<T>> for ListAdapter<T> {
    fn from(source: LiveVec<T>) -> Self {
        ListAdapter::live(source)
    }
}

impl<T: Clone + 'static> From<ListAdapter<T>> for ListView<T> {
    fn from(adapter: ListAdapter<T>) -> Self {
        adapter.into_view()
    }
}

impl<T: Clone + 'static> From<CollectionView<T>> for CollectionAdapter<T> {
    fn from(view: CollectionView<T>) -> Self {
        view.to_mutable()
    }
}

impl<T: Clone + 'static> From<LiveVec<T>> for CollectionAdapter<T> {
    fn from(source: LiveVec<T>) -> Self {
        CollectionAdapter::live(source)
    }
}

impl<T: Clone + 'static> From<CollectionAdapter<T>> for CollectionView<T> {
    fn from(adapter: CollectionAdapter<T>) -> Self {
        adapter.into_view()
    }
}
