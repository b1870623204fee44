//! `LiveVec`: a shared, growable vector that views can observe.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use seqview_common::{Error, Result, verify_arg};

use crate::facade::{MutableCollection, MutableList};
use crate::leaf::{CollectionLeaf, ListLeaf};
use crate::view::{CollectionView, ListView, View};

/// A vector with shared ownership and interior mutability.
///
/// Clones share the same storage. Views created by [`LiveVec::view`] hold only
/// a weak reference, so they never keep the storage alive and always observe
/// its current contents.
///
/// Mutating methods panic if the storage is borrowed at the time of the call,
/// like [`RefCell::borrow_mut`]. No view access keeps a borrow across calls.
pub struct LiveVec<T>(Rc<RefCell<Vec<T>>>);

impl<T> Clone for LiveVec<T> {
    fn clone(&self) -> Self {
        LiveVec(self.0.clone())
    }
}

impl<T> LiveVec<T> {
    pub fn new() -> LiveVec<T> {
        Self::from_vec(Vec::new())
    }

    pub fn from_vec(values: Vec<T>) -> LiveVec<T> {
        LiveVec(Rc::new(RefCell::new(values)))
    }

    pub(crate) fn from_shared(storage: Rc<RefCell<Vec<T>>>) -> LiveVec<T> {
        LiveVec(storage)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    pub fn pop(&self) -> Option<T> {
        self.0.borrow_mut().pop()
    }

    /// Inserts `value` at `index`, shifting later elements up.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&self, index: usize, value: T) {
        self.0.borrow_mut().insert(index, value);
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&self, index: usize) -> T {
        self.0.borrow_mut().remove(index)
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn truncate(&self, len: usize) {
        self.0.borrow_mut().truncate(len);
    }

    pub fn extend<I: IntoIterator<Item = T>>(&self, values: I) {
        self.0.borrow_mut().extend(values);
    }

    pub fn borrow(&self) -> Ref<'_, Vec<T>> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Vec<T>> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both handles share the same storage.
    pub fn ptr_eq(&self, other: &LiveVec<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone + 'static> LiveVec<T> {
    /// A live list view over the whole vector.
    pub fn view(&self) -> ListView<T> {
        View::from_leaf(ListLeaf::Shared(Rc::downgrade(&self.0)))
    }

    /// A live view over the whole vector that only exposes count and
    /// enumeration.
    pub fn collection_view(&self) -> CollectionView<T> {
        View::from_leaf(CollectionLeaf::over(&self.0))
    }

    /// The view a [`ListAdapter`](crate::ListAdapter) presents this vector as.
    pub(crate) fn adapted_view(&self) -> ListView<T> {
        View::from_leaf(ListLeaf::Adapted(Rc::downgrade(&self.0)))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.borrow().clone()
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn replace(&self, index: usize, value: T) -> Result<T> {
        let mut values = self.0.borrow_mut();
        let len = values.len();
        let slot = values
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len))?;
        Ok(std::mem::replace(slot, value))
    }
}

impl<T> Default for LiveVec<T> {
    fn default() -> Self {
        LiveVec::new()
    }
}

impl<T> From<Vec<T>> for LiveVec<T> {
    fn from(values: Vec<T>) -> Self {
        LiveVec::from_vec(values)
    }
}

impl<T> FromIterator<T> for LiveVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LiveVec::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for LiveVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(values) => f.debug_tuple("LiveVec").field(&*values).finish(),
            Err(_) => f.write_str("LiveVec(<borrowed>)"),
        }
    }
}

impl<T: Clone + PartialEq + 'static> MutableCollection<T> for LiveVec<T> {
    fn len(&self) -> Result<usize> {
        Ok(LiveVec::len(self))
    }

    fn is_read_only(&self) -> bool {
        false
    }

    fn contains(&self, item: &T) -> Result<bool> {
        Ok(self.0.borrow().contains(item))
    }

    fn copy_to(&self, dest: &mut [T], start: usize) -> Result<()> {
        let values = self.0.borrow();
        crate::facade::check_copy_dest(dest.len(), start, values.len())?;
        dest[start..start + values.len()].clone_from_slice(&values);
        Ok(())
    }

    fn add(&mut self, item: T) -> Result<()> {
        self.push(item);
        Ok(())
    }

    fn remove(&mut self, item: &T) -> Result<bool> {
        let mut values = self.0.borrow_mut();
        match values.iter().position(|candidate| candidate == item) {
            Some(index) => {
                values.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<()> {
        LiveVec::clear(self);
        Ok(())
    }
}

impl<T: Clone + PartialEq + 'static> MutableList<T> for LiveVec<T> {
    fn get(&self, index: usize) -> Result<T> {
        let values = self.0.borrow();
        values
            .get(index)
            .cloned()
            .ok_or_else(|| Error::index_out_of_range(index, values.len()))
    }

    fn set(&mut self, index: usize, item: T) -> Result<()> {
        self.replace(index, item)?;
        Ok(())
    }

    fn index_of(&self, item: &T) -> Result<Option<usize>> {
        Ok(self.0.borrow().iter().position(|candidate| candidate == item))
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let mut values = self.0.borrow_mut();
        let len = values.len();
        verify_arg!(index, index <= len);
        values.insert(index, item);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let mut values = self.0.borrow_mut();
        let len = values.len();
        if index >= len {
            return Err(Error::index_out_of_range(index, len));
        }
        Ok(values.remove(index))
    }
}
