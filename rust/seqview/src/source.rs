//! Raw containers that views can be built over.
//!
//! [`Sequence`] is the minimal capability (count + in-order enumeration) and
//! [`RandomAccess`] adds positional access. Views never own a source; they keep
//! a `Weak<RefCell<dyn ...>>` handle to it, so the source stays fully mutable by
//! its owner between view accesses.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;

/// A sized, enumerable container.
pub trait Sequence {
    type Item;

    /// Current number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container currently holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The length, if it can never change for the lifetime of the container.
    ///
    /// Returning `Some` lets the cardinality oracle treat views over this source
    /// as having an exact, constant count. Only return it when no `&mut` access
    /// can alter the length.
    fn fixed_len(&self) -> Option<usize> {
        None
    }

    /// Enumerates the elements in order.
    fn elements(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_>;
}

/// A [`Sequence`] supporting O(1) positional access.
pub trait RandomAccess: Sequence {
    /// Returns the element at `index`, or `None` if `index >= len()`.
    fn at(&self, index: usize) -> Option<&Self::Item>;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> RandomAccess for Vec<T> {
    #[inline]
    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> RandomAccess for VecDeque<T> {
    #[inline]
    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    fn fixed_len(&self) -> Option<usize> {
        Some(N)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    #[inline]
    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> Sequence for BTreeSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T, S: BuildHasher> Sequence for HashSet<T, S> {
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_len() {
        assert_eq!(Sequence::fixed_len(&[1, 2, 3]), Some(3));
        assert_eq!(Sequence::fixed_len(&vec![1, 2, 3]), None);
        assert_eq!(Sequence::fixed_len(&VecDeque::from(vec![1])), None);
    }

    #[test]
    fn test_random_access() {
        let deque: VecDeque<i32> = (0..4).collect();
        assert_eq!(deque.at(3), Some(&3));
        assert_eq!(deque.at(4), None);
        let array = [7u8; 2];
        assert_eq!(array.at(1), Some(&7));
        assert!(!Sequence::is_empty(&array));
    }

    #[test]
    fn test_elements() {
        let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(set.elements().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        let list: LinkedList<i32> = (0..3).collect();
        assert_eq!(list.elements().skip(1).count(), 2);
    }
}
