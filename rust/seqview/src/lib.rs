//! Live, non-copying views over mutable sequences.
//!
//! A view describes a slice of a source container (the first `n` elements,
//! everything but the last `n`, and so on) without copying it. Every access
//! re-reads the source, so a view keeps reflecting insertions and removals made
//! by the source's owner after the view was created.
//!
//! # Core Concepts
//!
//! ## Views and nodes
//!
//! A [`View`] is an immutable, cheaply clonable handle to a [`Node`]. Nodes form
//! a chain ending at a `Base` node that holds a weak reference to the source.
//! Two kinds of views exist, distinguished by their leaf:
//!
//! - [`ListView`]: the source supports positional access, so the view does too
//!   ([`View::get`], [`ListView::iter`]).
//! - [`CollectionView`]: the source can only be counted and enumerated.
//!
//! ## Slicing and the rewrite rules
//!
//! [`View::skip_first`], [`View::skip_last`], [`View::take_first`] and
//! [`View::take_last`] never blindly stack nodes. They consult the
//! [`Cardinality`] bounds of the sub-view and:
//!
//! - return the sub-view itself when the slice cannot remove anything;
//! - return the canonical empty view when the slice always removes everything;
//! - fuse with a node of the same kind instead of nesting;
//! - otherwise wrap the sub-view in a new node.
//!
//! ## Count enforcement
//!
//! [`View::require`] and the `*_exact` slicing variants check the count once
//! when the view is built and again on every access. An access that finds the
//! source too small fails with a `BrokenView` error instead of returning
//! clamped data. The check is always moved down onto the `Base` node.
//!
//! ## Enumeration
//!
//! Views are enumerated either by visiting a folded `(skip, limit)` window at
//! the leaf ([`View::try_for_each`]) or through a cursor iterator whose
//! per-node [`Strategy`] can be overridden with an [`EnumerationConfig`].
//!
//! ## Mutable facades
//!
//! The [`facade`] module presents views as read-only [`MutableList`] /
//! [`MutableCollection`] containers, and turns such containers back into views
//! without adding wrapper layers.
//!
//! # Threading
//!
//! Views and sources are `!Send`: the source is shared through
//! `Rc<RefCell<_>>`, and a view access fails with `SourceBorrowed` rather than
//! panicking if the source is mutably borrowed at that moment.

pub mod cardinality;
mod count_check;
mod empty;
pub mod enumerate;
pub mod facade;
pub mod leaf;
pub mod live_vec;
mod skip;
pub mod source;
mod take;
pub mod view;

pub use cardinality::Cardinality;
pub use enumerate::{EnumerationConfig, ListIter, Strategy};
pub use facade::{
    CollectionAdapter, ListAdapter, MutableCollection, MutableList, ReadOnlyCollection,
    ReadOnlyList,
};
pub use leaf::{CollectionLeaf, IndexedLeaf, Leaf, ListLeaf};
pub use live_vec::LiveVec;
pub use source::{RandomAccess, Sequence};
pub use view::{CollectionView, ListView, Node, View, WeakView};

pub use seqview_common::{Error, ErrorKind, Result};
