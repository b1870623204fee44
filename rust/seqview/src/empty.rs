//! The canonical empty view.
//!
//! Rust has no generic statics, so the per-type singleton lives in a
//! thread-local table keyed by the node type. Views are `Rc`-based and never
//! cross threads, so one instance per thread is one instance per program as far
//! as any view can observe.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;

use crate::leaf::Leaf;
use crate::view::{Node, View};

thread_local! {
    static EMPTY_NODES: RefCell<AHashMap<TypeId, Rc<dyn Any>>> = RefCell::new(AHashMap::new());
}

impl<L: Leaf> View<L> {
    /// Returns the shared empty view for this view type.
    ///
    /// Every call returns the same node, so slices that are provably empty
    /// never allocate.
    pub fn empty() -> View<L> {
        let node = EMPTY_NODES.with(|nodes| {
            nodes
                .borrow_mut()
                .entry(TypeId::of::<Node<L>>())
                .or_insert_with(|| Rc::new(Node::<L>::Empty) as Rc<dyn Any>)
                .clone()
        });
        match node.downcast::<Node<L>>() {
            Ok(node) => View::from_rc(node),
            Err(_) => View::new(Node::Empty),
        }
    }
}
