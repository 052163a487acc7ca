//! Everything related to traversing trees and recording those traversals.
//!
//! The module is home to the following items:
//! - [`Traversable`] — a *trait for read-only node handles* of binary trees, which is all the recorder needs to know about a tree
//! - [`TraversalOrder`] — the three depth-first orders, parseable from strings
//! - [`Step`] and [`Phase`] — the *records* a traversal is unrolled into
//! - [`StepSequence`] — an immutable, append-only list of steps backed by any [`ListStorage`]
//! - [`record_steps`] and [`collect_keys`] — the two ways of running a traversal: as an animatable list of steps or as a plain list of keys
//!
//! [`Traversable`]: trait.Traversable.html " "
//! [`TraversalOrder`]: enum.TraversalOrder.html " "
//! [`Step`]: enum.Step.html " "
//! [`Phase`]: enum.Phase.html " "
//! [`StepSequence`]: struct.StepSequence.html " "
//! [`ListStorage`]: https://docs.rs/granite/*/granite/trait.ListStorage.html " "
//! [`record_steps`]: fn.record_steps.html " "
//! [`collect_keys`]: fn.collect_keys.html " "

mod order;
pub use order::*;
mod steps;
pub use steps::*;
mod record;
pub use record::*;

#[cfg(test)]
mod tests;

/// Read-only handles to nodes of a binary tree.
///
/// Handles are expected to be cheap to copy, like references. An absent child is represented by `None` rather than by a sentinel node, so that the recorder can tell the two apart and emit a [`Step::Null`] where a recursive traversal would have entered an empty subtree.
///
/// [`Step::Null`]: enum.Step.html#variant.Null " "
pub trait Traversable: Sized {
    /// The type of the keys stored in the nodes.
    type Key;
    /// Returns a reference to the key of the node.
    fn key(&self) -> &Self::Key;
    /// Returns a handle to the left child of the node, or `None` if there is none.
    fn left_child(&self) -> Option<Self>;
    /// Returns a handle to the right child of the node, or `None` if there is none.
    fn right_child(&self) -> Option<Self>;
}
