use core::{
    cmp::Ordering,
    iter::{Extend, FromIterator},
};
use alloc::{boxed::Box, vec::Vec};
use granite::ListStorage;
use crate::{
    traversal::{self, Step, StepSequence, TraversalOrder},
    DuplicateKeyError,
};
use super::{node::Link, Node, NodeRef};

/// A binary search tree of unique keys.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}
impl<T> BinarySearchTree<T> {
    /// Creates an empty tree.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }
    /// Returns the number of keys in the tree.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }
    /// Returns `true` if the tree contains no keys, `false` otherwise.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Removes all keys from the tree.
    #[inline]
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
    /// Returns a read-only reference to the root node, or `None` if the tree is empty.
    ///
    /// This is the snapshot of the tree's structure intended for renderers: nodes can be walked through [`NodeRef::left_child`] and [`NodeRef::right_child`], but not modified.
    ///
    /// [`NodeRef::left_child`]: struct.NodeRef.html#method.left_child " "
    /// [`NodeRef::right_child`]: struct.NodeRef.html#method.right_child " "
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_deref().map(NodeRef::new)
    }
    /// Returns the smallest key in the tree, or `None` if the tree is empty.
    #[inline]
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.min().value)
    }
    /// Returns the largest key in the tree, or `None` if the tree is empty.
    #[inline]
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &root.max().value)
    }
}
impl<T: Ord> BinarySearchTree<T> {
    /// Inserts a key into the tree, placing it as a new leaf found by descending from the root.
    ///
    /// # Errors
    /// Will fail if the key is already present in the tree. The tree is left unchanged, and the key is returned to the caller inside the error.
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateKeyError<T>> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(DuplicateKeyError { value }),
            };
        }
        *link = Some(Box::new(Node::leaf(value)));
        self.len += 1;
        Ok(())
    }
    /// Returns `true` if the key is present in the tree, `false` otherwise.
    pub fn contains(&self, value: &T) -> bool {
        let mut node = self.root.as_deref();
        while let Some(x) = node {
            node = match value.cmp(&x.value) {
                Ordering::Less => x.left.as_deref(),
                Ordering::Greater => x.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }
    /// Returns the key of the parent of the node holding the given key.
    ///
    /// `None` is returned both for the root and for keys which are not present in the tree.
    pub fn parent_of(&self, value: &T) -> Option<&T> {
        let mut parent = None;
        let mut node = self.root.as_deref();
        while let Some(x) = node {
            let next = match value.cmp(&x.value) {
                Ordering::Less => x.left.as_deref(),
                Ordering::Greater => x.right.as_deref(),
                Ordering::Equal => return parent,
            };
            parent = Some(&x.value);
            node = next;
        }
        None
    }
}
impl<T: Ord + Clone> BinarySearchTree<T> {
    /// Removes a key from the tree, returning `true` if it was present and `false` if the tree was left unchanged.
    ///
    /// A leaf is simply detached, and a node with a single child is replaced by that child. A node with two children is not detached itself: instead, the smallest key of its right subtree is copied into it and then removed from that subtree.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = Self::remove_from(&mut self.root, value);
        if removed {
            self.len -= 1;
        }
        removed
    }
    fn remove_from(link: &mut Link<T>, value: &T) -> bool {
        let node = match link.as_deref_mut() {
            Some(x) => x,
            None => return false,
        };
        match value.cmp(&node.value) {
            Ordering::Less => Self::remove_from(&mut node.left, value),
            Ordering::Greater => Self::remove_from(&mut node.right, value),
            Ordering::Equal => {
                if let (Some(_), Some(right)) = (&node.left, &node.right) {
                    node.value = right.min().value.clone();
                    return Self::remove_from(&mut node.right, &node.value);
                }
                *link = node.left.take().or_else(|| node.right.take());
                true
            }
        }
    }
}
impl<T: Clone> BinarySearchTree<T> {
    /// Runs a traversal in the given order, returning the keys in the order they were visited.
    #[inline]
    pub fn traverse(&self, order: TraversalOrder) -> Vec<T> {
        traversal::collect_keys(self.root(), order)
    }
    /// Records the steps of a traversal in the given order. See [`record_steps_in`] for the layout of the sequence.
    ///
    /// [`record_steps_in`]: ../traversal/fn.record_steps_in.html " "
    #[inline]
    pub fn record_steps(&self, order: TraversalOrder) -> StepSequence<T> {
        traversal::record_steps(self.root(), order)
    }
    /// Records the steps of a traversal in the given order into the specified storage.
    #[inline]
    pub fn record_steps_in<S>(&self, order: TraversalOrder) -> StepSequence<T, S>
    where
        S: ListStorage<Element = Step<T>>,
    {
        traversal::record_steps_in(self.root(), order)
    }
}
impl<T> Default for BinarySearchTree<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    /// Inserts every key of the iterator in turn. Keys which are already present are skipped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let _ = self.insert(value);
        }
    }
}
impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    /// Builds a tree by inserting the keys in the order they are yielded. Duplicates are skipped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
