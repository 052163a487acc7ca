use core::fmt::{self, Debug, Formatter};
use arrayvec::ArrayVec;
use super::Node;

/// A read-only reference to a node in a binary search tree.
///
/// This is the structure snapshot handed out to renderers and other consumers which need to look at the shape of the tree: it exposes the key and the children of the node, but nothing which could modify the tree.
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
}
impl<'a, T> NodeRef<'a, T> {
    #[inline(always)]
    pub(super) const fn new(node: &'a Node<T>) -> Self {
        Self { node }
    }
    /// Returns a reference to the key stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node.value
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.node.left.as_deref().map(Self::new)
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.node.right.as_deref().map(Self::new)
    }
    /// Returns the children which are present, left one first.
    ///
    /// If you need to know which side a lone child is on, use [`left_child`]/[`right_child`] instead.
    ///
    /// [`left_child`]: #method.left_child " "
    /// [`right_child`]: #method.right_child " "
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        let mut children = ArrayVec::new();
        if let Some(left) = self.left_child() {
            children.push(left);
        }
        if let Some(right) = self.right_child() {
            children.push(right);
        }
        children
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has exactly two child nodes; `false` otherwise.
    #[inline]
    pub fn is_full_branch(&self) -> bool {
        self.node.left.is_some() && self.node.right.is_some()
    }
    /// Returns the number of nodes on the longest path from this node down to a leaf, counting both ends. A leaf has a height of 1.
    pub fn height(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(NodeRef::height)
            .max()
            .unwrap_or(0)
    }
    /// Returns the number of nodes in the subtree rooted at this node, including itself.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(NodeRef::subtree_len)
            .sum::<usize>()
    }
}
impl<T> Copy for NodeRef<'_, T> {}
impl<T> Clone for NodeRef<'_, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Debug> Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("left", &self.left_child())
            .field("right", &self.right_child())
            .finish()
    }
}
