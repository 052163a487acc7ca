use alloc::boxed::Box;

/// An owning edge from a node to one of its children.
pub(super) type Link<T> = Option<Box<Node<T>>>;

/// A node of a binary search tree.
///
/// Nodes exclusively own their children and do not store a reference to their parent; parents are computed by a top-down search when needed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(super) value: T,
    pub(super) left: Link<T>,
    pub(super) right: Link<T>,
}
impl<T> Node<T> {
    #[inline(always)]
    pub(super) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
    /// Walks left until there is no left child, returning the node holding the smallest key of the subtree.
    pub(super) fn min(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }
    pub(super) fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }
}
