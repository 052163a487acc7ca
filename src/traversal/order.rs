use core::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use alloc::borrow::ToOwned;
use crate::UnsupportedOrderError;
use super::Phase;

/// The three depth-first traversal orders.
///
/// Each order performs the same three actions on every node: *visit* it, recurse into the *left* subtree and recurse into the *right* subtree. The only difference is the arrangement of those actions, given by [`body`].
///
/// # Example
/// ```rust
/// # use bst_replay::TraversalOrder;
/// let order: TraversalOrder = "InOrder".parse().unwrap();
/// assert_eq!(order, TraversalOrder::Inorder);
/// assert!("levelorder".parse::<TraversalOrder>().is_err());
/// ```
///
/// [`body`]: #method.body " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TraversalOrder {
    /// Visit the node, then its left subtree, then its right subtree.
    Preorder,
    /// Visit the left subtree, then the node, then its right subtree. For a binary search tree, this yields the keys in ascending order.
    Inorder,
    /// Visit the left subtree, then the right subtree, then the node itself.
    Postorder,
}
impl TraversalOrder {
    /// All supported orders, in the order they are usually listed.
    pub const ALL: [Self; 3] = [Self::Preorder, Self::Inorder, Self::Postorder];

    /// Returns the lowercase name of the order, which is also what [`FromStr`] accepts.
    ///
    /// [`FromStr`]: https://doc.rust-lang.org/core/str/trait.FromStr.html " "
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preorder => "preorder",
            Self::Inorder => "inorder",
            Self::Postorder => "postorder",
        }
    }
    /// Returns the three actions performed on every node, in the order they are performed.
    #[inline]
    pub const fn body(self) -> [Phase; 3] {
        match self {
            Self::Preorder => [Phase::Visit, Phase::Left, Phase::Right],
            Self::Inorder => [Phase::Left, Phase::Visit, Phase::Right],
            Self::Postorder => [Phase::Left, Phase::Right, Phase::Visit],
        }
    }
    /// Returns the zero-based position of the given action within the [`body`] of the order.
    ///
    /// [`body`]: #method.body " "
    #[inline]
    pub const fn body_position(self, phase: Phase) -> usize {
        match (self, phase) {
            (Self::Preorder, Phase::Visit)
            | (Self::Inorder, Phase::Left)
            | (Self::Postorder, Phase::Left) => 0,
            (Self::Preorder, Phase::Left)
            | (Self::Inorder, Phase::Visit)
            | (Self::Postorder, Phase::Right) => 1,
            (Self::Preorder, Phase::Right)
            | (Self::Inorder, Phase::Right)
            | (Self::Postorder, Phase::Visit) => 2,
        }
    }
}
impl Display for TraversalOrder {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
impl FromStr for TraversalOrder {
    type Err = UnsupportedOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|order| order.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnsupportedOrderError {
                requested: s.to_owned(),
            })
    }
}
