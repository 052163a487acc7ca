//! Binary search trees of unique keys.
//!
//! The [Wikipedia article] on binary search trees covers their use cases and specifics in more detail.
//!
//! The tree is a strict ordered set: for every node, all keys in its left subtree are strictly less than its own key, and all keys in its right subtree are strictly greater. Inserting a key which is already present is rejected, and no balancing is ever performed, so the shape of the tree depends on the insertion order alone. Nodes do not store references to their parents; the parent of a key is computed by a top-down search whenever it is needed.
//!
//! # Example
//! ```rust
//! use bst_replay::binary_search_tree::BinarySearchTree;
//! use bst_replay::TraversalOrder;
//!
//! // Insertion order decides the shape of the tree.
//! let mut tree = BinarySearchTree::new();
//! for key in [50, 30, 70, 20, 40].iter().copied() {
//!     tree.insert(key).unwrap();
//! }
//! // Keys are unique, and the duplicate is handed back to us.
//! assert_eq!(tree.insert(30).unwrap_err().into_value(), 30);
//!
//! // The root has two children, the first of which has two of its own.
//! let root = tree.root().unwrap();
//! assert!(root.is_full_branch());
//! assert_eq!(root.height(), 3);
//! assert_eq!(tree.parent_of(&40), Some(&30));
//!
//! // Removing a node with two children splices its in-order successor into its place.
//! assert!(tree.remove(&30));
//! assert_eq!(tree.traverse(TraversalOrder::Preorder), [50, 40, 20, 70]);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_search_tree " "

mod base;
mod impl_traversable;
mod node;
mod node_ref;

pub use base::BinarySearchTree;
pub use node_ref::NodeRef;
use node::Node;
