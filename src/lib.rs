//! A binary search tree whose traversals can be recorded as flat, replayable step sequences.
//!
//! ------------------------
//!
//! # Overview
//! The crate has two layers. The lower one is an ordinary [`BinarySearchTree`]: a strict ordered set of unique keys with insertion, removal by in-order successor splicing and the three classic depth-first traversal orders. The upper one is the *step recorder*, which takes a snapshot of the tree and statically unrolls a recursive traversal into a list of [`Step`]s. Every recursive call is represented, including the ones which land on an absent child, so that a consumer can animate descents and returns rather than just the final visitation order.
//!
//! A recorded [`StepSequence`] is immutable. Everything which "plays" it only ever holds an index into it:
//! - [`Playback`] is a cursor which can tick forward, pause, resume, step in both directions and seek to any index, deriving a [`ReplayState`] purely from the prefix of the sequence;
//! - [`Session`] owns a tree together with at most one playback and refuses to mutate the tree while a replay is in progress, since the sequence was computed from a snapshot;
//! - [`Scheduler`] (behind the `scheduler` feature) drives a session's playback from a cancellable `tokio` task on a fixed tick.
//!
//! Rendering, layout and any human-readable narration of the steps are left to the consumer; [`BinarySearchTree::root`] hands out a read-only [`NodeRef`] for that purpose.
//!
//! # Example
//! ```rust
//! use bst_replay::{BinarySearchTree, TraversalOrder, Step};
//!
//! let tree: BinarySearchTree<i32> = [50, 30, 70].iter().copied().collect();
//! assert_eq!(tree.traverse(TraversalOrder::Inorder), [30, 50, 70]);
//!
//! let steps = tree.record_steps(TraversalOrder::Preorder);
//! // Three visits, four null sentinels and two descent edges.
//! assert_eq!(steps.len(), 9);
//! assert_eq!(steps.get(0), Some(&Step::Visit { value: 50, parent: None }));
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Adds [`Error`] trait implementations for the error types and [`PlaybackConfig::from_env`].
//! - `scheduler` (**enabled by default**) — adds the [`Scheduler`], a `tokio`-based driver for playbacks. Implies `std`.
//! - `serde` — derives `Serialize` and `Deserialize` for steps, traversal orders, replay states and the playback configuration.
//! - `cli` — builds the `bst-replay` demo binary.
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::await_holding_lock,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
    clippy::verbose_file_reads,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod binary_search_tree;
pub use binary_search_tree::{BinarySearchTree, NodeRef};

pub mod traversal;
pub use traversal::{
    Phase,
    Step,
    StepSequence,
    Traversable,
    TraversalOrder,
    record_steps,
};

pub mod replay;
pub use replay::{Edge, Playback, PlaybackStatus, ReplayState, Tick};

pub mod session;
pub use session::{parse_key, Session, DEFAULT_KEYS};

pub mod config;
pub use config::PlaybackConfig;

#[cfg(feature = "scheduler")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "scheduler")))]
pub mod scheduler;
#[cfg(feature = "scheduler")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "scheduler")))]
pub use scheduler::{PlaybackHandle, PlaybackOutcome, Scheduler};

/// A prelude for the crate, containing the most used types for glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::binary_search_tree::{BinarySearchTree, NodeRef as BinarySearchTreeNodeRef};
    #[doc(no_inline)]
    pub use crate::traversal::{Phase, Step, StepSequence, Traversable, TraversalOrder};
    #[doc(no_inline)]
    pub use crate::replay::{Playback, PlaybackStatus, ReplayState, Tick};
    #[doc(no_inline)]
    pub use crate::session::Session;
    #[doc(no_inline)]
    pub use crate::config::PlaybackConfig;
    #[cfg(feature = "scheduler")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "scheduler")))]
    #[doc(no_inline)]
    pub use crate::scheduler::{PlaybackHandle, PlaybackOutcome, Scheduler};
}

use alloc::string::String;
use core::fmt::{self, Debug, Display, Formatter};

/// The error type returned by [`BinarySearchTree::insert`] when the key is already present in the tree.
///
/// The tree is left unchanged. The rejected key is handed back to the caller instead of being dropped.
///
/// [`BinarySearchTree::insert`]: binary_search_tree/struct.BinarySearchTree.html#method.insert " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DuplicateKeyError<T> {
    /// The key which was passed to `insert` and rejected.
    pub value: T,
}
impl<T> DuplicateKeyError<T> {
    /// Extracts the rejected key.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_value(self) -> T {
        self.value
    }
}
impl<T> Display for DuplicateKeyError<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the key is already present in the tree")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for DuplicateKeyError<T> {}

/// The error type returned when parsing a [`TraversalOrder`] from a string which names none of the three supported orders.
///
/// [`TraversalOrder`]: traversal/enum.TraversalOrder.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnsupportedOrderError {
    /// The string which was requested as a traversal order.
    pub requested: String,
}
impl Display for UnsupportedOrderError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported traversal order {:?}, expected one of preorder, inorder or postorder",
            self.requested,
        )
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for UnsupportedOrderError {}

/// The error type returned by [`parse_key`] for input which cannot be interpreted as a key.
///
/// [`parse_key`]: session/fn.parse_key.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidInputError {
    /// The raw input which was rejected.
    pub input: String,
}
impl Display for InvalidInputError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a valid key", self.input)
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for InvalidInputError {}

/// The error type returned by [`Session`] methods which would mutate the tree or start a new replay while a replay is running or paused.
///
/// [`Session`]: session/struct.Session.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlaybackActiveError;
impl Display for PlaybackActiveError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("a traversal replay is in progress")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for PlaybackActiveError {}

/// The error type returned by [`Session::insert`].
///
/// In both cases, the key is not dropped but instead returned to the caller.
///
/// [`Session::insert`]: session/struct.Session.html#method.insert " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsertError<T> {
    /// The key was already present in the tree.
    Duplicate {
        /// The rejected key.
        value: T,
    },
    /// A replay was running or paused, so the tree could not be modified.
    PlaybackActive {
        /// The rejected key.
        value: T,
    },
}
impl<T> InsertError<T> {
    /// Extracts the key which was rejected.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_value(self) -> T {
        match self {
            Self::Duplicate { value } | Self::PlaybackActive { value } => value,
        }
    }
}
impl<T> From<DuplicateKeyError<T>> for InsertError<T> {
    #[inline]
    fn from(op: DuplicateKeyError<T>) -> Self {
        Self::Duplicate { value: op.value }
    }
}
impl<T> Display for InsertError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Duplicate { .. } => "the key is already present in the tree",
            Self::PlaybackActive { .. } => {
                "the tree cannot be modified while a traversal replay is in progress"
            }
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for InsertError<T> {}
