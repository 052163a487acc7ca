//! A tree together with at most one replay of its traversal.
//!
//! A [`Session`] is what an interactive front end talks to. It owns a [`BinarySearchTree`] and the [`Playback`] of the traversal which was last requested, and enforces the one rule which keeps the two consistent: *the tree cannot be modified while its traversal is being replayed*, since the step sequence was recorded from a snapshot of the tree. A finished replay does not count, and is discarded by the next successful modification.
//!
//! # Example
//! ```rust
//! use bst_replay::{InsertError, Session, Tick, TraversalOrder};
//!
//! let mut session = Session::<i32>::with_default_tree();
//! assert_eq!(session.start(TraversalOrder::Preorder), Ok(33));
//! assert_eq!(session.tick(), Some(Tick::Applied(0)));
//!
//! // The tree is locked while the replay is running or paused.
//! assert_eq!(session.insert(55), Err(InsertError::PlaybackActive { value: 55 }));
//! session.stop();
//! assert_eq!(session.insert(55), Ok(()));
//! ```
//!
//! [`Session`]: struct.Session.html " "
//! [`BinarySearchTree`]: ../binary_search_tree/struct.BinarySearchTree.html " "
//! [`Playback`]: ../replay/struct.Playback.html " "

#[cfg(test)]
mod tests;

use core::{fmt::Debug, str::FromStr};
use alloc::{borrow::ToOwned, vec::Vec};
use tracing::{debug, info, warn};
use crate::{
    binary_search_tree::{BinarySearchTree, NodeRef},
    replay::{Playback, PlaybackStatus, ReplayState, Tick},
    traversal::TraversalOrder,
    InsertError,
    InvalidInputError,
    PlaybackActiveError,
};

/// The keys of the tree a session starts with when created by [`Session::with_default_tree`], in insertion order.
///
/// [`Session::with_default_tree`]: struct.Session.html#method.with_default_tree " "
pub const DEFAULT_KEYS: [u8; 11] = [50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 65];

/// Parses a key from user input, ignoring surrounding whitespace.
///
/// # Errors
/// Will fail if the input, once trimmed, is empty or cannot be parsed as `T`. The error contains the input as it was given.
///
/// # Example
/// ```rust
/// # use bst_replay::parse_key;
/// assert_eq!(parse_key::<i32>(" 42 "), Ok(42));
/// assert!(parse_key::<i32>("forty-two").is_err());
/// assert!(parse_key::<u8>("").is_err());
/// ```
pub fn parse_key<T: FromStr>(input: &str) -> Result<T, InvalidInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError {
            input: input.to_owned(),
        });
    }
    trimmed.parse().map_err(|_| InvalidInputError {
        input: input.to_owned(),
    })
}

/// A binary search tree with at most one replay of its traversal.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct Session<T> {
    tree: BinarySearchTree<T>,
    playback: Option<Playback<T>>,
    replays_started: u64,
}
impl<T> Session<T> {
    /// Creates a session with an empty tree.
    #[inline]
    pub const fn new() -> Self {
        Self::from_tree(BinarySearchTree::new())
    }
    /// Creates a session around an existing tree.
    #[inline]
    pub const fn from_tree(tree: BinarySearchTree<T>) -> Self {
        Self {
            tree,
            playback: None,
            replays_started: 0,
        }
    }
    /// Returns a reference to the tree.
    #[inline(always)]
    pub const fn tree(&self) -> &BinarySearchTree<T> {
        &self.tree
    }
    /// Returns a read-only reference to the root of the tree, for rendering its structure.
    #[inline]
    pub fn structure(&self) -> Option<NodeRef<'_, T>> {
        self.tree.root()
    }
    /// Returns the current playback, whether it is active or finished.
    #[inline]
    pub const fn playback(&self) -> Option<&Playback<T>> {
        self.playback.as_ref()
    }
    /// Returns the number of replays started in this session so far.
    #[inline(always)]
    pub const fn replays_started(&self) -> u64 {
        self.replays_started
    }
    /// Returns the identifier of the current playback, or `None` if there is no playback.
    ///
    /// Every successful [`start`] gives the new playback its own identifier, which is how a holder of an older one can tell that it has been replaced.
    ///
    /// [`start`]: #method.start " "
    #[inline]
    pub fn playback_id(&self) -> Option<u64> {
        self.playback.as_ref().map(|_| self.replays_started)
    }
    /// Returns `true` if a replay is running or paused, which means that the tree cannot be modified.
    #[inline]
    pub fn is_replaying(&self) -> bool {
        self.playback.as_ref().map_or(false, Playback::is_active)
    }
    /// Returns the status of the current playback, if there is one.
    #[inline]
    pub fn status(&self) -> Option<PlaybackStatus> {
        self.playback.as_ref().map(Playback::status)
    }
    /// Discards the current playback, whatever its status, returning `true` if there was one.
    pub fn stop(&mut self) -> bool {
        let stopped = self.playback.take().is_some();
        if stopped {
            info!("traversal replay stopped");
        }
        stopped
    }
    /// Discards the current playback only if it has finished, returning `true` if it was discarded.
    pub fn clear_finished(&mut self) -> bool {
        if self.status() == Some(PlaybackStatus::Finished) {
            self.playback = None;
            debug!("finished traversal replay cleared");
            true
        } else {
            false
        }
    }
    /// Pauses a running playback. Returns the resulting status, or `None` if there is no playback.
    pub fn pause(&mut self) -> Option<PlaybackStatus> {
        let playback = self.playback.as_mut()?;
        playback.pause();
        Some(playback.status())
    }
    /// Resumes a paused playback. Returns the resulting status, or `None` if there is no playback.
    pub fn resume(&mut self) -> Option<PlaybackStatus> {
        let playback = self.playback.as_mut()?;
        playback.resume();
        Some(playback.status())
    }
    /// Pauses a running playback or resumes a paused one. Returns the resulting status, or `None` if there is no playback.
    pub fn toggle_pause(&mut self) -> Option<PlaybackStatus> {
        self.playback.as_mut().map(Playback::toggle_pause)
    }
    /// Applies the next step and pauses. Returns the new position, or `None` if there is no playback or it is already at the last step.
    pub fn step_forward(&mut self) -> Option<usize> {
        self.playback.as_mut()?.step_forward()
    }
    /// Goes back one step and pauses. Returns the new position, or `None` if there is no playback or it is at the first step.
    pub fn step_backward(&mut self) -> Option<usize> {
        self.playback.as_mut()?.step_backward()
    }
    /// Jumps to the given step and pauses. Returns `false` if there is no playback or the index is out of bounds.
    pub fn seek(&mut self, index: usize) -> bool {
        self.playback
            .as_mut()
            .map_or(false, |playback| playback.seek(index))
    }
}
impl<T: Ord + Clone + Debug> Session<T> {
    /// Creates a session whose tree holds the [`DEFAULT_KEYS`].
    ///
    /// [`DEFAULT_KEYS`]: constant.DEFAULT_KEYS.html " "
    pub fn with_default_tree() -> Self
    where
        T: From<u8>,
    {
        Self::from_tree(DEFAULT_KEYS.iter().copied().map(T::from).collect())
    }
    /// Inserts a key into the tree. A finished playback is discarded if the key was inserted.
    ///
    /// # Errors
    /// Will fail if a replay is running or paused, or if the key is already present. In both cases, the key is returned inside the error.
    pub fn insert(&mut self, value: T) -> Result<(), InsertError<T>> {
        if self.is_replaying() {
            warn!(?value, "insert rejected while a traversal replay is in progress");
            return Err(InsertError::PlaybackActive { value });
        }
        match self.tree.insert(value) {
            Ok(()) => {
                self.playback = None;
                info!(len = self.tree.len(), "key inserted");
                Ok(())
            }
            Err(err) => {
                info!(value = ?err.value, "duplicate key rejected");
                Err(err.into())
            }
        }
    }
    /// Removes a key from the tree, returning whether it was present. A finished playback is discarded if the key was removed.
    ///
    /// # Errors
    /// Will fail if a replay is running or paused.
    pub fn remove(&mut self, value: &T) -> Result<bool, PlaybackActiveError> {
        if self.is_replaying() {
            warn!(?value, "remove rejected while a traversal replay is in progress");
            return Err(PlaybackActiveError);
        }
        let removed = self.tree.remove(value);
        if removed {
            self.playback = None;
            info!(?value, len = self.tree.len(), "key removed");
        } else {
            debug!(?value, "key to remove was not present");
        }
        Ok(removed)
    }
    /// Runs a plain traversal of the tree. This is allowed at any time, including during a replay.
    #[inline]
    pub fn traverse(&self, order: TraversalOrder) -> Vec<T> {
        self.tree.traverse(order)
    }
    /// Records a traversal in the given order and starts replaying it, replacing a finished playback if there is one. Returns the number of recorded steps.
    ///
    /// # Errors
    /// Will fail if a replay is already running or paused.
    pub fn start(&mut self, order: TraversalOrder) -> Result<usize, PlaybackActiveError> {
        if self.is_replaying() {
            warn!(%order, "traversal rejected while another replay is in progress");
            return Err(PlaybackActiveError);
        }
        let steps = self.tree.record_steps(order);
        let len = steps.len();
        self.playback = Some(Playback::new(steps));
        self.replays_started = self.replays_started.wrapping_add(1);
        info!(%order, steps = len, id = self.replays_started, "traversal replay started");
        Ok(len)
    }
    /// Advances the playback by one tick. Returns `None` if there is no playback.
    pub fn tick(&mut self) -> Option<Tick> {
        let playback = self.playback.as_mut()?;
        let tick = playback.tick();
        match tick {
            Tick::Applied(index) => debug!(index, step = ?playback.current_step(), "replay step applied"),
            Tick::Finished => info!("traversal replay finished"),
            Tick::Paused => {}
        }
        Some(tick)
    }
    /// Derives the state of the playback at its current position. Returns `None` if there is no playback or no step has been applied yet.
    #[inline]
    pub fn state(&self) -> Option<ReplayState<T>> {
        self.playback.as_ref()?.state()
    }
}
impl<T> Default for Session<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
