//! Cursors over recorded step sequences.
//!
//! A [`Playback`] owns a [`StepSequence`] and an index into it, nothing else. All of the observable state of a replay, represented by [`ReplayState`], is derived from the prefix of the sequence up to that index, so moving the cursor in any direction or jumping around never has side effects.
//!
//! # Example
//! ```rust
//! use bst_replay::{BinarySearchTree, Playback, Tick, TraversalOrder};
//!
//! let tree: BinarySearchTree<i32> = [2, 1, 3].iter().copied().collect();
//! let mut playback = Playback::new(tree.record_steps(TraversalOrder::Inorder));
//!
//! // The first step is the null sentinel under 1.
//! assert_eq!(playback.tick(), Tick::Applied(0));
//! assert_eq!(playback.tick(), Tick::Applied(1));
//! assert_eq!(playback.state().unwrap().visited, [1]);
//!
//! // Pausing freezes the cursor until resumed.
//! playback.pause();
//! assert_eq!(playback.tick(), Tick::Paused);
//! playback.resume();
//! assert_eq!(playback.tick(), Tick::Applied(2));
//!
//! // Jumping to the end gives the same state as playing up to it.
//! playback.seek(8);
//! assert_eq!(playback.state().unwrap().visited, [1, 2, 3]);
//! ```
//!
//! [`Playback`]: struct.Playback.html " "
//! [`StepSequence`]: ../traversal/struct.StepSequence.html " "
//! [`ReplayState`]: struct.ReplayState.html " "

mod state;
pub use state::*;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;
use granite::ListStorage;
use crate::traversal::{Step, StepSequence};

/// The status of a [`Playback`].
///
/// [`Playback`]: struct.Playback.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackStatus {
    /// The playback advances on every tick.
    Running,
    /// The playback ignores ticks until resumed. Manual stepping and seeking are still possible.
    Paused,
    /// A tick was made after the last step had been applied. Ticks do nothing anymore, but manual stepping and seeking are still possible and pause the playback again.
    Finished,
}

/// The outcome of a single [`Playback::tick`].
///
/// [`Playback::tick`]: struct.Playback.html#method.tick " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tick {
    /// The step at the contained index was applied.
    Applied(usize),
    /// The playback is paused and nothing was applied.
    Paused,
    /// There are no steps left to apply. The playback is now finished, whether it was before the tick or not.
    Finished,
}

/// A cursor over a recorded step sequence.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct Playback<T, S = Vec<Step<T>>>
where
    S: ListStorage<Element = Step<T>>,
{
    steps: StepSequence<T, S>,
    position: Option<usize>,
    status: PlaybackStatus,
}
impl<T, S> Playback<T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    /// Starts a running playback of the given sequence with no steps applied yet.
    #[inline]
    pub const fn new(steps: StepSequence<T, S>) -> Self {
        Self {
            steps,
            position: None,
            status: PlaybackStatus::Running,
        }
    }
    /// Returns the sequence being played.
    #[inline(always)]
    pub const fn steps(&self) -> &StepSequence<T, S> {
        &self.steps
    }
    /// Consumes the playback and returns the sequence it played.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_steps(self) -> StepSequence<T, S> {
        self.steps
    }
    /// Returns the index of the latest applied step, or `None` if no step has been applied yet.
    #[inline(always)]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }
    /// Returns the current status.
    #[inline(always)]
    pub const fn status(&self) -> PlaybackStatus {
        self.status
    }
    /// Returns `true` if the playback is running or paused, `false` if it has finished.
    #[inline]
    pub const fn is_active(&self) -> bool {
        !matches!(self.status, PlaybackStatus::Finished)
    }
    /// Returns the step which was applied last, if any.
    #[inline]
    pub fn current_step(&self) -> Option<&Step<T>> {
        self.position.and_then(|index| self.steps.get(index))
    }
    /// Advances the playback by one step if it is running.
    ///
    /// Once the last step has been applied, the next tick finishes the playback instead of applying anything.
    pub fn tick(&mut self) -> Tick {
        match self.status {
            PlaybackStatus::Paused => Tick::Paused,
            PlaybackStatus::Finished => Tick::Finished,
            PlaybackStatus::Running => {
                let next = self.next_index();
                if next < self.steps.len() {
                    self.position = Some(next);
                    Tick::Applied(next)
                } else {
                    self.status = PlaybackStatus::Finished;
                    Tick::Finished
                }
            }
        }
    }
    /// Pauses a running playback. Has no effect otherwise.
    #[inline]
    pub fn pause(&mut self) {
        if self.status == PlaybackStatus::Running {
            self.status = PlaybackStatus::Paused;
        }
    }
    /// Resumes a paused playback, which will continue from the step after the current one. Has no effect otherwise.
    #[inline]
    pub fn resume(&mut self) {
        if self.status == PlaybackStatus::Paused {
            self.status = PlaybackStatus::Running;
        }
    }
    /// Pauses a running playback or resumes a paused one, returning the new status. A finished playback is left as is.
    pub fn toggle_pause(&mut self) -> PlaybackStatus {
        match self.status {
            PlaybackStatus::Running => self.status = PlaybackStatus::Paused,
            PlaybackStatus::Paused => self.status = PlaybackStatus::Running,
            PlaybackStatus::Finished => {}
        }
        self.status
    }
    /// Applies the next step and pauses the playback.
    ///
    /// Returns the new position, or `None` without changing anything if the last step has already been applied.
    pub fn step_forward(&mut self) -> Option<usize> {
        let next = self.next_index();
        if next >= self.steps.len() {
            return None;
        }
        self.position = Some(next);
        self.status = PlaybackStatus::Paused;
        Some(next)
    }
    /// Goes back to the previous step and pauses the playback.
    ///
    /// Returns the new position, or `None` without changing anything if the cursor is at the first step or no step has been applied yet.
    pub fn step_backward(&mut self) -> Option<usize> {
        let previous = self.position?.checked_sub(1)?;
        self.position = Some(previous);
        self.status = PlaybackStatus::Paused;
        Some(previous)
    }
    /// Jumps to the step at the given index and pauses the playback.
    ///
    /// Returns `false` without changing anything if the index is out of bounds.
    pub fn seek(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        self.position = Some(index);
        self.status = PlaybackStatus::Paused;
        true
    }
    #[inline]
    fn next_index(&self) -> usize {
        self.position.map_or(0, |index| index + 1)
    }
}
impl<T: Clone, S> Playback<T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    /// Derives the state at the current position, or returns `None` if no step has been applied yet.
    #[inline]
    pub fn state(&self) -> Option<ReplayState<T>> {
        self.state_at(self.position?)
    }
    /// Derives the state at an arbitrary index without moving the cursor, or returns `None` if the index is out of bounds.
    #[inline]
    pub fn state_at(&self, index: usize) -> Option<ReplayState<T>> {
        ReplayState::derive(&self.steps, index)
    }
}
