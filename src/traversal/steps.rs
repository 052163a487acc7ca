use core::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};
use alloc::vec::Vec;
use granite::ListStorage;
use super::TraversalOrder;

/// One of the three actions a recursive traversal performs on a present node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Phase {
    /// The node's key is emitted.
    Visit,
    /// The traversal has returned from the node's left subtree.
    Left,
    /// The traversal has returned from the node's right subtree.
    Right,
}

/// A single event of an unrolled recursive traversal.
///
/// A step is either a *null sentinel*, recorded whenever the traversal enters an absent subtree, or one of the three [`Phase`]s of a present node. Descent steps are only recorded for children which actually exist, while null sentinels are recorded for every absent child; consumers relying on the exact number of steps should keep this asymmetry in mind.
///
/// With the `serde` feature, steps are serialized as maps tagged by a `phase` field holding `"null"`, `"visit"`, `"left"` or `"right"`, next to the fields of the variant. The null tag only exists in serialized form: [`phase`] returns `None` for null sentinels.
///
/// [`phase`]: #method.phase " "
/// [`Phase`]: enum.Phase.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "phase", rename_all = "lowercase"))]
pub enum Step<T> {
    /// The traversal entered an absent subtree and returned immediately.
    Null {
        /// The key of the node whose absent child was entered, or `None` if the whole tree is empty.
        parent: Option<T>,
    },
    /// A node was visited.
    Visit {
        /// The key of the visited node.
        value: T,
        /// The key of the node's parent, or `None` for the root.
        parent: Option<T>,
    },
    /// The traversal returned from the left subtree of a node.
    Left {
        /// The key of the node.
        value: T,
        /// The key of the node's left child.
        edge_to: T,
    },
    /// The traversal returned from the right subtree of a node.
    Right {
        /// The key of the node.
        value: T,
        /// The key of the node's right child.
        edge_to: T,
    },
}
impl<T> Step<T> {
    /// Returns the key of the node the step was recorded for, or `None` for null sentinels.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Null { .. } => None,
            Self::Visit { value, .. } | Self::Left { value, .. } | Self::Right { value, .. } => {
                Some(value)
            }
        }
    }
    /// Returns the phase of the step, or `None` for null sentinels.
    #[inline]
    pub const fn phase(&self) -> Option<Phase> {
        match self {
            Self::Null { .. } => None,
            Self::Visit { .. } => Some(Phase::Visit),
            Self::Left { .. } => Some(Phase::Left),
            Self::Right { .. } => Some(Phase::Right),
        }
    }
    /// Returns the key of the child a descent step was recorded for; `None` for visits and null sentinels.
    #[inline]
    pub fn edge_to(&self) -> Option<&T> {
        match self {
            Self::Left { edge_to, .. } | Self::Right { edge_to, .. } => Some(edge_to),
            Self::Null { .. } | Self::Visit { .. } => None,
        }
    }
    /// Returns the key of the logical parent recorded for visits and null sentinels; `None` for descent steps, the root's visit and the empty tree's sentinel.
    #[inline]
    pub fn parent(&self) -> Option<&T> {
        match self {
            Self::Null { parent } | Self::Visit { parent, .. } => parent.as_ref(),
            Self::Left { .. } | Self::Right { .. } => None,
        }
    }
    /// Returns `true` if the step is a null sentinel, `false` otherwise.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null { .. })
    }
    /// Returns the line of the canonical recursive traversal routine which the step corresponds to.
    ///
    /// The routine is laid out as follows, with the body lines arranged according to the traversal order:
    /// ```text
    /// 0  traverse(node):
    /// 1      if node is null:
    /// 2          return
    /// 3
    /// 4      <first action>
    /// 5      <second action>
    /// 6      <third action>
    /// ```
    /// Null sentinels point at the null check, every other step points at the body line of its phase.
    ///
    /// # Example
    /// ```rust
    /// # use bst_replay::{Step, TraversalOrder};
    /// let visit = Step::Visit { value: 1, parent: None };
    /// assert_eq!(visit.code_line(TraversalOrder::Preorder), 4);
    /// assert_eq!(visit.code_line(TraversalOrder::Inorder), 5);
    /// assert_eq!(visit.code_line(TraversalOrder::Postorder), 6);
    /// assert_eq!(Step::<i32>::Null { parent: None }.code_line(TraversalOrder::Inorder), 1);
    /// ```
    #[inline]
    pub const fn code_line(&self, order: TraversalOrder) -> usize {
        match self.phase() {
            None => 1,
            Some(phase) => 4 + order.body_position(phase),
        }
    }
}

/// An immutable list of steps recorded from a single traversal of a tree.
///
/// The sequence remembers the order it was recorded with, which is needed to map steps to pseudocode lines. Once recorded, it can only be read: replaying it forward, backward or by random index never changes it.
///
/// The storage can be any [`ListStorage`] of steps; `Vec` is used unless specified otherwise.
///
/// [`ListStorage`]: https://docs.rs/granite/*/granite/trait.ListStorage.html " "
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StepSequence<T, S = Vec<Step<T>>>
where
    S: ListStorage<Element = Step<T>>,
{
    order: TraversalOrder,
    steps: S,
}
impl<T, S> StepSequence<T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    /// Creates an empty sequence for the given order. Only the recorder appends to it.
    #[inline]
    pub(crate) fn new(order: TraversalOrder) -> Self {
        Self {
            order,
            steps: <S as ListStorage>::new(),
        }
    }
    #[inline]
    pub(crate) fn push(&mut self, step: Step<T>) {
        self.steps.push(step);
    }
    /// Returns the traversal order the sequence was recorded with.
    #[inline(always)]
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }
    /// Returns the number of steps in the sequence. This is never zero, since even an empty tree produces a single null sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    /// Returns `true` if the sequence contains no steps, `false` otherwise. Recorded sequences are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the step at the given index, or `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Step<T>> {
        self.steps.get(index)
    }
    /// Returns the last step of the sequence.
    #[inline]
    pub fn last(&self) -> Option<&Step<T>> {
        self.len().checked_sub(1).and_then(|last| self.get(last))
    }
    /// Returns an iterator over the steps, from first to last.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter {
            sequence: self,
            front: 0,
            back: self.len(),
        }
    }
    /// Returns an iterator over the keys of the visit steps, which is the plain traversal of the tree the sequence was recorded from.
    pub fn visits(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().filter_map(|step| match step {
            Step::Visit { value, .. } => Some(value),
            _ => None,
        })
    }
    /// Returns a reference to the underlying storage.
    #[inline(always)]
    pub const fn storage(&self) -> &S {
        &self.steps
    }
    /// Consumes the sequence and returns the underlying storage.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_storage(self) -> S {
        self.steps
    }
}
impl<T: Debug, S> Debug for StepSequence<T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepSequence")
            .field("order", &self.order)
            .field("steps", &DebugSteps(self))
            .finish()
    }
}
struct DebugSteps<'a, T, S: ListStorage<Element = Step<T>>>(&'a StepSequence<T, S>);
impl<T: Debug, S> Debug for DebugSteps<'_, T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
impl<'a, T, S> IntoIterator for &'a StepSequence<T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    type Item = &'a Step<T>;
    type IntoIter = Iter<'a, T, S>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the steps of a [`StepSequence`].
///
/// Created by the [`iter`] method on `StepSequence`.
///
/// [`StepSequence`]: struct.StepSequence.html " "
/// [`iter`]: struct.StepSequence.html#method.iter " "
pub struct Iter<'a, T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    sequence: &'a StepSequence<T, S>,
    front: usize,
    back: usize,
}
impl<'a, T, S> Iterator for Iter<'a, T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    type Item = &'a Step<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let step = self.sequence.get(self.front);
        self.front += 1;
        step
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}
impl<T, S> DoubleEndedIterator for Iter<'_, T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.get(self.back)
    }
}
impl<T, S> ExactSizeIterator for Iter<'_, T, S> where S: ListStorage<Element = Step<T>> {}
impl<T, S> FusedIterator for Iter<'_, T, S> where S: ListStorage<Element = Step<T>> {}
impl<T, S> Clone for Iter<'_, T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            front: self.front,
            back: self.back,
        }
    }
}
impl<T: Debug, S> Debug for Iter<'_, T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
