use alloc::vec::Vec;
use granite::ListStorage;
use crate::traversal::{Step, StepSequence};

/// A directed edge between two nodes, given by their keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<T> {
    /// The key of the node the edge starts at, which is always the parent.
    pub from: T,
    /// The key of the node the edge leads to, which is always the child.
    pub to: T,
}

/// Everything a consumer needs to draw one frame of a replay.
///
/// The state is a pure function of the step sequence and an index into it: it only looks at the steps up to and including that index. Seeking straight to an index therefore produces exactly the same state as applying every step before it one by one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayState<T> {
    /// The index of the step the state was derived for.
    pub index: usize,
    /// The step at `index`.
    pub step: Step<T>,
    /// Keys of the nodes visited so far, in the order of visitation.
    pub visited: Vec<T>,
    /// The key of the node the traversal is currently at, which is the node of the latest step that was not a null sentinel. `None` if only null sentinels have been applied so far.
    pub current: Option<T>,
    /// The edge to highlight: the descent edge of a `Left` or `Right` step, or the edge from the parent for a visit. `None` for null sentinels and the root's visit.
    pub edge: Option<Edge<T>>,
    /// The line of the pseudocode routine to highlight. See [`Step::code_line`].
    ///
    /// [`Step::code_line`]: ../traversal/enum.Step.html#method.code_line " "
    pub code_line: usize,
}
impl<T: Clone> ReplayState<T> {
    /// Derives the state after the step at `index` has been applied, or returns `None` if the index is out of bounds.
    pub fn derive<S>(steps: &StepSequence<T, S>, index: usize) -> Option<Self>
    where
        S: ListStorage<Element = Step<T>>,
    {
        let step = steps.get(index)?.clone();
        let prefix = steps.iter().take(index + 1);
        let visited = prefix.clone().filter_map(|step| match step {
            Step::Visit { value, .. } => Some(value.clone()),
            _ => None,
        });
        let current = prefix.rev().find_map(Step::value).cloned();
        let edge = match &step {
            Step::Left { value, edge_to } | Step::Right { value, edge_to } => Some(Edge {
                from: value.clone(),
                to: edge_to.clone(),
            }),
            Step::Visit {
                value,
                parent: Some(parent),
            } => Some(Edge {
                from: parent.clone(),
                to: value.clone(),
            }),
            Step::Visit { parent: None, .. } | Step::Null { .. } => None,
        };
        Some(Self {
            index,
            code_line: step.code_line(steps.order()),
            step,
            visited: visited.collect(),
            current,
            edge,
        })
    }
}
