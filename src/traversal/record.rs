use alloc::vec::Vec;
use granite::ListStorage;
use super::{Phase, Step, StepSequence, Traversable, TraversalOrder};

/// Runs a traversal of the tree rooted at `root` in the given order, collecting the keys of the nodes in the order they are visited.
///
/// An absent root produces an empty list.
pub fn collect_keys<N>(root: Option<N>, order: TraversalOrder) -> Vec<N::Key>
where
    N: Traversable,
    N::Key: Clone,
{
    fn walk<N>(node: Option<N>, order: TraversalOrder, keys: &mut Vec<N::Key>)
    where
        N: Traversable,
        N::Key: Clone,
    {
        let node = match node {
            Some(x) => x,
            None => return,
        };
        for phase in order.body().iter() {
            match phase {
                Phase::Visit => keys.push(node.key().clone()),
                Phase::Left => walk(node.left_child(), order, keys),
                Phase::Right => walk(node.right_child(), order, keys),
            }
        }
    }
    let mut keys = Vec::new();
    walk(root, order, &mut keys);
    keys
}

/// Unrolls a recursive traversal of the tree rooted at `root` into a flat list of steps, stored in a `Vec`.
///
/// See [`record_steps_in`] for the details and for using a different storage.
///
/// # Example
/// ```rust
/// # use bst_replay::{BinarySearchTree, Step, TraversalOrder, record_steps};
/// let tree: BinarySearchTree<i32> = [2, 1].iter().copied().collect();
/// let steps = record_steps(tree.root(), TraversalOrder::Inorder);
/// let steps: Vec<_> = steps.iter().cloned().collect();
/// assert_eq!(steps, [
///     Step::Null { parent: Some(1) },
///     Step::Visit { value: 1, parent: Some(2) },
///     Step::Null { parent: Some(1) },
///     Step::Left { value: 2, edge_to: 1 },
///     Step::Visit { value: 2, parent: None },
///     Step::Null { parent: Some(2) },
/// ]);
/// ```
///
/// [`record_steps_in`]: fn.record_steps_in.html " "
#[inline]
pub fn record_steps<N>(root: Option<N>, order: TraversalOrder) -> StepSequence<N::Key>
where
    N: Traversable,
    N::Key: Clone,
{
    record_steps_in(root, order)
}

/// Unrolls a recursive traversal of the tree rooted at `root` into a flat list of steps, stored in the specified storage.
///
/// The recursion performs the three actions of the order's [body] on every present node:
/// - *visit* records a [`Step::Visit`] carrying the key of the node's parent, if any;
/// - *left* and *right* recurse into the corresponding subtree and then, only if that child exists, record a [`Step::Left`] or [`Step::Right`] pointing at it.
///
/// Entering an absent subtree records a single [`Step::Null`] naming the node whose child is absent, then returns. An absent root therefore produces exactly one sentinel without a parent. For `n` nodes, the sequence holds `n` visits, `n + 1` null sentinels and `n - 1` descent steps.
///
/// [body]: enum.TraversalOrder.html#method.body " "
/// [`Step::Visit`]: enum.Step.html#variant.Visit " "
/// [`Step::Left`]: enum.Step.html#variant.Left " "
/// [`Step::Right`]: enum.Step.html#variant.Right " "
/// [`Step::Null`]: enum.Step.html#variant.Null " "
pub fn record_steps_in<N, S>(root: Option<N>, order: TraversalOrder) -> StepSequence<N::Key, S>
where
    N: Traversable,
    N::Key: Clone,
    S: ListStorage<Element = Step<N::Key>>,
{
    let mut recorder = Recorder {
        steps: StepSequence::new(order),
    };
    recorder.unroll(root, None);
    tracing::trace!(order = order.as_str(), steps = recorder.steps.len(), "recorded traversal");
    recorder.steps
}

struct Recorder<T, S: ListStorage<Element = Step<T>>> {
    steps: StepSequence<T, S>,
}
impl<T: Clone, S> Recorder<T, S>
where
    S: ListStorage<Element = Step<T>>,
{
    fn unroll<N>(&mut self, node: Option<N>, parent: Option<&T>)
    where
        N: Traversable<Key = T>,
    {
        let node = match node {
            Some(x) => x,
            None => {
                self.steps.push(Step::Null {
                    parent: parent.cloned(),
                });
                return;
            }
        };
        for phase in self.steps.order().body().iter() {
            match phase {
                Phase::Visit => self.steps.push(Step::Visit {
                    value: node.key().clone(),
                    parent: parent.cloned(),
                }),
                Phase::Left => {
                    self.descend(&node, node.left_child(), |value, edge_to| Step::Left {
                        value,
                        edge_to,
                    })
                }
                Phase::Right => {
                    self.descend(&node, node.right_child(), |value, edge_to| Step::Right {
                        value,
                        edge_to,
                    })
                }
            }
        }
    }
    /// Recurses into a child and, if it was present, records the descent edge with the given constructor.
    fn descend<N>(&mut self, node: &N, child: Option<N>, make_step: fn(T, T) -> Step<T>)
    where
        N: Traversable<Key = T>,
    {
        let edge_to = child.as_ref().map(|child| child.key().clone());
        self.unroll(child, Some(node.key()));
        if let Some(edge_to) = edge_to {
            self.steps.push(make_step(node.key().clone(), edge_to));
        }
    }
}
