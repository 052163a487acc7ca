use super::*;
use crate::BinarySearchTree;
use alloc::{collections::VecDeque, string::ToString, vec::Vec};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tree_of(keys: &[i32]) -> BinarySearchTree<i32> {
    keys.iter().copied().collect()
}

#[test]
fn order_parsing() {
    for order in TraversalOrder::ALL.iter().copied() {
        assert_eq!(order.as_str().parse::<TraversalOrder>(), Ok(order));
        assert_eq!(order.to_string(), order.as_str());
    }
    assert_eq!("PREORDER".parse(), Ok(TraversalOrder::Preorder));
    assert_eq!(" postOrder ".parse(), Ok(TraversalOrder::Postorder));
    let error = "level-order".parse::<TraversalOrder>().unwrap_err();
    assert_eq!(error.requested, "level-order");
}

#[test]
fn empty_tree_records_a_single_sentinel() {
    let tree = BinarySearchTree::<i32>::new();
    for order in TraversalOrder::ALL.iter().copied() {
        let steps = tree.record_steps(order);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps.get(0), Some(&Step::Null { parent: None }));
        assert_eq!(steps.order(), order);
        assert_eq!(steps.visits().count(), 0);
    }
}

#[test]
fn single_node() {
    let tree = tree_of(&[7]);
    let steps: Vec<_> = tree.record_steps(TraversalOrder::Postorder).iter().cloned().collect();
    assert_eq!(
        steps,
        [
            Step::Null { parent: Some(7) },
            Step::Null { parent: Some(7) },
            Step::Visit { value: 7, parent: None },
        ],
    );
}

#[test]
fn preorder_of_three() {
    let tree = tree_of(&[50, 30, 70]);
    let steps: Vec<_> = tree.record_steps(TraversalOrder::Preorder).iter().cloned().collect();
    assert_eq!(
        steps,
        [
            Step::Visit { value: 50, parent: None },
            Step::Visit { value: 30, parent: Some(50) },
            Step::Null { parent: Some(30) },
            Step::Null { parent: Some(30) },
            Step::Left { value: 50, edge_to: 30 },
            Step::Visit { value: 70, parent: Some(50) },
            Step::Null { parent: Some(70) },
            Step::Null { parent: Some(70) },
            Step::Right { value: 50, edge_to: 70 },
        ],
    );
}

#[test]
fn inorder_of_full_tree() {
    let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);
    let steps = tree.record_steps(TraversalOrder::Inorder);
    assert_eq!(steps.len(), 21);
    assert_eq!(steps.get(0), Some(&Step::Null { parent: Some(20) }));
    assert_eq!(
        steps.visits().copied().collect::<Vec<_>>(),
        [20, 30, 40, 50, 60, 70, 80],
    );
    assert_eq!(steps.last(), Some(&Step::Right { value: 50, edge_to: 70 }));
}

#[test]
fn descent_steps_are_only_recorded_for_present_children() {
    // 10 has only a right child.
    let tree = tree_of(&[10, 20]);
    let steps: Vec<_> = tree.record_steps(TraversalOrder::Inorder).iter().cloned().collect();
    assert_eq!(
        steps,
        [
            Step::Null { parent: Some(10) },
            Step::Visit { value: 10, parent: None },
            Step::Null { parent: Some(20) },
            Step::Visit { value: 20, parent: Some(10) },
            Step::Null { parent: Some(20) },
            Step::Right { value: 10, edge_to: 20 },
        ],
    );
}

#[test]
fn step_accessors() {
    let visit = Step::Visit { value: 3, parent: Some(5) };
    assert_eq!(visit.value(), Some(&3));
    assert_eq!(visit.phase(), Some(Phase::Visit));
    assert_eq!(visit.parent(), Some(&5));
    assert_eq!(visit.edge_to(), None);

    let left = Step::Left { value: 5, edge_to: 3 };
    assert_eq!(left.value(), Some(&5));
    assert_eq!(left.phase(), Some(Phase::Left));
    assert_eq!(left.edge_to(), Some(&3));
    assert_eq!(left.parent(), None);

    let null = Step::Null { parent: Some(3) };
    assert!(null.is_null());
    assert_eq!(null.value(), None);
    assert_eq!(null.phase(), None);
    assert_eq!(null.parent(), Some(&3));
}

#[test]
fn code_lines_follow_the_body_of_the_order() {
    let left = Step::Left { value: 2, edge_to: 1 };
    let right = Step::Right { value: 2, edge_to: 3 };
    let visit = Step::Visit { value: 2, parent: None };
    let lines = |order| {
        [
            visit.code_line(order),
            left.code_line(order),
            right.code_line(order),
        ]
    };
    assert_eq!(lines(TraversalOrder::Preorder), [4, 5, 6]);
    assert_eq!(lines(TraversalOrder::Inorder), [5, 4, 6]);
    assert_eq!(lines(TraversalOrder::Postorder), [6, 4, 5]);
    for order in TraversalOrder::ALL.iter().copied() {
        assert_eq!(Step::Null { parent: Some(2) }.code_line(order), 1);
    }
}

#[test]
fn alternative_storage() {
    let tree = tree_of(&[2, 1, 3]);
    let steps: StepSequence<i32, VecDeque<Step<i32>>> = tree.record_steps_in(TraversalOrder::Inorder);
    let in_vec = tree.record_steps(TraversalOrder::Inorder);
    assert!(steps.iter().eq(in_vec.iter()));
    assert_eq!(steps.iter().rev().next(), in_vec.last());
    assert_eq!(steps.storage().len(), 9);
}

proptest! {
    /// `n` visits, `n + 1` sentinels and `n - 1` descents, regardless of the order or the shape of the tree.
    #[test]
    fn prop_step_counts(keys in prop::collection::vec(any::<i32>(), 1..150)) {
        let tree: BinarySearchTree<_> = keys.iter().copied().collect();
        let n = tree.len();
        for order in TraversalOrder::ALL.iter().copied() {
            let steps = tree.record_steps(order);
            let nulls = steps.iter().filter(|step| step.is_null()).count();
            prop_assert_eq!(steps.len(), 3 * n);
            prop_assert_eq!(steps.visits().count(), n);
            prop_assert_eq!(nulls, n + 1);
            prop_assert_eq!(steps.visits().count() + nulls, 2 * n + 1);
        }
    }

    /// The visit steps of a recording are exactly the plain traversal, and every visit names the parent the tree reports.
    #[test]
    fn prop_visits_match_traversal(keys in prop::collection::vec(any::<i32>(), 0..150)) {
        let tree: BinarySearchTree<_> = keys.iter().copied().collect();
        for order in TraversalOrder::ALL.iter().copied() {
            let steps = tree.record_steps(order);
            prop_assert_eq!(steps.visits().copied().collect::<Vec<_>>(), tree.traverse(order));
            for step in &steps {
                if let Step::Visit { value, parent } = step {
                    prop_assert_eq!(parent.as_ref(), tree.parent_of(value));
                }
                if let Some(edge_to) = step.edge_to() {
                    prop_assert_eq!(tree.parent_of(edge_to), step.value());
                }
            }
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn steps_serialize_tagged_by_phase() {
    use serde_json::{from_value, json, to_value};

    let steps = tree_of(&[2, 1]).record_steps(TraversalOrder::Preorder);
    let serialized = steps.iter().map(|step| to_value(step).unwrap()).collect::<Vec<_>>();
    assert_eq!(
        serialized,
        [
            json!({ "phase": "visit", "value": 2, "parent": null }),
            json!({ "phase": "visit", "value": 1, "parent": 2 }),
            json!({ "phase": "null", "parent": 1 }),
            json!({ "phase": "null", "parent": 1 }),
            json!({ "phase": "left", "value": 2, "edge_to": 1 }),
            json!({ "phase": "null", "parent": 2 }),
        ],
    );
    for (step, value) in steps.iter().zip(serialized) {
        assert_eq!(&from_value::<Step<i32>>(value).unwrap(), step);
    }

    assert_eq!(to_value(Phase::Left).unwrap(), json!("left"));
    assert_eq!(to_value(TraversalOrder::Inorder).unwrap(), json!("inorder"));
    assert_eq!(from_value::<TraversalOrder>(json!("postorder")).unwrap(), TraversalOrder::Postorder);
}
