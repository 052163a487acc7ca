use super::*;
use crate::{BinarySearchTree, TraversalOrder};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn playback_of(keys: &[i32], order: TraversalOrder) -> Playback<i32> {
    let tree: BinarySearchTree<_> = keys.iter().copied().collect();
    Playback::new(tree.record_steps(order))
}

#[test]
fn runs_to_completion() {
    let mut playback = playback_of(&[50, 30, 70], TraversalOrder::Preorder);
    assert_eq!(playback.state(), None);
    for index in 0..9 {
        assert_eq!(playback.tick(), Tick::Applied(index));
        assert_eq!(playback.status(), PlaybackStatus::Running);
    }
    assert!(playback.is_active());
    assert_eq!(playback.tick(), Tick::Finished);
    assert_eq!(playback.status(), PlaybackStatus::Finished);
    assert!(!playback.is_active());
    assert_eq!(playback.tick(), Tick::Finished);
    assert_eq!(playback.position(), Some(8));
}

#[test]
fn pause_and_resume() {
    let mut playback = playback_of(&[50, 30, 70], TraversalOrder::Inorder);
    playback.tick();
    playback.tick();
    playback.pause();
    for _ in 0..3 {
        assert_eq!(playback.tick(), Tick::Paused);
    }
    assert_eq!(playback.position(), Some(1));
    assert_eq!(playback.toggle_pause(), PlaybackStatus::Running);
    assert_eq!(playback.tick(), Tick::Applied(2));
    assert_eq!(playback.toggle_pause(), PlaybackStatus::Paused);
    playback.resume();
    assert_eq!(playback.status(), PlaybackStatus::Running);
}

#[test]
fn manual_stepping_pauses() {
    let mut playback = playback_of(&[2, 1, 3], TraversalOrder::Inorder);
    assert_eq!(playback.step_backward(), None);
    assert_eq!(playback.status(), PlaybackStatus::Running);
    assert_eq!(playback.step_forward(), Some(0));
    assert_eq!(playback.status(), PlaybackStatus::Paused);
    assert_eq!(playback.step_backward(), None);
    assert_eq!(playback.step_forward(), Some(1));
    assert_eq!(playback.step_backward(), Some(0));
    assert!(playback.seek(8));
    assert_eq!(playback.step_forward(), None);
    assert_eq!(playback.position(), Some(8));
    assert!(!playback.seek(9));
    assert_eq!(playback.position(), Some(8));
}

#[test]
fn finished_playback_can_be_rewound() {
    let mut playback = playback_of(&[1], TraversalOrder::Preorder);
    while playback.tick() != Tick::Finished {}
    assert_eq!(playback.step_backward(), Some(1));
    assert_eq!(playback.status(), PlaybackStatus::Paused);
    playback.resume();
    assert_eq!(playback.tick(), Tick::Applied(2));
}

#[test]
fn derived_state() {
    // Inorder of 2, 1, 3:
    // 0 null(1), 1 visit 1, 2 null(1), 3 left 2->1, 4 visit 2, 5 null(3), 6 visit 3, 7 null(3), 8 right 2->3
    let playback = playback_of(&[2, 1, 3], TraversalOrder::Inorder);

    let first = playback.state_at(0).unwrap();
    assert_eq!(first.step, Step::Null { parent: Some(1) });
    assert_eq!(first.current, None);
    assert_eq!(first.edge, None);
    assert_eq!(first.code_line, 1);
    assert!(first.visited.is_empty());

    let visit = playback.state_at(1).unwrap();
    assert_eq!(visit.current, Some(1));
    assert_eq!(visit.edge, Some(Edge { from: 2, to: 1 }));
    assert_eq!(visit.code_line, 5);
    assert_eq!(visit.visited, [1]);

    // A null sentinel keeps the previous node current.
    let null = playback.state_at(2).unwrap();
    assert_eq!(null.current, Some(1));
    assert_eq!(null.edge, None);

    let left = playback.state_at(3).unwrap();
    assert_eq!(left.current, Some(2));
    assert_eq!(left.edge, Some(Edge { from: 2, to: 1 }));
    assert_eq!(left.code_line, 4);

    let root = playback.state_at(4).unwrap();
    assert_eq!(root.edge, None);
    assert_eq!(root.visited, [1, 2]);

    let last = playback.state_at(8).unwrap();
    assert_eq!(last.edge, Some(Edge { from: 2, to: 3 }));
    assert_eq!(last.code_line, 6);
    assert_eq!(last.visited, [1, 2, 3]);

    assert_eq!(playback.state_at(9), None);
    // Deriving states never moves the cursor.
    assert_eq!(playback.position(), None);
}

proptest! {
    /// Seeking straight to an index gives the same state as stepping up to it one step at a time, and as stepping back down to it.
    #[test]
    fn prop_seek_matches_sequential_stepping(
        keys in prop::collection::vec(any::<i8>(), 0..40),
        target in any::<prop::sample::Index>(),
        order in prop::sample::select(TraversalOrder::ALL.to_vec()),
    ) {
        let tree: BinarySearchTree<_> = keys.iter().copied().collect();
        let steps = tree.record_steps(order);
        let target = target.index(steps.len());

        let mut sequential = Playback::new(steps.clone());
        while sequential.position() != Some(target) {
            prop_assert!(matches!(sequential.tick(), Tick::Applied(_)));
        }
        let mut seeking = Playback::new(steps.clone());
        prop_assert!(seeking.seek(target));
        prop_assert_eq!(sequential.state(), seeking.state());

        let mut rewinding = Playback::new(steps);
        prop_assert!(rewinding.seek(rewinding.steps().len() - 1));
        while rewinding.position() != Some(target) {
            prop_assert!(rewinding.step_backward().is_some());
        }
        prop_assert_eq!(rewinding.state(), seeking.state());
    }
}
