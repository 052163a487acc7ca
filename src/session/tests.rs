use super::*;
use pretty_assertions::assert_eq;

fn finish(session: &mut Session<i32>) {
    while session.tick() != Some(Tick::Finished) {}
}

#[test]
fn default_tree() {
    let session = Session::<i32>::with_default_tree();
    assert_eq!(
        session.traverse(TraversalOrder::Preorder),
        [50, 30, 20, 10, 25, 40, 35, 70, 60, 65, 80],
    );
    assert_eq!(session.structure().map(|root| *root.value()), Some(50));
    assert!(!session.is_replaying());
    assert_eq!(session.status(), None);
}

#[test]
fn mutation_is_rejected_while_replaying() {
    let mut session = Session::<i32>::with_default_tree();
    session.start(TraversalOrder::Inorder).unwrap();
    assert!(session.is_replaying());
    assert_eq!(session.insert(1), Err(InsertError::PlaybackActive { value: 1 }));
    assert_eq!(session.remove(&50), Err(PlaybackActiveError));
    assert_eq!(session.start(TraversalOrder::Preorder), Err(PlaybackActiveError));

    // Pausing does not unlock the tree.
    session.pause();
    assert_eq!(session.insert(1), Err(InsertError::PlaybackActive { value: 1 }));
    assert_eq!(session.tree().len(), 11);
    // Plain traversals are still fine.
    assert_eq!(session.traverse(TraversalOrder::Inorder).len(), 11);
}

#[test]
fn duplicate_insert_is_reported() {
    let mut session = Session::<i32>::with_default_tree();
    assert_eq!(session.insert(40), Err(InsertError::Duplicate { value: 40 }));
    assert_eq!(session.insert(41), Ok(()));
    assert_eq!(session.remove(&41), Ok(true));
    assert_eq!(session.remove(&41), Ok(false));
}

#[test]
fn finished_replay_does_not_block() {
    let mut session = Session::<i32>::with_default_tree();
    session.start(TraversalOrder::Postorder).unwrap();
    finish(&mut session);
    assert!(!session.is_replaying());
    assert_eq!(session.status(), Some(PlaybackStatus::Finished));
    assert_eq!(session.state().map(|state| state.visited.len()), Some(11));

    // A failed mutation leaves the finished playback around...
    assert!(session.insert(50).is_err());
    assert!(session.playback().is_some());
    // ...while a successful one discards it.
    session.insert(90).unwrap();
    assert!(session.playback().is_none());

    session.start(TraversalOrder::Postorder).unwrap();
    finish(&mut session);
    // Starting again replaces a finished playback.
    assert_eq!(session.start(TraversalOrder::Inorder), Ok(36));
    assert_eq!(session.status(), Some(PlaybackStatus::Running));
}

#[test]
fn stop_discards_everything() {
    let mut session = Session::<i32>::with_default_tree();
    session.start(TraversalOrder::Preorder).unwrap();
    session.tick();
    session.tick();
    assert!(session.state().is_some());
    assert!(session.stop());
    assert!(session.playback().is_none());
    assert!(session.state().is_none());
    assert_eq!(session.tick(), None);
    assert!(!session.stop());
    assert!(session.insert(1).is_ok());
}

#[test]
fn clear_finished_only_clears_finished() {
    let mut session = Session::<i32>::with_default_tree();
    assert!(!session.clear_finished());
    session.start(TraversalOrder::Inorder).unwrap();
    assert!(!session.clear_finished());
    session.pause();
    assert!(!session.clear_finished());
    session.resume();
    finish(&mut session);
    assert!(session.clear_finished());
    assert!(session.playback().is_none());
}

#[test]
fn controls_are_delegated() {
    let mut session = Session::<i32>::from_tree([2, 1, 3].iter().copied().collect());
    assert_eq!(session.step_forward(), None);
    assert!(!session.seek(0));
    session.start(TraversalOrder::Preorder).unwrap();
    assert_eq!(session.step_forward(), Some(0));
    assert_eq!(session.status(), Some(PlaybackStatus::Paused));
    assert_eq!(session.tick(), Some(Tick::Paused));
    assert_eq!(session.toggle_pause(), Some(PlaybackStatus::Running));
    assert_eq!(session.tick(), Some(Tick::Applied(1)));
    assert_eq!(session.step_backward(), Some(0));
    assert!(session.seek(8));
    assert_eq!(session.state().map(|state| state.visited), Some(vec![2, 1, 3]));
    assert_eq!(session.resume(), Some(PlaybackStatus::Running));
    assert_eq!(session.tick(), Some(Tick::Finished));
}

#[test]
fn every_start_gets_a_new_playback_id() {
    let mut session = Session::<i32>::from_tree([2, 1, 3].iter().copied().collect());
    assert_eq!(session.playback_id(), None);
    assert_eq!(session.replays_started(), 0);

    session.start(TraversalOrder::Inorder).unwrap();
    let first = session.playback_id();
    assert_eq!(first, Some(1));
    session.stop();
    assert_eq!(session.playback_id(), None);

    session.start(TraversalOrder::Inorder).unwrap();
    assert_eq!(session.playback_id(), Some(2));
    assert_ne!(session.playback_id(), first);
    finish(&mut session);
    // A finished playback keeps its id until it is cleared.
    assert_eq!(session.playback_id(), Some(2));
    session.clear_finished();
    assert_eq!(session.playback_id(), None);
    assert_eq!(session.replays_started(), 2);
}

#[test]
fn key_parsing() {
    assert_eq!(parse_key::<i64>("-12"), Ok(-12));
    assert_eq!(parse_key::<u32>("\t7\n"), Ok(7));
    assert_eq!(
        parse_key::<u32>("7.5"),
        Err(InvalidInputError {
            input: "7.5".to_owned(),
        }),
    );
    assert_eq!(
        parse_key::<u32>("   "),
        Err(InvalidInputError {
            input: "   ".to_owned(),
        }),
    );
}
