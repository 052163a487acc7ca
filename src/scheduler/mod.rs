//! Driving playbacks on a timer.
//!
//! The [`Scheduler`] shares a [`Session`] behind an asynchronous mutex and, when asked to play a traversal, spawns a `tokio` task which ticks the session's playback at a fixed interval. The task skips ticks while the playback is paused, keeps a finished playback around for the configured linger delay and then clears it. Each driven replay is controlled through its [`PlaybackHandle`].
//!
//! Everything else on the session stays available while a replay is being driven: manual stepping and seeking can be done directly through [`Scheduler::session`] and simply pause the playback, which the task then leaves alone until it is resumed.
//!
//! [`Scheduler`]: struct.Scheduler.html " "
//! [`Session`]: ../session/struct.Session.html " "
//! [`PlaybackHandle`]: struct.PlaybackHandle.html " "
//! [`Scheduler::session`]: struct.Scheduler.html#method.session " "


use core::fmt::Debug;
use std::sync::Arc;
use tokio::{
    sync::{watch, Mutex},
    task::{JoinError, JoinHandle},
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info};
use crate::{
    config::PlaybackConfig,
    replay::{PlaybackStatus, Tick},
    session::Session,
    traversal::TraversalOrder,
    PlaybackActiveError,
};

/// How a driven replay ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackOutcome {
    /// Every step was applied.
    Completed,
    /// The replay was stopped before its last step was applied, either through its handle or by discarding the session's playback.
    Stopped,
}

/// Spawns timer-driven replays on a shared session.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct Scheduler<T> {
    session: Arc<Mutex<Session<T>>>,
    config: PlaybackConfig,
}
impl<T> Scheduler<T> {
    /// Creates a scheduler which takes ownership of the session.
    #[inline]
    pub fn new(session: Session<T>, config: PlaybackConfig) -> Self {
        Self::from_shared(Arc::new(Mutex::new(session)), config)
    }
    /// Creates a scheduler for a session which is already shared.
    #[inline]
    pub const fn from_shared(session: Arc<Mutex<Session<T>>>, config: PlaybackConfig) -> Self {
        Self { session, config }
    }
    /// Returns the shared session.
    #[inline(always)]
    pub const fn session(&self) -> &Arc<Mutex<Session<T>>> {
        &self.session
    }
    /// Returns the timing configuration.
    #[inline(always)]
    pub const fn config(&self) -> PlaybackConfig {
        self.config
    }
}
impl<T> Clone for Scheduler<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            config: self.config,
        }
    }
}
impl<T> Scheduler<T>
where
    T: Ord + Clone + Debug + Send + 'static,
{
    /// Starts a replay of a traversal in the given order and spawns the task driving it.
    ///
    /// The first step is applied right away, every following one a tick interval after the previous. Must be called from within a `tokio` runtime.
    ///
    /// # Errors
    /// Will fail if the session is already replaying a traversal.
    pub async fn play(&self, order: TraversalOrder) -> Result<PlaybackHandle<T>, PlaybackActiveError> {
        let (steps, id) = {
            let mut session = self.session.lock().await;
            let steps = session.start(order)?;
            (steps, session.replays_started())
        };
        let (cancel, cancelled) = watch::channel(false);
        let task = tokio::spawn(drive(Arc::clone(&self.session), id, self.config, cancelled));
        info!(%order, steps, id, tick_interval = ?self.config.tick_interval, "driving traversal replay");
        Ok(PlaybackHandle {
            session: Arc::clone(&self.session),
            id,
            cancel,
            task,
        })
    }
}

async fn drive<T>(
    session: Arc<Mutex<Session<T>>>,
    id: u64,
    config: PlaybackConfig,
    mut cancelled: watch::Receiver<bool>,
) -> PlaybackOutcome
where
    T: Ord + Clone + Debug + Send + 'static,
{
    let mut interval = time::interval(config.tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately, so the first step is applied right away.
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let mut session = session.lock().await;
                if session.playback_id() != Some(id) {
                    debug!(id, "playback was discarded or replaced, driver exiting");
                    return PlaybackOutcome::Stopped;
                }
                match session.tick() {
                    Some(Tick::Applied(_) | Tick::Paused) => {}
                    Some(Tick::Finished) => break,
                    None => return PlaybackOutcome::Stopped,
                }
            }
            // A dropped handle counts as a cancellation.
            _ = cancelled.changed() => {
                let mut session = session.lock().await;
                if session.playback_id() == Some(id) {
                    session.stop();
                }
                return PlaybackOutcome::Stopped;
            }
        }
    }
    tokio::select! {
        _ = time::sleep(config.linger) => {}
        _ = cancelled.changed() => {}
    }
    let mut session = session.lock().await;
    if session.playback_id() == Some(id) {
        session.clear_finished();
    }
    info!(id, "driven traversal replay completed");
    PlaybackOutcome::Completed
}

/// Controls a replay driven by a [`Scheduler`].
///
/// Dropping the handle stops the replay, same as calling [`stop`]. Once the session's playback has been discarded or replaced by another one, the handle no longer controls anything.
///
/// [`Scheduler`]: struct.Scheduler.html " "
/// [`stop`]: #method.stop " "
#[derive(Debug)]
pub struct PlaybackHandle<T> {
    session: Arc<Mutex<Session<T>>>,
    id: u64,
    cancel: watch::Sender<bool>,
    task: JoinHandle<PlaybackOutcome>,
}
impl<T> PlaybackHandle<T> {
    /// Pauses the replay. Returns the resulting status, or `None` if the playback has already been discarded.
    pub async fn pause(&self) -> Option<PlaybackStatus> {
        self.control(Session::pause).await
    }
    /// Resumes the replay. Returns the resulting status, or `None` if the playback has already been discarded.
    pub async fn resume(&self) -> Option<PlaybackStatus> {
        self.control(Session::resume).await
    }
    /// Pauses the replay if it is running, resumes it if it is paused.
    pub async fn toggle_pause(&self) -> Option<PlaybackStatus> {
        self.control(Session::toggle_pause).await
    }
    /// Returns the identifier of the driven playback, as reported by [`Session::playback_id`].
    ///
    /// [`Session::playback_id`]: ../session/struct.Session.html#method.playback_id " "
    #[inline(always)]
    pub const fn id(&self) -> u64 {
        self.id
    }
    async fn control(&self, f: fn(&mut Session<T>) -> Option<PlaybackStatus>) -> Option<PlaybackStatus> {
        let mut session = self.session.lock().await;
        if session.playback_id() == Some(self.id) {
            f(&mut *session)
        } else {
            None
        }
    }
    /// Asks the driving task to stop the replay and discard the session's playback. Use [`join`] to wait for it to happen.
    ///
    /// A replay which has already completed but is still lingering is cleared right away.
    ///
    /// [`join`]: #method.join " "
    #[inline]
    pub fn stop(&self) {
        // Fails only if the task has already exited.
        let _ = self.cancel.send(true);
    }
    /// Returns `true` if the driving task has exited.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
    /// Waits for the driving task to exit, which happens after the linger delay if the replay runs to completion.
    ///
    /// # Errors
    /// Will fail if the task panicked or the runtime was shut down.
    pub async fn join(self) -> Result<PlaybackOutcome, JoinError> {
        // The sender has to outlive the task, since dropping it cancels the replay.
        let Self {
            cancel: _cancel,
            task,
            ..
        } = self;
        task.await
    }
}
