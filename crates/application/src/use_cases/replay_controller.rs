//! Replay controller use case
//!
//! Drives a request step to be re-run a bounded number of times. The
//! remaining counts are kept in the globals store and written back after
//! every trigger, since the host rebuilds the script between invocations.

use ptf_domain::{NextRequest, REPLAY_STATE_KEY, ReplayKey, ReplayState, ReplayTransition};

use crate::ports::{KeyValueStore, NextRequestScheduler};
use crate::{ApplicationError, ApplicationResult};

/// Decides whether the current step repeats and tells the host runner.
pub struct ReplayController<'a, S: ?Sized, N: ?Sized> {
    store: &'a mut S,
    scheduler: &'a mut N,
}

impl<'a, S, N> ReplayController<'a, S, N>
where
    S: KeyValueStore + ?Sized,
    N: NextRequestScheduler + ?Sized,
{
    /// Creates a controller over the run's store and the host scheduler.
    pub const fn new(store: &'a mut S, scheduler: &'a mut N) -> Self {
        Self { store, scheduler }
    }

    /// Triggers a replay of `target`, keyed by the slug of `endpoint_name`.
    ///
    /// The first call for an endpoint arms `times` replays. Every later call
    /// consumes one; when none remain the key is dropped and the runner is
    /// told to proceed normally.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::StateCorruption` if the stored replay state
    /// is not valid. Nothing is written or scheduled in that case.
    pub fn trigger_replay(
        &mut self,
        target: &str,
        times: u32,
        endpoint_name: &str,
    ) -> ApplicationResult<NextRequest> {
        self.trigger_replay_keyed(target, times, &ReplayKey::from_endpoint_name(endpoint_name))
    }

    /// Same as [`Self::trigger_replay`] with a caller-chosen key.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::StateCorruption` if the stored replay state
    /// is not valid.
    pub fn trigger_replay_keyed(
        &mut self,
        target: &str,
        times: u32,
        key: &ReplayKey,
    ) -> ApplicationResult<NextRequest> {
        let mut state = self.load_state()?;

        if times == 0 && !state.contains(key) {
            tracing::warn!(%key, "replay requested zero times, arming a single replay");
        }

        let transition = state.advance(key, times);
        match transition {
            ReplayTransition::Started { remaining } => {
                tracing::info!(%key, step = target, remaining, "trigger - first time");
            }
            ReplayTransition::Repeating { remaining } => {
                tracing::info!(%key, step = target, remaining, "trigger again");
            }
            ReplayTransition::Finished => {
                tracing::info!(%key, step = target, "deleting the record");
            }
        }

        let encoded = state
            .to_json()
            .map_err(|e| ApplicationError::Serialization(e.to_string()))?;
        self.store.set(REPLAY_STATE_KEY, encoded);

        let next = transition.next_request(target);
        self.scheduler.schedule(next.clone());
        Ok(next)
    }

    /// Returns the replays still owed for `key` without changing anything.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::StateCorruption` if the stored replay state
    /// is not valid.
    pub fn remaining(&self, key: &ReplayKey) -> ApplicationResult<Option<u32>> {
        Ok(self.load_state()?.remaining(key))
    }

    fn load_state(&self) -> ApplicationResult<ReplayState> {
        let Some(raw) = self.store.get(REPLAY_STATE_KEY) else {
            return Ok(ReplayState::new());
        };

        ReplayState::from_json(&raw).map_err(|e| ApplicationError::StateCorruption {
            key: REPLAY_STATE_KEY.to_string(),
            reason: e.to_string(),
        })
    }
}
