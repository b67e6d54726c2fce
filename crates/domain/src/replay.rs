//! Replay bookkeeping for re-running a request step a bounded number of times.
//!
//! The state is a map from replay key to the number of replays still owed.
//! It lives in the globals store as a single JSON object so that it survives
//! the host re-initialising the script between invocations.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::slugify;

/// Globals key holding the serialized [`ReplayState`].
pub const REPLAY_STATE_KEY: &str = "set_next_request";

/// Key identifying one replayed endpoint inside [`ReplayState`].
///
/// Keys derived from display names can collide when two names slugify to the
/// same text; callers that test such endpoints should use [`ReplayKey::explicit`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplayKey(String);

impl ReplayKey {
    /// Derives the key from an endpoint display name.
    #[must_use]
    pub fn from_endpoint_name(name: &str) -> Self {
        Self(slugify(name))
    }

    /// Uses a caller-chosen identifier verbatim.
    #[must_use]
    pub fn explicit(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReplayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Instruction handed to the host runner after a replay decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextRequest {
    /// Run the named step next.
    Step(String),
    /// Clear any override and continue with the natural next step.
    Proceed,
}

impl fmt::Display for NextRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(target) => write!(f, "{target}"),
            Self::Proceed => f.write_str("proceed"),
        }
    }
}

/// Outcome of advancing one key of the replay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayTransition {
    /// First trigger for the key; `remaining` replays were armed.
    Started {
        /// Replays still owed after this call.
        remaining: u32,
    },
    /// A later trigger that still owes replays.
    Repeating {
        /// Replays still owed after this call.
        remaining: u32,
    },
    /// The count reached zero and the key was removed.
    Finished,
}

impl ReplayTransition {
    /// Maps the transition to the runner instruction for `target`.
    #[must_use]
    pub fn next_request(self, target: &str) -> NextRequest {
        match self {
            Self::Started { .. } | Self::Repeating { .. } => NextRequest::Step(target.to_string()),
            Self::Finished => NextRequest::Proceed,
        }
    }
}

/// Remaining replay counts keyed by [`ReplayKey`].
///
/// Every stored count is at least 1; keys are removed instead of reaching 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplayState {
    remaining: BTreeMap<String, u32>,
}

impl ReplayState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of non-negative integers.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes to the compact persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Returns the replays still owed for `key`, if tracked.
    #[must_use]
    pub fn remaining(&self, key: &ReplayKey) -> Option<u32> {
        self.remaining.get(key.as_str()).copied()
    }

    /// Returns true if `key` is tracked.
    #[must_use]
    pub fn contains(&self, key: &ReplayKey) -> bool {
        self.remaining.contains_key(key.as_str())
    }

    /// Returns true if no key is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Returns the number of tracked keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Advances `key` by one trigger.
    ///
    /// An untracked key starts at `desired_times` (at least 1). A tracked key
    /// is decremented and removed once it reaches zero.
    pub fn advance(&mut self, key: &ReplayKey, desired_times: u32) -> ReplayTransition {
        if let Some(count) = self.remaining.get_mut(key.as_str()) {
            *count = count.saturating_sub(1);
            if *count > 0 {
                return ReplayTransition::Repeating { remaining: *count };
            }
            self.remaining.remove(key.as_str());
            return ReplayTransition::Finished;
        }

        let remaining = desired_times.max(1);
        self.remaining.insert(key.as_str().to_string(), remaining);
        ReplayTransition::Started { remaining }
    }
}
