//! Assertion outcomes and aggregated test results.
//!
//! Assertions never abort a script: each one produces an outcome that is
//! recorded and the script carries on with its remaining checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum AssertionOutcome {
    /// The assertion held.
    Passed,
    /// The assertion failed, with a description of what was wrong.
    Failed(String),
}

impl AssertionOutcome {
    /// Builds an outcome from a predicate and a lazily built failure message.
    pub fn check(passed: bool, message: impl FnOnce() -> String) -> Self {
        if passed { Self::Passed } else { Self::Failed(message()) }
    }

    /// Returns true if the assertion held.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Passed => None,
            Self::Failed(message) => Some(message),
        }
    }
}

/// Result of running a single labelled assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionResult {
    /// Label shown in reports.
    pub label: String,
    /// Whether the assertion passed.
    pub passed: bool,
    /// Error message if failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AssertionResult {
    /// Creates a result from a label and an outcome.
    #[must_use]
    pub fn new(label: impl Into<String>, outcome: AssertionOutcome) -> Self {
        match outcome {
            AssertionOutcome::Passed => Self::pass(label),
            AssertionOutcome::Failed(error) => Self::fail(label, error),
        }
    }

    /// Create a passed result.
    #[must_use]
    pub fn pass(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            passed: true,
            error: None,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(label: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            passed: false,
            error: Some(error.into()),
        }
    }
}

/// Results collected over one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResults {
    /// Unique run identifier.
    pub id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Individual assertion results, in report order.
    pub results: Vec<AssertionResult>,
    /// Total number of assertions.
    pub total: usize,
    /// Number of passed assertions.
    pub passed: usize,
    /// Number of failed assertions.
    pub failed: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl TestResults {
    /// Create new test results.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, results: Vec<AssertionResult>, duration_ms: u64) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;

        Self {
            id: Uuid::now_v7(),
            started_at,
            results,
            total,
            passed,
            failed,
            duration_ms,
        }
    }

    /// Check if all tests passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Iterates over failed results.
    pub fn failures(&self) -> impl Iterator<Item = &AssertionResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Get pass rate as percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }
}
