//! Reporter that collects outcomes into [`TestResults`] and logs each one.

use std::time::Instant;

use chrono::{DateTime, Utc};
use ptf_application::{Clock, Reporter};
use ptf_domain::{AssertionOutcome, AssertionResult, TestResults};

use crate::adapters::SystemClock;

/// Collects every reported assertion for one validation run.
#[derive(Debug)]
pub struct CollectingReporter {
    started_at: DateTime<Utc>,
    started: Instant,
    results: Vec<AssertionResult>,
}

impl CollectingReporter {
    /// Starts a new run stamped with the current time of `clock`.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self {
            started_at: clock.now(),
            started: Instant::now(),
            results: Vec::new(),
        }
    }

    /// Results reported so far.
    #[must_use]
    pub fn results(&self) -> &[AssertionResult] {
        &self.results
    }

    /// Ends the run and aggregates its results.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn finish(self) -> TestResults {
        let duration_ms = self.started.elapsed().as_millis() as u64;
        let results = TestResults::new(self.started_at, self.results, duration_ms);
        tracing::info!(
            run = %results.id,
            total = results.total,
            passed = results.passed,
            failed = results.failed,
            "validation finished"
        );
        results
    }
}

impl Default for CollectingReporter {
    fn default() -> Self {
        Self::new(&SystemClock)
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, label: &str, outcome: AssertionOutcome) {
        match outcome.message() {
            None => tracing::debug!(label, "passed"),
            Some(message) => tracing::warn!(label, message, "failed"),
        }
        self.results.push(AssertionResult::new(label, outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_collects_in_order() {
        let mut reporter = CollectingReporter::new(&SystemClock::new());
        reporter.report("Users: Success", AssertionOutcome::Passed);
        reporter.report(
            "Users: Basic Structure",
            AssertionOutcome::Failed("Response missing users".to_string()),
        );

        assert_eq!(reporter.results().len(), 2);

        let results = reporter.finish();
        assert_eq!(results.total, 2);
        assert_eq!(results.failed, 1);
        assert_eq!(results.results[0].label, "Users: Success");
        assert_eq!(
            results.failures().next().and_then(|r| r.error.as_deref()),
            Some("Response missing users")
        );
    }

    #[test]
    fn test_run_is_stamped_by_clock() {
        let start = Utc
            .with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        let mut reporter = CollectingReporter::new(&FixedClock(start));
        reporter.report("Users: Success", AssertionOutcome::Passed);

        let results = reporter.finish();
        assert_eq!(results.started_at, start);
        assert_eq!(results.total, 1);
    }

    #[test]
    fn test_empty_run_passes() {
        assert!(CollectingReporter::default().finish().all_passed());
    }
}
