//! Assertion reporting port

use ptf_domain::{AssertionOutcome, AssertionResult};

/// Receives assertion outcomes without interrupting the caller.
pub trait Reporter {
    /// Records the outcome of the assertion named `label`.
    fn report(&mut self, label: &str, outcome: AssertionOutcome);
}

impl Reporter for Vec<AssertionResult> {
    fn report(&mut self, label: &str, outcome: AssertionOutcome) {
        self.push(AssertionResult::new(label, outcome));
    }
}
