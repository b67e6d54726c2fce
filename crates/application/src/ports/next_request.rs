//! Host runner scheduling port

use ptf_domain::NextRequest;

/// Tells the host runner which step to execute after the current one.
pub trait NextRequestScheduler {
    /// Records the instruction for the host. A later call replaces an earlier one.
    fn schedule(&mut self, next: NextRequest);
}
