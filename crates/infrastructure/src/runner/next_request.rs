//! In-process stand-in for the host runner's "next request" setting.

use ptf_application::NextRequestScheduler;
use ptf_domain::NextRequest;

/// Holds the last scheduling instruction until the host reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NextRequestSlot {
    next: Option<NextRequest>,
}

impl NextRequestSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: None }
    }

    /// The pending instruction, if any was scheduled.
    #[must_use]
    pub const fn peek(&self) -> Option<&NextRequest> {
        self.next.as_ref()
    }

    /// Takes the pending instruction, leaving the slot empty.
    pub const fn take(&mut self) -> Option<NextRequest> {
        self.next.take()
    }
}

impl NextRequestScheduler for NextRequestSlot {
    fn schedule(&mut self, next: NextRequest) {
        tracing::debug!(next = %next, "next request scheduled");
        self.next = Some(next);
    }
}
