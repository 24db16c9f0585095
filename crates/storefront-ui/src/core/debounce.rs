//! Single-slot cancellable delayed task.
//!
//! # Design
//! - At most one task is in flight; arming a new one drops the previous
//!   handle, which cancels it (`gloo_timers::callback::Timeout` clears itself
//!   on drop).
//! - Each arming gets a ticket. A firing timer must [`Debouncer::fire`] its
//!   ticket and only proceeds when it is still the live one, so a late timer
//!   can never apply an outdated value.
//! - The spent handle is kept until the next arming; dropping a timer from
//!   inside its own callback is avoided.

/// Cancellable delayed task holder, generic over the timer handle type.
#[derive(Debug)]
pub struct Debouncer<H> {
    handle: Option<H>,
    next_ticket: u64,
    live: Option<u64>,
}

impl<H> Default for Debouncer<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Debouncer<H> {
    /// Create an idle debouncer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handle: None,
            next_ticket: 0,
            live: None,
        }
    }

    /// Cancel any pending task and arm a new one built by `arm`.
    ///
    /// `arm` receives the ticket the task must present to [`Self::fire`].
    pub fn schedule(&mut self, arm: impl FnOnce(u64) -> H) -> u64 {
        self.handle = None;
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.handle = Some(arm(ticket));
        self.live = Some(ticket);
        ticket
    }

    /// Claim the right to run for `ticket`. Returns `false` for stale tickets.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if self.live == Some(ticket) {
            self.live = None;
            true
        } else {
            false
        }
    }

    /// Cancel the pending task, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.handle = None;
        self.live.take().is_some()
    }

    /// Whether a task is armed and has not fired yet.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.live.is_some()
    }
}
