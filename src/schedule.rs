//! Single-pending delayed revert bookkeeping.
//!
//! A controller that shows transient UI arms a [`RevertSlot`] and hands the
//! returned [`RevertTicket`] to a host timer. When the timer fires, the slot
//! only honors the ticket if nothing newer was armed since, so an overlapping
//! submission never gets reverted by an older timer.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Identifies one armed revert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertTicket(u64);

#[derive(Clone, Copy, Debug)]
struct Pending {
    ticket: RevertTicket,
    due_ms: f64,
}

/// Holds at most one pending revert.
#[derive(Debug, Default)]
pub struct RevertSlot {
    generation: u64,
    pending: Option<Pending>,
}

impl RevertSlot {
    /// Arm a revert `delay_ms` after `now_ms`, superseding any pending one.
    pub fn arm(&mut self, now_ms: f64, delay_ms: u32) -> RevertTicket {
        self.generation += 1;
        let ticket = RevertTicket(self.generation);
        self.pending = Some(Pending { ticket, due_ms: now_ms + f64::from(delay_ms) });
        ticket
    }

    /// Consume the pending revert if `ticket` is still the live one.
    pub fn fire(&mut self, ticket: RevertTicket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Timestamp at which the pending revert is due.
    #[must_use]
    pub fn due_ms(&self) -> Option<f64> {
        self.pending.map(|pending| pending.due_ms)
    }
}
