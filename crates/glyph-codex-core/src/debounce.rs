//! Debounce primitive — supersession by generation counter.
//!
//! Rapid successive inputs each schedule a dependent computation, but only
//! the last input inside the quiet window may run it: a new input supersedes
//! every pending cycle, which is discarded entirely rather than merged. The
//! timer lives in the async layer; this type only answers "is this cycle
//! still the latest?", so the policy is testable without time.

use std::sync::atomic::{AtomicU64, Ordering};

/// Token identifying one scheduled filter cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter shared between the input source and the scheduled
/// cycles it spawns.
#[derive(Debug, Default)]
pub struct DebounceGate {
    generation: AtomicU64,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new input, superseding every previously issued ticket.
    pub fn issue(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True iff no newer input has arrived since `ticket` was issued.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_is_current() {
        let gate = DebounceGate::new();
        let ticket = gate.issue();
        assert!(gate.is_current(ticket));
    }

    #[test]
    fn newer_input_supersedes_pending_tickets() {
        let gate = DebounceGate::new();
        let first = gate.issue();
        let second = gate.issue();
        let third = gate.issue();
        assert!(!gate.is_current(first));
        assert!(!gate.is_current(second));
        assert!(gate.is_current(third));
    }

    #[test]
    fn only_last_of_a_burst_survives() {
        let gate = DebounceGate::new();
        let tickets: Vec<Ticket> = (0..10).map(|_| gate.issue()).collect();
        let current: Vec<&Ticket> = tickets.iter().filter(|t| gate.is_current(**t)).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(*current[0], tickets[9]);
    }
}
