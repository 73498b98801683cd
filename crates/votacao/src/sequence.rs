//! Request sequencing for overlapping fetches.
//!
//! Requests cannot be cancelled once issued, so a slow response could land after
//! a newer one and overwrite fresher state. Each fetch takes a [`Ticket`] first
//! and only applies its result if no newer ticket was handed out meanwhile.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Cheap to clone; clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct FetchSequence {
    latest: Rc<Cell<u64>>,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier one.
    pub fn next(&self) -> Ticket {
        let ticket = self.latest.get().wrapping_add(1);
        self.latest.set(ticket);
        Ticket(ticket)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Hands `value` back only if `ticket` is still the latest one.
    pub fn settle<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        self.is_latest(ticket).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let seq = FetchSequence::new();
        let first = seq.next();
        assert!(seq.is_latest(first));

        let second = seq.next();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    #[test]
    fn test_settle_drops_superseded_value() {
        let seq = FetchSequence::new();
        let slow = seq.next();
        let fast = seq.next();

        assert_eq!(seq.settle(fast, "novo"), Some("novo"));
        assert_eq!(seq.settle(slow, "antigo"), None);
    }

    #[test]
    fn test_clones_share_state() {
        let seq = FetchSequence::new();
        let handle = seq.clone();
        let first = seq.next();
        handle.next();
        assert!(!seq.is_latest(first));
    }
}
