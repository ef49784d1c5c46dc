//! Guard against the stale-response race: a caller that re-issues a request
//! before the previous one resolves (or abandons it) must never see the old
//! result overwrite the new one. Every request takes a ticket from a
//! monotonically increasing sequence; results commit only while their
//! ticket is still the newest.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next ticket, superseding every earlier one.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket {
            generation: self.issued.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Whether no newer request has been issued since this ticket.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.issued.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

/// Holder for the newest committed result. Commits are monotonic in ticket
/// generation, so responses arriving out of order are discarded rather than
/// applied.
#[derive(Debug, Default)]
pub struct Latest<T> {
    slot: Mutex<(u64, Option<T>)>,
}

impl<T> Latest<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new((0, None)),
        }
    }

    /// Stores `value` unless a result from a newer ticket was already
    /// committed. Returns whether the value was applied.
    pub fn commit(&self, ticket: &RequestTicket, value: T) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        if ticket.generation <= slot.0 {
            return false;
        }
        *slot = (ticket.generation, Some(value));
        true
    }

    pub fn snapshot(&self) -> Option<T>
    where
        T: Clone,
    {
        self.slot
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .1
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_monotonic() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        let second = sequence.begin();

        assert!(!sequence.is_current(&first));
        assert!(sequence.is_current(&second));
    }

    #[test]
    fn stale_response_is_discarded() {
        let sequence = RequestSequence::new();
        let latest = Latest::new();

        let page_one = sequence.begin();
        let page_two = sequence.begin();

        // The newer request resolves first; the older response then arrives
        // late and must not overwrite it.
        assert!(latest.commit(&page_two, "page 2"));
        assert!(!latest.commit(&page_one, "page 1"));

        assert_eq!(latest.snapshot(), Some("page 2"));
    }

    #[test]
    fn in_order_responses_apply_normally() {
        let sequence = RequestSequence::new();
        let latest = Latest::new();

        let first = sequence.begin();
        assert!(latest.commit(&first, 1));

        let second = sequence.begin();
        assert!(!sequence.is_current(&first));
        assert!(latest.commit(&second, 2));

        assert_eq!(latest.snapshot(), Some(2));
    }

    #[test]
    fn abandoned_request_never_commits() {
        let sequence = RequestSequence::new();
        let latest: Latest<&str> = Latest::new();

        let abandoned = sequence.begin();
        let _superseding = sequence.begin();

        if sequence.is_current(&abandoned) {
            latest.commit(&abandoned, "stale");
        }

        assert_eq!(latest.snapshot(), None);
    }
}
