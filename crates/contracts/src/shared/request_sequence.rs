//! Generation tokens for "latest request wins".
//!
//! A debounced search may still have an older request in flight when a newer
//! one is issued. Each request takes a ticket; only the ticket issued last
//! is current, so a stale response can be recognised and dropped even if the
//! abort signal arrived too late.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding all earlier ones.
    pub fn next(&self) -> RequestTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            id,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Supersede every outstanding ticket without issuing a new one.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_ticket_is_current() {
        let seq = RequestSequence::new();
        let first = seq.next();
        assert!(first.is_current());

        let second = seq.next();
        assert!(!first.is_current());
        assert!(second.is_current());

        seq.invalidate();
        assert!(!second.is_current());
    }

    #[test]
    fn clones_share_the_sequence() {
        let seq = RequestSequence::new();
        let other = seq.clone();
        let ticket = seq.next();
        other.next();
        assert!(!ticket.is_current());
    }
}
