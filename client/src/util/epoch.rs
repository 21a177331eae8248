//! Discard-on-resolve guard for in-flight requests.
//!
//! Reads are not cancellable. A page takes a ticket before issuing one and
//! checks it when the response arrives: a newer request, a route-parameter
//! change, or unmounting makes older tickets stale so their results are
//! dropped instead of written into state that no longer applies.

#[cfg(test)]
#[path = "epoch_test.rs"]
mod epoch_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Clone, Debug)]
pub struct RequestEpoch {
    generation: Arc<AtomicU64>,
    live: Arc<AtomicBool>,
}

impl Default for RequestEpoch {
    fn default() -> Self {
        Self { generation: Arc::new(AtomicU64::new(0)), live: Arc::new(AtomicBool::new(true)) }
    }
}

impl RequestEpoch {
    /// Start a request, superseding every earlier ticket.
    #[must_use]
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `ticket` is the latest request and the owner is still mounted.
    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.is_live() && self.generation.load(Ordering::Relaxed) == ticket
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }

    /// Owner unmounted; every outstanding ticket becomes stale.
    pub fn close(&self) {
        self.live.store(false, Ordering::Relaxed);
        self.generation.fetch_add(1, Ordering::Relaxed);
    }
}
