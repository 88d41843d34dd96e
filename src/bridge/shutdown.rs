//! Cooperative termination. Every task polls the shared flag each time it
//! wakes from a bounded wait, so the worst-case stop latency of any task is
//! one timeout period.
use core::sync::atomic::{AtomicBool, Ordering};

use crate::bridge::traits::timer::BridgeTimer;
use crate::bridge::SHUTDOWN_POLL_MS;

/// Shared stop flag. Constructed once before any task starts; `request` is
/// sticky and never cleared.
pub struct Shutdown {
    requested: AtomicBool,
}

impl Shutdown {
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Ask every task to finish its current cycle and exit.
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleep `total_ms`, in slices of at most [`SHUTDOWN_POLL_MS`], returning
/// early once shutdown is requested. Long periodic tasks (heartbeat,
/// liveness) use this so their stop latency stays within one slice instead
/// of one full period.
pub async fn sleep_cooperatively<T: BridgeTimer>(timer: &mut T, shutdown: &Shutdown, total_ms: u32) {
    let mut remaining = total_ms;
    while remaining > 0 && !shutdown.is_requested() {
        let slice = remaining.min(SHUTDOWN_POLL_MS);
        timer.delay_ms(slice).await;
        remaining -= slice;
    }
}
