//! Receive-activity indicator task. It watches a coalescing single-slot
//! signal rather than the frame queue, so the LED reacts to bus traffic even
//! when formatting or the host link is slow.
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::bridge::shutdown::Shutdown;
use crate::bridge::traits::{indicator::Indicator, timer::BridgeTimer};
use crate::bridge::{ACTIVITY_PULSE_MS, SIGNAL_TIMEOUT_MS};
use crate::infra::deadline::within;

/// Single-bit "a frame arrived" wake-up. Deliberately a [`Signal`] and not a
/// counting semaphore or channel: bursts that land before the notifier runs
/// collapse into one pending wake, which is exactly the coarse liveness
/// semantics the indicator needs.
pub type ActivitySignal = Signal<CriticalSectionRawMutex, ()>;

/// Task pulsing the activity indicator on received traffic.
pub struct ActivityNotifier<'a, L, T>
where
    L: Indicator,
    T: BridgeTimer,
{
    led: L,
    timer: T,
    activity: &'a ActivitySignal,
    shutdown: &'a Shutdown,
}

impl<'a, L, T> ActivityNotifier<'a, L, T>
where
    L: Indicator,
    T: BridgeTimer,
{
    pub fn new(led: L, timer: T, activity: &'a ActivitySignal, shutdown: &'a Shutdown) -> Self {
        Self {
            led,
            timer,
            activity,
            shutdown,
        }
    }

    /// Run until shutdown: wait for activity, pulse, repeat. Signals that
    /// arrive during the pulse coalesce into at most one further pulse.
    pub async fn drive(mut self) {
        self.led.set(false);
        while !self.shutdown.is_requested() {
            if within(&mut self.timer, SIGNAL_TIMEOUT_MS, self.activity.wait())
                .await
                .is_none()
            {
                continue;
            }
            self.led.set(true);
            self.timer.delay_ms(ACTIVITY_PULSE_MS).await;
            self.led.set(false);
        }
    }
}
