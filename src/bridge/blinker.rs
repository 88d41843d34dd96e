//! Liveness task: toggles an indicator at a fixed period to show the
//! scheduler is alive. No bus, no pool, no queue.
use crate::bridge::shutdown::{sleep_cooperatively, Shutdown};
use crate::bridge::traits::{indicator::Indicator, timer::BridgeTimer};
use crate::bridge::LIVENESS_TOGGLE_MS;

/// Task blinking the board-liveness indicator.
pub struct LivenessBlinker<'a, L, T>
where
    L: Indicator,
    T: BridgeTimer,
{
    led: L,
    timer: T,
    shutdown: &'a Shutdown,
}

impl<'a, L, T> LivenessBlinker<'a, L, T>
where
    L: Indicator,
    T: BridgeTimer,
{
    pub fn new(led: L, timer: T, shutdown: &'a Shutdown) -> Self {
        Self {
            led,
            timer,
            shutdown,
        }
    }

    /// Run until shutdown: toggle, sleep, repeat.
    pub async fn drive(mut self) {
        self.led.set(false);
        while !self.shutdown.is_requested() {
            self.led.toggle();
            sleep_cooperatively(&mut self.timer, self.shutdown, LIVENESS_TOGGLE_MS).await;
        }
    }
}
