//! Periodic heartbeat task: emits a fixed frame on the bus at a fixed
//! cadence and pulses an indicator on success. A failed or timed-out
//! transmission is not retried; the next scheduled cycle is the retry.
use embedded_can::StandardId;

use crate::bridge::frame::CanFrame;
use crate::bridge::shutdown::{sleep_cooperatively, Shutdown};
use crate::bridge::traits::{can_bus::CanTx, indicator::Indicator, timer::BridgeTimer};
use crate::bridge::{HEARTBEAT_PERIOD_MS, HEARTBEAT_PULSE_MS, TRANSMIT_TIMEOUT_MS};
use crate::infra::deadline::within;

/// Identifier of the heartbeat frame.
pub const HEARTBEAT_ID: StandardId = match StandardId::new(0x305) {
    Some(id) => id,
    None => StandardId::ZERO,
};

/// The fixed heartbeat frame: standard id 0x305, eight zero bytes.
pub fn heartbeat_frame() -> CanFrame {
    CanFrame {
        id: HEARTBEAT_ID.into(),
        data: [0u8; 8],
        len: 8,
        remote: false,
    }
}

/// Task transmitting the heartbeat.
pub struct HeartbeatTransmitter<'a, C, L, T>
where
    C: CanTx,
    L: Indicator,
    T: BridgeTimer,
{
    driver: C,
    led: L,
    timer: T,
    shutdown: &'a Shutdown,
}

impl<'a, C, L, T> HeartbeatTransmitter<'a, C, L, T>
where
    C: CanTx,
    L: Indicator,
    T: BridgeTimer,
{
    pub fn new(driver: C, led: L, timer: T, shutdown: &'a Shutdown) -> Self {
        Self {
            driver,
            led,
            timer,
            shutdown,
        }
    }

    /// Run until shutdown: transmit, pulse on success, sleep one period.
    pub async fn drive(mut self) {
        let frame = heartbeat_frame();
        self.led.set(false);
        while !self.shutdown.is_requested() {
            let sent = within(
                &mut self.timer,
                TRANSMIT_TIMEOUT_MS,
                self.driver.send(&frame),
            )
            .await;
            match sent {
                Some(Ok(())) => {
                    self.led.set(true);
                    self.timer.delay_ms(HEARTBEAT_PULSE_MS).await;
                    self.led.set(false);
                }
                Some(Err(_)) | None => {
                    // Bus busy or faulted; the next cycle retries.
                    #[cfg(feature = "defmt")]
                    defmt::warn!("heartbeat transmit skipped this cycle");
                }
            }
            sleep_cooperatively(&mut self.timer, self.shutdown, HEARTBEAT_PERIOD_MS).await;
        }
    }
}
