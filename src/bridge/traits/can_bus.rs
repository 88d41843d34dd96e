//! Minimal abstraction over the CAN peripheral, split by direction so the
//! receive pipeline and the heartbeat transmitter can hold independent
//! handles onto the same hardware.
use core::future::Future;

use crate::bridge::frame::CanFrame;

/// Receive side of the peripheral.
///
/// The "frames available" event subscription is tied to the lifetime of the
/// implementing value: dropping it tears the subscription down, which is how
/// the receiver task releases the hardware on shutdown.
pub trait CanRx {
    /// Resolves once the peripheral reports at least one pending frame.
    ///
    /// Must be safe to cancel: the pipeline races this against a timer so it
    /// can poll for shutdown.
    fn rx_event(&mut self) -> impl Future<Output = ()> + '_;

    /// Pop the next pending frame without waiting. `None` once the hardware
    /// buffer is empty.
    fn receive_nonblocking(&mut self) -> Option<CanFrame>;
}

/// Transmit side of the peripheral.
pub trait CanTx {
    type Error: core::fmt::Debug;

    /// Emit a frame on the bus. Asynchronous to accommodate non-blocking
    /// drivers; the caller bounds the wait.
    fn send<'a>(
        &'a mut self,
        frame: &'a CanFrame,
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
}
