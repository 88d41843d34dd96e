//! Bounded FIFO of slot handles, handing frames from the receiver to the
//! consumer. Built on [`embassy_sync::channel::Channel`], so enqueue and
//! dequeue from different tasks are linearizable without any extra locking.
//!
//! Capacity is fixed at construction and must not exceed the pool size:
//! the queue alone can then never reference more frames than the pool can
//! produce. Ownership of each slot moves *into* the queue on enqueue and
//! *out* on dequeue; a handle that could not be enqueued is handed back to
//! the caller so it can be released instead of leaked.
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};

use crate::bridge::traits::timer::BridgeTimer;
use crate::infra::deadline::within;
use crate::infra::pool::SlotHandle;

/// Fixed-capacity FIFO transferring slot ownership between tasks.
pub struct FrameQueue<const N: usize> {
    channel: Channel<CriticalSectionRawMutex, SlotHandle, N>,
}

impl<const N: usize> FrameQueue<N> {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Push a handle, waiting at most `retry_ms` for room.
    ///
    /// One immediate attempt, then a single short retry after `retry_ms`.
    /// On failure the handle comes back in `Err` so the caller can release
    /// the slot; the frame it carried is dropped, which is the documented
    /// overload policy rather than an error.
    pub async fn try_enqueue<T: BridgeTimer>(
        &self,
        handle: SlotHandle,
        timer: &mut T,
        retry_ms: u32,
    ) -> Result<(), SlotHandle> {
        let handle = match self.channel.try_send(handle) {
            Ok(()) => return Ok(()),
            Err(TrySendError::Full(handle)) => handle,
        };
        timer.delay_ms(retry_ms).await;
        match self.channel.try_send(handle) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(handle)) => Err(handle),
        }
    }

    /// Pop the oldest handle without waiting.
    pub fn try_dequeue_now(&self) -> Option<SlotHandle> {
        self.channel.try_receive().ok()
    }

    /// Pop the oldest handle, waiting at most `timeout_ms` for one to arrive.
    pub async fn dequeue_within<T: BridgeTimer>(
        &self,
        timer: &mut T,
        timeout_ms: u32,
    ) -> Option<SlotHandle> {
        if let Ok(handle) = self.channel.try_receive() {
            return Some(handle);
        }
        within(timer, timeout_ms, self.channel.receive()).await
    }

    /// Handles currently in flight.
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for FrameQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
