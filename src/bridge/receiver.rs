//! Producer task: waits on the hardware receive event, drains the peripheral
//! into pool slots, and queues the slots for the consumer.
//!
//! Both the slot acquisition and the enqueue are non-blocking with a bounded
//! grace period, so a slow consumer can never back the receiver up into the
//! hardware. Overload resolves by dropping frames, silently and locally.
use crate::bridge::notifier::ActivitySignal;
use crate::bridge::shutdown::Shutdown;
use crate::bridge::traits::{can_bus::CanRx, timer::BridgeTimer};
use crate::bridge::{ENQUEUE_RETRY_MS, RX_EVENT_TIMEOUT_MS};
use crate::error::PoolError;
use crate::infra::{deadline::within, pool::FramePool, queue::FrameQueue};

/// Task moving frames from the CAN peripheral into the handle queue.
pub struct FrameReceiver<'a, C, T, const P: usize, const Q: usize>
where
    C: CanRx,
    T: BridgeTimer,
{
    driver: C,
    timer: T,
    pool: &'a FramePool<P>,
    queue: &'a FrameQueue<Q>,
    activity: &'a ActivitySignal,
    shutdown: &'a Shutdown,
}

impl<'a, C, T, const P: usize, const Q: usize> FrameReceiver<'a, C, T, P, Q>
where
    C: CanRx,
    T: BridgeTimer,
{
    /// Panics if the queue is larger than the pool: the queue alone must
    /// never be able to reference more frames than the pool can produce.
    pub fn new(
        driver: C,
        timer: T,
        pool: &'a FramePool<P>,
        queue: &'a FrameQueue<Q>,
        activity: &'a ActivitySignal,
        shutdown: &'a Shutdown,
    ) -> Self {
        assert!(Q <= P, "queue capacity must not exceed pool capacity");
        Self {
            driver,
            timer,
            pool,
            queue,
            activity,
            shutdown,
        }
    }

    /// Run until shutdown is requested. The only error that can surface is
    /// a pool ownership violation, which is fatal for the pipeline.
    ///
    /// Dropping the driver on return tears down the hardware event
    /// subscription.
    pub async fn drive(mut self) -> Result<(), PoolError> {
        #[cfg(feature = "defmt")]
        defmt::info!("frame receiver started");
        while !self.shutdown.is_requested() {
            let woke = within(
                &mut self.timer,
                RX_EVENT_TIMEOUT_MS,
                self.driver.rx_event(),
            )
            .await;
            if woke.is_none() {
                // Quiet bus this period; loop back for the shutdown check.
                continue;
            }
            self.drain().await?;
        }
        #[cfg(feature = "defmt")]
        defmt::info!("frame receiver stopped");
        Ok(())
    }

    /// Pull every pending frame out of the peripheral.
    ///
    /// If the pool runs out mid-drain the pass ends early; frames still in
    /// the hardware buffer stay there and are drained on the next receive
    /// event, once the consumer has freed slots. They are lost only if the
    /// hardware buffer itself overflows in the meantime.
    async fn drain(&mut self) -> Result<(), PoolError> {
        loop {
            let Some(handle) = self.pool.acquire() else {
                #[cfg(feature = "defmt")]
                defmt::trace!("pool exhausted, drain pass cut short");
                return Ok(());
            };
            match self.driver.receive_nonblocking() {
                Some(frame) => {
                    self.pool.fill(&handle, &frame);
                    // Best-effort wake; bursts coalesce in the signal.
                    self.activity.signal(());
                    let enqueued = self
                        .queue
                        .try_enqueue(handle, &mut self.timer, ENQUEUE_RETRY_MS)
                        .await;
                    if let Err(handle) = enqueued {
                        // Queue stayed full past the grace period: this
                        // frame is dropped, the slot goes straight back.
                        #[cfg(feature = "defmt")]
                        defmt::trace!("queue full, frame dropped");
                        self.pool.release(handle)?;
                    }
                }
                None => {
                    // Peripheral empty; hand the spare slot back.
                    return self.pool.release(handle);
                }
            }
        }
    }
}
