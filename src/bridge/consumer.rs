//! Consumer task: drains the handle queue, renders each frame to its serial
//! record, writes it to the host stream, and returns the slot to the pool.
//!
//! The write carries its own short timeout. A host that stops reading costs
//! at most that timeout per record; the record is dropped, never retried,
//! and the slot is released regardless, so the pool can never leak through
//! this path.
use crate::bridge::record::Record;
use crate::bridge::shutdown::Shutdown;
use crate::bridge::traits::{serial::SerialSink, timer::BridgeTimer};
use crate::bridge::{IDLE_POLL_MS, WRITE_TIMEOUT_MS};
use crate::error::PoolError;
use crate::infra::{deadline::within, pool::FramePool, queue::FrameQueue};

/// Task turning queued frames into serial records.
pub struct FrameConsumer<'a, S, T, const P: usize, const Q: usize>
where
    S: SerialSink,
    T: BridgeTimer,
{
    sink: S,
    timer: T,
    pool: &'a FramePool<P>,
    queue: &'a FrameQueue<Q>,
    shutdown: &'a Shutdown,
}

impl<'a, S, T, const P: usize, const Q: usize> FrameConsumer<'a, S, T, P, Q>
where
    S: SerialSink,
    T: BridgeTimer,
{
    pub fn new(
        sink: S,
        timer: T,
        pool: &'a FramePool<P>,
        queue: &'a FrameQueue<Q>,
        shutdown: &'a Shutdown,
    ) -> Self {
        Self {
            sink,
            timer,
            pool,
            queue,
            shutdown,
        }
    }

    /// Run until shutdown is requested. The only error that can surface is
    /// a pool ownership violation, which is fatal for the pipeline.
    pub async fn drive(mut self) -> Result<(), PoolError> {
        #[cfg(feature = "defmt")]
        defmt::info!("frame consumer started");
        while !self.shutdown.is_requested() {
            while let Some(handle) = self.queue.try_dequeue_now() {
                let record = Record::render(&self.pool.frame(&handle));
                let outcome = within(
                    &mut self.timer,
                    WRITE_TIMEOUT_MS,
                    self.sink.write(record.as_bytes()),
                )
                .await;
                match outcome {
                    Some(Ok(_written)) => {}
                    Some(Err(_err)) => {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("serial write failed, record dropped");
                    }
                    None => {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("serial write timed out, record dropped");
                    }
                }
                // Unconditional: the slot goes back even when the write
                // was dropped.
                self.pool.release(handle)?;
            }
            self.timer.delay_ms(IDLE_POLL_MS).await;
        }
        #[cfg(feature = "defmt")]
        defmt::info!("frame consumer stopped");
        Ok(())
    }
}
