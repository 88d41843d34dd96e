//! Wiring facade for the receive-side pipeline.
//!
//! The pool, queue, activity signal, and shutdown flag are constructed once
//! by the firmware before any task starts (typically in `StaticCell`s) and
//! live until every task has finished. [`BridgeService`] gathers the
//! references plus the hardware collaborators, then splits into
//! ready-to-spawn runners via [`BridgeService::into_parts`]; the firmware
//! assigns thread priorities and stack budgets itself. The heartbeat and
//! liveness tasks are independent of this wiring and are constructed
//! directly.
use crate::bridge::consumer::FrameConsumer;
use crate::bridge::notifier::{ActivityNotifier, ActivitySignal};
use crate::bridge::receiver::FrameReceiver;
use crate::bridge::shutdown::Shutdown;
use crate::bridge::traits::{
    can_bus::CanRx, indicator::Indicator, serial::SerialSink, timer::BridgeTimer,
};
use crate::infra::{pool::FramePool, queue::FrameQueue};

/// References to the shared pipeline structures. `Copy` so each runner can
/// take the subset it needs.
#[derive(Clone, Copy)]
pub struct BridgeShared<'a, const P: usize, const Q: usize> {
    pub pool: &'a FramePool<P>,
    pub queue: &'a FrameQueue<Q>,
    pub activity: &'a ActivitySignal,
    pub shutdown: &'a Shutdown,
}

/// Service assembling the receive-side tasks.
pub struct BridgeService<'a, C, S, L, TR, TC, TN, const P: usize, const Q: usize>
where
    C: CanRx,
    S: SerialSink,
    L: Indicator,
    TR: BridgeTimer,
    TC: BridgeTimer,
    TN: BridgeTimer,
{
    receiver: FrameReceiver<'a, C, TR, P, Q>,
    consumer: FrameConsumer<'a, S, TC, P, Q>,
    notifier: ActivityNotifier<'a, L, TN>,
}

/// Bundle returned by [`BridgeService::into_parts`].
pub struct BridgeParts<'a, C, S, L, TR, TC, TN, const P: usize, const Q: usize>
where
    C: CanRx,
    S: SerialSink,
    L: Indicator,
    TR: BridgeTimer,
    TC: BridgeTimer,
    TN: BridgeTimer,
{
    pub receiver: FrameReceiver<'a, C, TR, P, Q>,
    pub consumer: FrameConsumer<'a, S, TC, P, Q>,
    pub notifier: ActivityNotifier<'a, L, TN>,
}

impl<'a, C, S, L, TR, TC, TN, const P: usize, const Q: usize>
    BridgeService<'a, C, S, L, TR, TC, TN, P, Q>
where
    C: CanRx,
    S: SerialSink,
    L: Indicator,
    TR: BridgeTimer,
    TC: BridgeTimer,
    TN: BridgeTimer,
{
    /// Wire the three receive-side tasks onto the shared structures.
    /// Each task owns its own timer instance.
    pub fn new(
        driver: C,
        sink: S,
        activity_led: L,
        receiver_timer: TR,
        consumer_timer: TC,
        notifier_timer: TN,
        shared: BridgeShared<'a, P, Q>,
    ) -> Self {
        Self {
            receiver: FrameReceiver::new(
                driver,
                receiver_timer,
                shared.pool,
                shared.queue,
                shared.activity,
                shared.shutdown,
            ),
            consumer: FrameConsumer::new(
                sink,
                consumer_timer,
                shared.pool,
                shared.queue,
                shared.shutdown,
            ),
            notifier: ActivityNotifier::new(
                activity_led,
                notifier_timer,
                shared.activity,
                shared.shutdown,
            ),
        }
    }

    /// Split into ready-to-spawn runners.
    pub fn into_parts(self) -> BridgeParts<'a, C, S, L, TR, TC, TN, P, Q> {
        BridgeParts {
            receiver: self.receiver,
            consumer: self.consumer,
            notifier: self.notifier,
        }
    }
}
