//! Pipeline tasks and their hardware seams, plus the timing constants that
//! define the bridge's bounded-latency contract.
//!
//! Every wait in the pipeline carries an explicit timeout. The timeouts are
//! not tuning knobs for throughput: they exist so each task wakes often
//! enough to observe a cooperative shutdown request, which bounds the
//! termination latency of the whole system by the largest value below.

pub mod blinker;
pub mod consumer;
pub mod frame;
pub mod heartbeat;
pub mod notifier;
pub mod receiver;
pub mod record;
pub mod service;
pub mod shutdown;
pub mod traits;

/// Longest wait on the "frames available" hardware event (ms).
///
/// A timeout here is a no-op, not an error: it exists purely so the receiver
/// can check the shutdown flag between bursts.
pub const RX_EVENT_TIMEOUT_MS: u32 = 100;

/// Grace period when the handle queue is full before the frame is dropped (ms).
///
/// Kept deliberately short: the receive path sits right behind the interrupt
/// and must never back up into the hardware. One millisecond is enough for a
/// consumer that is merely scheduled out, and small enough that a genuinely
/// stuck consumer costs the receiver almost nothing.
pub const ENQUEUE_RETRY_MS: u32 = 1;

/// Longest wait for one serial write before the record is dropped (ms).
///
/// A host that stops reading must not stall the pipeline; 10 ms covers a
/// full 256-byte USB bulk transfer with margin at any realistic line rate.
pub const WRITE_TIMEOUT_MS: u32 = 10;

/// Consumer idle poll period when the queue is empty (ms).
pub const IDLE_POLL_MS: u32 = 100;

/// Longest wait on the activity signal between shutdown checks (ms).
pub const SIGNAL_TIMEOUT_MS: u32 = 100;

/// Duration of the receive-activity indicator pulse (ms).
pub const ACTIVITY_PULSE_MS: u32 = 200;

/// Longest wait for one heartbeat transmission on the bus (ms).
///
/// Covers worst-case CAN arbitration and retransmission; a bus that stays
/// saturated longer simply skips this cycle.
pub const TRANSMIT_TIMEOUT_MS: u32 = 100;

/// Duration of the heartbeat-sent indicator pulse (ms).
pub const HEARTBEAT_PULSE_MS: u32 = 200;

/// Heartbeat cadence on the bus (ms).
pub const HEARTBEAT_PERIOD_MS: u32 = 20_000;

/// Liveness indicator toggle period (ms).
pub const LIVENESS_TOGGLE_MS: u32 = 1_000;

/// Upper bound on any single uninterruptible sleep slice (ms).
///
/// Long periods (heartbeat, liveness) sleep in slices of at most this much
/// so a shutdown request is observed within one slice.
pub const SHUTDOWN_POLL_MS: u32 = 100;
