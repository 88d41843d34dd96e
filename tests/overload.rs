//! Overload behavior: more frames than slots. The pool fills, the drain
//! pass ends early, and the excess stays in the hardware buffer until the
//! consumer frees slots and a new receive event triggers another drain.
mod helpers;

use canbridge::bridge::consumer::FrameConsumer;
use canbridge::bridge::notifier::ActivitySignal;
use canbridge::bridge::receiver::FrameReceiver;
use canbridge::bridge::shutdown::Shutdown;
use canbridge::infra::{pool::FramePool, queue::FrameQueue};
use helpers::{std_frame, MockCan, MockSerial, MockTimer};
use tokio::time::{sleep, Duration};

#[tokio::test]
/// Twelve frames against ten slots with no consumer running: ten are
/// captured and queued, the pool hits zero free, and the remaining two stay
/// in the hardware buffer.
async fn pool_exhaustion_cuts_the_drain_short() {
    let pool: FramePool<10> = FramePool::new();
    let queue: FrameQueue<10> = FrameQueue::new();
    let activity = ActivitySignal::new();
    let shutdown = Shutdown::new();

    let can = MockCan::new();
    for id in 0..12u16 {
        can.inject(std_frame(0x400 + id, &[id as u8]));
    }

    let receiver = FrameReceiver::new(
        can.clone(),
        MockTimer,
        &pool,
        &queue,
        &activity,
        &shutdown,
    );

    let scenario = async {
        sleep(Duration::from_millis(200)).await;

        // Mid-flight observation: capacity captured, excess retained.
        assert_eq!(pool.free(), 0);
        assert_eq!(queue.len(), queue.capacity());
        assert_eq!(can.pending(), 2);

        shutdown.request();
    };

    let (rx, ()) = tokio::join!(receiver.drive(), scenario);
    rx.expect("receiver exits cleanly");

    // Nothing was consumed, so nothing changed on the way out.
    assert_eq!(pool.free(), 0);
    assert_eq!(queue.len(), 10);
    assert_eq!(can.pending(), 2);
}

#[tokio::test]
/// Once the consumer catches up and a new receive event fires, the frames
/// retained in the hardware buffer are drained too: nothing is lost and
/// arrival order is preserved end to end.
async fn retained_frames_recover_after_consumer_catches_up() {
    let pool: FramePool<10> = FramePool::new();
    let queue: FrameQueue<10> = FrameQueue::new();
    let activity = ActivitySignal::new();
    let shutdown = Shutdown::new();

    let can = MockCan::new();
    let serial = MockSerial::new();

    for id in 0..12u16 {
        can.inject(std_frame(0x400 + id, &[id as u8]));
    }

    let receiver = FrameReceiver::new(
        can.clone(),
        MockTimer,
        &pool,
        &queue,
        &activity,
        &shutdown,
    );
    let consumer = FrameConsumer::new(serial.clone(), MockTimer, &pool, &queue, &shutdown);

    let can_for_scenario = can.clone();
    let scenario = async {
        // Let the first drain pass fill the pool and the consumer clear it.
        sleep(Duration::from_millis(300)).await;

        // A thirteenth frame raises the next receive event; the two
        // retained frames ride along in the same drain pass.
        can_for_scenario.inject(std_frame(0x40C, &[12]));
        sleep(Duration::from_millis(300)).await;

        shutdown.request();
    };

    let (rx, cx, ()) = tokio::join!(receiver.drive(), consumer.drive(), scenario);
    rx.expect("receiver exits cleanly");
    cx.expect("consumer exits cleanly");

    // All thirteen frames came out, in arrival order.
    let written = serial.written();
    let records: Vec<&[u8]> = written.chunks(29).collect();
    assert_eq!(records.len(), 13);
    for (i, record) in records.iter().enumerate() {
        let expected_id = 0x400 + i;
        let prefix = format!("{:08x}: ", expected_id);
        assert!(
            record.starts_with(prefix.as_bytes()),
            "record {i} out of order"
        );
    }

    assert_eq!(pool.free(), pool.capacity());
    assert!(queue.is_empty());
    assert_eq!(can.pending(), 0);
}
