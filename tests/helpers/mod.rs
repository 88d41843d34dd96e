/// Test doubles simulating the CAN peripheral, the host serial stream, the
/// board LEDs, and the timer during integration tests.
use canbridge::bridge::frame::CanFrame;
use canbridge::bridge::traits::{
    can_bus::{CanRx, CanTx},
    indicator::Indicator,
    serial::SerialSink,
    timer::BridgeTimer,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tokio::time::{sleep, Duration};

//==================================================================================MOCK_CAN
struct MockCanInner {
    pending: Mutex<VecDeque<CanFrame>>,
    rx_event: Notify,
    sent: Mutex<Vec<CanFrame>>,
    fail_sends: AtomicBool,
}

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory CAN peripheral. Frames injected by the test appear on the
/// receive side; frames sent by the bridge are recorded. The receive event
/// is edge-style, like a hardware "rx buffer became non-empty" interrupt:
/// one wake per injection, not one per pending frame.
pub struct MockCan {
    inner: Arc<MockCanInner>,
}

#[allow(dead_code)]
impl MockCan {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MockCanInner {
                pending: Mutex::new(VecDeque::new()),
                rx_event: Notify::new(),
                sent: Mutex::new(Vec::new()),
                fail_sends: AtomicBool::new(false),
            }),
        }
    }

    /// Put a frame in the hardware receive buffer and raise the event.
    pub fn inject(&self, frame: CanFrame) {
        self.inner.pending.lock().unwrap().push_back(frame);
        self.inner.rx_event.notify_one();
    }

    /// Frames still sitting in the hardware receive buffer.
    pub fn pending(&self) -> usize {
        self.inner.pending.lock().unwrap().len()
    }

    /// Frames the bridge transmitted.
    pub fn sent(&self) -> Vec<CanFrame> {
        self.inner.sent.lock().unwrap().clone()
    }

    /// Make subsequent transmissions fail (bus fault simulation).
    pub fn set_send_fail(&self, fail: bool) {
        self.inner.fail_sends.store(fail, Ordering::SeqCst);
    }
}

impl CanRx for MockCan {
    async fn rx_event(&mut self) {
        self.inner.rx_event.notified().await;
    }

    fn receive_nonblocking(&mut self) -> Option<CanFrame> {
        self.inner.pending.lock().unwrap().pop_front()
    }
}

impl CanTx for MockCan {
    type Error = ();

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        if self.inner.fail_sends.load(Ordering::SeqCst) {
            return Err(());
        }
        self.inner.sent.lock().unwrap().push(frame.clone());
        Ok(())
    }
}

//==================================================================================MOCK_SERIAL
#[derive(Clone)]
#[allow(dead_code)]
/// Host-visible output stream. Records every byte; can simulate a host that
/// stopped reading by stalling writes past any reasonable timeout.
pub struct MockSerial {
    written: Arc<Mutex<Vec<u8>>>,
    stalled: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockSerial {
    pub fn new() -> Self {
        Self {
            written: Arc::new(Mutex::new(Vec::new())),
            stalled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn written(&self) -> Vec<u8> {
        self.written.lock().unwrap().clone()
    }

    /// Simulate a host that stopped draining the stream.
    pub fn set_stalled(&self, stalled: bool) {
        self.stalled.store(stalled, Ordering::SeqCst);
    }
}

impl SerialSink for MockSerial {
    type Error = ();

    async fn write<'a>(&'a mut self, bytes: &'a [u8]) -> Result<usize, Self::Error> {
        if self.stalled.load(Ordering::SeqCst) {
            // Far past the bridge's write timeout; the caller cancels us.
            sleep(Duration::from_secs(3600)).await;
        }
        self.written.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }
}

//==================================================================================MOCK_LED
#[derive(Clone)]
#[allow(dead_code)]
/// Indicator recording every state transition.
pub struct MockIndicator {
    states: Arc<Mutex<Vec<bool>>>,
    level: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockIndicator {
    pub fn new() -> Self {
        Self {
            states: Arc::new(Mutex::new(Vec::new())),
            level: Arc::new(Mutex::new(false)),
        }
    }

    /// Full transition history, in order.
    pub fn transitions(&self) -> Vec<bool> {
        self.states.lock().unwrap().clone()
    }

    /// Number of off-to-on edges, i.e. completed pulses started.
    pub fn pulses(&self) -> usize {
        let states = self.states.lock().unwrap();
        let mut level = false;
        let mut pulses = 0;
        for &state in states.iter() {
            if state && !level {
                pulses += 1;
            }
            level = state;
        }
        pulses
    }

    pub fn is_on(&self) -> bool {
        *self.level.lock().unwrap()
    }
}

impl Indicator for MockIndicator {
    fn set(&mut self, on: bool) {
        *self.level.lock().unwrap() = on;
        self.states.lock().unwrap().push(on);
    }

    fn toggle(&mut self) {
        let mut level = self.level.lock().unwrap();
        *level = !*level;
        self.states.lock().unwrap().push(*level);
    }
}

//==================================================================================MOCK_TIMER
#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive the bounded waits in tests.
pub struct MockTimer;

impl BridgeTimer for MockTimer {
    async fn delay_ms<'a>(&'a mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}

//==================================================================================FRAMES
#[allow(dead_code)]
/// Standard-id data frame helper.
pub fn std_frame(id: u16, data: &[u8]) -> CanFrame {
    let sid = embedded_can::StandardId::new(id).expect("11-bit id");
    CanFrame::new(sid, data).expect("payload fits")
}
