//! GPIO-backed status indicator. Synchronous on purpose: driving a pin
//! never waits, so indicator updates can sit inside timed loops without
//! affecting their latency bounds.

/// One LED (or any on/off indicator).
pub trait Indicator {
    fn set(&mut self, on: bool);
    fn toggle(&mut self);
}
