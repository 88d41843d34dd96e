//! Asynchronous timer abstraction providing the delays and deadlines the
//! pipeline's bounded waits are built from.

/// Timer trait abstraction; each task owns its own instance.
pub trait BridgeTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a;
}
