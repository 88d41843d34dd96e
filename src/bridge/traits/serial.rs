//! Host-visible output stream (USB CDC, UART, ...).
use core::future::Future;

/// Byte sink for rendered records.
pub trait SerialSink {
    type Error: core::fmt::Debug;

    /// Write `bytes`, returning how many were accepted. The caller bounds
    /// the wait and tolerates both short writes and failures; a record is
    /// never retried.
    fn write<'a>(
        &'a mut self,
        bytes: &'a [u8],
    ) -> impl Future<Output = Result<usize, Self::Error>> + 'a;
}
