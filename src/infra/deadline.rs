//! Bounded waits: every suspension point in the pipeline races the awaited
//! future against a timer delay, so no task can block past its timeout and
//! cooperative shutdown is always observed within one period.
use core::future::Future;

use futures_util::{
    future::{select, Either},
    pin_mut,
};

use crate::bridge::traits::timer::BridgeTimer;

/// Await `fut` for at most `millis` milliseconds.
///
/// Returns `Some(output)` if the future completes first, `None` on timeout.
/// The future is dropped on timeout; callers must only hand in futures that
/// are safe to cancel (all driver traits in this crate are).
pub async fn within<T, F>(timer: &mut T, millis: u32, fut: F) -> Option<F::Output>
where
    T: BridgeTimer,
    F: Future,
{
    let deadline = timer.delay_ms(millis);
    pin_mut!(deadline);
    pin_mut!(fut);

    match select(fut, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}
