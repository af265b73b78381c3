//! Browser timer for the dashboard refresh loop.

use std::time::Duration;

use community_core::Timer;
use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;

/// `setTimeout`-backed delays. Dropping the future clears the timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(TimeoutFuture::new(millis(duration)))
    }
}

pub fn millis(duration: Duration) -> u32 {
    duration.as_millis().min(u32::MAX as u128) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_secs(30)), 30_000);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
