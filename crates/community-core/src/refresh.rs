//! Refresh Loop
//!
//! Level-triggered polling bound to whether a view is active: one pass
//! immediately on activation, then one per interval until deactivated.
//! Passes run concurrently with the cadence, so a slow pass can overlap the
//! next tick; results land in completion order.
//!
//! The loop is returned as a future for the caller to spawn (Leptos
//! `spawn_local` in the browser, a tokio `LocalSet` in tests). Deactivating
//! aborts it, dropping the pending timer and every in-flight pass.

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};

/// Source of delays for the loop cadence
pub trait Timer: Clone + 'static {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Cancellable fixed-interval refresh
#[derive(Debug)]
pub struct RefreshLoop<T: Timer> {
    timer: T,
    interval: Duration,
    handle: Option<AbortHandle>,
}

impl<T: Timer> RefreshLoop<T> {
    pub fn new(timer: T, interval: Duration) -> Self {
        Self {
            timer,
            interval,
            handle: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Start (or restart) polling. Any previous loop is aborted first.
    ///
    /// The returned future must be spawned; it never completes on its own.
    pub fn activate<F, Fut>(&mut self, mut pass: F) -> LocalBoxFuture<'static, ()>
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        self.deactivate();

        let (handle, registration) = AbortHandle::new_pair();
        self.handle = Some(handle);

        let timer = self.timer.clone();
        let interval = self.interval;
        let ticking = async move {
            let mut in_flight = FuturesUnordered::new();
            in_flight.push(pass());
            let mut tick = timer.sleep(interval).fuse();
            loop {
                futures::select! {
                    () = tick => {
                        in_flight.push(pass());
                        tick = timer.sleep(interval).fuse();
                    }
                    () = in_flight.select_next_some() => {}
                }
            }
        };

        Box::pin(async move {
            let _ = Abortable::new(ticking, registration).await;
        })
    }

    /// Stop polling. No-op when inactive.
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.handle.take() {
            log::debug!("refresh loop stopped");
            handle.abort();
        }
    }

    /// Activate or deactivate to match `active`. Returns the loop future to
    /// spawn when it (re)started.
    pub fn set_active<F, Fut>(&mut self, active: bool, pass: F) -> Option<LocalBoxFuture<'static, ()>>
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        if active {
            Some(self.activate(pass))
        } else {
            self.deactivate();
            None
        }
    }
}

impl<T: Timer> Drop for RefreshLoop<T> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::task::LocalSet;
    use tokio::time::sleep;

    #[derive(Clone, Debug)]
    struct TokioTimer;

    impl Timer for TokioTimer {
        fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
            Box::pin(tokio::time::sleep(duration))
        }
    }

    fn counting_pass(counter: Rc<Cell<u32>>) -> impl FnMut() -> LocalBoxFuture<'static, ()> {
        move || {
            let counter = counter.clone();
            Box::pin(async move { counter.set(counter.get() + 1) })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_passes_immediately_then_every_interval() {
        LocalSet::new()
            .run_until(async {
                let passes = Rc::new(Cell::new(0));
                let mut refresh = RefreshLoop::new(TokioTimer, Duration::from_secs(30));

                tokio::task::spawn_local(refresh.activate(counting_pass(passes.clone())));
                sleep(Duration::from_secs(1)).await;
                assert_eq!(passes.get(), 1);

                // ticks at 30s, 60s, 90s
                sleep(Duration::from_secs(94)).await;
                assert_eq!(passes.get(), 4);

                refresh.deactivate();
                assert!(!refresh.is_active());
                sleep(Duration::from_secs(300)).await;
                assert_eq!(passes.get(), 4);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_active_false_spawns_nothing() {
        let passes = Rc::new(Cell::new(0));
        let mut refresh = RefreshLoop::new(TokioTimer, Duration::from_secs(30));

        assert!(refresh.set_active(false, counting_pass(passes.clone())).is_none());
        assert!(!refresh.is_active());
        assert_eq!(passes.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactivation_restarts_with_immediate_pass() {
        LocalSet::new()
            .run_until(async {
                let passes = Rc::new(Cell::new(0));
                let mut refresh = RefreshLoop::new(TokioTimer, Duration::from_secs(30));

                let first = refresh.set_active(true, counting_pass(passes.clone())).unwrap();
                tokio::task::spawn_local(first);
                sleep(Duration::from_secs(10)).await;
                assert_eq!(passes.get(), 1);

                let second = refresh.set_active(true, counting_pass(passes.clone())).unwrap();
                tokio::task::spawn_local(second);
                sleep(Duration::from_secs(1)).await;
                assert_eq!(passes.get(), 2);

                // Only the restarted cadence ticks: 10s + 30s
                sleep(Duration::from_secs(35)).await;
                assert_eq!(passes.get(), 3);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_passes_overlap_and_are_dropped_on_stop() {
        LocalSet::new()
            .run_until(async {
                let started = Rc::new(Cell::new(0));
                let finished = Rc::new(Cell::new(0));
                let mut refresh = RefreshLoop::new(TokioTimer, Duration::from_secs(30));

                let (s, f) = (started.clone(), finished.clone());
                let task = refresh.activate(move || {
                    let (s, f) = (s.clone(), f.clone());
                    async move {
                        s.set(s.get() + 1);
                        sleep(Duration::from_secs(45)).await;
                        f.set(f.get() + 1);
                    }
                });
                tokio::task::spawn_local(task);

                // started at 0, 30, 60, 90; finished at 45, 75
                sleep(Duration::from_secs(95)).await;
                assert_eq!(started.get(), 4);
                assert_eq!(finished.get(), 2);

                refresh.deactivate();
                sleep(Duration::from_secs(300)).await;
                assert_eq!(started.get(), 4);
                assert_eq!(finished.get(), 2);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_loop() {
        LocalSet::new()
            .run_until(async {
                let passes = Rc::new(Cell::new(0));
                {
                    let mut refresh = RefreshLoop::new(TokioTimer, Duration::from_secs(30));
                    tokio::task::spawn_local(refresh.activate(counting_pass(passes.clone())));
                    sleep(Duration::from_secs(1)).await;
                }
                sleep(Duration::from_secs(120)).await;
                assert_eq!(passes.get(), 1);
            })
            .await;
    }
}
