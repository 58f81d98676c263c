//! Elapsed-seconds counter for in-flight generations.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

/// Counts whole periods while running and publishes the count.
///
/// The count resets to 0 on [`start`](Self::start) and keeps its last value
/// after [`stop`](Self::stop). Once `stop` returns no further increment is
/// published: every increment and every stop serialise on the watch
/// channel's lock and increments check the run they belong to.
#[derive(Debug)]
pub struct RuntimeTicker {
    period: Duration,
    tx: Arc<watch::Sender<u64>>,
    run: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl RuntimeTicker {
    /// A stopped ticker with the given period.
    pub fn new(period: Duration) -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            period,
            tx: Arc::new(tx),
            run: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    /// Reset to 0 and start counting. Restarts if already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.stop();
        self.tx.send_replace(0);

        let run_id = self.run.load(Ordering::SeqCst);
        let run = Arc::clone(&self.run);
        let tx = Arc::clone(&self.tx);
        let period = self.period;
        debug!(?period, run_id, "Starting runtime ticker");

        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let current = tx.send_if_modified(|elapsed| {
                    if run.load(Ordering::SeqCst) == run_id {
                        *elapsed += 1;
                        true
                    } else {
                        false
                    }
                });
                if !current {
                    break;
                }
            }
        }));
    }

    /// Stop counting. The last published value is kept.
    pub fn stop(&mut self) {
        let run = &self.run;
        self.tx.send_if_modified(|_| {
            run.fetch_add(1, Ordering::SeqCst);
            false
        });
        if let Some(handle) = self.task.take() {
            handle.abort();
            debug!(elapsed = *self.tx.borrow(), "Stopped runtime ticker");
        }
    }

    /// Reset the count to 0, stopping first.
    pub fn reset(&mut self) {
        self.stop();
        self.tx.send_replace(0);
    }

    /// Whether a counting task is active.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Elapsed whole periods.
    pub fn elapsed(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Receiver that observes every published count.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for RuntimeTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_counts_one_per_period() {
        let mut ticker = RuntimeTicker::new(Duration::from_secs(1));
        ticker.start();
        assert_eq!(ticker.elapsed(), 0);

        time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(ticker.elapsed(), 3);
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_count() {
        let mut ticker = RuntimeTicker::new(Duration::from_secs(1));
        ticker.start();
        time::sleep(Duration::from_millis(2500)).await;
        ticker.stop();
        assert!(!ticker.is_running());

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(ticker.elapsed(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_to_zero() {
        let mut ticker = RuntimeTicker::new(Duration::from_secs(1));
        let rx = ticker.subscribe();
        ticker.start();
        time::sleep(Duration::from_millis(4200)).await;
        assert_eq!(*rx.borrow(), 4);

        ticker.start();
        assert_eq!(*rx.borrow(), 0);
        time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(*rx.borrow(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let rx = {
            let mut ticker = RuntimeTicker::new(Duration::from_secs(1));
            ticker.start();
            ticker.subscribe()
        };
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(*rx.borrow(), 0);
    }
}
