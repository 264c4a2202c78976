//! Cancellable repeating task driving auto-advance.
//!
//! ## Lifecycle
//!
//! ```text
//! start(period, f) ──► RepeatingTask ──► cancel(self)   (explicit stop)
//!                           │
//!                           └──────────► drop            (teardown)
//! ```
//!
//! Both paths abort the background task exactly once: `cancel` consumes the
//! handle, and `Drop` only aborts a handle that was not already cancelled.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Period of the auto-advance timer.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(1200);

/// Handle to a callback running on a fixed period.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct RepeatingTask {
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl RepeatingTask {
    /// Run `on_tick` every `period`, first firing one period from now.
    pub fn start<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                on_tick();
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "Repeating task started");

        Self {
            handle: Some(handle),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop the task. Consumes the handle so it cannot be cancelled twice.
    pub fn cancel(mut self) {
        self.abort();
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Repeating task cancelled");
        }
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.abort();
    }
}
