use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::clock::{RoundClock, Tick};
use crate::selection::Selection;

/// One mount of the game view: the clock, the selection and the task that
/// ticks the clock. Dropping the session cancels the task.
pub struct GameSession {
    clock: Arc<Mutex<RoundClock>>,
    selection: Mutex<Selection>,
    cancel: CancellationToken,
    ticker: Option<JoinHandle<()>>,
}

impl GameSession {
    /// Must be called inside a tokio runtime. The first tick fires one
    /// `period` after start.
    pub fn start(period: Duration) -> Self {
        let clock = Arc::new(Mutex::new(RoundClock::new()));
        let cancel = CancellationToken::new();

        let tick_clock = clock.clone();
        let tick_cancel = cancel.clone();
        let ticker = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = tick_cancel.cancelled() => {
                        tracing::debug!("round ticker stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        let tick = tick_clock.lock().unwrap().tick();
                        if let Tick::RolledOver { round } = tick {
                            tracing::info!(round, "new round started");
                        }
                    }
                }
            }
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "round ticker started");

        Self {
            clock,
            selection: Mutex::new(Selection::default()),
            cancel,
            ticker: Some(ticker),
        }
    }

    pub fn clock(&self) -> RoundClock {
        *self.clock.lock().unwrap()
    }

    pub fn selection(&self) -> Selection {
        *self.selection.lock().unwrap()
    }

    pub fn update_selection<R>(&self, f: impl FnOnce(&mut Selection) -> R) -> R {
        f(&mut self.selection.lock().unwrap())
    }

    /// A handle that observes when this session's ticker is released.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    #[cfg(test)]
    pub(crate) fn shared_clock(&self) -> Arc<Mutex<RoundClock>> {
        self.clock.clone()
    }

    /// Cancels the ticker and waits for the task to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(ticker) = self.ticker.take() {
            if let Err(e) = ticker.await {
                tracing::warn!(error = %e, "round ticker ended abnormally");
            }
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
