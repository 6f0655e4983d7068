//! Timed auto-run driver.
//!
//! The engine knows nothing about time. [`AutoRunner`] owns the cadence and
//! calls [`LcsEngine::step`] once per tick until the table is complete or a
//! [`CancelToken`] is tripped. Ticks never overlap: the next wait starts only
//! after the previous step and its callback have returned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::engine::{LcsEngine, Status};
use crate::error::LcsError;
use crate::utils::{DEFAULT_STEP_DELAY_MS, MAX_STEP_DELAY_MS, MIN_STEP_DELAY_MS};

/// Shared stop flag. Clones observe the same flag, so a UI thread can cancel
/// a run driven elsewhere.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Waits between ticks.
pub trait Ticker {
    fn wait(&mut self, delay: Duration);
}

/// Blocks the current thread for the delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Ticker for ThreadSleep {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// How a call to [`AutoRunner::run`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The table was completed and the backtrace is available.
    Completed,
    /// The token was cancelled; the engine is `Stepping` and can resume.
    Paused,
}

/// Drives an engine one cell per tick.
#[derive(Debug)]
pub struct AutoRunner<K: Ticker = ThreadSleep> {
    delay: Duration,
    ticker: K,
}

impl AutoRunner<ThreadSleep> {
    /// Runner sleeping `delay` between cells; `delay` must lie within
    /// `MIN_STEP_DELAY_MS..=MAX_STEP_DELAY_MS`.
    pub fn new(delay: Duration) -> Result<Self, LcsError> {
        Self::with_ticker(delay, ThreadSleep)
    }
}

impl Default for AutoRunner<ThreadSleep> {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            ticker: ThreadSleep,
        }
    }
}

impl<K: Ticker> AutoRunner<K> {
    pub fn with_ticker(delay: Duration, ticker: K) -> Result<Self, LcsError> {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        if !(MIN_STEP_DELAY_MS..=MAX_STEP_DELAY_MS).contains(&delay_ms) {
            return Err(LcsError::StepDelayOutOfRange {
                delay_ms,
                min_ms: MIN_STEP_DELAY_MS,
                max_ms: MAX_STEP_DELAY_MS,
            });
        }
        Ok(Self { delay, ticker })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn ticker(&self) -> &K {
        &self.ticker
    }

    /// Run `engine` until it is done or `token` is cancelled.
    ///
    /// Starts (or resumes) the engine via [`LcsEngine::start_auto_run`].
    /// `on_tick` sees the engine after every filled cell. The token is
    /// checked before each cell, so a cancel issued during a wait takes
    /// effect without filling another cell.
    pub fn run<F>(&mut self, engine: &mut LcsEngine, token: &CancelToken, mut on_tick: F) -> RunOutcome
    where
        F: FnMut(&LcsEngine),
    {
        if !engine.start_auto_run() {
            return RunOutcome::Completed;
        }

        loop {
            if token.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!(filled = engine.filled_cells(), "auto-run cancelled");
                engine.pause();
                return RunOutcome::Paused;
            }
            if engine.status() != Status::Running {
                return match engine.status() {
                    Status::Done => RunOutcome::Completed,
                    _ => RunOutcome::Paused,
                };
            }
            let more = engine.step();
            on_tick(engine);
            if !more {
                return RunOutcome::Completed;
            }
            self.ticker.wait(self.delay);
        }
    }
}
