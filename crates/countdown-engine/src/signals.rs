use std::pin::Pin;
use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior, Sleep};

/// What woke the countdown up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Tick,
    Deadline,
}

/// The armed deadline timer and its companion ticker.
///
/// Both are created together and dropped together; dropping them is how a
/// pause cancels any pending fire.
pub struct Signals {
    deadline: Pin<Box<Sleep>>,
    ticker: Interval,
}

impl Signals {
    /// Arm a deadline `duration` from now and a ticker whose first fire is one
    /// `tick` from now. A negative duration makes the deadline fire immediately.
    pub fn arm(duration: chrono::TimeDelta, tick: Duration) -> Self {
        let now = Instant::now();
        let until_deadline = duration.to_std().unwrap_or(Duration::ZERO);

        let mut ticker = time::interval_at(now + tick, tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self {
            deadline: Box::pin(time::sleep_until(now + until_deadline)),
            ticker,
        }
    }

    /// Wait for whichever signal fires next. No ordering is guaranteed when
    /// both are ready at the same instant.
    pub async fn next(&mut self) -> Signal {
        tokio::select! {
            _ = self.ticker.tick() => Signal::Tick,
            () = self.deadline.as_mut() => Signal::Deadline,
        }
    }
}
