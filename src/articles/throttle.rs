use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use tokio::sync::Mutex;
use tokio::time::Instant;

const WINDOW: Duration = Duration::from_secs(1);
/// Added to every period so timer jitter cannot squeeze `rate + 1` starts into a window.
const SLACK: Duration = Duration::from_millis(1);

/// Admission gate for request starts.
///
/// Cells are spaced at a little more than `1s / rate` with a burst of one.
/// On top of that the last `rate` admission times are kept, and a start is
/// held back until the oldest of them is a full second old, so no rolling
/// one-second window ever admits more than `rate` starts.
pub struct Throttle {
    limiter: DefaultDirectRateLimiter,
    rate: usize,
    recent: Mutex<VecDeque<Instant>>,
}

impl Throttle {
    pub fn per_second(rate: NonZeroU32) -> Self {
        let quota = Quota::with_period(spacing(rate))
            .unwrap_or_else(|| Quota::per_second(rate))
            .allow_burst(NonZeroU32::MIN);
        Self {
            limiter: RateLimiter::direct(quota),
            rate: rate.get() as usize,
            recent: Mutex::new(VecDeque::new()),
        }
    }

    /// Wait until the next start is allowed. Admissions are handed out one at a time.
    pub async fn admit(&self) {
        let mut recent = self.recent.lock().await;
        self.limiter.until_ready().await;

        if recent.len() >= self.rate
            && let Some(oldest) = recent.pop_front()
        {
            tokio::time::sleep_until(oldest + WINDOW).await;
        }
        recent.push_back(Instant::now());
    }
}

/// `1s / rate`, rounded up to the nanosecond, plus `SLACK`.
fn spacing(rate: NonZeroU32) -> Duration {
    let nanos = (WINDOW.as_nanos() as u64).div_ceil(u64::from(rate.get()));
    Duration::from_nanos(nanos) + SLACK
}
