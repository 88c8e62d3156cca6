use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Per-IP waitlist submission limiter using a fixed window.
///
/// Process-local and advisory only: counters are not shared across
/// instances, so multi-instance deployments get a per-instance limit.
pub struct WaitlistRateLimiter {
    /// ip -> (count, window_start)
    entries: DashMap<IpAddr, (u32, Instant)>,
}

impl WaitlistRateLimiter {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check if a submission is allowed. Returns Ok(()) or Err with retry-after seconds.
    pub fn check(&self, ip: IpAddr, limit: u32, window_secs: u64) -> Result<(), u64> {
        let window = Duration::from_secs(window_secs);
        let now = Instant::now();

        let mut entry = self.entries.entry(ip).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > window {
            *count = 1;
            *start = now;
            return Ok(());
        }

        if *count >= limit {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(window_secs.saturating_sub(elapsed).max(1));
        }

        *count += 1;
        Ok(())
    }

    /// Remove stale entries older than the given duration.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.entries
            .retain(|_, (_, start)| now.duration_since(*start) < max_age);
    }
}
