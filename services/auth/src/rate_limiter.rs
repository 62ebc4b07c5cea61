//! Rate limiter for failed logins, keyed by username

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::info;

/// Rate limiter configuration
#[derive(Debug, Clone)]
pub struct RateLimiterConfig {
    /// Failed attempts allowed inside one window
    pub max_attempts: u32,
    /// Time window in seconds
    pub window_seconds: u64,
    /// Ban duration in seconds
    pub ban_duration_seconds: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            window_seconds: 300,        // 5 minutes
            ban_duration_seconds: 3600, // 1 hour
        }
    }
}

#[derive(Debug)]
struct RateLimiterEntry {
    failures: u32,
    window_start: Instant,
    ban_expires: Option<Instant>,
}

/// Rate limiter
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimiterConfig,
    entries: Arc<Mutex<HashMap<String, RateLimiterEntry>>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimiterConfig) -> Self {
        Self {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Whether `key` may attempt a login right now
    pub async fn is_allowed(&self, key: &str) -> bool {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        let Some(entry) = entries.get_mut(key) else {
            return true;
        };

        match entry.ban_expires {
            Some(ban_expires) if now < ban_expires => false,
            Some(_) => {
                entries.remove(key);
                true
            }
            None => true,
        }
    }

    /// Count a failed login, banning the key once the limit is reached
    ///
    /// Entries whose window has passed and that carry no live ban are swept
    /// first, so one-off failures under random usernames do not pile up.
    pub async fn record_failure(&self, key: &str) {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();
        let window = Duration::from_secs(self.config.window_seconds);

        entries.retain(|_, entry| {
            entry.ban_expires.is_some_and(|ban_expires| now < ban_expires)
                || now.duration_since(entry.window_start) < window
        });

        let entry = entries.entry(key.to_string()).or_insert(RateLimiterEntry {
            failures: 0,
            window_start: now,
            ban_expires: None,
        });

        if now.duration_since(entry.window_start) >= window {
            entry.failures = 0;
            entry.window_start = now;
        }

        entry.failures += 1;

        if entry.failures >= self.config.max_attempts {
            entry.ban_expires = Some(now + Duration::from_secs(self.config.ban_duration_seconds));
            info!(
                "Banned key {} for {} seconds",
                key, self.config.ban_duration_seconds
            );
        }
    }

    /// Forget the failures recorded for `key`
    pub async fn reset(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }
}
