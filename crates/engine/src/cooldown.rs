use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Time-windowed re-entry guard, one timestamp per key.
///
/// Callers key by the item's *display name*, matching the observed machine
/// behavior; two distinct items sharing a name therefore share a window.
/// Constructed once per process lifetime, never per request.
///
/// Check-and-arm is atomic per key (the map's entry API holds the shard
/// lock), so two racing purchases of the same item cannot both be allowed.
#[derive(Debug)]
pub struct CooldownGuard {
    window: Duration,
    last_allowed: DashMap<String, DateTime<Utc>>,
}

impl CooldownGuard {
    /// Fixed production window between purchases of the same item.
    pub fn default_window() -> Duration {
        Duration::seconds(5)
    }

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_allowed: DashMap::new(),
        }
    }

    /// Allow and arm if no prior timestamp exists for `key` or the window
    /// has elapsed; otherwise report the remaining wait without touching the
    /// stored timestamp.
    pub fn try_arm(&self, key: &str, now: DateTime<Utc>) -> Result<(), Duration> {
        match self.last_allowed.entry(key.to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(now);
                Ok(())
            }
            Entry::Occupied(mut entry) => {
                let elapsed = now - *entry.get();
                if elapsed >= self.window {
                    entry.insert(now);
                    Ok(())
                } else {
                    Err(self.window - elapsed)
                }
            }
        }
    }
}

impl Default for CooldownGuard {
    fn default() -> Self {
        Self::new(Self::default_window())
    }
}
