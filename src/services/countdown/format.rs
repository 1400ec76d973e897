use chrono::{DateTime, Duration, TimeZone};

use super::models::{UrgencyThresholds, UrgencyTier};

/// Time left until `closes_at`, never negative.
pub fn time_remaining<Tz: TimeZone>(closes_at: &DateTime<Tz>, now: &DateTime<Tz>) -> Duration {
    closes_at
        .clone()
        .signed_duration_since(now.clone())
        .max(Duration::zero())
}

/// Tier for `remaining` with the default 30 minute / 2 hour thresholds.
pub fn urgency_tier(remaining: Duration) -> UrgencyTier {
    UrgencyThresholds::default().tier(remaining)
}

/// `"Closed"`, `"45m"` or `"2h 5m"`, truncated to whole minutes.
pub fn format_duration(remaining: Duration) -> String {
    if remaining <= Duration::zero() {
        return "Closed".to_string();
    }

    let total_minutes = remaining.num_minutes();
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
