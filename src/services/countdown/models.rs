use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::schedule::WeeklySchedule;

use super::closing::resolve_closing_time_with_default;
use super::format::{format_duration, time_remaining};

/// How close a place is to closing.
///
/// Ordered by increasing urgency so escalations can be detected with `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    /// Two hours or more left
    Normal,
    /// Less than two hours left
    Warning,
    /// Less than thirty minutes left, or closed
    Urgent,
}

impl Default for UrgencyTier {
    fn default() -> Self {
        Self::Normal
    }
}

impl UrgencyTier {
    pub fn label(self) -> &'static str {
        match self {
            UrgencyTier::Normal => "normal",
            UrgencyTier::Warning => "warning",
            UrgencyTier::Urgent => "urgent",
        }
    }
}

/// Upper bounds (exclusive) for the urgent and warning tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyThresholds {
    pub urgent: Duration,
    pub warning: Duration,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            urgent: Duration::minutes(30),
            warning: Duration::hours(2),
        }
    }
}

impl UrgencyThresholds {
    pub fn tier(&self, remaining: Duration) -> UrgencyTier {
        if remaining < self.urgent {
            UrgencyTier::Urgent
        } else if remaining < self.warning {
            UrgencyTier::Warning
        } else {
            UrgencyTier::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownConfig {
    pub default_closing_hour: u32,
    pub thresholds: UrgencyThresholds,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            default_closing_hour: super::closing::DEFAULT_CLOSING_HOUR,
            thresholds: UrgencyThresholds::default(),
        }
    }
}

/// Display state of one place's closing countdown at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown<Tz: TimeZone> {
    pub closes_at: DateTime<Tz>,
    pub remaining: Duration,
    pub tier: UrgencyTier,
    pub label: String,
}

impl<Tz: TimeZone> Countdown<Tz> {
    /// Countdown towards an already-resolved closing time.
    pub fn towards(closes_at: DateTime<Tz>, now: &DateTime<Tz>, thresholds: &UrgencyThresholds) -> Self {
        let remaining = time_remaining(&closes_at, now);
        Self {
            tier: thresholds.tier(remaining),
            label: format_duration(remaining),
            closes_at,
            remaining,
        }
    }

    /// Resolve today's closing time from `schedule` and count down to it.
    pub fn for_schedule(
        schedule: Option<&WeeklySchedule>,
        now: &DateTime<Tz>,
        config: &CountdownConfig,
    ) -> Self {
        let closes_at = resolve_closing_time_with_default(schedule, now, config.default_closing_hour);
        Self::towards(closes_at, now, &config.thresholds)
    }

    pub fn is_closed(&self) -> bool {
        self.remaining <= Duration::zero()
    }
}
