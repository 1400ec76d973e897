// Countdown formatting and urgency tiers

use chrono::Duration;
use nearby_places::services::countdown::{format_duration, urgency_tier, UrgencyTier};
use test_case::test_case;

#[test_case(0 => "Closed" ; "zero")]
#[test_case(-90 => "Closed" ; "negative")]
#[test_case(59 => "0m" ; "under a minute")]
#[test_case(45 * 60 => "45m" ; "minutes only")]
#[test_case(60 * 60 => "1h 0m" ; "exactly an hour")]
#[test_case(2 * 3600 + 5 * 60 + 59 => "2h 5m" ; "seconds are dropped")]
#[test_case(26 * 3600 => "26h 0m" ; "more than a day")]
fn test_format_duration(seconds: i64) -> String {
    format_duration(Duration::seconds(seconds))
}

#[test_case(Duration::minutes(29) => UrgencyTier::Urgent)]
#[test_case(Duration::minutes(30) => UrgencyTier::Warning)]
#[test_case(Duration::minutes(119) => UrgencyTier::Warning)]
#[test_case(Duration::minutes(120) => UrgencyTier::Normal)]
#[test_case(Duration::zero() => UrgencyTier::Urgent)]
fn test_urgency_tier(remaining: Duration) -> UrgencyTier {
    urgency_tier(remaining)
}
