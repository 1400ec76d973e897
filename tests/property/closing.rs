// Properties of closing-time resolution and countdown formatting

use chrono::{Datelike, Duration, Timelike};
use nearby_places::models::schedule::{ClockTime, DayHours, WeeklySchedule};
use nearby_places::services::countdown::{
    format_duration, resolve_closing_time, time_remaining, urgency_tier, UrgencyTier,
};
use proptest::prelude::*;

use crate::fixtures::times::{sunday, wednesday};

fn clock_time() -> impl Strategy<Value = ClockTime> {
    (0u16..24, 0u16..60).prop_map(|(h, m)| ClockTime::from_hm(h, m).unwrap())
}

fn tier_rank(tier: UrgencyTier) -> u8 {
    match tier {
        UrgencyTier::Normal => 0,
        UrgencyTier::Warning => 1,
        UrgencyTier::Urgent => 2,
    }
}

proptest! {
    /// Property: any close time before 24:00 lands on the same calendar date as now
    #[test]
    fn prop_close_stays_on_todays_date(close in clock_time(), hour in 0u32..24, minute in 0u32..60) {
        let now = wednesday(hour, minute);
        let schedule = WeeklySchedule::uniform(DayHours::new(ClockTime::from_hhmm(0).unwrap(), close));
        let resolved = resolve_closing_time(Some(&schedule), &now);

        prop_assert_eq!(resolved.date_naive(), now.date_naive());
        prop_assert_eq!(resolved.hour(), close.hours());
        prop_assert_eq!(resolved.minute(), close.minutes());
        prop_assert_eq!(resolved.second(), 0);
    }

    /// Property: 2400 is always the next midnight
    #[test]
    fn prop_end_of_day_is_next_midnight(hour in 0u32..24, minute in 0u32..60) {
        let now = sunday(hour, minute);
        let schedule = WeeklySchedule::uniform(DayHours::new(ClockTime::from_hhmm(900).unwrap(), ClockTime::END_OF_DAY));
        let resolved = resolve_closing_time(Some(&schedule), &now);

        prop_assert_eq!(resolved.date_naive(), now.date_naive().succ_opt().unwrap());
        prop_assert_eq!((resolved.hour(), resolved.minute()), (0, 0));
        prop_assert!(resolved > now);
    }

    /// Property: a missing entry for today resolves to 23:00 whatever the other days say
    #[test]
    fn prop_missing_day_defaults_to_23(close in clock_time(), hour in 0u32..24) {
        let now = wednesday(hour, 0);
        let mut days = [Some(DayHours::new(ClockTime::from_hhmm(0).unwrap(), close)); 7];
        days[now.weekday().num_days_from_sunday() as usize] = None;

        let resolved = resolve_closing_time(Some(&WeeklySchedule::new(days)), &now);
        prop_assert_eq!((resolved.hour(), resolved.minute()), (23, 0));
    }

    /// Property: remaining time is never negative
    #[test]
    fn prop_remaining_never_negative(offset_minutes in -5000i64..5000) {
        let now = wednesday(12, 0);
        let closes_at = now + Duration::minutes(offset_minutes);
        let remaining = time_remaining(&closes_at, &now);

        prop_assert!(remaining >= Duration::zero());
        prop_assert_eq!(remaining, Duration::minutes(offset_minutes.max(0)));
    }

    /// Property: the label always reflects floor hours and minutes
    #[test]
    fn prop_label_matches_floor_division(seconds in 1i64..200_000) {
        let label = format_duration(Duration::seconds(seconds));
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let expected = if hours > 0 { format!("{hours}h {minutes}m") } else { format!("{minutes}m") };
        prop_assert_eq!(label, expected);
    }

    /// Property: more time left is never more urgent
    #[test]
    fn prop_tier_is_monotonic(a in 0i64..20_000, b in 0i64..20_000) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let short_tier = urgency_tier(Duration::seconds(short));
        let long_tier = urgency_tier(Duration::seconds(long));
        prop_assert!(tier_rank(short_tier) >= tier_rank(long_tier));
    }
}
