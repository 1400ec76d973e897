// HHMM clock times and weekly schedules

use nearby_places::models::schedule::{ClockTime, WeeklySchedule};
use test_case::test_case;

#[test_case(0, 0, 0)]
#[test_case(930, 9, 30)]
#[test_case(2200, 22, 0)]
#[test_case(2359, 23, 59)]
#[test_case(2400, 24, 0)]
fn test_valid_clock_times(value: u16, hours: u32, minutes: u32) {
    let time = ClockTime::from_hhmm(value).unwrap();
    assert_eq!((time.hours(), time.minutes()), (hours, minutes));
}

#[test_case(960 ; "minutes out of range")]
#[test_case(2401 ; "past end of day")]
#[test_case(2500 ; "hour out of range")]
fn test_invalid_clock_times(value: u16) {
    assert!(ClockTime::from_hhmm(value).is_err());
}

#[test]
fn test_schedule_json_from_provider_shape() {
    let json = r#"[
        null,
        {"open": {"time": 1700}, "close": {"time": 2300}},
        {"open": {"time": 1700}, "close": {"time": 2300}},
        {"open": {"time": 1700}, "close": {"time": 2300}},
        {"open": {"time": 1700}, "close": {"time": 2400}},
        {"open": {"time": 1700}, "close": {"time": 2400}},
        {"open": {"time": 1600}, "close": {"time": 2300}}
    ]"#;
    let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();
    assert!(schedule.days()[0].is_none());
    assert!(schedule.days()[5].unwrap().close.is_end_of_day());
}

#[test]
fn test_schedule_must_have_seven_days() {
    let json = r#"[{"open": {"time": 900}, "close": {"time": 1700}}]"#;
    assert!(serde_json::from_str::<WeeklySchedule>(json).is_err());
}
