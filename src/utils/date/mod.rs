// Date utility functions

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};

use crate::models::schedule::ClockTime;

/// The instant `time` on `date` in `tz`. When a DST jump makes the wall
/// time ambiguous the earlier instant is used; when it skips the wall time
/// entirely there is no such instant.
pub fn at_time<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(time)).earliest()
}

/// The instant a `HHMM` clock time falls on for `date`. `2400` is the
/// midnight at the end of `date`.
pub fn at_clock_time<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: ClockTime) -> Option<DateTime<Tz>> {
    match time.to_naive_time() {
        Some(wall) => at_time(tz, date, wall),
        None => at_time(tz, date.succ_opt()?, NaiveTime::MIN),
    }
}
