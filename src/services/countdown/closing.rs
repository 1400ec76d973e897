//! Closing-time resolution.
//!
//! Only today's entry is consulted and its close time is placed on today's
//! date as-is. Overnight entries (close before open, e.g. 2200→0100) are
//! not rolled over to the next day. The one exception is `2400`, which is
//! the midnight ending today.

use chrono::{DateTime, Datelike, NaiveTime, TimeZone};

use crate::models::schedule::WeeklySchedule;
use crate::utils::date::{at_clock_time, at_time};

/// Closing hour assumed when today's hours are unknown.
pub const DEFAULT_CLOSING_HOUR: u32 = 23;

pub fn resolve_closing_time<Tz: TimeZone>(
    schedule: Option<&WeeklySchedule>,
    now: &DateTime<Tz>,
) -> DateTime<Tz> {
    resolve_closing_time_with_default(schedule, now, DEFAULT_CLOSING_HOUR)
}

pub fn resolve_closing_time_with_default<Tz: TimeZone>(
    schedule: Option<&WeeklySchedule>,
    now: &DateTime<Tz>,
    default_hour: u32,
) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();

    schedule
        .and_then(|schedule| schedule.for_weekday(now.weekday()))
        .and_then(|hours| at_clock_time(&tz, today, hours.close))
        .or_else(|| {
            let fallback = NaiveTime::from_hms_opt(default_hour.min(23), 0, 0)?;
            at_time(&tz, today, fallback)
        })
        // Only reachable when a DST gap swallows the fallback hour too.
        .unwrap_or_else(|| now.clone())
}
