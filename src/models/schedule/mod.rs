//! Weekly opening hours.
//!
//! Providers describe opening hours as seven daily periods, Sunday first,
//! each holding an open and a close time packed as `HHMM` integers
//! (`2200` is 10:00 PM). A missing period means the place is closed that
//! day, or the provider did not say.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::PlacesError;

/// A time of day packed as `HHMM`. `2400` is the midnight that ends the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawClockTime", into = "u16")]
pub struct ClockTime(u16);

/// Providers send the packed value either as a number or as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawClockTime {
    Number(u16),
    Text(String),
}

impl ClockTime {
    pub const END_OF_DAY: ClockTime = ClockTime(2400);

    pub fn from_hhmm(value: u16) -> Result<Self, PlacesError> {
        let (hours, minutes) = (value / 100, value % 100);
        if minutes >= 60 || hours > 24 || (hours == 24 && minutes != 0) {
            return Err(PlacesError::InvalidSchedule(format!(
                "{value} is not a valid HHMM time"
            )));
        }
        Ok(Self(value))
    }

    pub fn from_hm(hours: u16, minutes: u16) -> Result<Self, PlacesError> {
        let packed = hours
            .checked_mul(100)
            .filter(|_| minutes < 60)
            .and_then(|packed| packed.checked_add(minutes))
            .ok_or_else(|| PlacesError::InvalidSchedule(format!("{hours}:{minutes:02} is not a valid time")))?;
        Self::from_hhmm(packed)
    }

    pub fn hhmm(self) -> u16 {
        self.0
    }

    pub fn hours(self) -> u32 {
        u32::from(self.0 / 100)
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0 % 100)
    }

    pub fn is_end_of_day(self) -> bool {
        self == Self::END_OF_DAY
    }

    /// Minutes since midnight; `2400` is 1440.
    pub fn minute_of_day(self) -> u32 {
        self.hours() * 60 + self.minutes()
    }

    /// Wall-clock time, or `None` for [`ClockTime::END_OF_DAY`], which has
    /// no representation within the same day.
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hours(), self.minutes(), 0)
    }
}

impl TryFrom<u16> for ClockTime {
    type Error = PlacesError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_hhmm(value)
    }
}

impl TryFrom<RawClockTime> for ClockTime {
    type Error = PlacesError;

    fn try_from(raw: RawClockTime) -> Result<Self, Self::Error> {
        match raw {
            RawClockTime::Number(value) => Self::from_hhmm(value),
            RawClockTime::Text(text) => {
                let value = text.trim().parse::<u16>().map_err(|_| {
                    PlacesError::InvalidSchedule(format!("'{text}' is not a HHMM time"))
                })?;
                Self::from_hhmm(value)
            }
        }
    }
}

impl From<ClockTime> for u16 {
    fn from(time: ClockTime) -> Self {
        time.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

/// Opening hours for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PeriodWire", into = "PeriodWire")]
pub struct DayHours {
    pub open: ClockTime,
    pub close: ClockTime,
}

impl DayHours {
    pub fn new(open: ClockTime, close: ClockTime) -> Self {
        Self { open, close }
    }

    /// True when the close time is numerically before the open time, i.e.
    /// the business keeps going past midnight.
    pub fn spans_midnight(&self) -> bool {
        self.close < self.open
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct PeriodWire {
    open: TimePoint,
    close: TimePoint,
}

#[derive(Clone, Serialize, Deserialize)]
struct TimePoint {
    time: ClockTime,
}

impl From<PeriodWire> for DayHours {
    fn from(wire: PeriodWire) -> Self {
        Self::new(wire.open.time, wire.close.time)
    }
}

impl From<DayHours> for PeriodWire {
    fn from(hours: DayHours) -> Self {
        Self {
            open: TimePoint { time: hours.open },
            close: TimePoint { time: hours.close },
        }
    }
}

/// Seven daily entries, index 0 = Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<DayHours>>", into = "Vec<Option<DayHours>>")]
pub struct WeeklySchedule([Option<DayHours>; 7]);

impl WeeklySchedule {
    pub fn new(days: [Option<DayHours>; 7]) -> Self {
        Self(days)
    }

    /// Same hours every day of the week.
    pub fn uniform(hours: DayHours) -> Self {
        Self([Some(hours); 7])
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Option<&DayHours> {
        self.0[weekday.num_days_from_sunday() as usize].as_ref()
    }

    pub fn days(&self) -> &[Option<DayHours>; 7] {
        &self.0
    }

    /// Whether the place is open at the wall-clock instant `at`.
    ///
    /// Equal open and close times mean open around the clock. Hours that
    /// span midnight count from the open time today and until the close
    /// time on the following morning.
    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        let minute = at.hour() * 60 + at.minute();

        let today = self.for_weekday(at.weekday()).is_some_and(|hours| {
            let (open, close) = (hours.open.minute_of_day(), hours.close.minute_of_day());
            if open == close {
                true
            } else if hours.spans_midnight() {
                minute >= open
            } else {
                open <= minute && minute < close
            }
        });

        let spill = self
            .for_weekday(at.weekday().pred())
            .is_some_and(|hours| hours.spans_midnight() && minute < hours.close.minute_of_day());

        today || spill
    }
}

impl TryFrom<Vec<Option<DayHours>>> for WeeklySchedule {
    type Error = PlacesError;

    fn try_from(days: Vec<Option<DayHours>>) -> Result<Self, Self::Error> {
        let count = days.len();
        let days: [Option<DayHours>; 7] = days.try_into().map_err(|_| {
            PlacesError::InvalidSchedule(format!("expected 7 daily periods, got {count}"))
        })?;
        Ok(Self(days))
    }
}

impl From<WeeklySchedule> for Vec<Option<DayHours>> {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule.0.to_vec()
    }
}
