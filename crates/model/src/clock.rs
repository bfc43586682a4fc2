//! Scheduled time-of-day values ("HH:MM" / "HHMM"), interpreted against a
//! real calendar instant to produce an absolute instant. Hours may exceed 23
//! to express a departure on a later calendar day without picking a new
//! reference date, the way GTFS-style schedules commonly do.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};

/// A parsed, not-yet-anchored schedule time such as `08:05` or `123:40`
/// (the latter meaning 03:40, five days after the reference date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimeFormat {
    input: String,
}

impl fmt::Display for InvalidTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid clock time {:?}, expected \"HH:MM\" or \"HHMM\"",
            self.input
        )
    }
}

impl std::error::Error for InvalidTimeFormat {}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Parses `"HH:MM"` or `"HHMM"`. `HH` is one or more digits (may exceed
    /// 23); `MM` is exactly two digits, `00`-`59`. No surrounding or internal
    /// whitespace is tolerated.
    pub fn parse(input: &str) -> Result<Self, InvalidTimeFormat> {
        let invalid = || InvalidTimeFormat {
            input: input.to_owned(),
        };

        let (hour_digits, minute_digits) = match input.split_once(':') {
            Some((hour, minute)) => (hour, minute),
            None => {
                if input.len() < 3 {
                    return Err(invalid());
                }
                input.split_at(input.len() - 2)
            }
        };

        if hour_digits.is_empty()
            || minute_digits.len() != 2
            || !hour_digits.bytes().all(|b| b.is_ascii_digit())
            || !minute_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour: u32 = hour_digits.parse().map_err(|_| invalid())?;
        let minute: u32 = minute_digits.parse().map_err(|_| invalid())?;
        if minute > 59 {
            return Err(invalid());
        }

        Ok(Self { hour, minute })
    }

    /// Interprets this clock time against `reference`'s calendar date, in
    /// `reference`'s time zone. Hours at or beyond 24 carry into later days.
    pub fn interpret<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> DateTime<Tz> {
        let midnight = reference
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time of day");
        let midnight = reference
            .timezone()
            .from_local_datetime(&midnight)
            .single()
            .expect("reference date has an unambiguous midnight in its own time zone");
        midnight + Duration::hours(self.hour as i64) + Duration::minutes(self.minute as i64)
    }

    /// This clock time's offset from midnight, as a duration. May exceed 24
    /// hours for an overflowing hour field.
    pub fn offset(&self) -> Duration {
        Duration::hours(self.hour as i64) + Duration::minutes(self.minute as i64)
    }

    /// The clock time denoting `offset` past midnight. `offset` must be
    /// non-negative.
    pub fn from_offset(offset: Duration) -> Self {
        let total_minutes = offset.num_minutes();
        Self::new((total_minutes / 60) as u32, (total_minutes % 60) as u32)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = InvalidTimeFormat;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        format!("{:02}:{:02}", value.hour, value.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
