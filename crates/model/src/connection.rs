use chrono::{DateTime, TimeZone};
use serde::Serialize;
use utility::id::Id;

use crate::{line::Line, stop::Stop};

/// A maximal contiguous sub-journey on a single line: board at `first_stop`,
/// stay on `line`, alight at `last_stop`. Consecutive legs of the same
/// [`Connection`] share an endpoint stop (the transfer) but never share a
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub line: Id<Line>,
    pub first_stop: Id<Stop>,
    pub last_stop: Id<Stop>,
}

impl Leg {
    pub fn new(line: Id<Line>, first_stop: Id<Stop>, last_stop: Id<Stop>) -> Self {
        Self {
            line,
            first_stop,
            last_stop,
        }
    }
}

/// The result of a successful timetable query: the instant of arrival at
/// the target stop, and the ordered legs that get a passenger there.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<Tz: TimeZone>
where
    Tz::Offset: Serialize,
{
    pub arrival: DateTime<Tz>,
    pub legs: Vec<Leg>,
}

impl<Tz: TimeZone> Connection<Tz>
where
    Tz::Offset: Serialize,
{
    pub fn new(arrival: DateTime<Tz>, legs: Vec<Leg>) -> Self {
        Self { arrival, legs }
    }
}

impl<Tz: TimeZone> PartialEq for Connection<Tz>
where
    Tz::Offset: Serialize,
{
    fn eq(&self, other: &Self) -> bool {
        self.arrival == other.arrival && self.legs == other.legs
    }
}
