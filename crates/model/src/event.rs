use chrono::Duration;
use serde::Serialize;
use utility::id::Id;

use crate::{clock::ClockTime, line::Line, stop::Stop};

/// A single scheduled departure from a stop, toward `next_stop`, on
/// `line`. Each [`Stop`] carries its own ordered list of these; events
/// sharing the same `next_stop` form one edge's "event group" in the
/// routing graph.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub departure: ClockTime,
    pub line: Id<Line>,
    pub next_stop: Id<Stop>,
    #[serde(serialize_with = "utility::serde::duration::serialize")]
    pub travel_time: Duration,
}

impl Event {
    pub fn new(
        departure: ClockTime,
        line: Id<Line>,
        next_stop: Id<Stop>,
        travel_time: Duration,
    ) -> Self {
        Self {
            departure,
            line,
            next_stop,
            travel_time,
        }
    }
}
