use chrono::Duration;
use serde::Serialize;
use utility::id::Id;

use crate::stop::Stop;

/// Travel duration from one stop on a line to the next stop on that same
/// line. A [`crate::line::Line`] owns an ordered sequence of these; they are
/// the input to the headway-expansion helper in `routing::build`, which
/// turns them into the concrete [`crate::event::Event`]s a stop actually
/// carries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub from_stop: Id<Stop>,
    pub to_stop: Id<Stop>,
    #[serde(serialize_with = "utility::serde::duration::serialize")]
    pub travel_time: Duration,
}

impl Segment {
    pub fn new(from_stop: Id<Stop>, to_stop: Id<Stop>, travel_time: Duration) -> Self {
        Self {
            from_stop,
            to_stop,
            travel_time,
        }
    }
}
