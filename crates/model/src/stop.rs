use serde::Serialize;
use utility::id::{HasId, Id};

use crate::event::Event;

/// A physical boarding/alighting point. Two `Stop`s with the same `id` are
/// the same stop; `id` is the lookup key a [`crate::connection::Leg`] and a
/// `Timetable` query use to refer to stops, never the `name`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: Id<Stop>,
    pub name: String,
    pub events: Vec<Event>,
}

impl Stop {
    pub fn new(id: Id<Stop>, name: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            id,
            name: name.into(),
            events,
        }
    }
}

impl HasId for Stop {
    type IdType = String;
}
