//! The entry point of this engine: builds a graph from a stop catalog and
//! answers earliest-arrival queries against it.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone};
use model::{
    connection::Connection,
    event::Event,
    stop::Stop,
};
use serde::Serialize;
use utility::id::Id;

use crate::{
    error::UnknownStop,
    graph::Graph,
    reconstruct::{reconstruct, PathVertex},
    weight::EdgeWeightFn,
};

/// An immutable stop catalog. Queries never mutate it; per-query state
/// lives in a parallel array built fresh inside `query` (see
/// `routing::graph`), so `&Timetable::query(...)` only needs `&self`.
pub struct Timetable {
    stops: Vec<Stop>,
    index_of: HashMap<Id<Stop>, usize>,
}

impl Timetable {
    pub fn new(stops: Vec<Stop>) -> Self {
        let index_of = stops
            .iter()
            .enumerate()
            .map(|(index, stop)| (stop.id.clone(), index))
            .collect();
        Self { stops, index_of }
    }

    /// Finds the earliest-arrival connection from `source` to `target`
    /// departing no earlier than `start`. Returns `Ok(None)` when no such
    /// connection exists. Fails with `UnknownStop` if either stop was never
    /// registered with this timetable.
    pub fn query<Tz: TimeZone>(
        &self,
        source: &Id<Stop>,
        target: &Id<Stop>,
        start: DateTime<Tz>,
    ) -> Result<Option<Connection<Tz>>, UnknownStop>
    where
        Tz::Offset: Serialize,
    {
        let source_index = *self
            .index_of
            .get(source)
            .ok_or_else(|| UnknownStop::Source(source.clone()))?;
        let target_index = *self
            .index_of
            .get(target)
            .ok_or_else(|| UnknownStop::Target(target.clone()))?;

        log::info!("query start: {source} -> {target}");

        let mut graph: Graph<Tz, EdgeWeightFn<Tz>> = Graph::new(self.stops.len());
        for (from_index, stop) in self.stops.iter().enumerate() {
            for (next_stop, events) in group_by_next_stop(&stop.events) {
                let to_index = *self
                    .index_of
                    .get(&next_stop)
                    .expect("event references a next_stop not present in the timetable");
                graph.add_edge(from_index, to_index, EdgeWeightFn::new(events, start.clone()));
            }
        }

        let states = graph.shortest_path(source_index, target_index, start);
        if states[target_index].weight.is_none() {
            log::info!("query complete: no connection");
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut cursor = target_index;
        loop {
            path.push(PathVertex {
                stop: self.stops[cursor].id.clone(),
                arrival: states[cursor]
                    .weight
                    .clone()
                    .expect("vertex on the settled path has a weight"),
                line: states[cursor].current_line.clone(),
            });
            match states[cursor].predecessor {
                Some(predecessor) => cursor = predecessor,
                None => break,
            }
        }
        path.reverse();

        let connection = reconstruct(&path);
        match &connection {
            Some(connection) => log::info!("query complete: {} legs, arrival settled", connection.legs.len()),
            None => log::info!("query complete: no connection"),
        }
        Ok(connection)
    }
}

fn group_by_next_stop(events: &[Event]) -> HashMap<Id<Stop>, Vec<Event>> {
    let mut groups: HashMap<Id<Stop>, Vec<Event>> = HashMap::new();
    for event in events {
        groups.entry(event.next_stop.clone()).or_default().push(event.clone());
    }
    groups
}
