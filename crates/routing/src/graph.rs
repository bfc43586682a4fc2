//! Vertices are plain indices; edges carry a weight implementation that is
//! evaluated against the current tentative arrival instant and currently
//! boarded line. Per-query mutable state (tentative arrival, boarded line,
//! predecessor) lives in a parallel array indexed by vertex, not on the
//! graph itself, so the graph stays immutable across concurrent queries
//! (see `routing::timetable`).

use chrono::{DateTime, Duration, TimeZone};
use model::line::Line;
use utility::id::Id;

use crate::queue::VertexQueue;

/// Evaluates one edge at a given instant and currently boarded line,
/// returning the travel duration and the line actually ridden, or `None` if
/// the edge has no feasible departure.
pub trait Weight<Tz: TimeZone> {
    fn evaluate(
        &self,
        now: &DateTime<Tz>,
        line_in_use: Option<&Id<Line>>,
    ) -> Option<(Duration, Id<Line>)>;
}

/// Per-vertex mutable state for one query.
#[derive(Clone)]
pub struct VertexState<Tz: TimeZone> {
    pub weight: Option<DateTime<Tz>>,
    pub current_line: Option<Id<Line>>,
    pub predecessor: Option<usize>,
}

impl<Tz: TimeZone> VertexState<Tz> {
    fn unset() -> Self {
        Self {
            weight: None,
            current_line: None,
            predecessor: None,
        }
    }
}

/// A graph over `0..vertex_count` vertex indices with weighted directed
/// edges. Built once per timetable; queried many times.
pub struct Graph<Tz: TimeZone, W> {
    adjacency: Vec<Vec<(usize, W)>>,
    _tz: std::marker::PhantomData<Tz>,
}

impl<Tz: TimeZone, W: Weight<Tz>> Graph<Tz, W> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: (0..vertex_count).map(|_| Vec::new()).collect(),
            _tz: std::marker::PhantomData,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) {
        self.adjacency[from].push((to, weight));
    }

    /// Runs the modified Dijkstra relaxation described for this engine from
    /// `source`, starting at `start`. Returns the settled state of every
    /// vertex; `states[target].weight` is `None` if `target` is
    /// unreachable.
    pub fn shortest_path(&self, source: usize, target: usize, start: DateTime<Tz>) -> Vec<VertexState<Tz>> {
        let n = self.vertex_count();
        let mut states: Vec<VertexState<Tz>> = (0..n).map(|_| VertexState::unset()).collect();
        states[source].weight = Some(start);

        let mut queue = VertexQueue::with_capacity(n);
        for vertex in 0..n {
            queue.push(vertex, states[vertex].weight.clone());
        }

        log::info!("relaxation starting from vertex {source} toward {target}");

        while let Some(v) = queue.pop() {
            let current_weight = match states[v].weight.clone() {
                Some(weight) => weight,
                None => {
                    log::debug!("remainder of the queue is unreachable, stopping early");
                    break;
                }
            };
            log::debug!("settled vertex {v}");

            let current_line = states[v].current_line.clone();
            for (neighbor, weight) in &self.adjacency[v] {
                let Some((duration, line_taken)) = weight.evaluate(&current_weight, current_line.as_ref()) else {
                    continue;
                };
                let candidate = current_weight.clone() + duration;
                let better = match &states[*neighbor].weight {
                    None => true,
                    Some(existing) => &candidate < existing,
                };
                if better {
                    states[*neighbor].weight = Some(candidate.clone());
                    states[*neighbor].current_line = Some(line_taken);
                    states[*neighbor].predecessor = Some(v);
                    queue.decrease_key(*neighbor, Some(candidate));
                }
            }
        }

        states
    }
}
