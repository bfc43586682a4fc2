//! Time-dependent earliest-arrival routing over a scheduled stop/line
//! network: a Dijkstra relaxation whose edge weights are closures over a
//! timetable, bound to the query's reference date.

pub mod construct;
pub mod error;
pub mod graph;
pub mod queue;
pub mod reconstruct;
pub mod timetable;
pub mod weight;

pub use error::UnknownStop;
pub use timetable::Timetable;
