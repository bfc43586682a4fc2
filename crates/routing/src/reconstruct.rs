//! Turns a settled path of vertices into a `Connection`: a sequence of legs,
//! each a maximal run of the same line.

use chrono::{DateTime, TimeZone};
use model::{
    connection::{Connection, Leg},
    line::Line,
    stop::Stop,
};
use utility::id::Id;

/// One vertex on a settled path: the stop it represents, the arrival
/// instant at that stop, and the line ridden to reach it (`None` only for
/// the source).
pub struct PathVertex<Tz: TimeZone> {
    pub stop: Id<Stop>,
    pub arrival: DateTime<Tz>,
    pub line: Option<Id<Line>>,
}

/// Builds a `Connection` from a source-to-target path (`path[0]` is the
/// source, `path.last()` the target). Returns `None` if the path has fewer
/// than two vertices, matching "no connection" for an unreachable or
/// trivial (source == target) query.
pub fn reconstruct<Tz: TimeZone>(path: &[PathVertex<Tz>]) -> Option<Connection<Tz>>
where
    Tz::Offset: serde::Serialize,
{
    if path.len() < 2 {
        return None;
    }

    let mut legs = Vec::new();
    let mut leg_line = path[1].line.clone().expect("non-source vertex has a line");
    let mut leg_first_stop = path[0].stop.clone();

    for window in path[1..].windows(2) {
        let current = &window[1];
        let previous = &window[0];
        let current_line = current
            .line
            .clone()
            .expect("non-source vertex has a line");
        if current_line.raw() != leg_line.raw() {
            legs.push(Leg::new(leg_line, leg_first_stop, previous.stop.clone()));
            leg_line = current_line;
            leg_first_stop = previous.stop.clone();
        }
    }

    let target = path.last().expect("path has at least two vertices");
    legs.push(Leg::new(leg_line, leg_first_stop, target.stop.clone()));

    Some(Connection::new(target.arrival.clone(), legs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn vertex(stop: &str, minute: u32, line: Option<&str>) -> PathVertex<Utc> {
        PathVertex {
            stop: Id::new(stop.to_owned()),
            arrival: Utc.with_ymd_and_hms(2020, 10, 15, 10, minute, 0).unwrap(),
            line: line.map(|l| Id::new(l.to_owned())),
        }
    }

    #[test]
    fn single_leg_path() {
        let path = vec![vertex("a", 0, None), vertex("b", 10, Some("blue"))];
        let connection = reconstruct(&path).unwrap();
        assert_eq!(connection.legs.len(), 1);
        assert_eq!(connection.legs[0].first_stop.raw(), "a");
        assert_eq!(connection.legs[0].last_stop.raw(), "b");
        assert_eq!(connection.legs[0].line.raw(), "blue");
    }

    #[test]
    fn splits_legs_on_line_change() {
        let path = vec![
            vertex("a", 0, None),
            vertex("b", 10, Some("red")),
            vertex("c", 20, Some("blue")),
        ];
        let connection = reconstruct(&path).unwrap();
        assert_eq!(connection.legs.len(), 2);
        assert_eq!(connection.legs[0].first_stop.raw(), "a");
        assert_eq!(connection.legs[0].last_stop.raw(), "b");
        assert_eq!(connection.legs[0].line.raw(), "red");
        assert_eq!(connection.legs[1].first_stop.raw(), "b");
        assert_eq!(connection.legs[1].last_stop.raw(), "c");
        assert_eq!(connection.legs[1].line.raw(), "blue");
    }

    #[test]
    fn trivial_path_yields_no_connection() {
        let path = vec![vertex("a", 0, None)];
        assert!(reconstruct(&path).is_none());
    }
}
