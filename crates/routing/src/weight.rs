//! Edge-weight closures: for one stop's event group toward a single
//! neighbor, a function of the passenger's current instant and currently
//! boarded line that picks the earliest-arriving feasible departure.

use chrono::{DateTime, Duration, TimeZone};
use model::{event::Event, line::Line};
use utility::id::Id;

use crate::graph::Weight;

const LINE_CHANGE_PENALTY_MINUTES: i64 = 5;

/// The event group for one `stop -> neighbor` edge, bound to a query's
/// reference calendar instant (supplies the date and time zone that
/// `ClockTime::interpret` anchors against).
pub struct EdgeWeightFn<Tz: TimeZone> {
    events: Vec<Event>,
    reference: DateTime<Tz>,
}

/// The outcome of evaluating an edge at a given instant and boarded line.
pub struct EdgeWeight {
    pub duration: Duration,
    pub line_taken: Id<Line>,
}

impl<Tz: TimeZone> EdgeWeightFn<Tz> {
    pub fn new(events: Vec<Event>, reference: DateTime<Tz>) -> Self {
        Self { events, reference }
    }

    /// Evaluates the closure at `now`, boarded on `line_in_use` (`None` at
    /// the journey's source, where no change penalty applies). Returns
    /// `None` if no event in the group is feasible.
    pub fn call(&self, now: &DateTime<Tz>, line_in_use: Option<&Id<Line>>) -> Option<EdgeWeight> {
        let mut best: Option<(DateTime<Tz>, &Event)> = None;

        for event in &self.events {
            let switch_penalty = match line_in_use {
                None => Duration::zero(),
                Some(current) if current.raw() == event.line.raw() => Duration::zero(),
                Some(_) => Duration::minutes(LINE_CHANGE_PENALTY_MINUTES),
            };
            let ready = now.clone() + switch_penalty;
            let departure = event.departure.interpret(&self.reference);
            if departure < ready {
                continue;
            }

            let arrival = departure.clone() + event.travel_time;
            let better = match &best {
                None => true,
                Some((best_arrival, best_event)) => {
                    arrival < *best_arrival
                        || (arrival == *best_arrival && departure < best_event.departure.interpret(&self.reference))
                        || (arrival == *best_arrival
                            && departure == best_event.departure.interpret(&self.reference)
                            && event.line.raw() < best_event.line.raw())
                }
            };
            if better {
                best = Some((arrival, event));
            }
        }

        if best.is_none() {
            let boarded = line_in_use.map(|line| line.raw());
            log::warn!("edge has no feasible departure, boarded on {boarded:?}");
        }

        best.map(|(arrival, event)| EdgeWeight {
            duration: arrival - now.clone(),
            line_taken: event.line.clone(),
        })
    }
}

impl<Tz: TimeZone> Weight<Tz> for EdgeWeightFn<Tz> {
    fn evaluate(&self, now: &DateTime<Tz>, line_in_use: Option<&Id<Line>>) -> Option<(Duration, Id<Line>)> {
        self.call(now, line_in_use)
            .map(|weight| (weight.duration, weight.line_taken))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use model::clock::ClockTime;
    use model::stop::Stop;
    use utility::id::Id;

    fn event(departure: &str, line: &str, travel_minutes: i64) -> Event {
        Event::new(
            ClockTime::parse(departure).unwrap(),
            Id::<Line>::new(line.to_owned()),
            Id::<Stop>::new("harbour".to_owned()),
            Duration::minutes(travel_minutes),
        )
    }

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 10, 15, 0, 0, 0).unwrap()
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 10, 15, hour, minute, 0).unwrap()
    }

    fn group() -> EdgeWeightFn<Utc> {
        EdgeWeightFn::new(
            vec![
                event("14:30", "1", 5),  // south_bound, arrives 14:35
                event("14:39", "1", 5),  // south_bound, arrives 14:44
                event("14:48", "1", 5),  // south_bound, arrives 14:53
                event("14:35", "2", 13), // harbour, arrives 14:48
                event("14:35", "2a", 12), // harbour express, arrives 14:47
            ],
            reference(),
        )
    }

    #[test]
    fn picks_earliest_arrival_without_change() {
        let current = Id::<Line>::new("1".to_owned());
        let result = group().call(&at(14, 34), Some(&current)).unwrap();
        assert_eq!(result.line_taken.raw(), "1");
        assert_eq!(result.duration, Duration::minutes(10));
    }

    #[test]
    fn change_penalty_skips_the_otherwise_earliest_departure() {
        let current = Id::<Line>::new("2".to_owned());
        let result = group().call(&at(14, 30), Some(&current)).unwrap();
        assert_eq!(result.line_taken.raw(), "1");
        assert_eq!(result.duration, Duration::minutes(14));
    }

    #[test]
    fn no_feasible_event_is_unreachable() {
        let current = Id::<Line>::new("2a".to_owned());
        assert!(group().call(&at(16, 0), Some(&current)).is_none());
    }

    #[test]
    fn unset_line_in_use_has_no_penalty() {
        let only = EdgeWeightFn::new(vec![event("14:30", "1", 20)], reference());
        let result = only.call(&at(14, 30), None).unwrap();
        assert_eq!(result.duration, Duration::minutes(20));
    }
}
