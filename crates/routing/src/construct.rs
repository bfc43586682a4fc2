//! Expands a `Line`'s ordered `Segment`s plus a headway window into the
//! concrete per-stop `Event`s the core engine consumes, mirroring this
//! workspace's GTFS `frequencies.txt` expansion for the in-memory model.

use std::collections::HashMap;

use chrono::Duration;
use model::{clock::ClockTime, event::Event, line::Line, segment::Segment, stop::Stop};
use utility::id::Id;

/// Expands one headway window of `line` over `segments` into the `Event`s
/// each segment's origin stop gains. `window_start` is the first run's
/// departure from the line's first stop; runs repeat every `headway` while
/// the run's start is at or before `window_end`.
pub fn expand_headway(
    line: &Id<Line>,
    segments: &[Segment],
    window_start: ClockTime,
    window_end: ClockTime,
    headway: Duration,
) -> HashMap<Id<Stop>, Vec<Event>> {
    let mut events: HashMap<Id<Stop>, Vec<Event>> = HashMap::new();
    let mut run_start = window_start;

    while run_start <= window_end {
        let mut cumulative = Duration::zero();
        for segment in segments {
            let departure = ClockTime::from_offset(run_start.offset() + cumulative);
            events
                .entry(segment.from_stop.clone())
                .or_default()
                .push(Event::new(
                    departure,
                    line.clone(),
                    segment.to_stop.clone(),
                    segment.travel_time,
                ));
            cumulative = cumulative + segment.travel_time;
        }
        run_start = ClockTime::from_offset(run_start.offset() + headway);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_every_stop_of_a_two_segment_line() {
        let line = Id::<Line>::new("blue".to_owned());
        let main_station = Id::<Stop>::new("main-station".to_owned());
        let north_avenue = Id::<Stop>::new("north-avenue".to_owned());
        let historic_mall = Id::<Stop>::new("historic-mall".to_owned());
        let segments = vec![
            Segment::new(main_station.clone(), north_avenue.clone(), Duration::minutes(2)),
            Segment::new(north_avenue.clone(), historic_mall.clone(), Duration::minutes(3)),
        ];

        let events = expand_headway(
            &line,
            &segments,
            ClockTime::new(8, 5),
            ClockTime::new(8, 50),
            Duration::minutes(20),
        );

        let main_station_events = &events[&main_station];
        assert_eq!(main_station_events.len(), 3);
        assert_eq!(main_station_events[0].departure, ClockTime::new(8, 5));
        assert_eq!(main_station_events[1].departure, ClockTime::new(8, 25));
        assert_eq!(main_station_events[2].departure, ClockTime::new(8, 45));

        let north_avenue_events = &events[&north_avenue];
        assert_eq!(north_avenue_events[0].departure, ClockTime::new(8, 7));
        assert_eq!(north_avenue_events[0].next_stop, historic_mall);
    }

    #[test]
    fn run_starting_after_window_end_is_excluded() {
        let line = Id::<Line>::new("blue".to_owned());
        let a = Id::<Stop>::new("a".to_owned());
        let b = Id::<Stop>::new("b".to_owned());
        let segments = vec![Segment::new(a.clone(), b, Duration::minutes(2))];

        let events = expand_headway(
            &line,
            &segments,
            ClockTime::new(19, 45),
            ClockTime::new(20, 0),
            Duration::minutes(20),
        );

        assert_eq!(events[&a].len(), 1);
        assert_eq!(events[&a][0].departure, ClockTime::new(19, 45));
    }
}
