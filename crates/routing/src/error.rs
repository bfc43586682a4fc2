use std::fmt;

use model::stop::Stop;
use utility::id::Id;

/// A stop `Id` passed to a query that the timetable never registered.
/// Corrupt data or caller misuse; not a routine failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownStop {
    Source(Id<Stop>),
    Target(Id<Stop>),
}

impl fmt::Display for UnknownStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownStop::Source(id) => write!(f, "unknown source stop {:?}", id),
            UnknownStop::Target(id) => write!(f, "unknown target stop {:?}", id),
        }
    }
}

impl std::error::Error for UnknownStop {}
