use serde::Serialize;
use utility::id::HasId;

use crate::segment::Segment;

/// A named route served by vehicles in a fixed stop sequence. Rush-hour
/// extensions or express variants of a route are modeled as distinct
/// `Line`s rather than as variants of one, so that the identity used to
/// price the line-change penalty (see `routing::weight`) is unambiguous.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub name: String,
    pub segments: Vec<Segment>,
}

impl Line {
    pub fn new(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            segments,
        }
    }
}

impl HasId for Line {
    type IdType = String;
}
