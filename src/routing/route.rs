use serde::{Deserialize, Serialize};

use super::search::SearchState;
use crate::models::{NetworkGraph, Stations};

/// One ride between adjacent stations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub from: String,
    pub to: String,
    pub line: String,
}

/// Result of a route query
///
/// Line changes are not marked on the segments; a change happens wherever two
/// consecutive segments use different lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub segments: Vec<RouteSegment>,
    /// Minutes, including change penalties
    pub total_time: f64,
    /// Only reported by the fewest-changes router
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_changes: Option<u32>,
}

impl Route {
    /// Build a route from a settled state path; `None` if a state refers to a
    /// station the graph no longer holds
    pub(crate) fn from_states(
        graph: &NetworkGraph,
        path: &[SearchState<'_>],
        total_time: f64,
        total_changes: Option<u32>,
    ) -> Option<Self> {
        let segments = path
            .windows(2)
            .map(|pair| {
                let (from, to) = (pair[0], pair[1]);
                Some(RouteSegment {
                    from: graph.get_station_name(from.station)?.to_string(),
                    to: graph.get_station_name(to.station)?.to_string(),
                    line: to.line?.to_string(),
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            segments,
            total_time,
            total_changes,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of places where consecutive segments switch line
    #[must_use]
    pub fn line_changes(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|pair| pair[0].line != pair[1].line)
            .count()
    }
}
