use serde::{Deserialize, Serialize};
use std::fmt;

use super::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Fastest,
    FewestChanges,
}

impl RouteKind {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Fastest => "*** Shortest Route ***",
            Self::FewestChanges => "*** Fewest Changes Route ***",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItineraryStep {
    /// Being at `station` while riding `line`
    Stop { station: String, line: String },
    /// Switching from one line to another at `station`
    Change { station: String, to_line: String },
}

impl fmt::Display for ItineraryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stop { station, line } => write!(f, "{station} on the {line} line"),
            Self::Change { station, to_line } => write!(f, "** Change to the {to_line} line at {station} **"),
        }
    }
}

/// Human-readable form of a route, with line changes spelled out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub kind: RouteKind,
    pub steps: Vec<ItineraryStep>,
    pub total_time: f64,
    pub total_changes: Option<u32>,
}

impl Itinerary {
    #[must_use]
    pub fn from_route(kind: RouteKind, route: &Route) -> Self {
        let mut steps = Vec::new();
        let mut previous_line: Option<&str> = None;

        for segment in &route.segments {
            if let Some(previous) = previous_line.filter(|&previous| previous != segment.line) {
                steps.push(ItineraryStep::Stop {
                    station: segment.from.clone(),
                    line: previous.to_string(),
                });
                steps.push(ItineraryStep::Change {
                    station: segment.from.clone(),
                    to_line: segment.line.clone(),
                });
            }
            steps.push(ItineraryStep::Stop {
                station: segment.from.clone(),
                line: segment.line.clone(),
            });
            previous_line = Some(segment.line.as_str());
        }

        if let Some(last) = route.segments.last() {
            steps.push(ItineraryStep::Stop {
                station: last.to.clone(),
                line: last.line.clone(),
            });
        }

        Self {
            kind,
            steps,
            total_time: route.total_time,
            total_changes: route.total_changes,
        }
    }

    /// Text shown when a query finds nothing
    #[must_use]
    pub fn no_route_message(kind: RouteKind, start: &str, end: &str) -> String {
        match kind {
            RouteKind::Fastest => format!("No route found between {start} and {end}."),
            RouteKind::FewestChanges => format!("No path found between {start} and {end}."),
        }
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind.title())?;
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        if let Some(changes) = self.total_changes {
            writeln!(f, "Overall Changes = {changes}")?;
        }
        // Debug keeps the fraction on whole minutes: `10.0`, not `10`
        writeln!(f, "Overall Journey Time (mins) = {:?}", self.total_time)
    }
}
