use ordered_float::OrderedFloat;

use super::route::Route;
use super::search::{search, RouteCost};
use crate::constants::CHANGE_PENALTY_MINUTES;
use crate::error::GraphError;
use crate::models::NetworkGraph;

/// Line changes first, elapsed minutes as the tie-break
///
/// Field order gives the lexicographic ordering through the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ChangesThenTime {
    changes: u32,
    time: OrderedFloat<f64>,
}

impl RouteCost for ChangesThenTime {
    fn zero() -> Self {
        ChangesThenTime {
            changes: 0,
            time: OrderedFloat(0.0),
        }
    }

    fn extend(self, time: f64, changed: bool) -> Self {
        if changed {
            ChangesThenTime {
                changes: self.changes + 1,
                time: OrderedFloat(self.time.into_inner() + time + CHANGE_PENALTY_MINUTES),
            }
        } else {
            ChangesThenTime {
                changes: self.changes,
                time: OrderedFloat(self.time.into_inner() + time),
            }
        }
    }
}

/// Find the route with the fewest line changes from `start` to `end`,
/// breaking ties on total travel time
///
/// A change still costs `CHANGE_PENALTY_MINUTES` towards `total_time`.
/// Returns `Ok(None)` when no open route exists and `Err` when either station
/// is unknown.
pub fn compute_fewest_changes(graph: &NetworkGraph, start: &str, end: &str) -> Result<Option<Route>, GraphError> {
    let start_idx = graph.require_station(start)?;
    let end_idx = graph.require_station(end)?;

    Ok(search::<ChangesThenTime>(graph, start_idx, end_idx).and_then(|settled| {
        Route::from_states(
            graph,
            &settled.path,
            settled.cost.time.into_inner(),
            Some(settled.cost.changes),
        )
    }))
}
