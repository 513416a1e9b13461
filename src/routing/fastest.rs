use ordered_float::OrderedFloat;

use super::route::Route;
use super::search::{search, RouteCost};
use crate::constants::CHANGE_PENALTY_MINUTES;
use crate::error::GraphError;
use crate::models::NetworkGraph;

/// Elapsed minutes, change penalties included
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ElapsedTime(OrderedFloat<f64>);

impl RouteCost for ElapsedTime {
    fn zero() -> Self {
        ElapsedTime(OrderedFloat(0.0))
    }

    fn extend(self, time: f64, changed: bool) -> Self {
        let penalty = if changed { CHANGE_PENALTY_MINUTES } else { 0.0 };
        ElapsedTime(OrderedFloat(self.0.into_inner() + time + penalty))
    }
}

/// Find the route with the least total travel time from `start` to `end`
///
/// Every line change costs `CHANGE_PENALTY_MINUTES` on top of segment times.
/// Returns `Ok(None)` when no open route exists, including when either
/// endpoint is closed, and `Err` when either station is unknown.
pub fn compute_fastest(graph: &NetworkGraph, start: &str, end: &str) -> Result<Option<Route>, GraphError> {
    let start_idx = graph.require_station(start)?;
    let end_idx = graph.require_station(end)?;

    Ok(search::<ElapsedTime>(graph, start_idx, end_idx)
        .and_then(|settled| Route::from_states(graph, &settled.path, settled.cost.0.into_inner(), None)))
}
