//! Route queries over a `NetworkGraph`
//!
//! Both routers search the same state space: a station together with the line
//! the traveller arrived on. They differ only in the cost they minimise.

mod fastest;
mod fewest_changes;
mod itinerary;
mod route;
mod search;

#[cfg(test)]
pub(crate) mod test_networks;

pub use fastest::compute_fastest;
pub use fewest_changes::compute_fewest_changes;
pub use itinerary::{Itinerary, ItineraryStep, RouteKind};
pub use route::{Route, RouteSegment};

use crate::error::GraphError;
use crate::models::NetworkGraph;

/// Run the router matching `kind`
pub fn compute_route(
    graph: &NetworkGraph,
    kind: RouteKind,
    start: &str,
    end: &str,
) -> Result<Option<Route>, GraphError> {
    match kind {
        RouteKind::Fastest => compute_fastest(graph, start, end),
        RouteKind::FewestChanges => compute_fewest_changes(graph, start, end),
    }
}
