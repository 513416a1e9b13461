use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::GraphError;
use crate::models::{Connections, NetworkGraph, StationNode, Stations};
use crate::routing::{compute_route, Route, RouteKind};

/// A network shared between request handlers
///
/// Route queries hold the read lock, so any number run in parallel. Delays and
/// closures hold the write lock, so a query sees the graph either entirely
/// before or entirely after a mutation.
#[derive(Debug, Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<NetworkGraph>>,
}

impl SharedNetwork {
    #[must_use]
    pub fn new(graph: NetworkGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    // Mutations validate before touching the graph, so a poisoned lock never
    // guards a half-applied change
    fn read(&self) -> RwLockReadGuard<'_, NetworkGraph> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, NetworkGraph> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a read-only closure against a consistent view of the graph
    pub fn with_graph<T>(&self, f: impl FnOnce(&NetworkGraph) -> T) -> T {
        f(&self.read())
    }

    pub fn compute_route(&self, kind: RouteKind, start: &str, end: &str) -> Result<Option<Route>, GraphError> {
        compute_route(&self.read(), kind, start, end)
    }

    pub fn compute_fastest(&self, start: &str, end: &str) -> Result<Option<Route>, GraphError> {
        self.compute_route(RouteKind::Fastest, start, end)
    }

    pub fn compute_fewest_changes(&self, start: &str, end: &str) -> Result<Option<Route>, GraphError> {
        self.compute_route(RouteKind::FewestChanges, start, end)
    }

    pub fn apply_delay(&self, from: &str, to: &str, line: &str, minutes: f64) -> Result<usize, GraphError> {
        let delayed = self.write().apply_delay(from, to, line, minutes)?;
        log::info!("Delayed {delayed} {line} connection(s) between {from} and {to} by {minutes} min");
        Ok(delayed)
    }

    /// Close a station; returns whether it was open before
    pub fn apply_closure(&self, station: &str) -> Result<bool, GraphError> {
        let mut graph = self.write();
        let was_open = graph.is_open(station)?;
        graph.apply_closure(station)?;
        if was_open {
            log::info!("Closed station {station}");
        }
        Ok(was_open)
    }

    #[must_use]
    pub fn stations(&self) -> Vec<StationNode> {
        self.read().stations().into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::test_networks::{abc_network, tram_network};
    use std::thread;

    #[test]
    fn test_shared_queries_and_mutations() {
        let shared = SharedNetwork::new(abc_network());

        let route = shared.compute_fastest("A", "C").expect("stations exist").expect("route should exist");
        assert_eq!(route.total_time, 10.0);

        assert_eq!(shared.apply_closure("B"), Ok(true));
        assert_eq!(shared.apply_closure("B"), Ok(false));

        let route = shared
            .compute_fewest_changes("A", "C")
            .expect("stations exist")
            .expect("route should exist");
        assert_eq!(route.total_time, 20.0);

        assert_eq!(shared.apply_delay("A", "C", "Blue", 5.0), Ok(1));
        let route = shared.compute_fastest("C", "A").expect("stations exist").expect("route should exist");
        assert_eq!(route.total_time, 25.0);
    }

    #[test]
    fn test_shared_errors() {
        let shared = SharedNetwork::new(abc_network());
        assert!(matches!(shared.apply_closure("Z"), Err(GraphError::StationNotFound(_))));
        assert!(matches!(
            shared.apply_delay("A", "B", "Blue", 1.0),
            Err(GraphError::SegmentNotFound { .. })
        ));
        assert_eq!(shared.with_graph(|graph| graph.connection_time("A", "B", "Red")), Some(5.0));
    }

    #[test]
    fn test_delay_is_never_seen_half_applied() {
        let shared = SharedNetwork::new(tram_network());

        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    shared
                        .apply_delay("Cornbrook", "Deansgate", "Green", 0.5)
                        .expect("connection exists");
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        shared.with_graph(|graph| {
                            let there = graph.connection_time("Cornbrook", "Deansgate", "Green");
                            let back = graph.connection_time("Deansgate", "Cornbrook", "Green");
                            assert_eq!(there, back);
                        });
                        let there = shared
                            .compute_fastest("Altrincham", "Bury")
                            .expect("stations exist")
                            .expect("route should exist");
                        let back = shared
                            .compute_fastest("Bury", "Altrincham")
                            .expect("stations exist")
                            .expect("route should exist");
                        assert!(there.total_time > 0.0 && back.total_time > 0.0);
                    }
                })
            })
            .collect();

        writer.join().expect("writer thread should finish");
        for reader in readers {
            reader.join().expect("reader thread should finish");
        }

        assert_eq!(
            shared.with_graph(|graph| graph.connection_time("Cornbrook", "Deansgate", "Green")),
            Some(27.0)
        );
        assert_eq!(shared.stations().len(), 18);
    }
}
