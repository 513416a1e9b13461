//! Shared fixtures for router tests

use petgraph::stable_graph::NodeIndex;
use std::collections::HashSet;

use crate::constants::CHANGE_PENALTY_MINUTES;
use crate::models::{Connections, NetworkGraph, Stations};

/// A-B Red 5, B-C Red 5, B-C Blue 3, A-C Blue 20
pub(crate) fn abc_network() -> NetworkGraph {
    build(&[
        ("A", "B", "Red", 5.0),
        ("B", "C", "Red", 5.0),
        ("B", "C", "Blue", 3.0),
        ("A", "C", "Blue", 20.0),
    ])
}

/// City-centre tram network with shared trunk sections and a few termini
pub(crate) fn tram_network() -> NetworkGraph {
    build(&[
        // Green: Altrincham - Bury
        ("Altrincham", "Sale", "Green", 8.0),
        ("Sale", "Cornbrook", "Green", 9.0),
        ("Cornbrook", "Deansgate", "Green", 2.0),
        ("Deansgate", "St Peter's Square", "Green", 2.0),
        ("St Peter's Square", "Piccadilly Gardens", "Green", 2.0),
        ("Piccadilly Gardens", "Victoria", "Green", 4.0),
        ("Victoria", "Bury", "Green", 20.0),
        // Purple: Altrincham - Piccadilly
        ("Altrincham", "Sale", "Purple", 8.0),
        ("Sale", "Cornbrook", "Purple", 9.0),
        ("Cornbrook", "Deansgate", "Purple", 2.0),
        ("Deansgate", "St Peter's Square", "Purple", 2.0),
        ("St Peter's Square", "Piccadilly", "Purple", 4.0),
        // Blue: Eccles - Ashton
        ("Eccles", "MediaCity", "Blue", 6.0),
        ("MediaCity", "Pomona", "Blue", 4.0),
        ("Pomona", "Cornbrook", "Blue", 2.0),
        ("Cornbrook", "Deansgate", "Blue", 2.0),
        ("Deansgate", "St Peter's Square", "Blue", 2.0),
        ("St Peter's Square", "Piccadilly", "Blue", 4.0),
        ("Piccadilly", "Etihad Campus", "Blue", 5.0),
        ("Etihad Campus", "Ashton", "Blue", 12.0),
        // Pink: Rochdale - Victoria
        ("Rochdale", "Oldham", "Pink", 15.0),
        ("Oldham", "Victoria", "Pink", 18.0),
        ("Victoria", "Piccadilly Gardens", "Pink", 4.0),
        // Yellow: Piccadilly - Victoria shuttle
        ("Piccadilly", "Victoria", "Yellow", 6.0),
        // Navy: Airport - Cornbrook
        ("Airport", "Wythenshawe", "Navy", 10.0),
        ("Wythenshawe", "Cornbrook", "Navy", 25.0),
    ])
}

fn build(rows: &[(&str, &str, &str, f64)]) -> NetworkGraph {
    let mut graph = NetworkGraph::new();
    for &(from, to, line, time) in rows {
        graph.add_station(from);
        graph.add_station(to);
        graph
            .add_connection(from, to, line, time)
            .expect("fixture stations were just added");
    }
    graph
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Objective {
    Time,
    ChangesThenTime,
}

/// Best `(changes, time)` over every simple path between two stations
///
/// Exhaustive, so only usable on small networks. With non-negative weights a
/// walk that revisits a station is never better than the simple path that
/// skips the loop, so simple paths cover every optimum.
pub(crate) fn brute_force_best(
    graph: &NetworkGraph,
    start: &str,
    end: &str,
    objective: Objective,
) -> Option<(u32, f64)> {
    let start_idx = graph.get_station_index(start)?;
    let end_idx = graph.get_station_index(end)?;
    if !graph.station_is_open(start_idx) || !graph.station_is_open(end_idx) {
        return None;
    }

    let mut search = Exhaustive {
        graph,
        end: end_idx,
        objective,
        visited: HashSet::from([start_idx]),
        best: None,
    };
    search.explore(start_idx, None, 0, 0.0);
    search.best
}

struct Exhaustive<'g> {
    graph: &'g NetworkGraph,
    end: NodeIndex,
    objective: Objective,
    visited: HashSet<NodeIndex>,
    best: Option<(u32, f64)>,
}

impl<'g> Exhaustive<'g> {
    fn explore(&mut self, at: NodeIndex, line: Option<&'g str>, changes: u32, time: f64) {
        if at == self.end {
            self.consider(changes, time);
            return;
        }

        let graph = self.graph;
        for segment in graph.segments_of(at) {
            if self.visited.contains(&segment.neighbor) || !graph.station_is_open(segment.neighbor) {
                continue;
            }
            let changed = line.is_some_and(|current| current != segment.line);
            let (next_changes, next_time) = if changed {
                (changes + 1, time + segment.time + CHANGE_PENALTY_MINUTES)
            } else {
                (changes, time + segment.time)
            };

            self.visited.insert(segment.neighbor);
            self.explore(segment.neighbor, Some(segment.line), next_changes, next_time);
            self.visited.remove(&segment.neighbor);
        }
    }

    fn consider(&mut self, changes: u32, time: f64) {
        let better = match (self.best, self.objective) {
            (None, _) => true,
            (Some((_, best_time)), Objective::Time) => time < best_time,
            (Some((best_changes, best_time)), Objective::ChangesThenTime) => {
                changes < best_changes || (changes == best_changes && time < best_time)
            }
        };
        if better {
            self.best = Some((changes, time));
        }
    }
}
