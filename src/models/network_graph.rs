use indexmap::IndexMap;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use std::collections::HashMap;
use std::fmt;

use super::connection::{Connection, SegmentRef};
use super::station::StationNode;
use crate::error::GraphError;

mod connections;
mod stations;

pub use connections::Connections;
pub use stations::Stations;

/// Stations and the line segments between them
///
/// Each connection is a single undirected edge, so the segment seen from
/// either endpoint is the same record. Station names are the only key; the
/// name index keeps stations in the order they were first added, and each
/// station's segments are walked in the order they were connected.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    pub graph: StableUnGraph<StationNode, Connection>,
    pub station_name_to_index: IndexMap<String, NodeIndex>,
    /// Edges touching each station, oldest first. petgraph's own adjacency
    /// lists yield the newest edge first.
    segment_order: HashMap<NodeIndex, Vec<EdgeIndex>>,
}

impl NetworkGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: StableUnGraph::default(),
            station_name_to_index: IndexMap::new(),
            segment_order: HashMap::new(),
        }
    }

    #[must_use]
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected connections (each counts once, not per direction)
    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn require_station(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.station_name_to_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::station_not_found(name))
    }

    /// Outgoing segments of a station by index, in insertion order
    pub(crate) fn segments_of(&self, index: NodeIndex) -> impl Iterator<Item = SegmentRef<'_>> + '_ {
        self.segment_order
            .get(&index)
            .into_iter()
            .flatten()
            .filter_map(move |&edge| {
                let (a, b) = self.graph.edge_endpoints(edge)?;
                let connection = self.graph.edge_weight(edge)?;
                Some(SegmentRef {
                    edge,
                    neighbor: if a == index { b } else { a },
                    line: connection.line.as_str(),
                    time: connection.time,
                })
            })
    }

    pub(crate) fn station_is_open(&self, index: NodeIndex) -> bool {
        self.graph.node_weight(index).is_some_and(StationNode::is_open)
    }
}

impl Default for NetworkGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists every segment from every station, one per line:
/// `[Cornbrook to Pomona, Pink, 2 min]`
impl fmt::Display for NetworkGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, &index) in &self.station_name_to_index {
            for segment in self.segments_of(index) {
                let neighbor = self
                    .graph
                    .node_weight(segment.neighbor)
                    .map_or("?", |station| station.name.as_str());
                writeln!(f, "[{name} to {neighbor}, {}, {} min]", segment.line, segment.time)?;
            }
        }
        Ok(())
    }
}
