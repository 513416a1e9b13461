use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use super::NetworkGraph;
use crate::error::{validate_minutes, GraphError};
use crate::models::connection::{Connection, SegmentRef};

/// Extension trait for connection-related operations on `NetworkGraph`
pub trait Connections {
    /// Connect two existing stations on a line, returns the `EdgeIndex`
    /// Repeated calls add parallel connections rather than merging them
    fn add_connection(&mut self, from: &str, to: &str, line: &str, time: f64) -> Result<EdgeIndex, GraphError>;

    /// Add `minutes` to every connection between the two stations on `line`
    /// Returns how many parallel connections were delayed
    fn apply_delay(&mut self, from: &str, to: &str, line: &str, minutes: f64) -> Result<usize, GraphError>;

    /// Remove one connection between the two stations on `line`
    fn remove_connection(&mut self, from: &str, to: &str, line: &str) -> Result<Connection, GraphError>;

    /// Whether a segment on `line` joins the two stations, in either direction
    fn is_connected(&self, from: &str, to: &str, line: &str) -> bool;

    /// Travel time of the first connection on `line` between the two stations
    fn connection_time(&self, from: &str, to: &str, line: &str) -> Option<f64>;
}

impl Connections for NetworkGraph {
    fn add_connection(&mut self, from: &str, to: &str, line: &str, time: f64) -> Result<EdgeIndex, GraphError> {
        let time = validate_minutes(time)?;
        let from_idx = self.require_station(from)?;
        let to_idx = self.require_station(to)?;

        let edge = self.graph.add_edge(from_idx, to_idx, Connection::new(line.to_string(), time));
        self.segment_order.entry(from_idx).or_default().push(edge);
        if to_idx != from_idx {
            self.segment_order.entry(to_idx).or_default().push(edge);
        }
        Ok(edge)
    }

    fn apply_delay(&mut self, from: &str, to: &str, line: &str, minutes: f64) -> Result<usize, GraphError> {
        let minutes = validate_minutes(minutes)?;
        let from_idx = self.require_station(from)?;
        let to_idx = self.require_station(to)?;

        let edges = self.matching_edges(from_idx, to_idx, line);
        if edges.is_empty() {
            return Err(GraphError::segment_not_found(from, to, line));
        }

        for &edge in &edges {
            if let Some(connection) = self.graph.edge_weight_mut(edge) {
                connection.time += minutes;
            }
        }

        Ok(edges.len())
    }

    fn remove_connection(&mut self, from: &str, to: &str, line: &str) -> Result<Connection, GraphError> {
        let from_idx = self.require_station(from)?;
        let to_idx = self.require_station(to)?;

        let edge = self
            .matching_edges(from_idx, to_idx, line)
            .first()
            .copied()
            .ok_or_else(|| GraphError::segment_not_found(from, to, line))?;
        let connection = self
            .graph
            .remove_edge(edge)
            .ok_or_else(|| GraphError::segment_not_found(from, to, line))?;

        for index in [from_idx, to_idx] {
            if let Some(order) = self.segment_order.get_mut(&index) {
                order.retain(|&other| other != edge);
            }
        }
        Ok(connection)
    }

    fn is_connected(&self, from: &str, to: &str, line: &str) -> bool {
        self.connection_time(from, to, line).is_some()
    }

    fn connection_time(&self, from: &str, to: &str, line: &str) -> Option<f64> {
        let from_idx = self.station_name_to_index.get(from).copied()?;
        let to_idx = self.station_name_to_index.get(to).copied()?;

        self.segments_of(from_idx)
            .find(|segment| segment.neighbor == to_idx && segment.line == line)
            .map(|segment| segment.time)
    }
}

impl NetworkGraph {
    /// Lazily walk the outgoing segments of a station, oldest connection first
    pub fn neighbors<'g>(&'g self, name: &str) -> Result<impl Iterator<Item = SegmentRef<'g>> + 'g, GraphError> {
        let index = self.require_station(name)?;
        Ok(self.segments_of(index))
    }

    fn matching_edges(&self, from: NodeIndex, to: NodeIndex, line: &str) -> Vec<EdgeIndex> {
        self.segments_of(from)
            .filter(|segment| segment.neighbor == to && segment.line == line)
            .map(|segment| segment.edge)
            .collect()
    }
}
