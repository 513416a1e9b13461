use petgraph::stable_graph::NodeIndex;
use super::NetworkGraph;
use crate::error::GraphError;
use crate::models::station::StationNode;

/// Extension trait for station-related operations on `NetworkGraph`
pub trait Stations {
    /// Add a station if it doesn't exist, return its `NodeIndex`
    /// New stations are open and have no segments
    fn add_station(&mut self, name: &str) -> NodeIndex;

    /// Look up a station record by name
    fn find_station(&self, name: &str) -> Option<&StationNode>;

    /// Get `NodeIndex` by station name
    fn get_station_index(&self, name: &str) -> Option<NodeIndex>;

    /// Get station name by `NodeIndex`
    fn get_station_name(&self, index: NodeIndex) -> Option<&str>;

    /// Whether the named station is currently open
    fn is_open(&self, name: &str) -> Result<bool, GraphError>;

    /// Close a station so that no route passes through, starts or ends at it.
    /// Closing an already closed station is a no-op.
    fn apply_closure(&mut self, name: &str) -> Result<(), GraphError>;

    /// All stations in the order they were first added
    fn stations(&self) -> Vec<&StationNode>;
}

impl Stations for NetworkGraph {
    fn add_station(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.station_name_to_index.get(name) {
            index
        } else {
            let index = self.graph.add_node(StationNode::new(name.to_string()));
            self.station_name_to_index.insert(name.to_string(), index);
            index
        }
    }

    fn find_station(&self, name: &str) -> Option<&StationNode> {
        self.get_station_index(name)
            .and_then(|index| self.graph.node_weight(index))
    }

    fn get_station_index(&self, name: &str) -> Option<NodeIndex> {
        self.station_name_to_index.get(name).copied()
    }

    fn get_station_name(&self, index: NodeIndex) -> Option<&str> {
        self.graph.node_weight(index).map(|node| node.name.as_str())
    }

    fn is_open(&self, name: &str) -> Result<bool, GraphError> {
        let index = self.require_station(name)?;
        Ok(self.station_is_open(index))
    }

    fn apply_closure(&mut self, name: &str) -> Result<(), GraphError> {
        let index = self.require_station(name)?;
        let station = self
            .graph
            .node_weight_mut(index)
            .ok_or_else(|| GraphError::station_not_found(name))?;
        station.open = false;
        Ok(())
    }

    fn stations(&self) -> Vec<&StationNode> {
        self.station_name_to_index
            .values()
            .filter_map(|&index| self.graph.node_weight(index))
            .collect()
    }
}
