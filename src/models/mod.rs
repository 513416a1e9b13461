mod connection;
mod network_graph;
mod station;

pub use connection::{Connection, SegmentRef};
pub use network_graph::{NetworkGraph, Stations, Connections};
pub use station::StationNode;
