use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use serde::{Deserialize, Serialize};

/// A line-labelled, weighted link between two stations
///
/// Stored once per undirected connection, so both travel directions always
/// read the same line and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub line: String,
    /// Travel time in minutes, including any applied delays
    pub time: f64,
}

impl Connection {
    #[must_use]
    pub fn new(line: String, time: f64) -> Self {
        Self { line, time }
    }
}

/// One outgoing segment of a station, seen from that station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRef<'g> {
    pub edge: EdgeIndex,
    pub neighbor: NodeIndex,
    pub line: &'g str,
    pub time: f64,
}

