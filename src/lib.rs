pub mod constants;
pub mod error;
pub mod import;
pub mod logging;
pub mod models;
pub mod routing;
pub mod shared;

pub use error::GraphError;
pub use import::{load_network, load_network_file, CsvImportConfig, GraphLoadError};
pub use models::{Connections, NetworkGraph, Stations};
pub use routing::{compute_fastest, compute_fewest_changes, Itinerary, Route, RouteKind, RouteSegment};
pub use shared::SharedNetwork;
