pub mod csv;

// Re-export commonly used items
pub use self::csv::{load_network, load_network_file, load_network_str, CsvImportConfig, GraphLoadError};
