use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_NETWORK_CSV: &str = "network.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// `From,To,Line,Time` export the network is built from at startup
    pub network_csv: PathBuf,
}

impl ServerConfig {
    /// Read `BIND_ADDRESS`, `PORT` and `NETWORK_CSV`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            network_csv: lookup("NETWORK_CSV").map_or_else(|| PathBuf::from(DEFAULT_NETWORK_CSV), PathBuf::from),
        }
    }
}
