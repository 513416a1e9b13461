use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::constants::CSV_FROM_HEADER;
use crate::error::GraphError;
use crate::models::{Connections, NetworkGraph, Stations};

/// Number of columns in a network row: from, to, line, time
const COLUMN_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum GraphLoadError {
    #[error("could not read network file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse network CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
    #[error("line {line}: travel time {value:?} is not a number")]
    InvalidTime { line: u64, value: String },
    #[error("line {line}: {source}")]
    Graph {
        line: u64,
        #[source]
        source: GraphError,
    },
}

#[derive(Debug, Clone)]
pub struct CsvImportConfig {
    /// `None` detects a header row from the first record
    pub has_headers: Option<bool>,
    pub delimiter: u8,
}

impl Default for CsvImportConfig {
    fn default() -> Self {
        Self {
            has_headers: None,
            delimiter: b',',
        }
    }
}

/// Build a network from `From,To,Line,Time` rows
///
/// Stations are created the first time they are mentioned. Each row adds one
/// connection; repeated rows add parallel connections.
pub fn load_network<R: Read>(reader: R, config: &CsvImportConfig) -> Result<NetworkGraph, GraphLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(config.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = NetworkGraph::new();
    let mut first = true;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);

        if first {
            first = false;
            let skip = config.has_headers.unwrap_or_else(|| looks_like_header(&record));
            if skip {
                crate::debug_log!("Skipping header row: {:?}", record);
                continue;
            }
        }

        add_record(&mut graph, &record, line)?;
    }

    crate::debug_log!(
        "Loaded network with {} stations and {} connections",
        graph.station_count(),
        graph.connection_count()
    );

    Ok(graph)
}

/// Read a network from a file on disk
pub fn load_network_file(path: impl AsRef<Path>, config: &CsvImportConfig) -> Result<NetworkGraph, GraphLoadError> {
    let file = File::open(path.as_ref())?;
    load_network(file, config)
}

/// Read a network from CSV text
pub fn load_network_str(content: &str, config: &CsvImportConfig) -> Result<NetworkGraph, GraphLoadError> {
    load_network(content.as_bytes(), config)
}

fn add_record(graph: &mut NetworkGraph, record: &csv::StringRecord, line: u64) -> Result<(), GraphLoadError> {
    // Columns past the time are ignored, so trailing commas load fine
    if record.len() < COLUMN_COUNT {
        return Err(GraphLoadError::MalformedRecord {
            line,
            reason: format!("expected at least {COLUMN_COUNT} fields, found {}", record.len()),
        });
    }

    let (from, to, line_label, time) = (&record[0], &record[1], &record[2], &record[3]);
    if from.is_empty() || to.is_empty() || line_label.is_empty() {
        return Err(GraphLoadError::MalformedRecord {
            line,
            reason: "station and line names must not be empty".to_string(),
        });
    }

    let time: f64 = time.parse().map_err(|_| GraphLoadError::InvalidTime {
        line,
        value: time.to_string(),
    })?;

    graph.add_station(from);
    graph.add_station(to);

    if graph.is_connected(from, to, line_label) {
        crate::debug_log!("Line {line}: adding parallel {line_label} connection {from} - {to}");
    }

    graph
        .add_connection(from, to, line_label, time)
        .map_err(|source| GraphLoadError::Graph { line, source })?;

    Ok(())
}

/// Header heuristic: the first column is titled "From", or the time column
/// does not hold a number
fn looks_like_header(row: &csv::StringRecord) -> bool {
    if row
        .get(0)
        .is_some_and(|first| first.eq_ignore_ascii_case(CSV_FROM_HEADER))
    {
        return true;
    }

    row.get(COLUMN_COUNT - 1)
        .is_some_and(|time| time.parse::<f64>().is_err())
}
