use thiserror::Error;

/// Failures of graph lookups and mutations
///
/// A route query that finds nothing is not an error: routers return
/// `Ok(None)` for that case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("station not found: {0}")]
    StationNotFound(String),
    #[error("no {line} line segment between {from} and {to}")]
    SegmentNotFound {
        from: String,
        to: String,
        line: String,
    },
    #[error("invalid weight {0}: travel times and delays must be finite and non-negative")]
    InvalidWeight(f64),
}

impl GraphError {
    pub(crate) fn station_not_found(name: &str) -> Self {
        Self::StationNotFound(name.to_string())
    }

    pub(crate) fn segment_not_found(from: &str, to: &str, line: &str) -> Self {
        Self::SegmentNotFound {
            from: from.to_string(),
            to: to.to_string(),
            line: line.to_string(),
        }
    }
}

/// Reject negative, NaN and infinite minute values
pub(crate) fn validate_minutes(minutes: f64) -> Result<f64, GraphError> {
    if minutes.is_finite() && minutes >= 0.0 {
        Ok(minutes)
    } else {
        Err(GraphError::InvalidWeight(minutes))
    }
}
