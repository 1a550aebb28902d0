//! @ai:module:intent Define error types for metrics loading, aggregation and tabling
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for the metrics pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// Content that could not be read as text or parsed as JSON
    #[error("Malformed metrics document {}: {source}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("No runs found for approach '{approach}'")]
    EmptyApproach { approach: String },

    #[error("Cannot aggregate runs of different approaches: '{expected}' and '{found}'")]
    MixedApproaches { expected: String, found: String },

    #[error("Duplicate approach name '{approach}' in comparison table")]
    DuplicateApproach { approach: String },

    #[error("Insufficient data: {found} approach(es) available, at least {required} required")]
    InsufficientData { found: usize, required: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// @ai:intent Whether the pipeline may skip the failing input and continue
    /// @ai:effects pure
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::MissingInput { .. } | Error::MalformedDocument { .. } | Error::EmptyApproach { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
