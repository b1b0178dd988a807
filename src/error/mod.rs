//! Error handling for dataset generation and analysis.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors raised while generating, persisting, analysing or rendering the dataset
#[derive(Debug, thiserror::Error)]
pub enum HrError {
    /// Analysis was requested before the dataset artifact exists
    #[error("Dataset not found: {}. Generate the dataset first", .0.display())]
    DatasetMissing(PathBuf),

    /// The dataset artifact exists but holds no rows
    #[error("Dataset is empty: {}", .0.display())]
    EmptyDataset(PathBuf),

    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error encoding or decoding Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error building Arrow record batches
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error mapping records to and from Arrow arrays
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_arrow::Error),

    /// Error parsing a configuration file
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration values that cannot produce a valid dataset
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A persisted row that violates the data model
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A chart could not be drawn
    #[error("Render error for '{slug}': {message}")]
    Render {
        /// Slug of the chart being drawn
        slug: String,
        /// Backend error message
        message: String,
    },
}

impl HrError {
    /// Whether this error means the dataset has to be generated first
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(self, Self::DatasetMissing(_))
    }

    /// Create a render error for the given chart
    pub fn render(slug: &str, message: impl std::fmt::Display) -> Self {
        Self::Render {
            slug: slug.to_string(),
            message: message.to_string(),
        }
    }
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, HrError>;
