//! IO utilities for the persisted dataset

pub mod parquet;

// Re-export commonly used functions for convenience
pub use parquet::{dataset_exists, read_dataset, write_dataset};
