//! Logging utilities for output and progress tracking
//!
//! Standard log lines for dataset and chart operations, plus `indicatif`
//! progress bars for row generation and chart rendering.

pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use self::log::{log_chart_saved, log_operation_complete, log_operation_start, log_warning};
pub use self::progress::{create_main_progress_bar, finish_and_clear, finish_progress_bar};
