//! Synthetic HR compensation dataset generation and indicator analysis.
//!
//! The generator writes a Parquet dataset of employees with correlated
//! salary, contract and pension fields; the analyzer reads it back, computes
//! workforce indicators and renders one chart per indicator.

pub mod algorithm;
pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod utils;

// Core types
pub use config::HrConfig;
pub use error::{HrError, Result};
pub use models::{Employee, Gender};

// Stages
pub use algorithm::generation::{EmployeeGenerator, GenerationOutcome, generate_dataset};
pub use algorithm::indicators::{Indicator, Indicators};
pub use analysis::{AnalysisReport, RenderFailure, analyze_dataset};
pub use pipeline::{PipelineReport, run_pipeline};

// Rendering
pub use render::{Chart, ChartKind, ChartRenderer, SvgRenderer, clear_output_dir};

// Dataset store
pub use utils::io::{dataset_exists, read_dataset, write_dataset};
