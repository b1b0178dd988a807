//! Generation followed by analysis

use crate::algorithm::generation::{GenerationOutcome, generate_dataset};
use crate::analysis::{AnalysisReport, analyze_dataset};
use crate::config::HrConfig;
use crate::error::Result;
use crate::render::ChartRenderer;

/// What a full run did
#[derive(Debug)]
pub struct PipelineReport {
    pub generation: GenerationOutcome,
    pub analysis: AnalysisReport,
}

/// Generate the dataset when missing, then analyse it
pub fn run_pipeline<R: ChartRenderer>(config: &HrConfig, renderer: &mut R) -> Result<PipelineReport> {
    let generation = generate_dataset(config)?;
    let analysis = analyze_dataset(config, renderer)?;
    Ok(PipelineReport {
        generation,
        analysis,
    })
}
