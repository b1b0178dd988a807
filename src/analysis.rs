//! Indicator analysis over the persisted dataset
//!
//! Loads the dataset artifact, computes every indicator and hands one chart per
//! indicator to a [`ChartRenderer`].

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info};

use crate::algorithm::indicators::Indicators;
use crate::config::HrConfig;
use crate::error::{HrError, Result};
use crate::render::{ChartRenderer, clear_output_dir};
use crate::utils::io::parquet::read_dataset;
use crate::utils::logging::progress::create_main_progress_bar;
use crate::utils::logging::{
    finish_progress_bar, log_chart_saved, log_operation_complete, log_operation_start, log_warning,
};

/// A chart that could not be rendered
#[derive(Debug)]
pub struct RenderFailure {
    pub slug: String,
    pub error: HrError,
}

/// Outcome of an analysis run
#[derive(Debug)]
pub struct AnalysisReport {
    /// Chart files written, as (slug, path) in reporting order
    pub charts: Vec<(String, PathBuf)>,
    /// Charts skipped because rendering failed; only filled when failures are isolated
    pub failures: Vec<RenderFailure>,
    pub indicators: Indicators,
}

impl AnalysisReport {
    /// Path of the chart written for `slug`, if any
    #[must_use]
    pub fn chart(&self, slug: &str) -> Option<&Path> {
        self.charts
            .iter()
            .find(|(s, _)| s == slug)
            .map(|(_, path)| path.as_path())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Compute every indicator from the dataset and render its chart
///
/// Fails with [`HrError::DatasetMissing`] before the chart directory is touched
/// when the dataset does not exist. Regular files in the chart directory are
/// removed before the first chart is drawn.
pub fn analyze_dataset<R: ChartRenderer>(config: &HrConfig, renderer: &mut R) -> Result<AnalysisReport> {
    let start = Instant::now();
    let dataset = &config.output_path;

    log_operation_start("Loading dataset", dataset);
    let employees = read_dataset(dataset)?;
    let indicators = Indicators::compute(&employees, config.recent_window_years)
        .ok_or_else(|| HrError::EmptyDataset(dataset.clone()))?;
    log_operation_complete("loaded", dataset, employees.len(), Some(start.elapsed()));

    clear_output_dir(&config.chart_dir)?;

    let charts = indicators.charts();
    let pb = create_main_progress_bar(charts.len() as u64, Some("Rendering charts"));
    let mut written = Vec::with_capacity(charts.len());
    let mut failures = Vec::new();

    for chart in &charts {
        match renderer.render(chart, &config.chart_dir) {
            Ok(path) => {
                log_chart_saved(&chart.slug, &path);
                written.push((chart.slug.clone(), path));
            }
            Err(err) if config.isolate_render_failures => {
                error!("Failed to render chart '{}': {}", chart.slug, err);
                failures.push(RenderFailure {
                    slug: chart.slug.clone(),
                    error: err,
                });
            }
            Err(err) => {
                pb.abandon();
                return Err(err);
            }
        }
        pb.inc(1);
    }
    finish_progress_bar(&pb, Some("Charts rendered"));

    if !failures.is_empty() {
        log_warning(
            &format!("{} of {} charts failed to render", failures.len(), charts.len()),
            Some(&config.chart_dir),
        );
    }
    info!(
        "Analysis finished: {} charts in {} ({:?})",
        written.len(),
        config.chart_dir.display(),
        start.elapsed()
    );
    info!("\n{indicators}");

    Ok(AnalysisReport {
        charts: written,
        failures,
        indicators,
    })
}
