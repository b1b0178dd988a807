use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use hr_compensation::{HrConfig, SvgRenderer, run_pipeline};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => HrConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => HrConfig::default(),
    };
    info!("{config}");

    let start = Instant::now();
    let mut renderer = SvgRenderer::new(config.chart_size);
    let report = run_pipeline(&config, &mut renderer).context("Compensation pipeline failed")?;

    println!(
        "Dataset: {} ({})",
        report.generation.path().display(),
        if report.generation.is_generated() {
            "generated"
        } else {
            "existing"
        }
    );
    println!(
        "Charts: {} written to {}",
        report.analysis.charts.len(),
        config.chart_dir.display()
    );
    for failure in &report.analysis.failures {
        println!("  failed: {} ({})", failure.slug, failure.error);
    }
    println!("{}", report.analysis.indicators);

    info!("Completed in {:?}", start.elapsed());
    Ok(())
}
