//! Tests for the generation then analysis pipeline

use hr_compensation::{GenerationOutcome, Indicator, run_pipeline};

use crate::utils::{RecordingRenderer, test_config};

#[test]
fn test_pipeline_generates_then_analyses() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 500, 21);

    let report = run_pipeline(&config, &mut RecordingRenderer::default()).unwrap();
    assert_eq!(
        report.generation,
        GenerationOutcome::Generated {
            path: config.output_path.clone(),
            rows: 500,
        }
    );
    assert_eq!(report.analysis.indicators.total_employees, 500);
    assert_eq!(report.analysis.charts.len(), Indicator::ALL.len());
}

#[test]
fn test_second_run_reuses_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 200, 22);

    let first = run_pipeline(&config, &mut RecordingRenderer::default()).unwrap();
    let second = run_pipeline(&config, &mut RecordingRenderer::default()).unwrap();

    assert!(first.generation.is_generated());
    assert!(!second.generation.is_generated());
    assert_eq!(first.analysis.indicators, second.analysis.indicators);
}
