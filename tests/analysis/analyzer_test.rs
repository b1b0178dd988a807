//! Tests for indicator analysis and chart output

use std::fs;

use chrono::NaiveDate;
use hr_compensation::{
    Gender, HrError, Indicator, SvgRenderer, analyze_dataset, generate_dataset, write_dataset,
};

use crate::utils::{RecordingRenderer, employee, files_in, test_config};

fn hired(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 6, 15).unwrap()
}

#[test]
fn test_missing_dataset_renders_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 100, 1);
    let mut renderer = RecordingRenderer::default();

    let err = analyze_dataset(&config, &mut renderer).unwrap_err();
    assert!(matches!(err, HrError::DatasetMissing(ref path) if *path == config.output_path));
    assert!(err.is_missing_input());
    assert!(renderer.rendered.is_empty());
    assert!(files_in(&config.chart_dir).is_empty());
}

#[test]
fn test_empty_dataset_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 100, 1);
    write_dataset(&config.output_path, &[]).unwrap();

    let err = analyze_dataset(&config, &mut RecordingRenderer::default()).unwrap_err();
    assert!(matches!(err, HrError::EmptyDataset(_)));
}

#[test]
fn test_two_row_gender_gap() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 2, 1);
    write_dataset(
        &config.output_path,
        &[
            employee(10_000_001, Gender::Female, 2_000_000, hired(2020)),
            employee(10_000_002, Gender::Male, 4_000_000, hired(2021)),
        ],
    )
    .unwrap();

    let report = analyze_dataset(&config, &mut RecordingRenderer::default()).unwrap();
    let gap = &report.indicators.gender_gap;
    assert_eq!(gap.means[&Gender::Female], 2_000_000.0);
    assert_eq!(gap.means[&Gender::Male], 4_000_000.0);
    assert_eq!(gap.gap, 2_000_000.0);
}

#[test]
fn test_recent_window_from_latest_hire_year() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 20, 1);
    let employees = (2005..=2024)
        .enumerate()
        .map(|(i, year)| employee(10_000_000 + i as u64, Gender::Female, 3_000_000, hired(year)))
        .collect::<Vec<_>>();
    write_dataset(&config.output_path, &employees).unwrap();

    let report = analyze_dataset(&config, &mut RecordingRenderer::default()).unwrap();
    let growth = report.indicators.growth;
    assert_eq!((growth.window_start, growth.window_end), (2019, 2024));
    assert_eq!(growth.recent_hires, 6);
    assert_eq!(growth.total, 20);
}

#[test]
fn test_one_chart_per_indicator_after_clearing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 400, 3);
    generate_dataset(&config).unwrap();

    fs::create_dir_all(config.chart_dir.join("archive")).unwrap();
    fs::write(config.chart_dir.join("stale.png"), "old").unwrap();
    fs::write(config.chart_dir.join("archive").join("kept.png"), "old").unwrap();

    let mut renderer = RecordingRenderer::default();
    let report = analyze_dataset(&config, &mut renderer).unwrap();

    let expected = Indicator::ALL.iter().map(|i| i.slug()).collect::<Vec<_>>();
    assert_eq!(renderer.slugs(), expected);
    assert_eq!(report.charts.len(), Indicator::ALL.len());
    assert!(report.is_complete());

    assert!(!config.chart_dir.join("stale.png").exists());
    assert!(config.chart_dir.join("archive").join("kept.png").exists());
    assert_eq!(files_in(&config.chart_dir).len(), Indicator::ALL.len());
    assert_eq!(
        report.chart("brecha_salarial"),
        Some(config.chart_dir.join("brecha_salarial.txt").as_path())
    );
}

#[test]
fn test_render_failure_aborts_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 100, 4);
    generate_dataset(&config).unwrap();

    let mut renderer = RecordingRenderer::failing_on("salario_genero");
    let err = analyze_dataset(&config, &mut renderer).unwrap_err();
    assert!(matches!(err, HrError::Render { ref slug, .. } if slug == "salario_genero"));
    assert!(!renderer.slugs().contains(&"rotacion_salarial"));
}

#[test]
fn test_render_failure_isolated_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path(), 100, 5);
    config.isolate_render_failures = true;
    generate_dataset(&config).unwrap();

    let mut renderer = RecordingRenderer::failing_on("salario_genero");
    let report = analyze_dataset(&config, &mut renderer).unwrap();
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].slug, "salario_genero");
    assert_eq!(report.charts.len(), Indicator::ALL.len() - 1);
    assert!(!report.is_complete());
}

#[test]
fn test_svg_charts_written() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 300, 6);
    generate_dataset(&config).unwrap();

    let mut renderer = SvgRenderer::new(config.chart_size);
    let report = analyze_dataset(&config, &mut renderer).unwrap();

    assert_eq!(report.charts.len(), Indicator::ALL.len());
    for indicator in Indicator::ALL {
        let path = config.chart_dir.join(format!("{}.svg", indicator.slug()));
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"), "{} is not an svg", path.display());
    }
}
