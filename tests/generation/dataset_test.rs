//! Tests for dataset generation and persistence

use std::fs;

use hr_compensation::{GenerationOutcome, Gender, HrError, generate_dataset, read_dataset};
use rustc_hash::FxHashSet;

use crate::utils::test_config;

#[test]
fn test_default_row_count_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 5000, 2024);

    let outcome = generate_dataset(&config).unwrap();
    assert_eq!(
        outcome,
        GenerationOutcome::Generated {
            path: config.output_path.clone(),
            rows: 5000,
        }
    );

    let employees = read_dataset(&config.output_path).unwrap();
    assert_eq!(employees.len(), 5000);

    let ids = employees.iter().map(|e| e.id).collect::<FxHashSet<_>>();
    assert_eq!(ids.len(), 5000, "identifiers must be unique");

    let male = employees.iter().filter(|e| e.gender == Gender::Male).count();
    let male_share = male as f64 / employees.len() as f64;
    assert!(
        (male_share - 0.55).abs() < 0.03,
        "male share {male_share} too far from 0.55"
    );
}

#[test]
fn test_existing_dataset_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 200, 11);

    assert!(generate_dataset(&config).unwrap().is_generated());
    let before = fs::read(&config.output_path).unwrap();

    // A different seed would produce different rows if generation ran again
    let rerun = test_config(dir.path(), 300, 12);
    let outcome = generate_dataset(&rerun).unwrap();
    assert_eq!(
        outcome,
        GenerationOutcome::Skipped {
            path: config.output_path.clone(),
        }
    );
    assert_eq!(fs::read(&config.output_path).unwrap(), before);
}

#[test]
fn test_same_seed_same_dataset() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();

    generate_dataset(&test_config(first_dir.path(), 150, 99)).unwrap();
    generate_dataset(&test_config(second_dir.path(), 150, 99)).unwrap();

    let first = read_dataset(&first_dir.path().join("DB_compensacion.parquet")).unwrap();
    let second = read_dataset(&second_dir.path().join("DB_compensacion.parquet")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_config_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), 0, 1);

    let err = generate_dataset(&config).unwrap_err();
    assert!(matches!(err, HrError::InvalidConfig(_)));
    assert!(!config.output_path.exists());
}
