//! Parquet dataset store
//!
//! The persisted dataset is a single Parquet file with one column per
//! employee field, named by the dataset headers. Records are mapped to and
//! from Arrow record batches with `serde_arrow` against an explicit schema.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, FieldRef, Schema};
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::util::{ensure_directory, open_dataset_file};
use crate::error::{HrError, Result};
use crate::models::employee::{COLUMN_NAMES, Employee};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// Arrow schema of the persisted dataset, columns in dataset order
#[must_use]
pub fn employee_schema() -> Schema {
    let types = [
        DataType::UInt64, // Cédula
        DataType::Utf8,   // Nombre
        DataType::Utf8,   // Género
        DataType::UInt8,  // Edad
        DataType::Utf8,   // Residencia
        DataType::Date32, // Fecha Ingreso
        DataType::Utf8,   // Estado
        DataType::Int64,  // Salario
        DataType::Utf8,   // Cargo
        DataType::Utf8,   // Departamento
        DataType::Utf8,   // Área
        DataType::Utf8,   // Nivel Educativo
        DataType::UInt8,  // Años de Experiencia
        DataType::Utf8,   // Tipo de Contrato
        DataType::Utf8,   // EPS
        DataType::Utf8,   // Caja de Compensación
        DataType::Utf8,   // Fondo de Pensión
    ];

    Schema::new(
        COLUMN_NAMES
            .iter()
            .zip(types)
            .map(|(name, data_type)| Field::new(*name, data_type, false))
            .collect::<Vec<_>>(),
    )
}

/// Whether the dataset artifact is present
#[must_use]
pub fn dataset_exists(path: &Path) -> bool {
    path.is_file()
}

/// Convert employees to a record batch with the dataset schema
pub fn employees_to_batch(employees: &[Employee]) -> Result<RecordBatch> {
    let fields: Vec<FieldRef> = employee_schema()
        .fields()
        .iter()
        .map(Arc::clone)
        .collect();

    Ok(serde_arrow::to_record_batch(&fields, &employees)?)
}

/// Convert a record batch back to validated employees
pub fn batch_to_employees(batch: &RecordBatch) -> Result<Vec<Employee>> {
    let employees: Vec<Employee> = serde_arrow::from_record_batch(batch)?;
    for employee in &employees {
        employee.validate().map_err(HrError::InvalidRecord)?;
    }
    Ok(employees)
}

/// Write the dataset artifact
///
/// The file is written next to its final location and renamed into place,
/// so an interrupted write never leaves a partial artifact behind.
pub fn write_dataset(path: &Path, employees: &[Employee]) -> Result<()> {
    log_operation_start("Writing dataset to", path);
    let start = Instant::now();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }

    let batch = employees_to_batch(employees)?;
    let staging = staging_path(path);

    let result = (|| -> Result<()> {
        let file = File::create(&staging)?;
        let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
        writer.write(&batch)?;
        writer.close()?;
        fs::rename(&staging, path)?;
        Ok(())
    })();

    if result.is_err() {
        // Best effort; the write error is the one reported
        let _ = fs::remove_file(&staging);
    }
    result?;

    log_operation_complete("wrote", path, employees.len(), Some(start.elapsed()));
    Ok(())
}

/// Read every employee from the dataset artifact
///
/// # Errors
/// Returns [`HrError::DatasetMissing`] if the artifact does not exist
pub fn read_dataset(path: &Path) -> Result<Vec<Employee>> {
    log_operation_start("Reading dataset from", path);
    let start = Instant::now();

    let file = open_dataset_file(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build()?;

    let mut employees = Vec::new();
    for batch in reader {
        employees.extend(batch_to_employees(&batch?)?);
    }

    log_operation_complete("read", path, employees.len(), Some(start.elapsed()));
    Ok(employees)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::fixtures::employee;
    use crate::models::types::Gender;

    #[test]
    fn test_schema_matches_headers() {
        let schema = employee_schema();
        assert_eq!(schema.fields().len(), 17);
        for (field, name) in schema.fields().iter().zip(COLUMN_NAMES) {
            assert_eq!(field.name(), name);
        }
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("db.parquet");
        let employees = vec![
            employee(10_000_001, Gender::Female, 2_000_000),
            employee(10_000_002, Gender::Male, 4_000_000),
        ];

        write_dataset(&path, &employees).unwrap();
        assert!(dataset_exists(&path));
        assert!(!staging_path(&path).exists());

        let loaded = read_dataset(&path).unwrap();
        assert_eq!(loaded, employees);
    }

    #[test]
    fn test_read_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_dataset(&dir.path().join("absent.parquet")).unwrap_err();
        assert!(matches!(err, HrError::DatasetMissing(_)));
    }

    #[test]
    fn test_out_of_range_record_rejected() {
        let mut bad = employee(10_000_003, Gender::Male, 3_000_000);
        bad.age = 80;
        let batch = employees_to_batch(&[bad]).unwrap();
        assert!(matches!(
            batch_to_employees(&batch),
            Err(HrError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_staging_path() {
        assert_eq!(
            staging_path(Path::new("out/db.parquet")),
            PathBuf::from("out/db.parquet.tmp")
        );
    }
}
