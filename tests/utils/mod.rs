use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use hr_compensation::models::{
    CompensationFund, ContractType, Department, EducationLevel, EmploymentStatus, FunctionalArea,
    HealthInsurer, JobTitle, PensionFund,
};
use hr_compensation::render::chart_path;
use hr_compensation::{Chart, ChartRenderer, Employee, Gender, HrConfig, HrError, Result};

/// Reference date the generated hire dates end at
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
}

/// Seeded configuration writing into `dir`
#[must_use]
pub fn test_config(dir: &Path, row_count: usize, seed: u64) -> HrConfig {
    HrConfig {
        row_count,
        output_path: dir.join("DB_compensacion.parquet"),
        chart_dir: dir.join("graficos_indicadores"),
        random_seed: Some(seed),
        reference_date: Some(reference_date()),
        ..Default::default()
    }
}

/// An employee with fixed attributes besides the given ones
#[must_use]
pub fn employee(id: u64, gender: Gender, salary: i64, hire_date: NaiveDate) -> Employee {
    Employee {
        id,
        name: format!("Empleado {id}"),
        gender,
        age: 40,
        city: "Bogotá".to_string(),
        hire_date,
        status: EmploymentStatus::Active,
        salary,
        job_title: JobTitle::Coordinator,
        department: Department::Operations,
        area: FunctionalArea::Administrative,
        education: EducationLevel::Technologist,
        experience_years: 12,
        contract: ContractType::FixedTerm,
        health_insurer: HealthInsurer::Sanitas,
        compensation_fund: CompensationFund::Cafam,
        pension_fund: PensionFund::Proteccion,
    }
}

/// Renderer that records chart descriptions and writes a text stub per chart
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rendered: Vec<Chart>,
    /// Slug whose render call fails
    pub fail_on: Option<String>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn failing_on(slug: &str) -> Self {
        Self {
            rendered: Vec::new(),
            fail_on: Some(slug.to_string()),
        }
    }

    #[must_use]
    pub fn slugs(&self) -> Vec<&str> {
        self.rendered.iter().map(|c| c.slug.as_str()).collect()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&mut self, chart: &Chart, dir: &Path) -> Result<PathBuf> {
        if self.fail_on.as_deref() == Some(chart.slug.as_str()) {
            return Err(HrError::render(&chart.slug, "forced failure"));
        }
        let path = chart_path(dir, &chart.slug, self.extension());
        fs::write(&path, &chart.title)?;
        self.rendered.push(chart.clone());
        Ok(path)
    }
}

/// Regular files directly inside `dir`
#[must_use]
pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut files = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();
    files.sort();
    files
}
