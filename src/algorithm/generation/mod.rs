//! Synthetic employee generation
//!
//! This module draws employee records with rule-driven correlations between
//! fields and persists them as the dataset artifact. Generation is skipped
//! when the artifact already exists.

pub mod locale;
pub mod rules;
pub mod sampling;

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Instant;

use chrono::{Months, NaiveDate};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::config::HrConfig;
use crate::error::{HrError, Result};
use crate::models::employee::{Employee, MAX_AGE, MAX_EXPERIENCE, MIN_AGE};
use crate::models::types::{
    CompensationFund, Department, EducationLevel, EmploymentStatus, FunctionalArea, Gender,
    HealthInsurer, JobTitle,
};
use crate::utils::io::parquet::{dataset_exists, write_dataset};
use crate::utils::logging::{finish_and_clear, log_operation_complete, log_operation_start};
use crate::utils::logging::progress::create_main_progress_bar;

use locale::LocalePool;
use rules::CorrelationRules;
use sampling::{WeightedChoice, date_between};

/// Identifiers are eight-digit national ID numbers
pub const ID_RANGE: RangeInclusive<u64> = 10_000_000..=99_999_999;

/// Gender weights in `Gender::ALL` order
pub const GENDER_WEIGHTS: [f64; 2] = [0.55, 0.45];
/// Area weights in `FunctionalArea::ALL` order
pub const AREA_WEIGHTS: [f64; 3] = [0.3, 0.3, 0.4];

/// Distributions for the fields drawn independently of each other
#[derive(Debug, Clone)]
struct FieldSamplers {
    gender: WeightedChoice<Gender>,
    status: WeightedChoice<EmploymentStatus>,
    job_title: WeightedChoice<JobTitle>,
    department: WeightedChoice<Department>,
    area: WeightedChoice<FunctionalArea>,
    education: WeightedChoice<EducationLevel>,
    health_insurer: WeightedChoice<HealthInsurer>,
    compensation_fund: WeightedChoice<CompensationFund>,
}

impl FieldSamplers {
    fn new() -> Result<Self> {
        Ok(Self {
            gender: WeightedChoice::new(Gender::ALL, &GENDER_WEIGHTS)?,
            status: WeightedChoice::uniform(EmploymentStatus::ALL)?,
            job_title: WeightedChoice::uniform(JobTitle::ALL)?,
            department: WeightedChoice::uniform(Department::ALL)?,
            area: WeightedChoice::new(FunctionalArea::ALL, &AREA_WEIGHTS)?,
            education: WeightedChoice::uniform(EducationLevel::ALL)?,
            health_insurer: WeightedChoice::uniform(HealthInsurer::ALL)?,
            compensation_fund: WeightedChoice::uniform(CompensationFund::ALL)?,
        })
    }
}

/// Generator of synthetic employees
///
/// Identifiers are unique across every call on the same generator.
#[derive(Debug)]
pub struct EmployeeGenerator {
    rng: StdRng,
    pool: &'static LocalePool,
    hire_start: NaiveDate,
    hire_end: NaiveDate,
    fields: FieldSamplers,
    rules: CorrelationRules,
    issued_ids: FxHashSet<u64>,
}

impl EmployeeGenerator {
    /// Create a generator from the configuration
    ///
    /// Uses `random_seed` when set, OS entropy otherwise.
    pub fn new(config: &HrConfig) -> Result<Self> {
        let hire_end = config.resolved_reference_date();
        let hire_start = hire_end
            .checked_sub_months(Months::new(config.hire_span_years.saturating_mul(12)))
            .ok_or_else(|| {
                HrError::InvalidConfig(format!(
                    "hire span of {} years before {hire_end} is out of range",
                    config.hire_span_years
                ))
            })?;

        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            rng,
            pool: config.locale.pool(),
            hire_start,
            hire_end,
            fields: FieldSamplers::new()?,
            rules: CorrelationRules::new()?,
            issued_ids: FxHashSet::default(),
        })
    }

    /// Generate `count` employees
    ///
    /// # Errors
    /// Returns an error if the identifier space cannot hold `count` more
    /// unique identifiers
    pub fn generate(&mut self, count: usize) -> Result<Vec<Employee>> {
        let capacity = (ID_RANGE.end() - ID_RANGE.start() + 1) as usize;
        if self.issued_ids.len().saturating_add(count) > capacity {
            return Err(HrError::InvalidConfig(format!(
                "cannot issue {count} more unique identifiers ({} already issued)",
                self.issued_ids.len()
            )));
        }

        let pb = create_main_progress_bar(count as u64, Some("Generating employees"));
        let mut employees = Vec::with_capacity(count);
        for _ in 0..count {
            employees.push(self.next_employee());
            pb.inc(1);
        }
        finish_and_clear(&pb);

        Ok(employees)
    }

    fn next_employee(&mut self) -> Employee {
        let id = self.next_unique_id();
        let name = self.pool.name(&mut self.rng);
        let gender = self.fields.gender.sample(&mut self.rng);
        let age = self.rng.random_range(MIN_AGE..=MAX_AGE);
        let city = self.pool.city(&mut self.rng);
        let hire_date = date_between(&mut self.rng, self.hire_start, self.hire_end);
        let status = self.fields.status.sample(&mut self.rng);

        let salary = self.rules.base_salary(gender, &mut self.rng);

        let job_title = self.fields.job_title.sample(&mut self.rng);
        let department = self.fields.department.sample(&mut self.rng);
        let area = self.fields.area.sample(&mut self.rng);

        let salary = self
            .rules
            .apply_senior_floor(salary, job_title, area, &mut self.rng);

        let education = self.fields.education.sample(&mut self.rng);
        let experience_years = self.rng.random_range(0..=MAX_EXPERIENCE);
        let contract = self.rules.contract(job_title, age, &mut self.rng);
        let health_insurer = self.fields.health_insurer.sample(&mut self.rng);
        let compensation_fund = self.fields.compensation_fund.sample(&mut self.rng);
        let pension_fund = self.rules.pension_fund(age, &mut self.rng);

        Employee {
            id,
            name,
            gender,
            age,
            city,
            hire_date,
            status,
            salary,
            job_title,
            department,
            area,
            education,
            experience_years,
            contract,
            health_insurer,
            compensation_fund,
            pension_fund,
        }
    }

    /// Draw identifiers until one has not been issued yet
    fn next_unique_id(&mut self) -> u64 {
        loop {
            let candidate = self.rng.random_range(ID_RANGE);
            if self.issued_ids.insert(candidate) {
                return candidate;
            }
        }
    }
}

/// Result of a generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A fresh dataset was written
    Generated {
        /// Path of the written artifact
        path: PathBuf,
        /// Number of rows written
        rows: usize,
    },
    /// The artifact already existed and was left untouched
    Skipped {
        /// Path of the existing artifact
        path: PathBuf,
    },
}

impl GenerationOutcome {
    /// Path of the dataset artifact, fresh or existing
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Generated { path, .. } | Self::Skipped { path } => path,
        }
    }

    /// Whether a new artifact was written
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

/// Generate the dataset and persist it, unless the artifact already exists
pub fn generate_dataset(config: &HrConfig) -> Result<GenerationOutcome> {
    config.validate()?;

    let path = config.output_path.clone();
    if dataset_exists(&path) {
        info!(
            "Dataset '{}' already exists; skipping generation",
            path.display()
        );
        return Ok(GenerationOutcome::Skipped { path });
    }

    log_operation_start("Generating dataset", &path);
    let start = Instant::now();

    let mut generator = EmployeeGenerator::new(config)?;
    let employees = generator.generate(config.row_count)?;
    write_dataset(&path, &employees)?;

    log_operation_complete("generated", &path, employees.len(), Some(start.elapsed()));

    Ok(GenerationOutcome::Generated {
        path,
        rows: employees.len(),
    })
}
