//! Configuration for dataset generation and analysis.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::algorithm::generation::locale::Locale;
use crate::algorithm::generation::ID_RANGE;
use crate::error::{HrError, Result};
use crate::error::util::read_to_string_with_path;

/// Default location of the persisted dataset
pub const DEFAULT_OUTPUT_PATH: &str = "DB_compensacion.parquet";
/// Default directory for chart images
pub const DEFAULT_CHART_DIR: &str = "graficos_indicadores";

/// Configuration shared by the generator and the analyzer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HrConfig {
    /// Number of employees to generate
    pub row_count: usize,
    /// Path of the persisted dataset artifact
    pub output_path: PathBuf,
    /// Directory the charts are written to
    pub chart_dir: PathBuf,
    /// Locale used for names and cities
    pub locale: Locale,
    /// Seed for reproducible generation; `None` draws from OS entropy
    pub random_seed: Option<u64>,
    /// Last possible hire date; `None` means today
    pub reference_date: Option<NaiveDate>,
    /// How many years back hire dates may go
    pub hire_span_years: u32,
    /// Length of the recent-hires window, counted back from the latest hire year
    pub recent_window_years: i32,
    /// Chart image size in pixels (width, height)
    pub chart_size: (u32, u32),
    /// Keep rendering the remaining charts when one fails
    pub isolate_render_failures: bool,
}

impl Default for HrConfig {
    fn default() -> Self {
        Self {
            row_count: 5000,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            locale: Locale::default(),
            random_seed: None,
            reference_date: None,
            hire_span_years: 20,
            recent_window_years: 5,
            chart_size: (800, 600),
            isolate_render_failures: false,
        }
    }
}

impl HrConfig {
    /// Load a configuration from a JSON file; missing keys take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read_to_string_with_path(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can produce a valid dataset
    pub fn validate(&self) -> Result<()> {
        if self.row_count == 0 {
            return Err(HrError::InvalidConfig(
                "row_count must be greater than zero".to_string(),
            ));
        }

        let id_space = (ID_RANGE.end() - ID_RANGE.start() + 1) as usize;
        if self.row_count > id_space {
            return Err(HrError::InvalidConfig(format!(
                "row_count {} exceeds the {id_space} available identifiers",
                self.row_count
            )));
        }

        if self.hire_span_years == 0 {
            return Err(HrError::InvalidConfig(
                "hire_span_years must be greater than zero".to_string(),
            ));
        }

        if self.recent_window_years < 0 {
            return Err(HrError::InvalidConfig(
                "recent_window_years must not be negative".to_string(),
            ));
        }

        if self.chart_size.0 == 0 || self.chart_size.1 == 0 {
            return Err(HrError::InvalidConfig(
                "chart_size must be non-zero in both dimensions".to_string(),
            ));
        }

        Ok(())
    }

    /// Reference date resolved against the local clock when unset
    #[must_use]
    pub fn resolved_reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl fmt::Display for HrConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compensation Dataset Configuration:")?;
        writeln!(f, "  Row Count: {}", self.row_count)?;
        writeln!(f, "  Dataset Path: {}", self.output_path.display())?;
        writeln!(f, "  Chart Directory: {}", self.chart_dir.display())?;
        writeln!(f, "  Locale: {}", self.locale)?;
        if let Some(seed) = self.random_seed {
            writeln!(f, "  Random Seed: {seed}")?;
        }
        if let Some(date) = self.reference_date {
            writeln!(f, "  Reference Date: {date}")?;
        }
        writeln!(f, "  Hire Span: {} years", self.hire_span_years)?;
        writeln!(f, "  Recent Window: {} years", self.recent_window_years)?;
        writeln!(f, "  Chart Size: {}x{}", self.chart_size.0, self.chart_size.1)?;
        writeln!(f, "  Isolate Render Failures: {}", self.isolate_render_failures)?;
        Ok(())
    }
}
