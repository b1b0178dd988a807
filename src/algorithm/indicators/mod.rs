//! Compensation indicators
//!
//! This module computes the fixed battery of indicators summarizing a
//! dataset: counts, group means, group distributions and proportions. Each
//! indicator has a slug that names its chart file.

pub mod charts;
pub mod statistics;

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;

use crate::models::employee::Employee;
use crate::models::types::{
    ContractType, EducationLevel, EmploymentStatus, FunctionalArea, Gender, JobTitle, PensionFund,
};
use statistics::{
    DescriptiveStats, group_count, group_describe, group_mean, group_sum, proportions,
};

/// The named indicators, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Indicator {
    TotalEmployees,
    GenderDistribution,
    LaborCostByArea,
    SalaryByGender,
    SalaryByStatus,
    GrowthIndicator,
    SalaryByRole,
    SalaryDistributionByArea,
    InternalEquity,
    GenderPayGap,
    EducationByGender,
    AgeSalaryRelation,
    ExperienceByContract,
    EmployeesByPensionFund,
}

impl Indicator {
    pub const ALL: [Self; 14] = [
        Self::TotalEmployees,
        Self::GenderDistribution,
        Self::LaborCostByArea,
        Self::SalaryByGender,
        Self::SalaryByStatus,
        Self::GrowthIndicator,
        Self::SalaryByRole,
        Self::SalaryDistributionByArea,
        Self::InternalEquity,
        Self::GenderPayGap,
        Self::EducationByGender,
        Self::AgeSalaryRelation,
        Self::ExperienceByContract,
        Self::EmployeesByPensionFund,
    ];

    /// File-name slug of the indicator's chart
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::TotalEmployees => "total_empleados",
            Self::GenderDistribution => "distribucion_genero",
            Self::LaborCostByArea => "costo_laboral_area",
            Self::SalaryByGender => "salario_genero",
            Self::SalaryByStatus => "rotacion_salarial",
            Self::GrowthIndicator => "indicador_crecimiento",
            Self::SalaryByRole => "salario_por_cargo",
            Self::SalaryDistributionByArea => "distribucion_salario_area",
            Self::InternalEquity => "equidad_interna",
            Self::GenderPayGap => "brecha_salarial",
            Self::EducationByGender => "nivel_educativo_genero",
            Self::AgeSalaryRelation => "relacion_edad_salario",
            Self::ExperienceByContract => "contrato_experiencia",
            Self::EmployeesByPensionFund => "empleados_por_fondo",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Share of hires inside the recent window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthIndicator {
    /// First year of the window, inclusive
    pub window_start: i32,
    /// Latest hire year in the data, inclusive
    pub window_end: i32,
    pub recent_hires: usize,
    pub total: usize,
    /// Recent hires as a percentage of all employees
    pub recent_percentage: f64,
}

impl GrowthIndicator {
    /// Compute the window from the latest hire year, never from the clock
    ///
    /// The window spans `[max_year - window_years, max_year]`.
    #[must_use]
    pub fn compute(employees: &[Employee], window_years: i32) -> Option<Self> {
        let window_end = employees.iter().map(Employee::hire_year).max()?;
        let window_start = window_end - window_years;
        let recent_hires = employees
            .iter()
            .filter(|e| e.hire_year() >= window_start)
            .count();
        let total = employees.len();

        Some(Self {
            window_start,
            window_end,
            recent_hires,
            total,
            recent_percentage: recent_hires as f64 / total as f64 * 100.0,
        })
    }
}

/// Mean salary per gender with the spread between the extremes
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryGap {
    pub means: BTreeMap<Gender, f64>,
    /// Highest mean minus lowest mean
    pub gap: f64,
}

impl SalaryGap {
    #[must_use]
    pub fn from_means(means: BTreeMap<Gender, f64>) -> Self {
        let gap = means
            .values()
            .copied()
            .minmax_by(f64::total_cmp)
            .into_option()
            .map_or(0.0, |(min, max)| max - min);
        Self { means, gap }
    }
}

/// Every indicator computed over one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Indicators {
    pub total_employees: usize,
    /// Share of each gender, between 0 and 1
    pub gender_distribution: BTreeMap<Gender, f64>,
    /// Total salary per area, largest first
    pub labor_cost_by_area: Vec<(FunctionalArea, i64)>,
    pub salary_by_gender: BTreeMap<Gender, f64>,
    pub salary_by_status: BTreeMap<EmploymentStatus, f64>,
    pub growth: GrowthIndicator,
    /// Mean salary per role, lowest first
    pub salary_by_role: Vec<(JobTitle, f64)>,
    pub salary_stats_by_area: BTreeMap<FunctionalArea, DescriptiveStats>,
    pub salary_by_area_role: BTreeMap<(FunctionalArea, JobTitle), f64>,
    pub gender_gap: SalaryGap,
    pub education_by_gender: BTreeMap<Gender, BTreeMap<EducationLevel, usize>>,
    pub salary_by_age: BTreeMap<u8, f64>,
    pub experience_by_contract: BTreeMap<ContractType, f64>,
    /// Employees per pension fund, largest first
    pub employees_by_pension_fund: Vec<(PensionFund, usize)>,
}

impl Indicators {
    /// Compute every indicator, `None` for an empty dataset
    ///
    /// # Arguments
    /// * `employees` - The loaded dataset
    /// * `recent_window_years` - Length of the recent-hires window
    #[must_use]
    pub fn compute(employees: &[Employee], recent_window_years: i32) -> Option<Self> {
        let growth = GrowthIndicator::compute(employees, recent_window_years)?;
        let salary = |e: &Employee| e.salary as f64;

        let gender_counts = group_count(employees, |e| e.gender);

        let labor_cost_by_area = group_sum(employees, |e| e.area, |e| e.salary)
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
            .collect_vec();

        let salary_by_role = group_mean(employees, |e| e.job_title, salary)
            .into_iter()
            .sorted_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
            .collect_vec();

        let salary_by_gender = group_mean(employees, |e| e.gender, salary);

        let mut education_by_gender: BTreeMap<Gender, BTreeMap<EducationLevel, usize>> =
            BTreeMap::new();
        for ((gender, education), count) in group_count(employees, |e| (e.gender, e.education)) {
            education_by_gender
                .entry(gender)
                .or_default()
                .insert(education, count);
        }

        let employees_by_pension_fund = group_count(employees, |e| e.pension_fund)
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
            .collect_vec();

        Some(Self {
            total_employees: employees.len(),
            gender_distribution: proportions(&gender_counts),
            labor_cost_by_area,
            gender_gap: SalaryGap::from_means(salary_by_gender.clone()),
            salary_by_gender,
            salary_by_status: group_mean(employees, |e| e.status, salary),
            growth,
            salary_by_role,
            salary_stats_by_area: group_describe(employees, |e| e.area, salary),
            salary_by_area_role: group_mean(employees, |e| (e.area, e.job_title), salary),
            education_by_gender,
            salary_by_age: group_mean(employees, |e| e.age, salary),
            experience_by_contract: group_mean(
                employees,
                |e| e.contract,
                |e| f64::from(e.experience_years),
            ),
            employees_by_pension_fund,
        })
    }
}

impl fmt::Display for Indicators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compensation Indicators Summary:")?;
        writeln!(f, "  Total Employees: {}", self.total_employees)?;

        writeln!(f, "  Gender Distribution:")?;
        for (gender, share) in &self.gender_distribution {
            writeln!(f, "    {gender}: {:.1}%", share * 100.0)?;
        }

        writeln!(f, "  Labor Cost by Area:")?;
        for (area, total) in &self.labor_cost_by_area {
            writeln!(f, "    {area}: ${total}")?;
        }

        writeln!(f, "  Mean Salary by Status:")?;
        for (status, mean) in &self.salary_by_status {
            writeln!(f, "    {status}: ${mean:.0}")?;
        }

        writeln!(
            f,
            "  Hires {}-{}: {} of {} ({:.1}%)",
            self.growth.window_start,
            self.growth.window_end,
            self.growth.recent_hires,
            self.growth.total,
            self.growth.recent_percentage
        )?;

        writeln!(f, "  Mean Salary by Role:")?;
        for (role, mean) in &self.salary_by_role {
            writeln!(f, "    {role}: ${mean:.0}")?;
        }

        writeln!(f, "  Salary Distribution by Area:")?;
        for (area, stats) in &self.salary_stats_by_area {
            writeln!(
                f,
                "    {area}: n={} mean={:.0} std={:.0} min={:.0} 25%={:.0} 50%={:.0} 75%={:.0} max={:.0}",
                stats.count,
                stats.mean,
                stats.std,
                stats.min,
                stats.q25,
                stats.median,
                stats.q75,
                stats.max
            )?;
        }

        writeln!(f, "  Internal Equity (Area / Role):")?;
        for ((area, role), mean) in &self.salary_by_area_role {
            writeln!(f, "    {area} / {role}: ${mean:.0}")?;
        }

        writeln!(f, "  Gender Pay Gap:")?;
        for (gender, mean) in &self.gender_gap.means {
            writeln!(f, "    {gender}: ${mean:.0}")?;
        }
        writeln!(f, "    Difference: ${:.0}", self.gender_gap.gap)?;

        writeln!(f, "  Mean Experience by Contract:")?;
        for (contract, years) in &self.experience_by_contract {
            writeln!(f, "    {contract}: {years:.1} years")?;
        }

        writeln!(f, "  Employees by Pension Fund:")?;
        for (fund, count) in &self.employees_by_pension_fund {
            writeln!(f, "    {fund}: {count}")?;
        }

        Ok(())
    }
}
