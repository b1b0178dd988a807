//! Cross-field correlation rules
//!
//! Applied to each row after the independent draws, in this order:
//! gender sets the salary base range, managerial roles and commercial staff
//! get a higher salary floor, role and age steer the contract type, and age
//! restricts the pension fund.

use rand::Rng;

use crate::algorithm::generation::sampling::{SalaryRange, WeightedChoice};
use crate::error::Result;
use crate::models::types::{ContractType, FunctionalArea, Gender, JobTitle, PensionFund};

/// Salary range for women before any override
pub const FEMALE_BASE_SALARY: SalaryRange = SalaryRange::new(1_200_000.0, 8_000_000.0);
/// Salary range for men before any override
pub const MALE_BASE_SALARY: SalaryRange = SalaryRange::new(2_000_000.0, 15_000_000.0);
/// Range of the senior floor draw
pub const SENIOR_SALARY: SalaryRange = SalaryRange::new(8_000_000.0, 15_000_000.0);

/// Employees at or below this age get an apprenticeship contract
pub const APPRENTICE_MAX_AGE: u8 = 22;
/// Employees above this age belong to the reserved pension fund
pub const RESERVED_FUND_AGE: u8 = 50;

/// Contract weights for assistants, in `ContractType::ALL` order
pub const ASSISTANT_CONTRACT_WEIGHTS: [f64; 4] = [0.1, 0.2, 0.6, 0.1];

/// Base salary range for a gender
#[must_use]
pub const fn base_salary_range(gender: Gender) -> SalaryRange {
    match gender {
        Gender::Female => FEMALE_BASE_SALARY,
        Gender::Male => MALE_BASE_SALARY,
    }
}

/// Whether the role or area lifts the salary to the senior floor
#[must_use]
pub const fn has_senior_floor(job_title: JobTitle, area: FunctionalArea) -> bool {
    job_title.is_managerial() || matches!(area, FunctionalArea::Commercial)
}

/// Stateless rule set holding the distributions the rules draw from
#[derive(Debug, Clone)]
pub struct CorrelationRules {
    assistant_contracts: WeightedChoice<ContractType>,
    default_contracts: WeightedChoice<ContractType>,
    open_pension_funds: WeightedChoice<PensionFund>,
}

impl CorrelationRules {
    pub fn new() -> Result<Self> {
        Ok(Self {
            assistant_contracts: WeightedChoice::new(
                ContractType::ALL,
                &ASSISTANT_CONTRACT_WEIGHTS,
            )?,
            default_contracts: WeightedChoice::uniform(ContractType::ALL)?,
            open_pension_funds: WeightedChoice::uniform(&PensionFund::open_funds())?,
        })
    }

    /// Draw the base salary for a gender
    pub fn base_salary<R: Rng + ?Sized>(&self, gender: Gender, rng: &mut R) -> i64 {
        base_salary_range(gender).draw(rng)
    }

    /// Raise the salary for managerial roles and commercial staff
    ///
    /// Takes the larger of the current salary and a senior-range draw; other
    /// employees keep their salary and no draw is made.
    pub fn apply_senior_floor<R: Rng + ?Sized>(
        &self,
        salary: i64,
        job_title: JobTitle,
        area: FunctionalArea,
        rng: &mut R,
    ) -> i64 {
        if has_senior_floor(job_title, area) {
            salary.max(SENIOR_SALARY.draw(rng))
        } else {
            salary
        }
    }

    /// Draw a contract type weighted by role and age
    ///
    /// The age rule wins over the role rule.
    pub fn contract<R: Rng + ?Sized>(&self, job_title: JobTitle, age: u8, rng: &mut R) -> ContractType {
        if age <= APPRENTICE_MAX_AGE {
            ContractType::Apprenticeship
        } else if job_title == JobTitle::Assistant {
            self.assistant_contracts.sample(rng)
        } else {
            self.default_contracts.sample(rng)
        }
    }

    /// Draw a pension fund restricted by age
    pub fn pension_fund<R: Rng + ?Sized>(&self, age: u8, rng: &mut R) -> PensionFund {
        if age > RESERVED_FUND_AGE {
            PensionFund::RESERVED
        } else {
            self.open_pension_funds.sample(rng)
        }
    }
}
