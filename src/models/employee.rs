//! Employee record
//!
//! One row of the persisted dataset. Field names map to the Spanish column
//! headers of the dataset through serde renames, so the same struct is used for
//! Arrow serialization and for aggregation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::types::{
    CompensationFund, ContractType, Department, EducationLevel, EmploymentStatus, FunctionalArea,
    Gender, HealthInsurer, JobTitle, PensionFund,
};

/// Column headers in dataset order
pub const COLUMN_NAMES: [&str; 17] = [
    "Cédula",
    "Nombre",
    "Género",
    "Edad",
    "Residencia",
    "Fecha Ingreso",
    "Estado",
    "Salario",
    "Cargo",
    "Departamento",
    "Área",
    "Nivel Educativo",
    "Años de Experiencia",
    "Tipo de Contrato",
    "EPS",
    "Caja de Compensación",
    "Fondo de Pensión",
];

/// Lowest age present in the dataset
pub const MIN_AGE: u8 = 18;
/// Highest age present in the dataset
pub const MAX_AGE: u8 = 65;
/// Highest years of experience present in the dataset
pub const MAX_EXPERIENCE: u8 = 40;

/// A synthetic employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// National identification number, unique within a dataset
    #[serde(rename = "Cédula")]
    pub id: u64,
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Género")]
    pub gender: Gender,
    #[serde(rename = "Edad")]
    pub age: u8,
    /// City of residence
    #[serde(rename = "Residencia")]
    pub city: String,
    #[serde(rename = "Fecha Ingreso")]
    pub hire_date: NaiveDate,
    #[serde(rename = "Estado")]
    pub status: EmploymentStatus,
    /// Monthly salary, rounded to the nearest thousand
    #[serde(rename = "Salario")]
    pub salary: i64,
    #[serde(rename = "Cargo")]
    pub job_title: JobTitle,
    #[serde(rename = "Departamento")]
    pub department: Department,
    #[serde(rename = "Área")]
    pub area: FunctionalArea,
    #[serde(rename = "Nivel Educativo")]
    pub education: EducationLevel,
    #[serde(rename = "Años de Experiencia")]
    pub experience_years: u8,
    #[serde(rename = "Tipo de Contrato")]
    pub contract: ContractType,
    #[serde(rename = "EPS")]
    pub health_insurer: HealthInsurer,
    #[serde(rename = "Caja de Compensación")]
    pub compensation_fund: CompensationFund,
    #[serde(rename = "Fondo de Pensión")]
    pub pension_fund: PensionFund,
}

impl Employee {
    /// Year the employee was hired
    #[must_use]
    pub fn hire_year(&self) -> i32 {
        self.hire_date.year()
    }

    /// Check the numeric ranges of the data model
    ///
    /// Categorical fields are validated when parsed; this covers the values
    /// the type system leaves open.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(format!(
                "employee {} has age {} outside {MIN_AGE}..={MAX_AGE}",
                self.id, self.age
            ));
        }
        if self.experience_years > MAX_EXPERIENCE {
            return Err(format!(
                "employee {} has {} years of experience, above {MAX_EXPERIENCE}",
                self.id, self.experience_years
            ));
        }
        if self.salary <= 0 {
            return Err(format!(
                "employee {} has non-positive salary {}",
                self.id, self.salary
            ));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::employee;
    use super::*;

    #[test]
    fn test_validate_ranges() {
        let mut e = employee(10_000_001, Gender::Female, 2_000_000);
        assert!(e.validate().is_ok());

        e.age = 17;
        assert!(e.validate().is_err());

        e.age = 30;
        e.experience_years = 41;
        assert!(e.validate().is_err());
    }

    #[test]
    fn test_hire_year() {
        let e = employee(10_000_001, Gender::Male, 3_000_000);
        assert_eq!(e.hire_year(), 2018);
    }

    #[test]
    fn test_json_uses_dataset_headers() {
        let e = employee(10_000_001, Gender::Female, 2_000_000);
        let json = serde_json::to_value(&e).unwrap();
        for column in COLUMN_NAMES {
            assert!(json.get(column).is_some(), "missing column {column}");
        }
        assert_eq!(json["Género"], "Femenino");
    }
}
