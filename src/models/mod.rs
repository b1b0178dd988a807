//! Domain models for the compensation dataset
//!
//! This module contains the employee record and the categorical types its
//! fields draw from.

pub mod employee;
pub mod types;

// Re-export commonly used types
pub use employee::{COLUMN_NAMES, Employee};
pub use types::{
    CompensationFund, ContractType, Department, EducationLevel, EmploymentStatus, FunctionalArea,
    Gender, HealthInsurer, JobTitle, PensionFund,
};
