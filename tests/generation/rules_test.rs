//! Tests for the correlations between generated fields

use chrono::Datelike;
use hr_compensation::algorithm::generation::rules::{
    APPRENTICE_MAX_AGE, FEMALE_BASE_SALARY, RESERVED_FUND_AGE, SENIOR_SALARY, has_senior_floor,
};
use hr_compensation::models::{ContractType, PensionFund};
use hr_compensation::{Employee, EmployeeGenerator, Gender};

use crate::utils::{reference_date, test_config};

fn generated(rows: usize, seed: u64) -> Vec<Employee> {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), rows, seed);
    EmployeeGenerator::new(&config).unwrap().generate(rows).unwrap()
}

#[test]
fn test_female_salary_rule() {
    let employees = generated(3000, 7);
    let mut senior = 0;
    for employee in employees.iter().filter(|e| e.gender == Gender::Female) {
        if has_senior_floor(employee.job_title, employee.area) {
            senior += 1;
            assert!(
                employee.salary as f64 >= SENIOR_SALARY.min,
                "senior female salary {} below the floor",
                employee.salary
            );
        } else {
            assert!(
                FEMALE_BASE_SALARY.contains(employee.salary),
                "female salary {} outside the base range",
                employee.salary
            );
        }
    }
    assert!(senior > 0, "expected some senior female employees");
}

#[test]
fn test_senior_floor_applies_to_everyone() {
    for employee in generated(2000, 8) {
        if has_senior_floor(employee.job_title, employee.area) {
            assert!(employee.salary >= 8_000_000, "{employee:?}");
        }
    }
}

#[test]
fn test_young_employees_are_apprentices() {
    let employees = generated(3000, 9);
    let young = employees
        .iter()
        .filter(|e| e.age <= APPRENTICE_MAX_AGE)
        .collect::<Vec<_>>();
    assert!(!young.is_empty());
    assert!(young.iter().all(|e| e.contract == ContractType::Apprenticeship));
}

#[test]
fn test_reserved_pension_fund_by_age() {
    for employee in generated(3000, 10) {
        if employee.age > RESERVED_FUND_AGE {
            assert_eq!(employee.pension_fund, PensionFund::Colpensiones);
        } else {
            assert_ne!(employee.pension_fund, PensionFund::Colpensiones);
        }
    }
}

#[test]
fn test_hire_dates_end_at_reference_date() {
    let employees = generated(1000, 12);
    let end = reference_date();
    assert!(employees.iter().all(|e| e.hire_date <= end));
    assert!(employees.iter().all(|e| e.hire_date.year() >= end.year() - 20));
}
