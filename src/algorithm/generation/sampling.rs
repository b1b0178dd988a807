//! Random draws used by the generator
//!
//! Weighted categorical choice, salary draws rounded to the nearest thousand,
//! and uniform dates.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::{HrError, Result};

/// Categorical distribution over a fixed set of values
#[derive(Debug, Clone)]
pub struct WeightedChoice<T: Copy> {
    values: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Copy> WeightedChoice<T> {
    /// Create a distribution with one weight per value
    ///
    /// # Errors
    /// Returns an error if the lengths differ, the set is empty, or the
    /// weights are negative or sum to zero
    pub fn new(values: &[T], weights: &[f64]) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(HrError::InvalidConfig(format!(
                "{} values but {} weights",
                values.len(),
                weights.len()
            )));
        }

        let index = WeightedIndex::new(weights.iter().copied())
            .map_err(|e| HrError::InvalidConfig(format!("Invalid weights: {e}")))?;

        Ok(Self {
            values: values.to_vec(),
            index,
        })
    }

    /// Create a distribution giving every value the same weight
    pub fn uniform(values: &[T]) -> Result<Self> {
        Self::new(values, &vec![1.0; values.len()])
    }

    /// Draw one value
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)]
    }
}

/// Inclusive salary range for a uniform draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

impl SalaryRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a salary uniformly from the range, rounded to the nearest thousand
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        round_to_thousand(rng.random_range(self.min..=self.max))
    }

    /// Whether a rounded salary falls inside this range
    #[must_use]
    pub fn contains(&self, salary: i64) -> bool {
        let salary = salary as f64;
        salary >= self.min && salary <= self.max
    }
}

/// Round a monetary amount to the nearest thousand
#[must_use]
pub fn round_to_thousand(value: f64) -> i64 {
    ((value / 1000.0).round() * 1000.0) as i64
}

/// Draw a date uniformly between `start` and `end`, both inclusive
pub fn date_between<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let span = u64::try_from((end - start).num_days()).unwrap_or(0);
    let offset = rng.random_range(0..=span);
    start.checked_add_days(Days::new(offset)).unwrap_or(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_round_to_thousand() {
        assert_eq!(round_to_thousand(1_234_567.0), 1_235_000);
        assert_eq!(round_to_thousand(1_234_499.9), 1_234_000);
        assert_eq!(round_to_thousand(8_000_000.0), 8_000_000);
    }

    #[test]
    fn test_weighted_choice_rejects_bad_input() {
        assert!(WeightedChoice::new(&[1, 2], &[0.5]).is_err());
        assert!(WeightedChoice::new(&[1, 2], &[0.0, 0.0]).is_err());
        assert!(WeightedChoice::<u8>::uniform(&[]).is_err());
    }

    #[test]
    fn test_weighted_choice_respects_zero_weight() {
        let choice = WeightedChoice::new(&['a', 'b', 'c'], &[1.0, 0.0, 1.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            assert_ne!(choice.sample(&mut rng), 'b');
        }
    }

    #[test]
    fn test_salary_draw_in_range_and_rounded() {
        let range = SalaryRange::new(1_200_000.0, 8_000_000.0);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let salary = range.draw(&mut rng);
            assert!(range.contains(salary), "{salary} out of range");
            assert_eq!(salary % 1000, 0);
        }
    }

    #[test]
    fn test_date_between_bounds() {
        let start = NaiveDate::from_ymd_opt(2004, 10, 16).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let date = date_between(&mut rng, start, end);
            assert!(date >= start && date <= end);
        }
        assert_eq!(date_between(&mut rng, end, end), end);
    }
}
