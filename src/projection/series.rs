//! Projection output structures

use serde::{Deserialize, Serialize};

/// One age of projection output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeRow {
    pub age: u8,
    /// Cumulative amount paid in; `None` when post-stop contributions are omitted
    pub cumulative_contribution: Option<f64>,
    pub projected_value: f64,
    /// Whether a contribution was paid at this age
    pub contributing: bool,
}

/// Aligned age, contribution and value sequences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Last age at which a contribution was paid
    pub stop_age: u8,

    pub ages: Vec<u8>,
    pub contributions: Vec<Option<f64>>,
    pub projected_value: Vec<f64>,
}

impl ProjectionSeries {
    pub fn new(stop_age: u8) -> Self {
        Self {
            stop_age,
            ..Default::default()
        }
    }

    /// Append one age; keeps the three sequences aligned
    pub fn push(&mut self, age: u8, contribution: Option<f64>, value: f64) {
        self.ages.push(age);
        self.contributions.push(contribution);
        self.projected_value.push(value);
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    /// Iterate the series row by row
    pub fn rows(&self) -> impl Iterator<Item = AgeRow> + '_ {
        self.ages
            .iter()
            .zip(&self.contributions)
            .zip(&self.projected_value)
            .map(move |((&age, &cumulative_contribution), &projected_value)| AgeRow {
                age,
                cumulative_contribution,
                projected_value,
                contributing: age <= self.stop_age,
            })
    }

    /// Row for a specific age, if it is in range
    pub fn at_age(&self, age: u8) -> Option<AgeRow> {
        let first = *self.ages.first()?;
        let idx = age.checked_sub(first)? as usize;
        self.rows().nth(idx)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_contributed = self
            .contributions
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max);

        let value_at_stop = self
            .rows()
            .filter(|r| r.contributing)
            .last()
            .map(|r| r.projected_value)
            .unwrap_or(0.0);

        let final_value = self.projected_value.last().copied().unwrap_or(0.0);

        ProjectionSummary {
            total_ages: self.len() as u32,
            final_age: self.ages.last().copied(),
            total_contributed,
            value_at_stop,
            final_value,
            growth: final_value - total_contributed,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_ages: u32,
    pub final_age: Option<u8>,
    pub total_contributed: f64,
    pub value_at_stop: f64,
    pub final_value: f64,
    /// Final value less everything paid in
    pub growth: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> ProjectionSeries {
        let mut series = ProjectionSeries::new(61);
        series.push(60, Some(1000.0), 1000.0);
        series.push(61, Some(2000.0), 2100.0);
        series.push(62, Some(2000.0), 2310.0);
        series
    }

    #[test]
    fn test_rows_are_aligned() {
        let rows: Vec<_> = sample().rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].age, 61);
        assert!(rows[1].contributing);
        assert!(!rows[2].contributing);
        assert_eq!(rows[2].cumulative_contribution, Some(2000.0));
    }

    #[test]
    fn test_at_age() {
        let series = sample();
        assert_eq!(series.at_age(62).map(|r| r.projected_value), Some(2310.0));
        assert!(series.at_age(59).is_none());
        assert!(series.at_age(63).is_none());
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.total_ages, 3);
        assert_eq!(summary.final_age, Some(62));
        assert_relative_eq!(summary.total_contributed, 2000.0);
        assert_relative_eq!(summary.value_at_stop, 2100.0);
        assert_relative_eq!(summary.final_value, 2310.0);
        assert_relative_eq!(summary.growth, 310.0);
    }

    #[test]
    fn test_summary_of_empty_series() {
        let summary = ProjectionSeries::new(65).summary();
        assert_eq!(summary.total_ages, 0);
        assert_eq!(summary.final_age, None);
        assert_relative_eq!(summary.final_value, 0.0);
    }
}
