//! Core projection engine: yearly contributions through the stop age, then
//! compounding alone through the horizon age

use crate::input::ProjectionInput;
use super::annuity::PaymentTiming;
use super::series::ProjectionSeries;
use super::state::AccumulationState;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Last age every projection runs to
pub const DEFAULT_HORIZON_AGE: u8 = 100;

/// How the cumulative contribution series is reported once contributions stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AfterStopContributions {
    /// Repeat the final total for every later age
    #[default]
    Hold,
    /// Leave later ages empty
    Omit,
}

/// Configuration for a projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Final age projected (inclusive)
    pub horizon_age: u8,

    /// Contribution timing within each year
    pub timing: PaymentTiming,

    /// Contribution reporting after the stop age
    pub after_stop: AfterStopContributions,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_age: DEFAULT_HORIZON_AGE,
            timing: PaymentTiming::EndOfYear,
            after_stop: AfterStopContributions::Hold,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project contributions and value for every age from the start age
    /// through the horizon age.
    ///
    /// Never fails. A start age past the horizon yields an empty series; a
    /// start age after the stop age means nothing is ever paid in.
    pub fn project(&self, input: &ProjectionInput) -> ProjectionSeries {
        let start_age = input.start_age();
        let stop_age = input.stop_age();
        let contribution = input.annual_contribution();
        let rate = input.annual_rate();

        // Balance carried year to year; only reported values are rounded
        let mut series = ProjectionSeries::new(stop_age);
        let mut state = AccumulationState::default();

        if start_age > stop_age {
            warn!(
                "start age {} is after stop age {}; no contributions will be made",
                start_age, stop_age
            );
        }

        for age in start_age..=self.config.horizon_age {
            if age <= stop_age {
                // Contribution year: grow the balance and pay in
                state.contribute(contribution, rate, self.config.timing);
                series.push(age, Some(state.cumulative_contribution), state.value);
            } else {
                // Contributions have stopped; compound last year's value
                state.grow(rate);
                let reported = match self.config.after_stop {
                    AfterStopContributions::Hold => Some(state.cumulative_contribution),
                    AfterStopContributions::Omit => None,
                };
                series.push(age, reported, state.value);
            }
        }

        debug!(
            "projected ages {}..={} ({} rows, {} contribution years)",
            start_age,
            self.config.horizon_age,
            series.len(),
            state.years_contributed
        );

        series
    }
}

/// Project with the default configuration
pub fn project(input: &ProjectionInput) -> ProjectionSeries {
    ProjectionEngine::default().project(input)
}
