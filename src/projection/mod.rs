//! Projection engine for yearly retirement contributions

mod annuity;
mod state;
mod engine;
mod series;

pub use annuity::{future_value, compound, PaymentTiming};
pub use state::AccumulationState;
pub use engine::{project, ProjectionEngine, ProjectionConfig, AfterStopContributions, DEFAULT_HORIZON_AGE};
pub use series::{AgeRow, ProjectionSeries, ProjectionSummary};
