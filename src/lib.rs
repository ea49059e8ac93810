//! Retirement Planner - yearly savings projection through age 100
//!
//! This library provides:
//! - Parsing and validation of the four calculator inputs
//! - Annuity future value of yearly contributions, then compounding to age 100
//! - Chart datasets with text, JSON and CSV renderers

pub mod input;
pub mod projection;
pub mod chart;

// Re-export commonly used types
pub use input::{FormFields, ProjectionInput, InputError, validate_ages, AgeValidation};
pub use projection::{project, ProjectionEngine, ProjectionConfig, ProjectionSeries};
pub use chart::{ChartData, ChartOptions, ChartRenderer, render_chart};
