//! Projection inputs: the value object, form parsing and age validation

mod data;
mod form;
mod validate;
pub mod loader;

pub use data::{ProjectionInput, InputError, MAX_AGE, MAX_CONTRIBUTION, MAX_RETURN_PERCENT};
pub use form::{FormFields, START_AGE_FIELD, STOP_AGE_FIELD, CONTRIBUTION_FIELD, RETURN_FIELD};
pub use validate::{validate_ages, AgeValidation, AGE_ORDER_MESSAGE};
pub use loader::{load_input, load_input_from_reader};
