//! Load a projection input from a JSON document

use super::{InputError, ProjectionInput};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw document shape; converted through [`ProjectionInput::validated`]
#[derive(Debug, Deserialize)]
struct InputDocument {
    start_age: u8,
    stop_age: u8,
    annual_contribution: f64,
    #[serde(alias = "annual_return")]
    annual_return_percent: f64,
}

impl InputDocument {
    fn to_input(self) -> Result<ProjectionInput, InputError> {
        ProjectionInput::validated(
            self.start_age,
            self.stop_age,
            self.annual_contribution,
            self.annual_return_percent,
        )
    }
}

/// Load and validate an input file
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<ProjectionInput, InputError> {
    let file = File::open(path)?;
    load_input_from_reader(BufReader::new(file))
}

/// Load and validate an input document from any reader
pub fn load_input_from_reader<R: Read>(reader: R) -> Result<ProjectionInput, InputError> {
    let doc: InputDocument = serde_json::from_reader(reader)?;
    doc.to_input()
}
