//! CSV table of the projection series

use super::RenderError;
use crate::projection::ProjectionSeries;
use std::io::Write;

/// Write one row per age: `Age,CumulativeContribution,ProjectedValue,Contributing`.
/// Omitted contributions are left blank.
pub fn write_series_csv<W: Write>(out: W, series: &ProjectionSeries) -> Result<(), RenderError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["Age", "CumulativeContribution", "ProjectedValue", "Contributing"])?;

    for row in series.rows() {
        writer.write_record([
            row.age.to_string(),
            row.cumulative_contribution
                .map(|c| format!("{:.2}", c))
                .unwrap_or_default(),
            format!("{:.2}", row.projected_value),
            row.contributing.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
