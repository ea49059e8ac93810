//! JSON chart document for an external charting front end

use super::render::HandleTracker;
use super::{ChartData, ChartHandle, ChartOptions, ChartRenderer, RenderError};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ChartDocument<'a> {
    #[serde(rename = "type")]
    chart_type: &'static str,
    data: &'a ChartData,
    options: &'a ChartOptions,
}

/// Writes each chart as a pretty-printed JSON document
pub struct JsonChartRenderer<W: Write> {
    out: W,
    tracker: HandleTracker,
}

impl<W: Write> JsonChartRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tracker: HandleTracker::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for JsonChartRenderer<W> {
    type Handle = ChartHandle;

    fn draw(&mut self, data: &ChartData, options: &ChartOptions) -> Result<ChartHandle, RenderError> {
        let doc = ChartDocument {
            chart_type: "bar",
            data,
            options,
        };
        serde_json::to_writer_pretty(&mut self.out, &doc)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(self.tracker.issue())
    }

    fn dispose(&mut self, handle: ChartHandle) {
        self.tracker.release(handle);
    }
}
