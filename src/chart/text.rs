//! Terminal chart: one row per age, projected value as a bar and cumulative
//! contributions as a marker on the same scale

use super::render::HandleTracker;
use super::{ChartData, ChartHandle, ChartOptions, ChartRenderer, RenderError, SeriesKind};
use std::io::Write;

const BAR_CHAR: char = '#';
const LINE_CHAR: char = '*';
pub const DEFAULT_BAR_WIDTH: usize = 50;
/// Widest bar drawn; larger requests are clamped
pub const MAX_BAR_WIDTH: usize = 500;

pub struct TextChartRenderer<W: Write> {
    out: W,
    width: usize,
    tracker: HandleTracker,
}

impl<W: Write> TextChartRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_width(out, DEFAULT_BAR_WIDTH)
    }

    pub fn with_width(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.clamp(1, MAX_BAR_WIDTH),
            tracker: HandleTracker::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Column for `value` on a 0..=width scale
    fn column(&self, value: f64, low: f64, high: f64) -> usize {
        if high <= low {
            return if value > low { self.width } else { 0 };
        }
        let frac = ((value - low) / (high - low)).clamp(0.0, 1.0);
        (frac * self.width as f64).round() as usize
    }
}

impl<W: Write> ChartRenderer for TextChartRenderer<W> {
    type Handle = ChartHandle;

    fn draw(&mut self, data: &ChartData, options: &ChartOptions) -> Result<ChartHandle, RenderError> {
        let handle = self.tracker.issue();

        if data.is_empty() {
            writeln!(self.out, "(no ages to chart)")?;
            return Ok(handle);
        }

        let high = data.max_value().unwrap_or(0.0);
        let low = if options.begin_at_zero {
            0.0_f64.min(data.min_value().unwrap_or(0.0))
        } else {
            data.min_value().unwrap_or(0.0)
        };

        let bars = data.dataset(SeriesKind::Projected);
        let line = data.dataset(SeriesKind::Cumulative);
        let value_at = |set: Option<&super::Dataset>, i: usize| set.and_then(|d| d.values.get(i).copied().flatten());

        writeln!(
            self.out,
            "{:>4}  {:>10}  {:>10}  {} {}  {} {}",
            "Age",
            line.map_or("", |d| d.label.as_str()),
            bars.map_or("", |d| d.label.as_str()),
            BAR_CHAR,
            bars.map_or("", |d| d.label.as_str()),
            LINE_CHAR,
            line.map_or("", |d| d.label.as_str()),
        )?;
        writeln!(
            self.out,
            "{:>4}  {:>10}  {:>10}  {} .. {}",
            "",
            "",
            "",
            options.y_tick_format.format(low),
            options.y_tick_format.format(high),
        )?;

        for (i, age) in data.labels.iter().enumerate() {
            let bar_value = value_at(bars, i);
            let line_value = value_at(line, i);

            let mut row: Vec<char> = vec![' '; self.width + 1];
            if let Some(v) = bar_value {
                let end = self.column(v, low, high);
                row.iter_mut().take(end).for_each(|c| *c = BAR_CHAR);
            }
            if let Some(v) = line_value {
                row[self.column(v, low, high)] = LINE_CHAR;
            }
            let plot: String = row.into_iter().collect();

            let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| options.y_tick_format.format(v));
            writeln!(
                self.out,
                "{:>4}  {:>10}  {:>10}  |{}",
                age,
                fmt(line_value),
                fmt(bar_value),
                plot.trim_end(),
            )?;
        }

        self.out.flush()?;
        Ok(handle)
    }

    fn dispose(&mut self, handle: ChartHandle) {
        self.tracker.release(handle);
    }
}
