//! Chart dataset construction and rendering

mod data;
mod format;
mod render;
mod text;
mod json;
mod table;

pub use data::{ChartData, ChartOptions, Dataset, DrawStyle, SeriesKind, TickFormat};
pub use format::format_abbreviated_currency;
pub use render::{render_chart, ChartHandle, ChartRenderer, RenderError};
pub use text::{TextChartRenderer, DEFAULT_BAR_WIDTH, MAX_BAR_WIDTH};
pub use json::JsonChartRenderer;
pub use table::write_series_csv;
