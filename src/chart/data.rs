//! Chart dataset and display options handed to a renderer

use crate::projection::ProjectionSeries;
use serde::{Deserialize, Serialize};

pub const CONTRIBUTIONS_COLOR: &str = "rgb(199, 56, 56)";
pub const EARNINGS_COLOR: &str = "rgb(142, 199, 56)";
pub const GRIDLINE_COLOR: &str = "rgba(140, 140, 140, 0.2)";

/// Which projection series a dataset carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Cumulative,
    Projected,
}

/// How a dataset is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawStyle {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub kind: SeriesKind,
    pub label: String,
    pub style: DrawStyle,
    pub color: String,
    /// Line width in pixels (line datasets only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    /// `None` leaves a gap at that label
    pub values: Vec<Option<f64>>,
}

/// Labelled multi-series data: one label per age, one dataset per series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<u8>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Contributions as a line over projected value as bars
    pub fn from_series(series: &ProjectionSeries) -> Self {
        let contributions = Dataset {
            kind: SeriesKind::Cumulative,
            label: "Contributions".to_string(),
            style: DrawStyle::Line,
            color: CONTRIBUTIONS_COLOR.to_string(),
            border_width: Some(5),
            values: series.contributions.clone(),
        };

        let earnings = Dataset {
            kind: SeriesKind::Projected,
            label: "Earnings".to_string(),
            style: DrawStyle::Bar,
            color: EARNINGS_COLOR.to_string(),
            border_width: None,
            values: series.projected_value.iter().copied().map(Some).collect(),
        };

        Self {
            labels: series.ages.clone(),
            datasets: vec![contributions, earnings],
        }
    }

    pub fn dataset(&self, kind: SeriesKind) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest value across all datasets, ignoring gaps
    pub fn max_value(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    /// Smallest value across all datasets, ignoring gaps
    pub fn min_value(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.datasets.iter().flat_map(|d| d.values.iter().flatten().copied())
    }
}

/// Y-axis tick label format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickFormat {
    AbbreviatedCurrency,
    Plain,
}

impl TickFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            TickFormat::AbbreviatedCurrency => super::format_abbreviated_currency(value),
            TickFormat::Plain => format!("{:.0}", value),
        }
    }
}

/// Display configuration for the chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub animation_ms: u32,
    /// Start the y-axis at zero rather than the smallest value
    pub begin_at_zero: bool,
    pub y_tick_format: TickFormat,
    pub y_gridline_color: String,
    pub x_gridlines: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            animation_ms: 500,
            begin_at_zero: true,
            y_tick_format: TickFormat::AbbreviatedCurrency,
            y_gridline_color: GRIDLINE_COLOR.to_string(),
            x_gridlines: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ProjectionInput;
    use crate::projection::{project, AfterStopContributions, ProjectionConfig, ProjectionEngine};

    #[test]
    fn test_from_series_shape() {
        let series = project(&ProjectionInput::new(30, 65, 6000.0, 7.0).unwrap());
        let chart = ChartData::from_series(&series);

        assert_eq!(chart.labels.len(), 71);
        assert_eq!(chart.datasets.len(), 2);

        let cumulative = chart.dataset(SeriesKind::Cumulative).unwrap();
        assert_eq!(cumulative.style, DrawStyle::Line);
        assert_eq!(cumulative.values[0], Some(6000.0));

        let projected = chart.dataset(SeriesKind::Projected).unwrap();
        assert_eq!(projected.style, DrawStyle::Bar);
        assert_eq!(projected.values.len(), 71);
        assert!(projected.values.iter().all(Option::is_some));
    }

    #[test]
    fn test_omitted_contributions_serialize_as_null() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            after_stop: AfterStopContributions::Omit,
            ..Default::default()
        });
        let series = engine.project(&ProjectionInput::new(98, 99, 100.0, 0.0).unwrap());
        let chart = ChartData::from_series(&series);

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["labels"], serde_json::json!([98, 99, 100]));
        assert_eq!(json["datasets"][0]["kind"], "cumulative");
        assert_eq!(json["datasets"][0]["values"], serde_json::json!([100.0, 200.0, null]));
        assert_eq!(json["datasets"][1]["kind"], "projected");
        assert!(json["datasets"][1].get("border_width").is_none());
    }

    #[test]
    fn test_value_range() {
        let series = project(&ProjectionInput::new(99, 100, 100.0, 0.0).unwrap());
        let chart = ChartData::from_series(&series);
        assert_eq!(chart.min_value(), Some(100.0));
        assert_eq!(chart.max_value(), Some(200.0));
    }

    #[test]
    fn test_default_options() {
        let options = ChartOptions::default();
        assert!(options.begin_at_zero);
        assert!(!options.x_gridlines);
        assert_eq!(options.y_tick_format.format(1500.0), "$1.5k");
        assert_eq!(TickFormat::Plain.format(1500.0), "1500");
    }
}
