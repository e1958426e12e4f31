//! Occupancy bar chart.
//!
//! The chart is held as a declarative [`ChartSpec`] (what a canvas chart
//! library would be handed) plus a plain-text rendition for terminals.

use serde::Serialize;

use crate::domain::OccupancyEntry;

pub const DATASET_LABEL: &str = "Occupancy (%)";
pub const BAR_COLOR: &str = "rgba(54, 162, 235, 0.7)";
pub const Y_AXIS_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_axis: Axis,
    pub legend_display: bool,
}

impl ChartSpec {
    /// Vertical bar chart, one bar per entry, y fixed to [0, 100], no legend
    pub fn occupancy(entries: &[OccupancyEntry]) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: entries.iter().map(|e| e.name.clone()).collect(),
            datasets: vec![Dataset {
                label: DATASET_LABEL.to_string(),
                data: entries.iter().map(|e| e.occupancy).collect(),
                background_color: BAR_COLOR.to_string(),
            }],
            y_axis: Axis {
                begin_at_zero: true,
                min: 0.0,
                max: Y_AXIS_MAX,
            },
            legend_display: false,
        }
    }

    /// Horizontal text bars, `width` characters for a full axis
    ///
    /// Values outside the axis are drawn clamped; the printed number is raw.
    pub fn render_text(&self, width: usize) -> String {
        let values = self
            .datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or_default();
        let label_width = self
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let span = self.y_axis.max - self.y_axis.min;

        let mut out = String::new();
        for (label, &value) in self.labels.iter().zip(values) {
            let fraction = if span > 0.0 {
                ((value - self.y_axis.min) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let filled = (fraction * width as f64).round() as usize;

            out.push_str(&format!(
                "{:<label_width$} |{}{}| {}\n",
                label,
                "█".repeat(filled),
                " ".repeat(width - filled),
                value,
            ));
        }
        out
    }
}

/// The single chart instance of a map session
#[derive(Debug, Clone, Default)]
pub struct OccupancyChart {
    current: Option<ChartSpec>,
}

impl OccupancyChart {
    /// Replace the chart with one built from `entries`.
    ///
    /// Any previous chart is destroyed first; with no entries the chart
    /// stays blank.
    pub fn render(&mut self, entries: &[OccupancyEntry]) {
        self.destroy();

        if entries.is_empty() {
            return;
        }

        self.current = Some(ChartSpec::occupancy(entries));
    }

    pub fn destroy(&mut self) {
        if self.current.take().is_some() {
            log::debug!("Destroyed previous occupancy chart");
        }
    }

    pub fn current(&self) -> Option<&ChartSpec> {
        self.current.as_ref()
    }
}
