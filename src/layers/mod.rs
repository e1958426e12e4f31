//! Overlay population: one module per category of features.

pub mod buildings;
pub mod nearby;
pub mod parking;

pub use buildings::load_buildings;
pub use nearby::{Applied, apply_nearby, find_nearby};
pub use parking::load_parking_lots;

use crate::geometry::GeometryError;
use crate::map::{Feature, OverlayGroup, Popup, Style};

/// A feature that could not be placed on the map
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFailure {
    pub name: String,
    pub error: GeometryError,
}

/// Outcome of populating one overlay group
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Features added to the group
    pub added: usize,
    /// Items without geometry
    pub skipped: usize,
    /// Items whose geometry failed to parse
    pub failures: Vec<FeatureFailure>,
}

impl LoadReport {
    pub fn summary(&self) -> String {
        if self.failures.is_empty() {
            format!("{} added, {} without geometry", self.added, self.skipped)
        } else {
            format!(
                "{} added, {} without geometry, {} with invalid geometry",
                self.added,
                self.skipped,
                self.failures.len()
            )
        }
    }
}

/// Parse `wkt` and add the feature to `group`, recording the outcome.
///
/// Returns the feature's index in the group, or `None` if it was rejected.
fn place(
    group: &mut OverlayGroup,
    report: &mut LoadReport,
    name: &str,
    wkt: &str,
    style: Style,
    popup: Popup,
) -> Option<usize> {
    match Feature::from_wkt(name, wkt, style, popup) {
        Ok(feature) => {
            report.added += 1;
            Some(group.add(feature))
        }
        Err(error) => {
            log::warn!("Skipping {} in {}: {}", name, group.name(), error);
            report.failures.push(FeatureFailure {
                name: name.to_string(),
                error,
            });
            None
        }
    }
}
