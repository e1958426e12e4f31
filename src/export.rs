use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::chart::ChartSpec;
use crate::geometry::Bounds;
use crate::map::{
    Feature, MapSession, Notice, OverlayGroup, Popup, ResultEntry, Style, TileLayer, Viewport,
};

#[derive(Debug, Serialize)]
pub struct FeatureSnapshot<'a> {
    pub name: &'a str,
    pub wkt: &'a str,
    pub bounds: &'a Bounds,
    pub style: &'a Style,
    pub popup: &'a Popup,
    pub popup_html: String,
    pub popup_open: bool,
}

impl<'a> From<&'a Feature> for FeatureSnapshot<'a> {
    fn from(feature: &'a Feature) -> Self {
        Self {
            name: &feature.name,
            wkt: &feature.wkt,
            bounds: &feature.bounds,
            style: &feature.style,
            popup: &feature.popup,
            popup_html: feature.popup.to_html(),
            popup_open: feature.popup_open,
        }
    }
}

/// Serializable view of a whole map session
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub viewport: &'a Viewport,
    pub base_layer: &'a TileLayer,
    pub buildings: Vec<FeatureSnapshot<'a>>,
    pub parking_lots: Vec<FeatureSnapshot<'a>>,
    pub highlighted: Vec<FeatureSnapshot<'a>>,
    pub results: &'a [ResultEntry],
    pub notices: &'a [Notice],
    pub chart: Option<&'a ChartSpec>,
}

fn features(group: &OverlayGroup) -> Vec<FeatureSnapshot<'_>> {
    group.features().iter().map(FeatureSnapshot::from).collect()
}

impl<'a> SessionSnapshot<'a> {
    pub fn new(session: &'a MapSession) -> Self {
        Self {
            viewport: &session.viewport,
            base_layer: &session.base_layer,
            buildings: features(&session.buildings),
            parking_lots: features(&session.parking_lots),
            highlighted: features(&session.highlighted),
            results: session.results.entries(),
            notices: session.notices(),
            chart: session.chart.current(),
        }
    }
}

/// Write the session as pretty-printed JSON
pub fn write_snapshot(path: &Path, session: &MapSession) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create snapshot file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &SessionSnapshot::new(session))
        .context("Failed to serialize session snapshot")?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::domain::OccupancyEntry;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = MapSession::new(&MapConfig::default());
        let feature = Feature::from_wkt(
            "Lot 50",
            "POINT (-96.34 30.61)",
            Style::uniform("red", 0.4),
            Popup::new("Lot 50").line("Occupancy", 60),
        )
        .unwrap();
        let index = session.highlighted.add(feature);
        session.results.push("Lot 50", index);
        session.chart.render(&[OccupancyEntry::new("Lot 50", 60.0)]);
        session.notify(Notice::Info("hello".to_string()));

        write_snapshot(&path, &session).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["viewport"]["zoom"], 15);
        assert_eq!(json["buildings"].as_array().unwrap().len(), 0);
        assert_eq!(json["highlighted"][0]["name"], "Lot 50");
        assert_eq!(json["highlighted"][0]["style"]["fill_opacity"], 0.4);
        assert_eq!(
            json["highlighted"][0]["popup_html"],
            "<b>Lot 50</b><br>Occupancy: 60"
        );
        assert_eq!(json["results"][0]["feature"], 0);
        assert_eq!(json["notices"][0]["level"], "info");
        assert_eq!(json["chart"]["labels"][0], "Lot 50");
    }

    #[test]
    fn test_blank_chart_is_null() {
        let session = MapSession::new(&MapConfig::default());
        let json = serde_json::to_value(SessionSnapshot::new(&session)).unwrap();
        assert!(json["chart"].is_null());
        assert!(json["viewport"]["bounds"].is_null());
    }
}
