use serde::Serialize;

use super::{Feature, OverlayGroup, ResultList, Viewport};
use crate::chart::OccupancyChart;
use crate::config::MapConfig;

/// Base tile layer drawn under every overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

/// A message that must be shown to the user before anything else happens
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Identifies one nearby-parking query; only the newest may touch the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket(u64);

/// Everything a map view owns: viewport, layers, result list, chart
#[derive(Debug, Clone)]
pub struct MapSession {
    pub viewport: Viewport,
    pub base_layer: TileLayer,
    pub buildings: OverlayGroup,
    pub parking_lots: OverlayGroup,
    pub highlighted: OverlayGroup,
    pub results: ResultList,
    pub chart: OccupancyChart,
    notices: Vec<Notice>,
    generation: u64,
}

impl MapSession {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            viewport: Viewport::new(config),
            base_layer: TileLayer {
                url_template: config.tile_url.clone(),
                attribution: config.attribution.clone(),
            },
            buildings: OverlayGroup::new("buildings"),
            parking_lots: OverlayGroup::new("parking_lots"),
            highlighted: OverlayGroup::new("highlighted"),
            results: ResultList::default(),
            chart: OccupancyChart::default(),
            notices: Vec::new(),
            generation: 0,
        }
    }

    /// Start a new query, making every earlier ticket stale
    pub fn begin_query(&mut self) -> QueryTicket {
        self.generation += 1;
        QueryTicket(self.generation)
    }

    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn notify(&mut self, notice: Notice) {
        match &notice {
            Notice::Info(message) => log::info!("{}", message),
            Notice::Error(message) => log::warn!("{}", message),
        }
        self.notices.push(notice);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain pending notices for display
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Click on a result list entry: zoom to its lot and open its popup.
    ///
    /// Returns the activated feature, or `None` if `index` is out of range.
    pub fn activate_result(&mut self, index: usize) -> Option<&Feature> {
        let feature_index = self.results.get(index)?.feature;
        let bounds = self.highlighted.get(feature_index)?.bounds;

        self.viewport.fit_bounds(&bounds);
        self.highlighted.close_popups();

        let feature = self.highlighted.get_mut(feature_index)?;
        feature.popup_open = true;
        Some(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Popup, Style};

    fn lot(name: &str, wkt: &str) -> Feature {
        Feature::from_wkt(name, wkt, Style::uniform("red", 0.5), Popup::new(name)).unwrap()
    }

    #[test]
    fn test_new_session_layout() {
        let session = MapSession::new(&MapConfig::default());
        assert_eq!(session.buildings.name(), "buildings");
        assert_eq!(session.parking_lots.name(), "parking_lots");
        assert_eq!(session.highlighted.name(), "highlighted");
        assert!(session.base_layer.url_template.contains("openstreetmap"));
        assert!(session.chart.current().is_none());
    }

    #[test]
    fn test_newer_query_makes_old_ticket_stale() {
        let mut session = MapSession::new(&MapConfig::default());
        let first = session.begin_query();
        assert!(session.is_current(first));

        let second = session.begin_query();
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }

    #[test]
    fn test_activate_result() {
        let mut session = MapSession::new(&MapConfig::default());
        let a = session.highlighted.add(lot("A", "POINT (-96.34 30.61)"));
        let b = session
            .highlighted
            .add(lot("B", "POLYGON ((-96.33 30.62, -96.32 30.62, -96.32 30.63, -96.33 30.62))"));
        session.results.push("A", a);
        session.results.push("B", b);

        let opened = session.activate_result(1).unwrap();
        assert_eq!(opened.name, "B");
        let b_bounds = opened.bounds;
        assert!(session.viewport.shows(&b_bounds));

        session.activate_result(0).unwrap();
        assert!(session.highlighted.get(0).unwrap().popup_open);
        assert!(!session.highlighted.get(1).unwrap().popup_open);

        assert!(session.activate_result(5).is_none());
    }

    #[test]
    fn test_take_notices() {
        let mut session = MapSession::new(&MapConfig::default());
        session.notify(Notice::Error("Building not found".to_string()));
        assert_eq!(session.notices().len(), 1);

        let notices = session.take_notices();
        assert_eq!(notices, vec![Notice::Error("Building not found".to_string())]);
        assert!(session.notices().is_empty());
    }
}
