use serde::Serialize;

use crate::config::MapConfig;
use crate::geometry::{Bounds, zoom_to_fit};

/// Visible map area: center, zoom and (after a fit) the fitted extent
#[derive(Debug, Clone, Serialize)]
pub struct Viewport {
    /// (lat, lon)
    pub center: (f64, f64),
    pub zoom: u8,
    pub bounds: Option<Bounds>,
    #[serde(skip)]
    width_px: u32,
    #[serde(skip)]
    height_px: u32,
    #[serde(skip)]
    min_zoom: u8,
    #[serde(skip)]
    max_zoom: u8,
}

impl Viewport {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom.clamp(config.min_zoom, config.max_zoom),
            bounds: None,
            width_px: config.viewport_width,
            height_px: config.viewport_height,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
        }
    }

    pub fn set_view(&mut self, center: (f64, f64), zoom: u8) {
        self.center = center;
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.bounds = None;
    }

    /// Center on `bounds` at the largest zoom that shows all of it
    pub fn fit_bounds(&mut self, bounds: &Bounds) {
        self.center = bounds.center();
        self.zoom = zoom_to_fit(
            bounds,
            self.width_px,
            self.height_px,
            self.min_zoom,
            self.max_zoom,
        );
        self.bounds = Some(*bounds);
        log::debug!(
            "Fit viewport to ({:.5}, {:.5}) zoom {}",
            self.center.0,
            self.center.1,
            self.zoom
        );
    }

    /// Whether the last fitted extent covers `bounds`
    pub fn shows(&self, bounds: &Bounds) -> bool {
        self.bounds.is_some_and(|b| b.contains(bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view() {
        let viewport = Viewport::new(&MapConfig::default());
        assert_eq!(viewport.center, (30.617, -96.336));
        assert_eq!(viewport.zoom, 15);
        assert!(viewport.bounds.is_none());
    }

    #[test]
    fn test_fit_bounds() {
        let mut viewport = Viewport::new(&MapConfig::default());
        let bounds = Bounds::from_points(&[(-96.345, 30.612), (-96.335, 30.620)]).unwrap();
        viewport.fit_bounds(&bounds);

        assert!((viewport.center.0 - 30.616).abs() < 1e-9);
        assert!((viewport.center.1 + 96.34).abs() < 1e-9);
        assert!(viewport.shows(&bounds));
    }

    #[test]
    fn test_fit_point_clamps_to_max_zoom() {
        let config = MapConfig {
            max_zoom: 18,
            ..MapConfig::default()
        };
        let mut viewport = Viewport::new(&config);
        viewport.fit_bounds(&Bounds::from_points(&[(-96.3, 30.6)]).unwrap());
        assert_eq!(viewport.zoom, 18);
    }
}
