use geo::Geometry;
use serde::Serialize;

use crate::geometry::{Bounds, GeometryError, parse_with_bounds};

/// Path style for a rendered feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    pub color: String,
    /// Stroke opacity
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Style {
    /// Default stroke and fill opacities for outlined features
    pub const DEFAULT_OPACITY: f64 = 1.0;
    pub const DEFAULT_FILL_OPACITY: f64 = 0.2;

    pub fn stroke(color: &str) -> Self {
        Self {
            color: color.to_string(),
            opacity: Self::DEFAULT_OPACITY,
            fill_opacity: Self::DEFAULT_FILL_OPACITY,
        }
    }

    /// Same opacity for stroke and fill
    pub fn uniform(color: &str, opacity: f64) -> Self {
        Self {
            color: color.to_string(),
            opacity,
            fill_opacity: opacity,
        }
    }
}

/// Popup content: a bold title followed by `Label: value` lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub title: String,
    pub lines: Vec<String>,
}

impl Popup {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, label: &str, value: impl std::fmt::Display) -> Self {
        self.lines.push(format!("{}: {}", label, value));
        self
    }

    /// HTML fragment as shown in the map popup
    pub fn to_html(&self) -> String {
        let mut html = format!("<b>{}</b>", self.title);
        for line in &self.lines {
            html.push_str("<br>");
            html.push_str(line);
        }
        html
    }
}

/// A geometry placed on the map with its style and popup
#[derive(Debug, Clone)]
pub struct Feature {
    pub name: String,
    pub wkt: String,
    pub geometry: Geometry<f64>,
    pub bounds: Bounds,
    pub style: Style,
    pub popup: Popup,
    pub popup_open: bool,
}

impl Feature {
    /// Parse `wkt` and build a feature from it
    pub fn from_wkt(
        name: &str,
        wkt: &str,
        style: Style,
        popup: Popup,
    ) -> Result<Self, GeometryError> {
        let (geometry, bounds) = parse_with_bounds(wkt)?;
        Ok(Self {
            name: name.to_string(),
            wkt: wkt.to_string(),
            geometry,
            bounds,
            style,
            popup,
            popup_open: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_html() {
        let popup = Popup::new("Lot 50")
            .line("Type", "Surface")
            .line("Area", 1200);
        assert_eq!(
            popup.to_html(),
            "<b>Lot 50</b><br>Type: Surface<br>Area: 1200"
        );
    }

    #[test]
    fn test_feature_from_wkt() {
        let feature = Feature::from_wkt(
            "Lot 50",
            "POLYGON ((0 0, 2 0, 2 1, 0 0))",
            Style::stroke("green"),
            Popup::new("Lot 50"),
        )
        .unwrap();

        assert_eq!(feature.bounds.max_x, 2.0);
        assert_eq!(feature.style.fill_opacity, Style::DEFAULT_FILL_OPACITY);
        assert!(!feature.popup_open);
    }

    #[test]
    fn test_feature_from_bad_wkt() {
        let result = Feature::from_wkt("x", "POLYGON ((", Style::stroke("blue"), Popup::new("x"));
        assert!(matches!(result, Err(GeometryError::Malformed(_))));
    }
}
