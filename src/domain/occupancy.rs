use serde::Serialize;

/// Lowest opacity a highlighted lot is drawn with, so full lots stay visible
pub const MIN_HIGHLIGHT_OPACITY: f64 = 0.2;
pub const MAX_HIGHLIGHT_OPACITY: f64 = 1.0;

/// One bar of the occupancy chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyEntry {
    pub name: String,
    pub occupancy: f64,
}

impl OccupancyEntry {
    pub fn new(name: impl Into<String>, occupancy: f64) -> Self {
        Self {
            name: name.into(),
            occupancy,
        }
    }
}

/// Opacity for a highlighted lot: the fuller the lot, the fainter it is drawn.
///
/// `clamp(1 - occupancy / 100, 0.2, 1.0)`. Occupancy itself is not clamped;
/// NaN is treated as an empty lot.
pub fn highlight_opacity(occupancy: f64) -> f64 {
    let occupancy = if occupancy.is_nan() { 0.0 } else { occupancy };
    (1.0 - occupancy / 100.0).clamp(MIN_HIGHLIGHT_OPACITY, MAX_HIGHLIGHT_OPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_opacity() {
        assert_eq!(highlight_opacity(0.0), 1.0);
        assert!((highlight_opacity(50.0) - 0.5).abs() < 1e-9);
        assert!((highlight_opacity(80.0) - 0.2).abs() < 1e-9);
        assert_eq!(highlight_opacity(100.0), 0.2);
    }

    #[test]
    fn test_highlight_opacity_out_of_domain() {
        assert_eq!(highlight_opacity(150.0), 0.2);
        assert_eq!(highlight_opacity(-40.0), 1.0);
        assert_eq!(highlight_opacity(f64::NAN), 1.0);
        assert_eq!(highlight_opacity(f64::INFINITY), 0.2);
    }
}
