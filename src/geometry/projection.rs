//! Web Mercator helpers used to pick a zoom level for a bounding box.

use super::Bounds;

/// Tile edge length in pixels for standard slippy-map tiles
pub const TILE_SIZE: f64 = 256.0;

/// Largest latitude representable in Web Mercator
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Project (lat, lon) to normalized Web Mercator world coordinates in [0, 1]
///
/// x grows eastward, y grows southward (tile convention).
pub fn to_world(lat: f64, lon: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (lon + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0;
    (x, y)
}

/// Largest zoom at which `bounds` fits inside a `width` x `height` pixel view.
///
/// Returns `max_zoom` for degenerate (single point) bounds.
pub fn zoom_to_fit(bounds: &Bounds, width: u32, height: u32, min_zoom: u8, max_zoom: u8) -> u8 {
    let (west, north) = to_world(bounds.max_y, bounds.min_x);
    let (east, south) = to_world(bounds.min_y, bounds.max_x);

    let span_x = (east - west).abs() * TILE_SIZE;
    let span_y = (south - north).abs() * TILE_SIZE;

    let fit_x = if span_x > 0.0 {
        width as f64 / span_x
    } else {
        f64::INFINITY
    };
    let fit_y = if span_y > 0.0 {
        height as f64 / span_y
    } else {
        f64::INFINITY
    };

    let scale = fit_x.min(fit_y);
    if !scale.is_finite() {
        return max_zoom;
    }

    let zoom = scale.log2().floor();
    zoom.clamp(min_zoom as f64, max_zoom as f64) as u8
}
