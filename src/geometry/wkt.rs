use geo::{BoundingRect, Geometry};
use thiserror::Error;
use ::wkt::TryFromWkt;

use super::Bounds;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("malformed WKT: {0}")]
    Malformed(String),
    #[error("geometry has no coordinates")]
    Empty,
}

/// Parse a WKT string into a geometry.
///
/// Geometries without any coordinates (`POLYGON EMPTY`, an empty
/// `GEOMETRYCOLLECTION`) are rejected since they can't be placed on a map.
pub fn parse(source: &str) -> Result<Geometry<f64>, GeometryError> {
    let geometry = Geometry::<f64>::try_from_wkt_str(source.trim())
        .map_err(|e| GeometryError::Malformed(e.to_string()))?;

    if geometry.bounding_rect().is_none() {
        return Err(GeometryError::Empty);
    }

    Ok(geometry)
}

/// Parse a WKT string and compute its bounds in one step
pub fn parse_with_bounds(source: &str) -> Result<(Geometry<f64>, Bounds), GeometryError> {
    let geometry = parse(source)?;
    let bounds = Bounds::from_geometry(&geometry).ok_or(GeometryError::Empty)?;
    Ok((geometry, bounds))
}
