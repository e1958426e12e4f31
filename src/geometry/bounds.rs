use geo::{BoundingRect, Geometry};
use serde::Serialize;

/// Geographic bounding box; x is longitude, y is latitude (WGS84 degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of (x, y) points
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (&(x, y), rest) = points.split_first()?;
        let mut bounds = Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        };
        bounds.expand(rest);
        Some(bounds)
    }

    pub fn from_geometry(geometry: &Geometry<f64>) -> Option<Self> {
        let rect = geometry.bounding_rect()?;
        Some(Self {
            min_x: rect.min().x,
            max_x: rect.max().x,
            min_y: rect.min().y,
            max_y: rect.max().y,
        })
    }

    /// Expand bounds to include another set of points
    pub fn expand(&mut self, points: &[(f64, f64)]) {
        for &(x, y) in points {
            self.min_x = self.min_x.min(x);
            self.max_x = self.max_x.max(x);
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
    }

    /// Smallest bounds covering both
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Union of all bounds in the iterator, `None` if it is empty
    pub fn union_all<'a>(bounds: impl IntoIterator<Item = &'a Bounds>) -> Option<Bounds> {
        bounds
            .into_iter()
            .copied()
            .reduce(|acc, next| acc.union(&next))
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        self.min_x <= other.min_x
            && self.max_x >= other.max_x
            && self.min_y <= other.min_y
            && self.max_y >= other.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center as (lat, lon)
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_y + self.max_y) / 2.0,
            (self.min_x + self.max_x) / 2.0,
        )
    }
}
