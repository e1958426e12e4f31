pub mod bounds;
pub mod projection;
pub mod wkt;

pub use bounds::Bounds;
pub use projection::zoom_to_fit;
pub use wkt::{GeometryError, parse, parse_with_bounds};
