pub mod attribute;
pub mod building;
pub mod occupancy;
pub mod parking_lot;

pub use attribute::Attribute;
pub use building::Building;
pub use occupancy::{OccupancyEntry, highlight_opacity};
pub use parking_lot::ParkingLot;

fn non_empty(geometry: Option<&str>) -> Option<&str> {
    geometry.map(str::trim).filter(|g| !g.is_empty())
}
