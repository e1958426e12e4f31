pub mod client;
#[cfg(test)]
pub mod fake;
pub mod responses;

pub use client::{ApiError, Backend, HttpBackend};
pub use responses::{BuildingsResponse, NearbyParkingResponse, ParkingLotsResponse};
