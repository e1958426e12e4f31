//! In-memory [`Backend`] for tests.

use std::cell::RefCell;

use super::{ApiError, Backend, BuildingsResponse, NearbyParkingResponse, ParkingLotsResponse};

/// Serves canned responses; a `None` response fails like an unavailable server
#[derive(Default)]
pub struct FakeBackend {
    pub buildings: Option<BuildingsResponse>,
    pub parking_lots: Option<ParkingLotsResponse>,
    pub nearby: Option<NearbyParkingResponse>,
    /// Every request made, as "path" or "path?building_name=..."
    pub calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    fn unavailable(path: &str) -> ApiError {
        ApiError::Status {
            url: format!("http://fake{}", path),
            status: 503,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Backend for FakeBackend {
    fn buildings(&self) -> Result<BuildingsResponse, ApiError> {
        self.calls.borrow_mut().push("/api/buildings".to_string());
        self.buildings
            .clone()
            .ok_or_else(|| Self::unavailable("/api/buildings"))
    }

    fn parking_lots(&self) -> Result<ParkingLotsResponse, ApiError> {
        self.calls.borrow_mut().push("/api/parking_lots".to_string());
        self.parking_lots
            .clone()
            .ok_or_else(|| Self::unavailable("/api/parking_lots"))
    }

    fn nearby_parking(&self, building_name: &str) -> Result<NearbyParkingResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(format!("/api/nearby_parking?building_name={}", building_name));
        self.nearby
            .clone()
            .ok_or_else(|| Self::unavailable("/api/nearby_parking"))
    }
}
