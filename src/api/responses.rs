use serde::Deserialize;

use crate::domain::{Building, ParkingLot};

/// Body of `/api/buildings`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BuildingsResponse {
    #[serde(default)]
    pub buildings: Vec<Building>,
}

/// Body of `/api/parking_lots`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ParkingLotsResponse {
    #[serde(default)]
    pub parking_lots: Vec<ParkingLot>,
}

/// Body of `/api/nearby_parking`: either a lot list or an error message
#[derive(Debug, Clone, Deserialize, Default)]
pub struct NearbyParkingResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub nearby_parking: Vec<ParkingLot>,
}

impl NearbyParkingResponse {
    pub fn with_lots(lots: Vec<ParkingLot>) -> Self {
        Self {
            error: None,
            nearby_parking: lots,
        }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            nearby_parking: Vec::new(),
        }
    }

    /// Backend-reported error, ignoring an empty message
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
