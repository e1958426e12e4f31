use serde::{Deserialize, Serialize};

use super::Attribute;

/// A parking lot as returned by `/api/parking_lots` and `/api/nearby_parking`.
///
/// `occupancy` is only populated by the nearby query.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLot {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lot_type: Attribute,
    #[serde(default)]
    pub area: Attribute,
    #[serde(default)]
    pub length: Attribute,
    #[serde(default)]
    pub geometry: Option<String>,
    #[serde(default)]
    pub occupancy: Attribute,
}

impl ParkingLot {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("null")
    }

    pub fn wkt(&self) -> Option<&str> {
        super::non_empty(self.geometry.as_deref())
    }

    /// Occupancy percentage, 0 when missing or unparseable.
    ///
    /// Values outside 0..=100 are returned as given.
    pub fn occupancy_percent(&self) -> f64 {
        match self.occupancy.as_number() {
            Some(value) => value,
            None => {
                if !self.occupancy.is_missing() {
                    log::debug!(
                        "Unparseable occupancy {} for {}, using 0",
                        self.occupancy,
                        self.display_name()
                    );
                }
                0.0
            }
        }
    }
}
