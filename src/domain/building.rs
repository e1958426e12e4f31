use serde::{Deserialize, Serialize};

use super::Attribute;

/// A campus building as returned by `/api/buildings`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Attribute,
    #[serde(default)]
    pub year_built: Attribute,
    #[serde(default)]
    pub num_floors: Attribute,
    /// WKT geometry in WGS84
    #[serde(default)]
    pub geometry: Option<String>,
}

impl Building {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("null")
    }

    /// Geometry source text, or `None` when missing or blank
    pub fn wkt(&self) -> Option<&str> {
        super::non_empty(self.geometry.as_deref())
    }
}
