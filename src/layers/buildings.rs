use crate::api::{ApiError, Backend};
use crate::domain::Building;
use crate::map::{MapSession, Popup, Style};

use super::{LoadReport, place};

pub const BUILDING_COLOR: &str = "blue";

pub fn building_popup(building: &Building) -> Popup {
    Popup::new(building.display_name())
        .line("Address", &building.address)
        .line("Year Built", &building.year_built)
        .line("Floors", &building.num_floors)
}

/// Fetch all buildings and replace the buildings overlay with them.
///
/// A failed fetch returns the error and leaves the overlay as it was.
pub fn load_buildings(
    session: &mut MapSession,
    backend: &dyn Backend,
) -> Result<LoadReport, ApiError> {
    let response = backend.buildings()?;

    session.buildings.clear();
    let mut report = LoadReport::default();

    for building in &response.buildings {
        let Some(wkt) = building.wkt() else {
            report.skipped += 1;
            continue;
        };

        place(
            &mut session.buildings,
            &mut report,
            building.display_name(),
            wkt,
            Style::stroke(BUILDING_COLOR),
            building_popup(building),
        );
    }

    log::info!("Loaded buildings: {}", report.summary());
    Ok(report)
}
