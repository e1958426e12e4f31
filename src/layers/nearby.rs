use crate::api::{ApiError, Backend, NearbyParkingResponse};
use crate::domain::{OccupancyEntry, highlight_opacity};
use crate::map::{MapSession, Notice, QueryTicket, Style};

use super::parking::lot_popup;
use super::{LoadReport, place};

pub const HIGHLIGHT_COLOR: &str = "red";
pub const NO_RESULTS_MESSAGE: &str = "No nearby parking lots found.";

/// What a nearby-parking response did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// A newer query was started; the response was dropped
    Stale,
    /// The backend reported an error, shown as a notice
    Rejected(String),
    /// Highlighted layer, list and chart were rebuilt
    Highlighted(LoadReport),
}

/// Query lots near `building_name` and highlight them.
///
/// The name is sent as given; [`crate::input::normalize_query`] lowercases it.
/// Transport errors are returned and leave the session untouched.
pub fn find_nearby(
    session: &mut MapSession,
    backend: &dyn Backend,
    building_name: &str,
) -> Result<Applied, ApiError> {
    let ticket = session.begin_query();
    let response = backend.nearby_parking(building_name)?;
    Ok(apply_nearby(session, ticket, &response))
}

/// Apply a nearby-parking response obtained for `ticket`.
///
/// Responses for superseded tickets are discarded. Otherwise the
/// highlighted layer and result list are rebuilt, the viewport is fitted to
/// the results (or a "no results" notice is raised), and the chart is
/// re-rendered from the collected occupancies.
pub fn apply_nearby(
    session: &mut MapSession,
    ticket: QueryTicket,
    response: &NearbyParkingResponse,
) -> Applied {
    if !session.is_current(ticket) {
        log::debug!("Dropping stale nearby-parking response");
        return Applied::Stale;
    }

    if let Some(message) = response.error_message() {
        session.notify(Notice::Error(message.to_string()));
        return Applied::Rejected(message.to_string());
    }

    session.highlighted.clear();
    session.results.clear();

    let mut report = LoadReport::default();
    let mut entries = Vec::new();

    for lot in &response.nearby_parking {
        let Some(wkt) = lot.wkt() else {
            report.skipped += 1;
            continue;
        };

        let occupancy = lot.occupancy_percent();
        let style = Style::uniform(HIGHLIGHT_COLOR, highlight_opacity(occupancy));
        let popup = lot_popup(lot).line("Occupancy", &lot.occupancy);

        let Some(index) = place(
            &mut session.highlighted,
            &mut report,
            lot.display_name(),
            wkt,
            style,
            popup,
        ) else {
            continue;
        };

        session.results.push(lot.display_name(), index);
        entries.push(OccupancyEntry::new(lot.display_name(), occupancy));
    }

    match session.highlighted.bounds() {
        Some(bounds) => session.viewport.fit_bounds(&bounds),
        None => session.notify(Notice::Info(NO_RESULTS_MESSAGE.to_string())),
    }

    session.chart.render(&entries);

    Applied::Highlighted(report)
}
