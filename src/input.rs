//! Search box handling.

use crate::api::{ApiError, Backend};
use crate::layers::{Applied, find_nearby};
use crate::map::MapSession;

/// Trim and lowercase a search string; `None` if nothing is left
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Handle activation of the search control.
///
/// Empty input is a silent no-op: no request is made and `None` is returned.
pub fn submit_search(
    session: &mut MapSession,
    backend: &dyn Backend,
    raw: &str,
) -> Option<Result<Applied, ApiError>> {
    let building_name = normalize_query(raw)?;
    log::debug!("Searching parking near {:?}", building_name);
    Some(find_nearby(session, backend, &building_name))
}
