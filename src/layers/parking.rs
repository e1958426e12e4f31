use crate::api::{ApiError, Backend};
use crate::domain::ParkingLot;
use crate::map::{MapSession, Popup, Style};

use super::{LoadReport, place};

pub const PARKING_LOT_COLOR: &str = "green";

pub fn lot_popup(lot: &ParkingLot) -> Popup {
    Popup::new(lot.display_name())
        .line("Type", &lot.lot_type)
        .line("Area", &lot.area)
        .line("Length", &lot.length)
}

/// Fetch all parking lots and replace the parking overlay with them
pub fn load_parking_lots(
    session: &mut MapSession,
    backend: &dyn Backend,
) -> Result<LoadReport, ApiError> {
    let response = backend.parking_lots()?;

    session.parking_lots.clear();
    let mut report = LoadReport::default();

    for lot in &response.parking_lots {
        let Some(wkt) = lot.wkt() else {
            report.skipped += 1;
            continue;
        };

        place(
            &mut session.parking_lots,
            &mut report,
            lot.display_name(),
            wkt,
            Style::stroke(PARKING_LOT_COLOR),
            lot_popup(lot),
        );
    }

    log::info!("Loaded parking lots: {}", report.summary());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ParkingLotsResponse;
    use crate::api::fake::FakeBackend;
    use crate::config::MapConfig;

    #[test]
    fn test_load_parking_lots() {
        let json = r#"{"parking_lots": [
            {"name": "Lot 50", "lotType": "Surface", "area": "12000", "length": null,
             "geometry": "POLYGON ((-96.34 30.61, -96.33 30.61, -96.33 30.62, -96.34 30.61))"},
            {"name": "Lot 51", "lotType": "Garage", "area": null, "length": null,
             "geometry": null}
        ]}"#;
        let backend = FakeBackend {
            parking_lots: Some(serde_json::from_str::<ParkingLotsResponse>(json).unwrap()),
            ..Default::default()
        };

        let mut session = MapSession::new(&MapConfig::default());
        let report = load_parking_lots(&mut session, &backend).unwrap();

        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 1);

        let feature = &session.parking_lots.features()[0];
        assert_eq!(feature.style.color, "green");
        assert_eq!(
            feature.popup.to_html(),
            "<b>Lot 50</b><br>Type: Surface<br>Area: 12000<br>Length: null"
        );
        assert!(session.buildings.is_empty());
    }

    #[test]
    fn test_empty_response_clears_layer() {
        let mut session = MapSession::new(&MapConfig::default());
        let populated = FakeBackend {
            parking_lots: Some(ParkingLotsResponse {
                parking_lots: vec![ParkingLot {
                    name: Some("Lot 1".to_string()),
                    geometry: Some("POINT (0 0)".to_string()),
                    ..Default::default()
                }],
            }),
            ..Default::default()
        };
        load_parking_lots(&mut session, &populated).unwrap();
        assert_eq!(session.parking_lots.len(), 1);

        let empty = FakeBackend {
            parking_lots: Some(ParkingLotsResponse::default()),
            ..Default::default()
        };
        load_parking_lots(&mut session, &empty).unwrap();
        assert!(session.parking_lots.is_empty());
    }
}
