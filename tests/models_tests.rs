//! Tests for the crop catalog, seasons and report types.

use farmdash::models::{Crop, ForecastPoint, ForecastReport, Recommendation, Season, CROP_CATALOG, REGIONS};
use farmdash::DashboardError;

#[test]
fn test_catalog_order() {
    let names: Vec<&str> = CROP_CATALOG.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Onion", "Potato", "Tomato", "Wheat", "Rice"]);
}

#[test]
fn test_crop_parse() {
    assert_eq!("Onion".parse::<Crop>().unwrap(), Crop::Onion);
    assert_eq!(" rice ".parse::<Crop>().unwrap(), Crop::Rice);
    assert_eq!("WHEAT".parse::<Crop>().unwrap(), Crop::Wheat);
}

#[test]
fn test_crop_parse_unknown() {
    let err = "Corn".parse::<Crop>().unwrap_err();
    assert!(matches!(err, DashboardError::InvalidInput(_)));
    assert!(err.to_string().contains("Corn"));
}

#[test]
fn test_season_parse() {
    assert_eq!("Kharif".parse::<Season>().unwrap(), Season::Kharif);
    assert_eq!("rabi".parse::<Season>().unwrap(), Season::Rabi);
    assert_eq!("Summer".parse::<Season>().unwrap(), Season::Summer);
    assert!(matches!(
        "Monsoon".parse::<Season>(),
        Err(DashboardError::InvalidInput(_))
    ));
}

#[test]
fn test_display_names() {
    assert_eq!(Crop::Potato.to_string(), "Potato");
    assert_eq!(Season::Rabi.to_string(), "Rabi");
    assert_eq!(Recommendation::Store.to_string(), "Store");
    assert_eq!(Recommendation::Sell.to_string(), "Sell");
}

#[test]
fn test_regions() {
    assert_eq!(REGIONS.len(), 2);
    assert!(REGIONS.contains(&"Nashik, Maharashtra"));
}

#[test]
fn test_serialized_names() {
    let json = serde_json::to_string(&Crop::Tomato).unwrap();
    assert_eq!(json, "\"Tomato\"");
    let json = serde_json::to_string(&Season::Summer).unwrap();
    assert_eq!(json, "\"Summer\"");
}

#[test]
fn test_expected_change() {
    let report = ForecastReport {
        crop: Crop::Onion,
        current_price: 20.0,
        storage_weeks: 1,
        curve: vec![
            ForecastPoint { week: 0, predicted_price: 19.0 },
            ForecastPoint { week: 1, predicted_price: 22.5 },
        ],
        recommendation: Recommendation::Store,
        price_at_storage_week: 22.5,
    };
    assert_eq!(report.expected_change(), 2.5);
}
