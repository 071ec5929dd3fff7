//! Tests for the harvest planner.

use farmdash::forecast::{
    forecast, forecast_for, price_curve, recommend, seasonal_swing, FORECAST_WEEKS, NOISE_HIGH,
    NOISE_LOW,
};
use farmdash::models::{Crop, Recommendation};
use farmdash::source::{RngSource, ScriptedSource};
use farmdash::DashboardError;

#[test]
fn test_curve_has_thirteen_weeks() {
    let mut source = RngSource::seeded(11);
    for weeks in 0..=FORECAST_WEEKS {
        let report = forecast("Tomato", 35.0, weeks, &mut source).unwrap();
        assert_eq!(report.curve.len(), 13);
        let week_numbers: Vec<u32> = report.curve.iter().map(|p| p.week).collect();
        assert_eq!(week_numbers, (0..=12).collect::<Vec<u32>>());
    }
}

#[test]
fn test_noise_stays_in_range() {
    let mut source = RngSource::seeded(3);
    let report = forecast("Rice", 20.0, 6, &mut source).unwrap();
    for point in &report.curve {
        let noise = point.predicted_price - 20.0 - seasonal_swing(point.week);
        assert!(noise.round() >= NOISE_LOW as f64 && noise.round() < NOISE_HIGH as f64);
        assert!((noise - noise.round()).abs() < 1e-9, "noise must be an integer");
    }
}

#[test]
fn test_recommendation_matches_curve() {
    let mut source = RngSource::seeded(8);
    for weeks in 0..=FORECAST_WEEKS {
        let report = forecast("Potato", 20.0, weeks, &mut source).unwrap();
        let price = report.curve[weeks as usize].predicted_price;
        assert_eq!(report.price_at_storage_week, price);
        let expected = if price > 20.0 {
            Recommendation::Store
        } else {
            Recommendation::Sell
        };
        assert_eq!(report.recommendation, expected);
    }
}

#[test]
fn test_zero_noise_curve_shape() {
    let mut source = ScriptedSource::constant(0);
    let report = forecast("Wheat", 20.0, 4, &mut source).unwrap();
    let expected = 20.0 + 5.0 * 2.0_f64.sin();
    assert!((report.curve[4].predicted_price - expected).abs() < 1e-9);
    assert!((report.price_at_storage_week - 24.5465).abs() < 1e-3);
    assert_eq!(report.recommendation, Recommendation::Store);
}

#[test]
fn test_zero_noise_falling_price_sells() {
    // sin(4) < 0, so week 8 sits below today's price.
    let mut source = ScriptedSource::constant(0);
    let report = forecast("Wheat", 20.0, 8, &mut source).unwrap();
    assert!((report.price_at_storage_week - (20.0 + 5.0 * 4.0_f64.sin())).abs() < 1e-9);
    assert_eq!(report.recommendation, Recommendation::Sell);
}

#[test]
fn test_week_zero_uses_its_own_noise() {
    let mut source = ScriptedSource::new([1]);
    let report = forecast("Onion", 20.0, 0, &mut source).unwrap();
    assert_eq!(report.price_at_storage_week, 21.0);
    assert_eq!(report.recommendation, Recommendation::Store);

    let mut source = ScriptedSource::new([0]);
    let report = forecast("Onion", 20.0, 0, &mut source).unwrap();
    assert_eq!(report.price_at_storage_week, 20.0);
    assert_eq!(report.recommendation, Recommendation::Sell);
}

#[test]
fn test_each_week_draws_fresh_noise() {
    let mut source = ScriptedSource::new([-2, -1, 0, 1]);
    let curve = price_curve(10.0, &mut source);
    assert_eq!(source.remaining(), 0);
    assert_eq!(curve[0].predicted_price, 8.0);
    assert!((curve[1].predicted_price - (10.0 + seasonal_swing(1) - 1.0)).abs() < 1e-9);
    assert!((curve[3].predicted_price - (10.0 + seasonal_swing(3) + 1.0)).abs() < 1e-9);
}

#[test]
fn test_recommend_equality_sells() {
    assert_eq!(recommend(20.0, 20.0), Recommendation::Sell);
    assert_eq!(recommend(20.0, 19.99), Recommendation::Sell);
    assert_eq!(recommend(20.0, 20.01), Recommendation::Store);
}

#[test]
fn test_unknown_crop_rejected() {
    let mut source = ScriptedSource::constant(0);
    assert!(matches!(
        forecast("Corn", 20.0, 3, &mut source),
        Err(DashboardError::InvalidInput(_))
    ));
}

#[test]
fn test_low_price_rejected() {
    let mut source = ScriptedSource::new([1, 1]);
    assert!(matches!(
        forecast("Onion", 0.0, 3, &mut source),
        Err(DashboardError::InvalidInput(_))
    ));
    assert!(matches!(
        forecast("Onion", 0.99, 3, &mut source),
        Err(DashboardError::InvalidInput(_))
    ));
    assert!(matches!(
        forecast_for(Crop::Onion, f64::NAN, 3, &mut source),
        Err(DashboardError::InvalidInput(_))
    ));
    assert!(matches!(
        forecast_for(Crop::Onion, f64::INFINITY, 3, &mut source),
        Err(DashboardError::InvalidInput(_))
    ));
    assert_eq!(source.remaining(), 2, "no draws should be made on invalid input");
}

#[test]
fn test_minimum_price_accepted() {
    let mut source = ScriptedSource::constant(0);
    assert!(forecast("Onion", 1.0, 0, &mut source).is_ok());
}

#[test]
fn test_storage_weeks_out_of_range() {
    let mut source = ScriptedSource::constant(0);
    assert!(matches!(
        forecast("Onion", 20.0, 13, &mut source),
        Err(DashboardError::InvalidInput(_))
    ));
    assert!(forecast("Onion", 20.0, 12, &mut source).is_ok());
}
