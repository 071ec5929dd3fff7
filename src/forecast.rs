//! Harvest planner: whether to store a crop or sell it now.
//!
//! The forecast curve is a sinusoid around today's price with an independent
//! integer perturbation per week:
//!
//! ```text
//! price[i] = current_price + 5 * sin(i / 2) + noise[i],  noise[i] in [-2, 2)
//! ```
//!
//! Week 0 gets its own noise draw, so the first point is not guaranteed to
//! equal today's price. Storing for zero weeks may therefore still yield a
//! `Store` recommendation.

use tracing::{debug, info};

use crate::error::{DashboardError, Result};
use crate::models::{Crop, ForecastPoint, ForecastReport, Recommendation};
use crate::source::RandomSource;

/// Last week covered by the forecast; the curve spans `0..=FORECAST_WEEKS`.
pub const FORECAST_WEEKS: u32 = 12;
/// Lowest accepted current price, in rupees per kilogram.
pub const MIN_CURRENT_PRICE: f64 = 1.0;
/// Peak deviation of the seasonal swing, in rupees per kilogram.
pub const SWING_AMPLITUDE: f64 = 5.0;
/// Lower bound of the weekly noise draw (inclusive).
pub const NOISE_LOW: i64 = -2;
/// Upper bound of the weekly noise draw (exclusive).
pub const NOISE_HIGH: i64 = 2;

/// Forecasts prices for the next twelve weeks and recommends store or sell.
///
/// # Arguments
///
/// * `crop` - A crop name from the catalog (case-insensitive)
/// * `current_price` - Today's market price, at least `1`
/// * `storage_weeks` - Weeks the farmer would store the crop, `0..=12`
/// * `source` - Where the weekly noise comes from
///
/// # Returns
///
/// A [`ForecastReport`] with a 13-point curve, or
/// [`DashboardError::InvalidInput`] when any argument is out of range.
///
/// # Example
///
/// ```
/// use farmdash::forecast::forecast;
/// use farmdash::models::Recommendation;
/// use farmdash::source::ScriptedSource;
///
/// let mut source = ScriptedSource::constant(0);
/// let report = forecast("Wheat", 20.0, 4, &mut source).unwrap();
/// assert!((report.price_at_storage_week - 24.5465).abs() < 1e-3);
/// assert_eq!(report.recommendation, Recommendation::Store);
/// ```
pub fn forecast<S>(
    crop: &str,
    current_price: f64,
    storage_weeks: u32,
    source: &mut S,
) -> Result<ForecastReport>
where
    S: RandomSource + ?Sized,
{
    let crop: Crop = crop.parse()?;
    forecast_for(crop, current_price, storage_weeks, source)
}

/// Same as [`forecast`], for callers that already hold a parsed [`Crop`].
pub fn forecast_for<S>(
    crop: Crop,
    current_price: f64,
    storage_weeks: u32,
    source: &mut S,
) -> Result<ForecastReport>
where
    S: RandomSource + ?Sized,
{
    if !current_price.is_finite() || current_price < MIN_CURRENT_PRICE {
        return Err(DashboardError::invalid(format!(
            "current price must be a finite number of at least {}, got {}",
            MIN_CURRENT_PRICE, current_price
        )));
    }
    if storage_weeks > FORECAST_WEEKS {
        return Err(DashboardError::invalid(format!(
            "storage weeks must be between 0 and {}, got {}",
            FORECAST_WEEKS, storage_weeks
        )));
    }

    let curve = price_curve(current_price, source);
    debug!(%crop, points = curve.len(), "built price curve");

    let price_at_storage_week = curve[storage_weeks as usize].predicted_price;
    let recommendation = recommend(current_price, price_at_storage_week);
    info!(
        %crop,
        current_price,
        storage_weeks,
        price_at_storage_week,
        %recommendation,
        "store or sell"
    );

    Ok(ForecastReport {
        crop,
        current_price,
        storage_weeks,
        curve,
        recommendation,
        price_at_storage_week,
    })
}

/// Builds the 13-point curve, drawing fresh noise for every week.
pub fn price_curve<S>(current_price: f64, source: &mut S) -> Vec<ForecastPoint>
where
    S: RandomSource + ?Sized,
{
    (0..=FORECAST_WEEKS)
        .map(|week| {
            let noise = source.draw(NOISE_LOW, NOISE_HIGH) as f64;
            ForecastPoint {
                week,
                predicted_price: current_price + seasonal_swing(week) + noise,
            }
        })
        .collect()
}

/// Noise-free deviation from today's price at `week`.
///
/// # Example
///
/// ```
/// use farmdash::forecast::seasonal_swing;
///
/// assert_eq!(seasonal_swing(0), 0.0);
/// assert!((seasonal_swing(2) - 5.0 * 1.0_f64.sin()).abs() < 1e-12);
/// ```
pub fn seasonal_swing(week: u32) -> f64 {
    (week as f64 / 2.0).sin() * SWING_AMPLITUDE
}

/// Store only when the future price strictly beats today's price.
///
/// # Example
///
/// ```
/// use farmdash::forecast::recommend;
/// use farmdash::models::Recommendation;
///
/// assert_eq!(recommend(20.0, 21.0), Recommendation::Store);
/// assert_eq!(recommend(20.0, 20.0), Recommendation::Sell);
/// ```
pub fn recommend(current_price: f64, future_price: f64) -> Recommendation {
    if future_price > current_price {
        Recommendation::Store
    } else {
        Recommendation::Sell
    }
}
