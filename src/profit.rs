//! Planting guide: which crop is expected to be most profitable.
//!
//! Profits are synthetic. Each crop in the catalog receives an independent
//! uniform draw, and the region and season are echoed into the report
//! without influencing the draws.

use tracing::{debug, info};

use crate::error::{DashboardError, Result};
use crate::models::{ProfitEstimate, ProfitReport, Season, CROP_CATALOG};
use crate::source::RandomSource;

/// Lowest profit that can be drawn, in rupees per kilogram (inclusive).
pub const MIN_PROFIT_PER_KG: i64 = 10;
/// Upper bound of the profit draw, in rupees per kilogram (exclusive).
pub const MAX_PROFIT_PER_KG: i64 = 50;

/// Estimates per-kilogram profit for every crop and picks the best one.
///
/// # Arguments
///
/// * `region` - Any non-empty region label
/// * `season` - One of `Kharif`, `Rabi` or `Summer` (case-insensitive)
/// * `source` - Where the profit draws come from
///
/// # Returns
///
/// A [`ProfitReport`] with one estimate per crop in catalog order, or
/// [`DashboardError::InvalidInput`] if the region is blank or the season is
/// not recognized. No draws are made when the input is rejected.
///
/// # Example
///
/// ```
/// use farmdash::profit::estimate;
/// use farmdash::source::ScriptedSource;
///
/// let mut source = ScriptedSource::new([12, 30, 44, 30, 10]);
/// let report = estimate("Nashik, Maharashtra", "Rabi", &mut source).unwrap();
/// assert_eq!(report.best.crop.name(), "Tomato");
/// assert_eq!(report.best.profit_per_kg, 44);
/// ```
pub fn estimate<S>(region: &str, season: &str, source: &mut S) -> Result<ProfitReport>
where
    S: RandomSource + ?Sized,
{
    let season: Season = season.parse()?;
    estimate_for(region, season, source)
}

/// Same as [`estimate`], for callers that already hold a parsed [`Season`].
pub fn estimate_for<S>(region: &str, season: Season, source: &mut S) -> Result<ProfitReport>
where
    S: RandomSource + ?Sized,
{
    let region = region.trim();
    if region.is_empty() {
        return Err(DashboardError::invalid("region must not be empty"));
    }

    let estimates: Vec<ProfitEstimate> = CROP_CATALOG
        .iter()
        .map(|&crop| ProfitEstimate {
            crop,
            profit_per_kg: source.draw(MIN_PROFIT_PER_KG, MAX_PROFIT_PER_KG),
        })
        .collect();
    debug!(?estimates, "drew profit estimates");

    let best = best_estimate(&estimates)
        .ok_or_else(|| DashboardError::invalid("crop catalog is empty"))?;
    info!(
        region,
        season = %season,
        crop = %best.crop,
        profit_per_kg = best.profit_per_kg,
        "most profitable crop"
    );

    Ok(ProfitReport {
        region: region.to_string(),
        season,
        estimates,
        best,
    })
}

/// Returns the estimate with the highest profit.
///
/// Ties go to the earliest estimate in the slice. Returns `None` for an
/// empty slice.
///
/// # Example
///
/// ```
/// use farmdash::models::{Crop, ProfitEstimate};
/// use farmdash::profit::best_estimate;
///
/// let estimates = [
///     ProfitEstimate { crop: Crop::Onion, profit_per_kg: 30 },
///     ProfitEstimate { crop: Crop::Potato, profit_per_kg: 30 },
/// ];
/// assert_eq!(best_estimate(&estimates).unwrap().crop, Crop::Onion);
/// ```
pub fn best_estimate(estimates: &[ProfitEstimate]) -> Option<ProfitEstimate> {
    estimates.iter().copied().fold(None, |best, candidate| match best {
        Some(current) if current.profit_per_kg >= candidate.profit_per_kg => Some(current),
        _ => Some(candidate),
    })
}
