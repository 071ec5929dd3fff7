//! Data models for Farmdash.
//!
//! This module contains the crop catalog, the planting seasons, and the
//! value objects produced by the two decision functions. Every report is
//! built fresh per request and carries no identity beyond its fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// A crop a farmer may plant or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Onion,
    Potato,
    Tomato,
    Wheat,
    Rice,
}

/// The fixed, ordered crop catalog.
///
/// Estimates are always listed in this order, and ties for the best crop are
/// broken in favour of the crop appearing first here.
pub const CROP_CATALOG: [Crop; 5] = [
    Crop::Onion,
    Crop::Potato,
    Crop::Tomato,
    Crop::Wheat,
    Crop::Rice,
];

/// Regions offered to the user when choosing where to plant.
///
/// The estimator accepts any non-empty label; this list only seeds input widgets.
pub const REGIONS: [&str; 2] = ["Nashik, Maharashtra", "Bengaluru, Karnataka"];

impl Crop {
    /// Returns the display name of the crop.
    ///
    /// # Example
    ///
    /// ```
    /// use farmdash::models::Crop;
    ///
    /// assert_eq!(Crop::Tomato.name(), "Tomato");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            Crop::Onion => "Onion",
            Crop::Potato => "Potato",
            Crop::Tomato => "Tomato",
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Crop {
    type Err = DashboardError;

    /// Parses a crop name. Matching ignores case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CROP_CATALOG
            .iter()
            .copied()
            .find(|crop| crop.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::invalid(format!("unknown crop '{}'", s)))
    }
}

/// Planting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Summer,
}

impl Season {
    /// All recognized seasons, in the order they are offered to the user.
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Summer];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Summer => "Summer",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Season::ALL
            .iter()
            .copied()
            .find(|season| season.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::invalid(format!("unknown season '{}'", s)))
    }
}

/// A synthetic per-kilogram profit figure for one crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitEstimate {
    /// The crop being estimated
    pub crop: Crop,
    /// Expected profit in rupees per kilogram, drawn from `[10, 50)`
    pub profit_per_kg: i64,
}

/// Result of the "what to plant" decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitReport {
    /// Region label echoed from the request
    pub region: String,
    /// Season echoed from the request
    pub season: Season,
    /// One estimate per crop, in catalog order
    pub estimates: Vec<ProfitEstimate>,
    /// The highest-profit estimate (first in catalog order on ties)
    pub best: ProfitEstimate,
}

/// One point on a forecast curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Weeks from now, `0..=12`
    pub week: u32,
    /// Predicted price in rupees per kilogram
    pub predicted_price: f64,
}

/// Binary store-or-sell decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Store,
    Sell,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Store => f.write_str("Store"),
            Recommendation::Sell => f.write_str("Sell"),
        }
    }
}

/// Result of the "when to sell" decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// The harvested crop
    pub crop: Crop,
    /// Price the farmer can get today
    pub current_price: f64,
    /// How long the farmer is willing to store, `0..=12`
    pub storage_weeks: u32,
    /// Thirteen points, weeks `0..=12` in order
    pub curve: Vec<ForecastPoint>,
    /// `Store` iff the price at `storage_weeks` beats `current_price`
    pub recommendation: Recommendation,
    /// Curve value at `storage_weeks`
    pub price_at_storage_week: f64,
}

impl ForecastReport {
    /// Difference between the price at the chosen storage week and today's price.
    pub fn expected_change(&self) -> f64 {
        self.price_at_storage_week - self.current_price
    }
}
