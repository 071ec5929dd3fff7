//! CSV export for Farmdash reports.
//!
//! Each report is written as the two-column table behind its chart, so it can
//! be opened in a spreadsheet or fed to another plotting tool.

use std::error::Error;
use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::models::{ForecastReport, ProfitReport};

/// CSV row for the profit table.
#[derive(Debug, Serialize)]
struct ProfitRow<'a> {
    #[serde(rename = "Crop")]
    crop: &'a str,
    #[serde(rename = "Predicted Profit (₹/kg)")]
    profit_per_kg: i64,
}

/// CSV row for the forecast curve.
#[derive(Debug, Serialize)]
struct ForecastRow {
    #[serde(rename = "Week")]
    week: u32,
    #[serde(rename = "Predicted Price (₹/kg)")]
    predicted_price: f64,
}

/// Writes the profit estimates as CSV, one row per crop in catalog order.
///
/// # CSV Format
///
/// Columns: `Crop, Predicted Profit (₹/kg)`
pub fn write_profit_csv<W: Write>(report: &ProfitReport, writer: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    for estimate in &report.estimates {
        wtr.serialize(ProfitRow {
            crop: estimate.crop.name(),
            profit_per_kg: estimate.profit_per_kg,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the forecast curve as CSV, one row per week.
///
/// # CSV Format
///
/// Columns: `Week, Predicted Price (₹/kg)`
pub fn write_forecast_csv<W: Write>(report: &ForecastReport, writer: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    for point in &report.curve {
        wtr.serialize(ForecastRow {
            week: point.week,
            predicted_price: point.predicted_price,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
