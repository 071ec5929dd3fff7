//! Display and formatting utilities for Farmdash.
//!
//! This module turns reports into the text a farmer reads: recommendation
//! messages, a bar chart of crop profits, and a week-by-week price listing.

use crate::models::{ForecastReport, ProfitReport, Recommendation, Season, CROP_CATALOG, REGIONS};

/// Width of the longest bar in console charts.
const CHART_WIDTH: usize = 40;

/// Formats a per-kilogram amount in rupees.
///
/// Whole amounts are shown without decimals; anything else is rounded to
/// two decimal places.
///
/// # Example
///
/// ```
/// use farmdash::display::format_price;
///
/// assert_eq!(format_price(20.0), "₹20");
/// assert_eq!(format_price(15.4535), "₹15.45");
/// ```
pub fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("₹{:.0}", value)
    } else {
        format!("₹{:.2}", value)
    }
}

/// The planting recommendation sentence for a profit report.
pub fn profit_message(report: &ProfitReport) -> String {
    format!(
        "Based on data for {} in {}, the most profitable crop is {} with expected returns of ₹{}/kg.",
        report.season, report.region, report.best.crop, report.best.profit_per_kg
    )
}

/// The store-or-sell sentence for a forecast report.
pub fn forecast_message(report: &ForecastReport) -> String {
    let current = format_price(report.current_price);
    match report.recommendation {
        Recommendation::Store => format!(
            "Current price: {}/kg. If you store for {} weeks, expected price = ₹{:.2}/kg. Recommendation: Store your crop.",
            current, report.storage_weeks, report.price_at_storage_week
        ),
        Recommendation::Sell => format!(
            "Current price: {}/kg. Price may drop to ₹{:.2}/kg in {} weeks. Recommendation: Sell now.",
            current, report.price_at_storage_week, report.storage_weeks
        ),
    }
}

/// Renders a horizontal bar scaled against `max`.
///
/// # Example
///
/// ```
/// use farmdash::display::bar;
///
/// assert_eq!(bar(5.0, 10.0, 10), "#####");
/// assert_eq!(bar(3.0, 0.0, 10), "");
/// ```
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "#".repeat(filled.min(width))
}

/// Prints the planting guide to stdout.
pub fn display_profit_report(report: &ProfitReport) {
    println!();
    println!("+================================================================+");
    println!("|          PROFIT MAXIMIZER: YOUR PLANTING GUIDE                 |");
    println!("+================================================================+");
    println!();
    println!("  Region: {}", report.region);
    println!("  Season: {}", report.season);
    println!();
    println!("[TOP CROPS BY PREDICTED PROFIT] (₹/kg)");
    println!("----------------------------------------------------------------");

    let max = report
        .estimates
        .iter()
        .map(|e| e.profit_per_kg)
        .max()
        .unwrap_or(0) as f64;

    for estimate in &report.estimates {
        let marker = if estimate.crop == report.best.crop { "*" } else { " " };
        println!(
            "{} {:<8} {:>4}  {}",
            marker,
            estimate.crop,
            estimate.profit_per_kg,
            bar(estimate.profit_per_kg as f64, max, CHART_WIDTH)
        );
    }

    println!();
    println!("[RECOMMENDATION]");
    println!("----------------------------------------------------------------");
    println!("  {}", profit_message(report));
    println!();
}

/// Prints the harvest planner to stdout.
pub fn display_forecast_report(report: &ForecastReport) {
    println!();
    println!("+================================================================+");
    println!("|        HARVEST PLANNER: WHEN TO SELL FOR MAXIMUM PROFIT        |");
    println!("+================================================================+");
    println!();
    println!("  Crop:           {}", report.crop);
    println!("  Current Price:  {}/kg", format_price(report.current_price));
    println!("  Storage:        {} weeks", report.storage_weeks);
    println!();
    println!("[PRICE FORECAST FOR {} (next 12 weeks)]", report.crop.name().to_uppercase());
    println!("----------------------------------------------------------------");
    println!("{:>6} {:>12}", "Week", "Price/kg");
    println!("----------------------------------------------------------------");

    let max = report
        .curve
        .iter()
        .map(|p| p.predicted_price)
        .fold(0.0, f64::max);

    for point in &report.curve {
        let marker = if point.week == report.storage_weeks { "<" } else { "" };
        println!(
            "{:>6} {:>12.2}  {}{}",
            point.week,
            point.predicted_price,
            bar(point.predicted_price, max, CHART_WIDTH),
            marker
        );
    }

    println!();
    println!("[RECOMMENDATION]");
    println!("----------------------------------------------------------------");
    println!("  {}", forecast_message(report));
    println!();
}

/// Prints the values a presentation layer offers in its input widgets.
pub fn display_catalog() {
    println!("[CROPS]");
    for crop in CROP_CATALOG {
        println!("  {}", crop);
    }
    println!();
    println!("[SEASONS]");
    for season in Season::ALL {
        println!("  {}", season);
    }
    println!();
    println!("[REGIONS]");
    for region in REGIONS {
        println!("  {}", region);
    }
}
