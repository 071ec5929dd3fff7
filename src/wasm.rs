//! WebAssembly bindings for Farmdash.
//!
//! Each entry point takes a JSON string and returns a JSON string, so a
//! browser dashboard can drive both pages without sharing Rust types.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::display::{forecast_message, profit_message};
use crate::forecast::forecast;
use crate::models::{ForecastReport, ProfitReport, Season, CROP_CATALOG, REGIONS};
use crate::profit::estimate;
use crate::source::RngSource;

/// JavaScript-friendly input for the planting guide.
#[derive(Debug, Clone, Deserialize)]
pub struct JsEstimateInput {
    pub region: String,
    pub season: String,
    /// Fixed seed for reproducible output; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// JavaScript-friendly input for the harvest planner.
#[derive(Debug, Clone, Deserialize)]
pub struct JsForecastInput {
    pub crop: String,
    #[serde(default = "default_current_price")]
    pub current_price: f64,
    #[serde(default)]
    pub storage_weeks: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_current_price() -> f64 {
    20.0
}

/// JavaScript-friendly planting guide result.
#[derive(Debug, Clone, Serialize)]
pub struct JsEstimateResult {
    pub success: bool,
    pub error: Option<String>,
    pub report: Option<ProfitReport>,
    pub message: Option<String>,
}

/// JavaScript-friendly harvest planner result.
#[derive(Debug, Clone, Serialize)]
pub struct JsForecastResult {
    pub success: bool,
    pub error: Option<String>,
    pub report: Option<ForecastReport>,
    pub message: Option<String>,
}

/// Values the dashboard offers in its input widgets.
#[derive(Debug, Clone, Serialize)]
pub struct JsCatalog {
    pub crops: Vec<String>,
    pub seasons: Vec<String>,
    pub regions: Vec<String>,
}

fn source_for(seed: Option<u64>) -> RngSource<rand::rngs::StdRng> {
    match seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    }
}

fn report_failure(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!(message, "request failed");
}

impl JsEstimateResult {
    fn failure(error: String) -> Self {
        report_failure(&error);
        JsEstimateResult {
            success: false,
            error: Some(error),
            report: None,
            message: None,
        }
    }
}

impl JsForecastResult {
    fn failure(error: String) -> Self {
        report_failure(&error);
        JsForecastResult {
            success: false,
            error: Some(error),
            report: None,
            message: None,
        }
    }
}

/// Runs the planting guide.
///
/// Takes a JSON string input and returns a JSON string result.
#[wasm_bindgen]
pub fn estimate_profits(input_json: &str) -> String {
    let result = match serde_json::from_str::<JsEstimateInput>(input_json) {
        Ok(input) => {
            let mut source = source_for(input.seed);
            match estimate(&input.region, &input.season, &mut source) {
                Ok(report) => JsEstimateResult {
                    success: true,
                    error: None,
                    message: Some(profit_message(&report)),
                    report: Some(report),
                },
                Err(e) => JsEstimateResult::failure(e.to_string()),
            }
        }
        Err(e) => JsEstimateResult::failure(format!("Invalid input: {}", e)),
    };
    serde_json::to_string(&result).unwrap_or_default()
}

/// Runs the harvest planner.
///
/// Takes a JSON string input and returns a JSON string result.
#[wasm_bindgen]
pub fn forecast_prices(input_json: &str) -> String {
    let result = match serde_json::from_str::<JsForecastInput>(input_json) {
        Ok(input) => {
            let mut source = source_for(input.seed);
            match forecast(&input.crop, input.current_price, input.storage_weeks, &mut source) {
                Ok(report) => JsForecastResult {
                    success: true,
                    error: None,
                    message: Some(forecast_message(&report)),
                    report: Some(report),
                },
                Err(e) => JsForecastResult::failure(e.to_string()),
            }
        }
        Err(e) => JsForecastResult::failure(format!("Invalid input: {}", e)),
    };
    serde_json::to_string(&result).unwrap_or_default()
}

/// Get the crops, seasons and regions as a JSON object.
#[wasm_bindgen]
pub fn get_catalog() -> String {
    let catalog = JsCatalog {
        crops: CROP_CATALOG.iter().map(|c| c.name().to_string()).collect(),
        seasons: Season::ALL.iter().map(|s| s.name().to_string()).collect(),
        regions: REGIONS.iter().map(|r| r.to_string()).collect(),
    };
    serde_json::to_string(&catalog).unwrap_or_default()
}

/// Get the version of the dashboard core.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
