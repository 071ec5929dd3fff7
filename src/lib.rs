//! # Farmdash
//!
//! A command-line tool and library helping farmers decide **what to plant**
//! and **when to sell** for maximum profit.
//!
//! Both decisions are synthetic stand-ins for a real forecasting model:
//!
//! - The planting guide draws an independent per-kilogram profit for every
//!   crop in the catalog and recommends the highest one.
//! - The harvest planner builds a 13-week price curve around today's price
//!   and recommends storing only if the price at the chosen week is higher.
//!
//! Every draw goes through a [`source::RandomSource`], so callers can seed
//! the output or replace the generator entirely.
//!
//! ## Modules
//!
//! - [`models`] - Crop catalog, seasons and report types
//! - [`error`] - The `InvalidInput` error
//! - [`source`] - Injectable random sources
//! - [`profit`] - The planting guide
//! - [`forecast`] - The harvest planner
//! - [`display`] - Console output and recommendation messages
//! - [`export`] - CSV export of reports
//! - [`wasm`] - JSON bindings for a browser dashboard
//!
//! ## Example Usage
//!
//! ```
//! use farmdash::{
//!     display::{forecast_message, profit_message},
//!     forecast::forecast,
//!     profit::estimate,
//!     source::RngSource,
//! };
//!
//! let mut source = RngSource::seeded(42);
//!
//! let plan = estimate("Nashik, Maharashtra", "Kharif", &mut source).unwrap();
//! println!("{}", profit_message(&plan));
//!
//! let sale = forecast("Onion", 20.0, 4, &mut source).unwrap();
//! assert_eq!(sale.curve.len(), 13);
//! println!("{}", forecast_message(&sale));
//! ```

pub mod display;
pub mod error;
pub mod export;
pub mod forecast;
pub mod models;
pub mod profit;
pub mod source;
pub mod wasm;

pub use error::{DashboardError, Result};
