//! Weather tools module.
//!
//! - `alerts`: active NWS alerts for a US state
//! - `forecast`: NWS forecast for a coordinate
//! - `tokyo`: today's Tokyo weather from JMA
//!
//! Upstream failures never become tool errors; each tool answers with a
//! fixed message instead.

pub mod alerts;
pub mod forecast;
pub mod tokyo;

pub use alerts::{GetAlertsParams, GetAlertsTool};
pub use forecast::{GetForecastParams, GetForecastTool};
pub use tokyo::{GetTokyoWeatherParams, GetTokyoWeatherTool};

/// Line placed between formatted alert or forecast blocks.
pub const SEPARATOR: &str = "\n---\n";
