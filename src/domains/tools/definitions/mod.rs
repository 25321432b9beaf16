//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod general;
pub mod weather;

pub use general::{AddParams, AddTool, EchoParams, EchoTool};
pub use weather::{
    GetAlertsParams, GetAlertsTool, GetForecastParams, GetForecastTool, GetTokyoWeatherParams,
    GetTokyoWeatherTool,
};
