//! Biomass gasifier energy balance calculator.

/// JSON HTTP API over the calculator.
#[cfg(feature = "api")]
pub mod api;
pub mod balance;
pub mod cli;
pub mod config;
pub mod io;
pub mod report;
/// Interactive terminal calculator.
#[cfg(feature = "tui")]
pub mod tui;
