//! Core library for the weather relay.
//!
//! This crate defines:
//! - Configuration for the upstream connection
//! - Abstraction over weather providers
//! - The shared report model and its summary formatting
//!
//! It is used by `relay-server`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod model;
pub mod provider;

pub use config::{Config, ConfigError};
pub use model::WeatherReport;
pub use provider::WeatherProvider;
pub use provider::openweather::OpenWeatherProvider;
