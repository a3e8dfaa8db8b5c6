//! Core library for the `skycast` city weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather geocoding/current-conditions client
//! - The condition-code → icon table
//! - Session state for the interactive lookup (token-gated suggestions)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod session;

pub use client::{DEFAULT_BASE_URL, OpenWeatherClient, WeatherSource};
pub use config::Config;
pub use error::FetchError;
pub use icons::{DEFAULT_ICON, Icon};
pub use model::WeatherRecord;
pub use session::{FetchToken, Session};
