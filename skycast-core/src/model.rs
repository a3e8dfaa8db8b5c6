use serde::{Deserialize, Serialize};

use crate::icons::Icon;

/// Display-ready result of a successful weather fetch.
///
/// Temperature is floored to a whole degree; `location` is the name as the
/// API resolved it, which may differ in spelling or casing from what the
/// user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature_c: i32,
    pub location: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub icon: Icon,
}
