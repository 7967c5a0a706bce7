use serde::{Deserialize, Serialize};

use super::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Temperature,
    Precipitation,
    Wind,
}

/// One three-hour forecast reading. Produced by the data loader, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Epoch seconds, UTC.
    pub timestamp: i64,
    pub temperature_c: Option<f64>,
    pub temperature_f: Option<f64>,
    /// Probability in 0..=1.
    pub precipitation_probability: Option<f64>,
    pub wind: Option<Wind>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub speed_ms: f64,
    pub direction_deg: f64,
    pub gust_ms: Option<f64>,
}

impl Sample {
    /// Temperature in the requested unit system. Falls back to converting
    /// the other scale when only one was supplied; `None` stays `None` so
    /// missing readings are excluded from charts rather than plotted as
    /// zero.
    #[must_use]
    pub fn temperature(&self, units: UnitSystem) -> Option<f64> {
        match units {
            UnitSystem::Metric => self
                .temperature_c
                .or_else(|| self.temperature_f.map(fahrenheit_to_celsius)),
            UnitSystem::Imperial => self
                .temperature_f
                .or_else(|| self.temperature_c.map(celsius_to_fahrenheit)),
        }
    }

    #[must_use]
    pub fn wind_speed_ms(&self) -> Option<f64> {
        self.wind.map(|w| w.speed_ms)
    }
}
