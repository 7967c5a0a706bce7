use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::forecast::{Sample, Wind};

#[derive(Debug, Error)]
pub enum ForecastInputError {
    #[error("failed to read forecast payload from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse forecast payload")]
    Parse(#[from] serde_json::Error),
    #[error("forecast payload contains no samples")]
    Empty,
}

/// Columnar payload: parallel arrays keyed by the `time` column, nullable
/// per entry. Optional columns may be absent entirely.
#[derive(Debug, Deserialize)]
struct ForecastPayload {
    time: Vec<i64>,
    #[serde(default)]
    temperature_c: Vec<Option<f64>>,
    #[serde(default)]
    temperature_f: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_probability: Vec<Option<f64>>,
    #[serde(default)]
    wind_speed_ms: Vec<Option<f64>>,
    #[serde(default)]
    wind_direction_deg: Vec<Option<f64>>,
    #[serde(default)]
    wind_gust_ms: Vec<Option<f64>>,
}

pub fn load_samples(path: &Path) -> Result<Vec<Sample>, ForecastInputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ForecastInputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_samples(&raw)
}

pub fn parse_samples(raw: &str) -> Result<Vec<Sample>, ForecastInputError> {
    let payload: ForecastPayload = serde_json::from_str(raw)?;
    let samples = to_samples(&payload);
    if samples.is_empty() {
        return Err(ForecastInputError::Empty);
    }
    Ok(samples)
}

fn to_samples(payload: &ForecastPayload) -> Vec<Sample> {
    let column = |values: &Vec<Option<f64>>, idx: usize| values.get(idx).copied().flatten();

    payload
        .time
        .iter()
        .enumerate()
        .map(|(idx, &timestamp)| {
            let wind = match (
                column(&payload.wind_speed_ms, idx),
                column(&payload.wind_direction_deg, idx),
            ) {
                (Some(speed_ms), Some(direction_deg)) => Some(Wind {
                    speed_ms,
                    direction_deg,
                    gust_ms: column(&payload.wind_gust_ms, idx),
                }),
                _ => None,
            };

            Sample {
                timestamp,
                temperature_c: column(&payload.temperature_c, idx),
                temperature_f: column(&payload.temperature_f, idx),
                precipitation_probability: column(&payload.precipitation_probability, idx),
                wind,
            }
        })
        .collect()
}
