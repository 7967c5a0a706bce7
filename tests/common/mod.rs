use forecast_charts::chart::ChartRequest;
use forecast_charts::domain::day_window::WindowOffsets;
use forecast_charts::domain::forecast::{ChartKind, Sample, UnitSystem, Wind};

/// 2026-08-28T06:00Z.
pub const BASE_TS: i64 = 1_787_896_800;
pub const THREE_HOURS: i64 = 10_800;

#[must_use]
pub fn fixture_samples() -> Vec<Sample> {
    let temps = [4.0, 1.5, -1.0, -3.0, -0.5, 2.0, 5.0, 3.5];
    temps
        .iter()
        .enumerate()
        .map(|(i, &temp)| Sample {
            timestamp: BASE_TS + i as i64 * THREE_HOURS,
            temperature_c: Some(temp),
            temperature_f: None,
            precipitation_probability: Some(0.05 * i as f64),
            wind: Some(Wind {
                speed_ms: 2.0 + 0.5 * i as f64,
                direction_deg: 190.0 + 5.0 * i as f64,
                gust_ms: (i % 2 == 0).then_some(8.0),
            }),
        })
        .collect()
}

#[must_use]
pub fn fixture_request(kind: ChartKind) -> ChartRequest {
    ChartRequest {
        kind,
        units: UnitSystem::Metric,
        day_index: 0,
        offsets: WindowOffsets::default(),
        width: 320.0,
        height: 120.0,
    }
}

/// Columnar payload matching [`fixture_samples`], as the CLI reads it.
#[must_use]
pub fn fixture_payload() -> String {
    let samples = fixture_samples();
    serde_json::json!({
        "time": samples.iter().map(|s| s.timestamp).collect::<Vec<_>>(),
        "temperature_c": samples.iter().map(|s| s.temperature_c).collect::<Vec<_>>(),
        "precipitation_probability": samples
            .iter()
            .map(|s| s.precipitation_probability)
            .collect::<Vec<_>>(),
        "wind_speed_ms": samples
            .iter()
            .map(|s| s.wind.map(|w| w.speed_ms))
            .collect::<Vec<_>>(),
        "wind_direction_deg": samples
            .iter()
            .map(|s| s.wind.map(|w| w.direction_deg))
            .collect::<Vec<_>>(),
    })
    .to_string()
}
