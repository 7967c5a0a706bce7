use super::forecast::UnitSystem;

const KMH_PER_MS: f64 = 3.6;
const MPH_PER_MS: f64 = 2.237;

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 1.8
}

/// Display rounding only; conversions stay unrounded so chart geometry
/// keeps full precision.
#[must_use]
pub fn round_temp(value: f64) -> i32 {
    value.round() as i32
}

/// Wind speeds arrive in m/s and are converted for display. No rounding
/// here; callers round at format time.
#[must_use]
pub fn convert_wind_speed(speed_ms: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => speed_ms * KMH_PER_MS,
        UnitSystem::Imperial => speed_ms * MPH_PER_MS,
    }
}

#[must_use]
pub fn freezing_point(units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => 0.0,
        UnitSystem::Imperial => 32.0,
    }
}

#[must_use]
pub fn wind_direction_cardinal(degrees: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let normalized = degrees.rem_euclid(360.0);
    let sector = ((normalized / 22.5) + 0.5).floor() as usize % POINTS.len();
    POINTS[sector]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_round_trips() {
        assert_eq!(round_temp(celsius_to_fahrenheit(0.0)), 32);
        assert_eq!(round_temp(fahrenheit_to_celsius(32.0)), 0);
    }

    #[test]
    fn wind_speed_scales_by_unit_system() {
        assert!((convert_wind_speed(10.0, UnitSystem::Metric) - 36.0).abs() < 1e-9);
        assert!((convert_wind_speed(10.0, UnitSystem::Imperial) - 22.37).abs() < 1e-9);
    }

    #[test]
    fn cardinal_sectors_wrap_at_north() {
        assert_eq!(wind_direction_cardinal(0.0), "N");
        assert_eq!(wind_direction_cardinal(11.24), "N");
        assert_eq!(wind_direction_cardinal(11.25), "NNE");
        assert_eq!(wind_direction_cardinal(90.0), "E");
        assert_eq!(wind_direction_cardinal(348.75), "N");
        assert_eq!(wind_direction_cardinal(-90.0), "W");
    }
}
