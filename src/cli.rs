use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::chart::ChartRequest;
use crate::domain::day_window::WindowOffsets;
use crate::domain::forecast::{ChartKind, UnitSystem};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ChartArg {
    Temperature,
    Precipitation,
    Wind,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Svg,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Metric => Self::Metric,
            UnitsArg::Imperial => Self::Imperial,
        }
    }
}

impl From<ChartArg> for ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Temperature => Self::Temperature,
            ChartArg::Precipitation => Self::Precipitation,
            ChartArg::Wind => Self::Wind,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "forecast-charts",
    version,
    about = "Turn forecast samples into smooth chart path data"
)]
pub struct Cli {
    /// Path to a JSON forecast payload (columnar sample arrays)
    pub input: PathBuf,

    /// Chart to assemble
    #[arg(long, value_enum, default_value_t = ChartArg::Temperature)]
    pub chart: ChartArg,

    /// Unit system for temperatures and wind speeds
    #[arg(long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// Day to display, 0 = today
    #[arg(long, default_value_t = 0)]
    pub day: usize,

    /// Drawing-space width
    #[arg(long, default_value_t = 320.0)]
    pub width: f64,

    /// Drawing-space height
    #[arg(long, default_value_t = 120.0)]
    pub height: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    pub format: FormatArg,

    /// Forecast location's UTC offset in seconds
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub location_offset: i32,

    /// Viewer's UTC offset in seconds
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub viewer_offset: i32,
}

impl Cli {
    #[must_use]
    pub fn request(&self) -> ChartRequest {
        ChartRequest {
            kind: self.chart.into(),
            units: self.units.into(),
            day_index: self.day,
            offsets: WindowOffsets {
                location_utc_offset_secs: self.location_offset,
                viewer_utc_offset_secs: self.viewer_offset,
            },
            width: self.width,
            height: self.height,
        }
    }
}
