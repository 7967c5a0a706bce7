pub mod cache;
pub mod curve;
pub mod labels;
pub mod regions;
pub mod scale;

use serde::Serialize;

use crate::domain::day_window::{DayWindow, WindowOffsets, build_day_window};
use crate::domain::forecast::{ChartKind, Sample, UnitSystem};
use crate::domain::units::{convert_wind_speed, freezing_point};
use curve::{PathCommand, PathDescription, Point, build_curve};
use labels::{Label, slot_labels};
use regions::{RegionChunk, split_by_threshold};
use scale::{rescale, value_domain};

/// Everything the assembler needs besides the samples themselves. All
/// platform-derived context (units, offsets, output size) is injected here;
/// the pipeline never probes its environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub units: UnitSystem,
    pub day_index: usize,
    pub offsets: WindowOffsets,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoDataReason {
    /// No sample fell on the requested calendar day.
    EmptyWindow,
    /// The day has slots but every measurement for this chart is missing.
    NoMeasurements,
}

impl NoDataReason {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyWindow => "No forecast available for this date",
            Self::NoMeasurements => "No readings available for this chart",
        }
    }
}

/// Assembled geometry for one chart: the serialized curve, the closed fill
/// polygons on either side of the threshold (temperature only), and the
/// time-axis labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartGeometry {
    pub kind: ChartKind,
    pub line: String,
    pub above: Vec<String>,
    pub below: Vec<String>,
    pub threshold_y: Option<f64>,
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartOutput {
    NoData { reason: NoDataReason },
    Chart(ChartGeometry),
}

/// Runs the full pipeline for one chart: day window, unit conversion,
/// coordinate mapping, curve, and (for temperature) threshold regions.
/// Pure and synchronous; bad input degrades to [`ChartOutput::NoData`],
/// never an error.
#[must_use]
pub fn assemble(request: &ChartRequest, samples: &[Sample]) -> ChartOutput {
    let window = build_day_window(samples, request.day_index, request.offsets);
    if window.is_empty() {
        return ChartOutput::NoData {
            reason: NoDataReason::EmptyWindow,
        };
    }

    let values = slot_values(&window, request.kind, request.units);
    let threshold = match request.kind {
        ChartKind::Temperature => Some(freezing_point(request.units)),
        ChartKind::Precipitation | ChartKind::Wind => None,
    };

    let Some((y_min, y_max)) = y_domain(&values, threshold) else {
        return ChartOutput::NoData {
            reason: NoDataReason::NoMeasurements,
        };
    };

    let last_slot = window.len().saturating_sub(1) as f64;
    let slot_x = |index: usize| rescale(index as f64, 0.0, last_slot, 0.0, request.width);
    // Output y runs top-down, so the domain maximum maps to the top edge.
    let map_y = |value: f64| rescale(value, y_min, y_max, request.height, 0.0);

    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| value.map(|v| Point::new(slot_x(index), map_y(v))))
        .collect();

    let (above, below, threshold_y) = match threshold {
        Some(value) => {
            let threshold_y = map_y(value);
            let regions = split_by_threshold(&points, threshold_y);
            (
                close_chunks(&regions.above, threshold_y),
                close_chunks(&regions.below, threshold_y),
                Some(threshold_y),
            )
        }
        None => (Vec::new(), Vec::new(), None),
    };

    let xs: Vec<f64> = (0..window.len()).map(slot_x).collect();
    let labels = slot_labels(
        &window,
        request.day_index,
        request.offsets,
        &xs,
        request.height,
    );

    ChartOutput::Chart(ChartGeometry {
        kind: request.kind,
        line: build_curve(&points).to_string(),
        above,
        below,
        threshold_y,
        labels,
    })
}

/// Per-slot measurement for the requested chart, in display units. Missing
/// readings stay `None` and are excluded from the plotted points; synthetic
/// padding slots always land here as `None`.
fn slot_values(window: &DayWindow, kind: ChartKind, units: UnitSystem) -> Vec<Option<f64>> {
    window
        .slots()
        .iter()
        .map(|slot| match kind {
            ChartKind::Temperature => slot.sample.temperature(units),
            ChartKind::Precipitation => slot.sample.precipitation_probability,
            ChartKind::Wind => slot
                .sample
                .wind_speed_ms()
                .map(|speed| convert_wind_speed(speed, units)),
        })
        .collect()
}

/// Data extent of the concrete values, widened to the threshold when one
/// applies. `None` when the window carries no measurement at all.
fn y_domain(values: &[Option<f64>], threshold: Option<f64>) -> Option<(f64, f64)> {
    let concrete: Vec<f64> = values.iter().flatten().copied().collect();
    let &first = concrete.first()?;
    Some(value_domain(concrete, threshold.unwrap_or(first)))
}

/// Closes each region chunk into a fillable polygon: the smooth curve
/// through the chunk, two projections down to the threshold line, then a
/// close back to the start.
fn close_chunks(chunks: &[RegionChunk], threshold_y: f64) -> Vec<String> {
    chunks
        .iter()
        .filter_map(|chunk| chunk_polygon(chunk, threshold_y))
        .map(|path| path.to_string())
        .collect()
}

fn chunk_polygon(chunk: &[Point], threshold_y: f64) -> Option<PathDescription> {
    let (&first, &last) = (chunk.first()?, chunk.last()?);

    let mut path = build_curve(chunk);
    if path.is_empty() {
        // Single-point chunk from a crossing at a sample; still a valid
        // (zero-area) polygon.
        path.push(PathCommand::MoveTo(first));
    }
    path.push(PathCommand::LineTo(Point::new(last.x, threshold_y)));
    path.push(PathCommand::LineTo(Point::new(first.x, threshold_y)));
    path.push(PathCommand::Close);
    Some(path)
}
