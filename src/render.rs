use std::fmt::Write as _;

use crate::chart::labels::{Label, LabelAnchor};
use crate::chart::{ChartGeometry, ChartOutput, ChartRequest};

const ABOVE_FILL: &str = "rgba(255,137,91,0.35)";
const BELOW_FILL: &str = "rgba(91,157,255,0.35)";
const LINE_STROKE: &str = "#ff895b";
const THRESHOLD_STROKE: &str = "rgba(255,255,255,0.4)";
const TEXT_FILL: &str = "rgba(245,247,251,0.8)";

/// Wraps an assembled chart in a minimal standalone SVG document. The
/// geometry strings are already in path mini-language, so this is purely
/// markup around them.
#[must_use]
pub fn svg_document(request: &ChartRequest, output: &ChartOutput) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{:.0}' height='{:.0}' viewBox='0 0 {:.0} {:.0}' role='img'>",
        request.width,
        request.height + 16.0,
        request.width,
        request.height + 16.0
    );

    match output {
        ChartOutput::NoData { reason } => {
            let _ = writeln!(
                svg,
                "  <text x='{:.0}' y='{:.0}' text-anchor='middle' fill='{TEXT_FILL}' font-size='14'>{}</text>",
                request.width / 2.0,
                request.height / 2.0,
                reason.message()
            );
        }
        ChartOutput::Chart(geometry) => write_chart(&mut svg, request, geometry),
    }

    let _ = writeln!(svg, "</svg>");
    svg
}

fn write_chart(svg: &mut String, request: &ChartRequest, geometry: &ChartGeometry) {
    for polygon in &geometry.above {
        let _ = writeln!(svg, "  <path d='{polygon}' fill='{ABOVE_FILL}'/>");
    }
    for polygon in &geometry.below {
        let _ = writeln!(svg, "  <path d='{polygon}' fill='{BELOW_FILL}'/>");
    }
    if let Some(threshold_y) = geometry.threshold_y {
        let _ = writeln!(
            svg,
            "  <line x1='0' y1='{threshold_y:.2}' x2='{:.2}' y2='{threshold_y:.2}' stroke='{THRESHOLD_STROKE}' stroke-dasharray='4 4'/>",
            request.width
        );
    }
    if !geometry.line.is_empty() {
        let _ = writeln!(
            svg,
            "  <path d='{}' fill='none' stroke='{LINE_STROKE}' stroke-width='2'/>",
            geometry.line
        );
    }
    for label in &geometry.labels {
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.2}' text-anchor='{}' fill='{TEXT_FILL}' font-size='10'>{}</text>",
            label.x,
            label.y + 12.0,
            text_anchor(label),
            label.text
        );
    }
}

fn text_anchor(label: &Label) -> &'static str {
    match label.anchor {
        LabelAnchor::Left => "start",
        LabelAnchor::Center => "middle",
        LabelAnchor::Right => "end",
    }
}
