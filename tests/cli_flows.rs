mod common;

use std::io::Write as _;

use clap::Parser;
use common::fixture_payload;
use forecast_charts::cli::Cli;
use forecast_charts::render_chart;

fn write_payload(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp payload");
    file.write_all(contents.as_bytes()).expect("write payload");
    file
}

fn parse_cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("forecast-charts").chain(args.iter().copied()))
}

#[test]
fn json_output_round_trips_through_a_file() {
    let payload = write_payload(&fixture_payload());
    let cli = parse_cli(&[payload.path().to_str().unwrap()]);

    let rendered = render_chart(&cli).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let chart = &value["Chart"];
    assert_eq!(chart["kind"], "Temperature");
    assert!(chart["line"].as_str().unwrap().starts_with('M'));
    assert_eq!(chart["labels"].as_array().unwrap().len(), 8);
    assert_eq!(chart["labels"][0]["text"], "Now");
}

#[test]
fn svg_output_is_a_standalone_document() {
    let payload = write_payload(&fixture_payload());
    let cli = parse_cli(&[
        payload.path().to_str().unwrap(),
        "--chart",
        "wind",
        "--units",
        "imperial",
        "--format",
        "svg",
    ]);

    let rendered = render_chart(&cli).unwrap();
    assert!(rendered.starts_with("<svg"));
    assert!(rendered.trim_end().ends_with("</svg>"));
    assert!(rendered.contains("stroke='#ff895b'"));
    // Wind charts carry no threshold line.
    assert!(!rendered.contains("stroke-dasharray"));
}

#[test]
fn out_of_range_day_renders_the_placeholder() {
    let payload = write_payload(&fixture_payload());
    let cli = parse_cli(&[
        payload.path().to_str().unwrap(),
        "--day",
        "6",
        "--format",
        "svg",
    ]);

    let rendered = render_chart(&cli).unwrap();
    assert!(rendered.contains("No forecast available for this date"));
}

#[test]
fn missing_file_is_a_contextual_error() {
    let cli = parse_cli(&["/nonexistent/forecast.json"]);
    let err = render_chart(&cli).unwrap_err();
    assert!(format!("{err:#}").contains("cannot load forecast"));
}

#[test]
fn viewer_offset_shifts_labels() {
    let payload = write_payload(&fixture_payload());
    let utc = parse_cli(&[payload.path().to_str().unwrap()]);
    let east = parse_cli(&[payload.path().to_str().unwrap(), "--viewer-offset", "7200"]);

    let utc_json: serde_json::Value = serde_json::from_str(&render_chart(&utc).unwrap()).unwrap();
    let east_json: serde_json::Value =
        serde_json::from_str(&render_chart(&east).unwrap()).unwrap();
    assert_eq!(utc_json["Chart"]["labels"][1]["text"], "09:00");
    assert_eq!(east_json["Chart"]["labels"][1]["text"], "11:00");
}
