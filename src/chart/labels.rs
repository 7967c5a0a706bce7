use serde::Serialize;

use crate::domain::day_window::{DayWindow, WindowOffsets, localized_hour};

/// Sentinel text for the first slot of the "today" window.
pub const NOW_LABEL: &str = "Now";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: LabelAnchor,
}

/// Edge labels hug their end of the axis so text never bleeds past the
/// chart; everything in between centers on its point.
#[must_use]
pub fn anchor_for(index: usize, count: usize) -> LabelAnchor {
    if index == 0 {
        LabelAnchor::Left
    } else if index + 1 == count {
        LabelAnchor::Right
    } else {
        LabelAnchor::Center
    }
}

/// Time-axis labels for a day window, one per slot at the matching x in
/// `xs`. Day 0 starts with [`NOW_LABEL`]; other slots show the localized
/// hour. A timestamp that cannot be localized drops its label and the walk
/// continues.
#[must_use]
pub fn slot_labels(
    window: &DayWindow,
    day_index: usize,
    offsets: WindowOffsets,
    xs: &[f64],
    baseline_y: f64,
) -> Vec<Label> {
    let count = window.len();
    window
        .slots()
        .iter()
        .zip(xs)
        .enumerate()
        .filter_map(|(index, (slot, &x))| {
            let text = if day_index == 0 && index == 0 {
                NOW_LABEL.to_string()
            } else {
                let hour = localized_hour(slot.sample.timestamp, offsets)?;
                format!("{hour:02}:00")
            };
            Some(Label {
                x,
                y: baseline_y,
                text,
                anchor: anchor_for(index, count),
            })
        })
        .collect()
}
