use chrono::{DateTime, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::forecast::Sample;

pub const SLOTS_PER_DAY: usize = 8;
pub const SLOT_INTERVAL_SECS: i64 = 3 * 60 * 60;

/// Timezone context injected by the caller. The sample timestamps are UTC;
/// calendar-day grouping shifts them by the forecast location's offset plus
/// the viewer's own offset before taking the date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowOffsets {
    pub location_utc_offset_secs: i32,
    pub viewer_utc_offset_secs: i32,
}

impl WindowOffsets {
    #[must_use]
    pub fn combined_secs(self) -> i64 {
        i64::from(self.location_utc_offset_secs) + i64::from(self.viewer_utc_offset_secs)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub sample: Sample,
    pub synthetic: bool,
}

impl Slot {
    fn real(sample: Sample) -> Self {
        Self {
            sample,
            synthetic: false,
        }
    }

    fn padding(timestamp: i64) -> Self {
        Self {
            sample: Sample {
                timestamp,
                temperature_c: None,
                temperature_f: None,
                precipitation_probability: None,
                wind: None,
            },
            synthetic: true,
        }
    }
}

/// One local calendar day of forecast slots: empty when no samples matched
/// the requested date, otherwise exactly [`SLOTS_PER_DAY`] slots in strictly
/// increasing timestamp order, synthetic padding only at the tail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayWindow {
    slots: Vec<Slot>,
}

impl DayWindow {
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Groups raw three-hour samples into the window for `day_index`.
///
/// Day 0 is "today": the first [`SLOTS_PER_DAY`] samples are taken in order
/// (the raw sequence is expected to start at "now"). Later days filter on
/// the localized calendar date. A timestamp chrono cannot localize never
/// matches any day, day 0 included. Short days are padded to a full window with
/// trailing synthetic slots stepped [`SLOT_INTERVAL_SECS`] apart; a day with
/// no matching samples yields an empty window, which callers must render as
/// "data not available" rather than an empty chart.
#[must_use]
pub fn build_day_window(samples: &[Sample], day_index: usize, offsets: WindowOffsets) -> DayWindow {
    let matched: Vec<Sample> = if day_index == 0 {
        samples
            .iter()
            .filter(|s| localized_date(s.timestamp, offsets).is_some())
            .take(SLOTS_PER_DAY)
            .cloned()
            .collect()
    } else {
        let Some(target) = target_date(samples, day_index, offsets) else {
            return DayWindow::default();
        };
        samples
            .iter()
            .filter(|s| localized_date(s.timestamp, offsets) == Some(target))
            .take(SLOTS_PER_DAY)
            .cloned()
            .collect()
    };

    if matched.is_empty() {
        return DayWindow::default();
    }

    let mut slots: Vec<Slot> = matched.into_iter().map(Slot::real).collect();
    // Matched timestamps all localize, so they sit well below i64::MAX and
    // a handful of three-hour steps past the last one cannot overflow.
    while slots.len() < SLOTS_PER_DAY {
        let last = slots
            .last()
            .map(|slot| slot.sample.timestamp)
            .unwrap_or_default();
        slots.push(Slot::padding(last + SLOT_INTERVAL_SECS));
    }

    DayWindow { slots }
}

/// Calendar date of `timestamp` after applying both UTC offsets. `None` for
/// timestamps chrono cannot represent; such samples simply never match a
/// day, which keeps one bad reading from aborting the whole window.
#[must_use]
pub fn localized_date(timestamp: i64, offsets: WindowOffsets) -> Option<NaiveDate> {
    let shifted = timestamp.checked_add(offsets.combined_secs())?;
    DateTime::from_timestamp(shifted, 0).map(|dt| dt.date_naive())
}

/// Hour-of-day (0..=23) of `timestamp` in the localized frame.
#[must_use]
pub fn localized_hour(timestamp: i64, offsets: WindowOffsets) -> Option<u32> {
    use chrono::Timelike;
    let shifted = timestamp.checked_add(offsets.combined_secs())?;
    DateTime::from_timestamp(shifted, 0).map(|dt| dt.hour())
}

fn target_date(samples: &[Sample], day_index: usize, offsets: WindowOffsets) -> Option<NaiveDate> {
    let first = samples.first()?;
    localized_date(first.timestamp, offsets)?.checked_add_days(Days::new(day_index as u64))
}
