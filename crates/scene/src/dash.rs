//! Dash runs for labelled segments.
//!
//! A dashed line renders as alternating filled and empty intervals along
//! the segment. The runs are cumulative distances from the origin and must
//! be recomputed whenever the segment's geometry changes.

use serde::{Deserialize, Serialize};

/// One filled interval of a dashed line, as distances along the segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashRun {
    pub start: f32,
    pub end: f32,
}

impl DashRun {
    pub fn length(&self) -> f32 {
        self.end - self.start
    }
}

/// Tile `[0, length]` with dashes of `dash_size` separated by `gap_size`.
///
/// The final dash is clipped to the segment end. Degenerate inputs (zero
/// or negative sizes) fall back to one solid run so the line never
/// disappears.
pub fn dash_runs(length: f32, dash_size: f32, gap_size: f32) -> Vec<DashRun> {
    if length <= 0.0 {
        return Vec::new();
    }
    if dash_size <= 0.0 || gap_size < 0.0 {
        return vec![DashRun {
            start: 0.0,
            end: length,
        }];
    }

    let period = dash_size + gap_size;
    let mut runs = Vec::with_capacity((length / period).ceil() as usize);
    let mut start = 0.0;
    while start < length {
        runs.push(DashRun {
            start,
            end: (start + dash_size).min(length),
        });
        start += period;
    }
    runs
}
