// File: crates/barchart-core/src/geometry.rs
// Summary: Pixel primitives and bar layout: slot width, bar base/top points, labels.

use crate::category::CategoryEntry;
use crate::error::{ChartError, ChartResult};
use crate::types::Dimensions;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle covering a whole surface of the given size.
    pub fn covering(dims: Dimensions) -> Self {
        Self::from_xywh(0.0, 0.0, dims.w(), dims.h())
    }

    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
}

/// Layout of one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    /// X of the vertical bar stroke.
    pub base_x: f64,
    /// Y of the bar's top end; the bottom end sits on the surface baseline.
    pub top_y: f64,
    pub label: String,
    pub count: u64,
}

/// Largest count in `entries`, or 0 when empty.
pub fn max_count(entries: &[CategoryEntry]) -> u64 {
    entries.iter().map(CategoryEntry::count).max().unwrap_or(0)
}

/// Horizontal spacing: one slot of margin on each side of the bar run.
pub fn slot_width(entry_count: usize, dims: Dimensions) -> f64 {
    dims.w() / (entry_count as f64 + 1.0)
}

/// Pixels per count, leaving one unit of headroom above the tallest bar.
pub fn height_unit(max_count: u64, dims: Dimensions) -> f64 {
    dims.h() / (max_count as f64 + 1.0)
}

/// Compute bar positions for `entries`, sorted by category ascending.
/// Ties keep their original relative order.
pub fn compute_bars(entries: &[CategoryEntry], dims: Dimensions) -> ChartResult<Vec<BarGeometry>> {
    if entries.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let mut sorted: Vec<&CategoryEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.category().cmp(b.category()));

    let slot = slot_width(sorted.len(), dims);
    let unit = height_unit(max_count(entries), dims);

    Ok(sorted
        .into_iter()
        .enumerate()
        .map(|(i, e)| BarGeometry {
            base_x: slot * (i as f64 + 1.0),
            top_y: dims.h() - e.count() as f64 * unit,
            label: e.category().to_string(),
            count: e.count(),
        })
        .collect())
}
