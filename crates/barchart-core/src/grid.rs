// File: crates/barchart-core/src/grid.rs
// Summary: Horizontal count gridlines, one per integer count up to the maximum.

use crate::category::CategoryEntry;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{height_unit, max_count};
use crate::types::Dimensions;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gridline {
    pub y: f64,
    /// Count this line marks.
    pub value: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridlineSet {
    pub max_count: u64,
    /// Top to bottom; the first line carries `max_count`.
    pub lines: Vec<Gridline>,
}

/// Gridline `i` (1-based) sits at `unit * i` and is labeled `max - i + 1`.
pub fn compute_gridlines(entries: &[CategoryEntry], dims: Dimensions) -> ChartResult<GridlineSet> {
    if entries.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    let max = max_count(entries);
    let unit = height_unit(max, dims);
    let lines = (1..=max)
        .map(|i| Gridline { y: unit * i as f64, value: max - i + 1 })
        .collect();
    Ok(GridlineSet { max_count: max, lines })
}
