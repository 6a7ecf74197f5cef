// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; aggregation, layout and rendering of a categorical bar chart.

pub mod aggregate;
pub mod category;
pub mod chart;
pub mod color;
pub mod document;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod surface;
pub mod types;

pub use aggregate::{aggregate, aggregate_json};
pub use category::{Category, CategoryEntry, RawValue, MAX_COUNT};
pub use chart::BarChart;
pub use color::Color;
pub use document::ChartDocument;
pub use error::{ChartError, ChartResult, SurfaceError};
pub use geometry::{compute_bars, BarGeometry, Point, Rect};
pub use grid::{compute_gridlines, Gridline, GridlineSet};
pub use render::{RenderOptions, RenderOrchestrator, RenderPhase, RenderStatus};
pub use surface::{DrawCall, DrawSurface, RecordingSurface, Stroke, TextStyle};
pub use types::Dimensions;
