// File: crates/barchart-core/src/chart.rs
// Summary: BarChart state hub; every mutation updates state then renders a full frame.
// Notes:
// - Validation happens before any field is touched, so a rejected call leaves
//   both the state and the last picture as they were.
// - A render failure does not roll state back: the state is valid, only the
//   picture is stale, and the next mutation (or `render`) redraws it.

use log::debug;
use serde_json::Value;

use crate::aggregate::{aggregate, aggregate_json};
use crate::category::{CategoryEntry, RawValue};
use crate::color::Color;
use crate::document::ChartDocument;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{compute_bars, BarGeometry};
use crate::grid::{compute_gridlines, GridlineSet};
use crate::render::{total_of, RenderOptions, RenderOrchestrator, RenderPhase, RenderStatus, Scene};
use crate::surface::DrawSurface;
use crate::types::Dimensions;

/// A categorical bar chart bound to one drawing surface.
pub struct BarChart<S: DrawSurface> {
    surface: S,
    renderer: RenderOrchestrator,
    entries: Vec<CategoryEntry>,
    dims: Dimensions,
    background: Color,
    headline: Option<String>,
    show_total: bool,
}

impl<S: DrawSurface> BarChart<S> {
    /// Bind to `surface` at the default 400x300 size.
    pub fn new(surface: S) -> ChartResult<Self> {
        Self::build(surface, Dimensions::default(), RenderOptions::default())
    }

    pub fn with_size(surface: S, width: u32, height: u32) -> ChartResult<Self> {
        Self::build(surface, Dimensions::new(width, height)?, RenderOptions::default())
    }

    /// Build a chart and apply `doc` before the first frame.
    pub fn from_document(surface: S, doc: &ChartDocument) -> ChartResult<Self> {
        let dims = doc.dimensions_over(Dimensions::default())?;
        let mut chart = Self::unrendered(surface, dims, RenderOptions::default())?;
        chart.absorb(doc);
        chart.render()?;
        Ok(chart)
    }

    fn build(surface: S, dims: Dimensions, options: RenderOptions) -> ChartResult<Self> {
        let mut chart = Self::unrendered(surface, dims, options)?;
        chart.render()?;
        Ok(chart)
    }

    fn unrendered(mut surface: S, dims: Dimensions, options: RenderOptions) -> ChartResult<Self> {
        surface
            .set_surface_size(dims.width(), dims.height())
            .map_err(|e| ChartError::InvalidSurface(e.to_string()))?;
        Ok(Self {
            surface,
            renderer: RenderOrchestrator::new(options),
            entries: Vec::new(),
            dims,
            background: Color::default(),
            headline: None,
            show_total: false,
        })
    }

    /// Replace all data with typed raw input.
    pub fn set_data(&mut self, raw: &[RawValue]) -> ChartResult<()> {
        let entries = aggregate(raw)?;
        self.replace_entries(entries)
    }

    /// Replace all data from a JSON array of samples or `{x, y}` pairs.
    pub fn set_data_json(&mut self, raw: &Value) -> ChartResult<()> {
        let entries = aggregate_json(raw)?;
        self.replace_entries(entries)
    }

    fn replace_entries(&mut self, entries: Vec<CategoryEntry>) -> ChartResult<()> {
        self.entries = entries;
        debug!("chart data replaced: {} categories, total {}", self.entries.len(), self.total_count());
        self.render()
    }

    /// Resize surface and chart; the old size is kept if the surface refuses.
    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let dims = Dimensions::new(width, height)?;
        self.surface.set_surface_size(width, height)?;
        debug!("chart resized to {width}x{height}");
        self.dims = dims;
        self.render()
    }

    pub fn set_background_color(&mut self, color: Color) -> ChartResult<()> {
        self.background = color;
        self.render()
    }

    /// Parse `color` (`#rrggbb`, `#rgb`, `#rrggbbaa` or a basic CSS name) and apply it.
    pub fn set_background_color_str(&mut self, color: &str) -> ChartResult<()> {
        let color = color.parse::<Color>()?;
        self.set_background_color(color)
    }

    pub fn set_headline(&mut self, text: impl Into<String>) -> ChartResult<()> {
        self.headline = Some(text.into());
        self.render()
    }

    /// Remove the headline and the total display.
    pub fn clear_headline(&mut self) -> ChartResult<()> {
        self.headline = None;
        self.show_total = false;
        self.render()
    }

    /// Show "Total: N" in the top-right corner.
    pub fn show_total(&mut self) -> ChartResult<()> {
        self.show_total = true;
        self.render()
    }

    /// Apply every field present in `doc` as one mutation with one frame.
    pub fn apply_document(&mut self, doc: &ChartDocument) -> ChartResult<()> {
        let dims = doc.dimensions_over(self.dims)?;
        if dims != self.dims {
            self.surface.set_surface_size(dims.width(), dims.height())?;
            self.dims = dims;
        }
        self.absorb(doc);
        self.render()
    }

    fn absorb(&mut self, doc: &ChartDocument) {
        if let Some(color) = doc.background {
            self.background = color;
        }
        if let Some(text) = &doc.headline {
            self.headline = Some(text.clone());
        }
        if let Some(flag) = doc.show_total {
            self.show_total = flag;
        }
        if let Some(entries) = &doc.data {
            self.entries = entries.clone();
        }
    }

    /// Draw a full frame of the current state.
    pub fn render(&mut self) -> ChartResult<()> {
        let scene = Scene {
            entries: &self.entries,
            dims: self.dims,
            background: self.background,
            headline: self.headline.as_deref(),
            show_total: self.show_total,
        };
        self.renderer.render(&scene, &mut self.surface)
    }

    /// Sum of all counts; 0 without data.
    pub fn total_count(&self) -> u64 {
        total_of(&self.entries)
    }

    pub fn has_data(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Entries as aggregated (pre-aggregated input keeps caller order).
    pub fn entries(&self) -> &[CategoryEntry] { &self.entries }
    pub fn dimensions(&self) -> Dimensions { self.dims }
    pub fn background(&self) -> Color { self.background }
    pub fn headline(&self) -> Option<&str> { self.headline.as_deref() }
    pub fn is_total_shown(&self) -> bool { self.show_total }
    pub fn render_phase(&self) -> RenderPhase { self.renderer.phase() }
    pub fn render_status(&self) -> &RenderStatus { self.renderer.status() }
    pub fn options(&self) -> &RenderOptions { self.renderer.options() }
    pub fn surface(&self) -> &S { &self.surface }

    /// Release the surface, e.g. to export pixels.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Layout of the current state; `None` without data.
    pub fn geometry(&self) -> Option<(Vec<BarGeometry>, GridlineSet)> {
        if !self.has_data() {
            return None;
        }
        // both only fail on empty entries, ruled out above
        let bars = compute_bars(&self.entries, self.dims).ok()?;
        let grid = compute_gridlines(&self.entries, self.dims).ok()?;
        Some((bars, grid))
    }
}
