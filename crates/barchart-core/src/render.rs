// File: crates/barchart-core/src/render.rs
// Summary: Render orchestrator; issues the ordered draw-call sequence for one full chart frame.
// Behavior:
// - Background (clear, fill, frame) always comes first.
// - Bars, gridlines and the total line only when there is data.
// - Headline last so nothing paints over it.
// - A failing primitive aborts the frame; there is no resume, the next
//   render starts again from the background.

use log::{trace, warn};

use crate::category::CategoryEntry;
use crate::color::Color;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{compute_bars, Point, Rect};
use crate::grid::compute_gridlines;
use crate::surface::{DrawSurface, Stroke, TextStyle};
use crate::types::Dimensions;

/// Fixed layout constants for a chart frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub text_size: f64,
    pub ink: Color,
    pub frame_width: f64,
    pub bar_width: f64,
    pub grid_width: f64,
    /// Category label offset from the bar top (right, up).
    pub bar_label_offset: (f64, f64),
    /// Gridline label x, and lift above the line.
    pub grid_label_offset: (f64, f64),
    pub headline_at: Point,
    /// Total text anchor: distance from the right edge, and baseline y.
    pub total_at: (f64, f64),
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            text_size: 15.0,
            ink: Color::BLACK,
            frame_width: 5.0,
            bar_width: 5.0,
            grid_width: 0.2,
            bar_label_offset: (5.0, 5.0),
            grid_label_offset: (5.0, 3.0),
            headline_at: Point::new(15.0, 20.0),
            total_at: (80.0, 20.0),
        }
    }
}

impl RenderOptions {
    fn text(&self) -> TextStyle {
        TextStyle { size: self.text_size, color: self.ink }
    }
}

/// Everything one frame depends on, borrowed from the chart state.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub entries: &'a [CategoryEntry],
    pub dims: Dimensions,
    pub background: Color,
    pub headline: Option<&'a str>,
    pub show_total: bool,
}

impl Scene<'_> {
    pub fn total_count(&self) -> u64 {
        total_of(self.entries)
    }
}

/// Sum of counts. Aggregation already rejects totals past `u64::MAX`; the
/// saturating add keeps the accessor total for any entry slice.
pub fn total_of(entries: &[CategoryEntry]) -> u64 {
    entries.iter().fold(0u64, |acc, e| acc.saturating_add(e.count()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPhase {
    Idle,
    Rendering,
}

/// Outcome of the most recent frame.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderStatus {
    NeverRendered,
    Complete,
    /// Frame aborted; holds the failure. Cleared by the next complete frame.
    Failed(ChartError),
}

#[derive(Debug)]
pub struct RenderOrchestrator {
    options: RenderOptions,
    phase: RenderPhase,
    status: RenderStatus,
    frames: u64,
}

impl RenderOrchestrator {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, phase: RenderPhase::Idle, status: RenderStatus::NeverRendered, frames: 0 }
    }

    pub fn options(&self) -> &RenderOptions { &self.options }
    pub fn phase(&self) -> RenderPhase { self.phase }
    pub fn status(&self) -> &RenderStatus { &self.status }
    /// Number of frames that completed.
    pub fn frames(&self) -> u64 { self.frames }

    /// Draw one complete frame of `scene` onto `surface`.
    pub fn render<S: DrawSurface + ?Sized>(&mut self, scene: &Scene<'_>, surface: &mut S) -> ChartResult<()> {
        self.phase = RenderPhase::Rendering;
        let result = self.draw_frame(scene, surface);
        self.phase = RenderPhase::Idle;
        match &result {
            Ok(()) => {
                self.frames += 1;
                self.status = RenderStatus::Complete;
                trace!("frame {} complete ({} entries)", self.frames, scene.entries.len());
            }
            Err(e) => {
                warn!("render aborted: {e}");
                self.status = RenderStatus::Failed(e.clone());
            }
        }
        result
    }

    fn draw_frame<S: DrawSurface + ?Sized>(&self, scene: &Scene<'_>, surface: &mut S) -> ChartResult<()> {
        self.paint_background(scene, surface)?;
        if !scene.entries.is_empty() {
            self.draw_bars(scene, surface)?;
            self.draw_gridlines(scene, surface)?;
            if scene.show_total {
                self.draw_total(scene, surface)?;
            }
        }
        if let Some(text) = scene.headline {
            trace!("headline '{text}'");
            surface.fill_text(text, self.options.headline_at, self.options.text())?;
        }
        Ok(())
    }

    fn paint_background<S: DrawSurface + ?Sized>(&self, scene: &Scene<'_>, surface: &mut S) -> ChartResult<()> {
        let full = Rect::covering(scene.dims);
        surface.clear_rect(full)?;
        surface.fill_rect(full, scene.background)?;
        surface.stroke_rect(full, Stroke::new(self.options.frame_width, self.options.ink))?;
        Ok(())
    }

    fn draw_bars<S: DrawSurface + ?Sized>(&self, scene: &Scene<'_>, surface: &mut S) -> ChartResult<()> {
        let o = &self.options;
        let stroke = Stroke::new(o.bar_width, o.ink);
        let baseline = scene.dims.h();
        for bar in compute_bars(scene.entries, scene.dims)? {
            surface.stroke_line(Point::new(bar.base_x, baseline), Point::new(bar.base_x, bar.top_y), stroke)?;
            let at = Point::new(bar.base_x + o.bar_label_offset.0, bar.top_y - o.bar_label_offset.1);
            surface.fill_text(&bar.label, at, o.text())?;
        }
        Ok(())
    }

    fn draw_gridlines<S: DrawSurface + ?Sized>(&self, scene: &Scene<'_>, surface: &mut S) -> ChartResult<()> {
        let o = &self.options;
        let stroke = Stroke::new(o.grid_width, o.ink);
        let right = scene.dims.w();
        for line in compute_gridlines(scene.entries, scene.dims)?.lines {
            surface.stroke_line(Point::new(0.0, line.y), Point::new(right, line.y), stroke)?;
            let at = Point::new(o.grid_label_offset.0, line.y - o.grid_label_offset.1);
            surface.fill_text(&line.value.to_string(), at, o.text())?;
        }
        Ok(())
    }

    fn draw_total<S: DrawSurface + ?Sized>(&self, scene: &Scene<'_>, surface: &mut S) -> ChartResult<()> {
        let o = &self.options;
        let at = Point::new(scene.dims.w() - o.total_at.0, o.total_at.1);
        surface.fill_text(&format!("Total: {}", scene.total_count()), at, o.text())?;
        Ok(())
    }
}

impl Default for RenderOrchestrator {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
