// File: crates/barchart-core/src/surface.rs
// Summary: Drawing-surface capability trait plus a recording backend for tests and inspection.

use crate::color::Color;
use crate::error::SurfaceError;
use crate::geometry::{Point, Rect};

/// Stroke style for lines and rectangle outlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Text paint style; `at` passed to [`DrawSurface::fill_text`] is the baseline-left point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
}

/// The narrow capability set the chart needs from a 2D backend.
///
/// Every primitive may fail; a failure aborts the current render.
pub trait DrawSurface {
    /// Resize the backing store. Contents after a resize are unspecified.
    fn set_surface_size(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError>;
    /// Reset pixels in `rect` to fully transparent.
    fn clear_rect(&mut self, rect: Rect) -> Result<(), SurfaceError>;
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> Result<(), SurfaceError>;
    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), SurfaceError>;
    fn fill_text(&mut self, text: &str, at: Point, style: TextStyle) -> Result<(), SurfaceError>;
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    SetSize { width: u32, height: u32 },
    FillRect { rect: Rect, color: Color },
    ClearRect { rect: Rect },
    StrokeRect { rect: Rect, stroke: Stroke },
    StrokeLine { from: Point, to: Point, stroke: Stroke },
    FillText { text: String, at: Point, style: TextStyle },
}

/// A surface that records calls as [`DrawCall`]s instead of rasterizing.
///
/// Useful for:
/// - Testing (verify what was drawn, in which order)
/// - Simulating backends that refuse large sizes or fail mid-render
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    max_size: Option<(u32, u32)>,
    fail_after: Option<usize>,
    attempts: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse any size larger than `width` x `height`, like a raster backend
    /// that cannot allocate the store.
    pub fn with_max_size(width: u32, height: u32) -> Self {
        Self { max_size: Some((width, height)), ..Self::default() }
    }

    /// Make every draw primitive after the next `n` fail.
    pub fn fail_after(&mut self, n: usize) {
        self.attempts = 0;
        self.fail_after = Some(n);
    }

    /// Stop injecting failures.
    pub fn heal(&mut self) {
        self.fail_after = None;
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take ownership of the recorded calls, clearing the log.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Text strings drawn so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, op: &'static str, call: DrawCall) -> Result<(), SurfaceError> {
        if let Some(limit) = self.fail_after {
            if self.attempts >= limit {
                return Err(SurfaceError::primitive(op, "injected failure"));
            }
        }
        self.attempts += 1;
        self.calls.push(call);
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn set_surface_size(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if let Some((mw, mh)) = self.max_size {
            if width > mw || height > mh {
                return Err(SurfaceError::Unavailable(format!(
                    "cannot back {width}x{height}, limit is {mw}x{mh}"
                )));
            }
        }
        self.calls.push(DrawCall::SetSize { width, height });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.record("fill_rect", DrawCall::FillRect { rect, color })
    }

    fn clear_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.record("clear_rect", DrawCall::ClearRect { rect })
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> Result<(), SurfaceError> {
        self.record("stroke_rect", DrawCall::StrokeRect { rect, stroke })
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), SurfaceError> {
        self.record("stroke_line", DrawCall::StrokeLine { from, to, stroke })
    }

    fn fill_text(&mut self, text: &str, at: Point, style: TextStyle) -> Result<(), SurfaceError> {
        self.record("fill_text", DrawCall::FillText { text: text.to_owned(), at, style })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_sizes_over_limit() {
        let mut s = RecordingSurface::with_max_size(100, 100);
        assert!(s.set_surface_size(100, 100).is_ok());
        assert!(matches!(s.set_surface_size(101, 10), Err(SurfaceError::Unavailable(_))));
        assert_eq!(s.calls().len(), 1);
    }

    #[test]
    fn injected_failure_stops_recording() {
        let mut s = RecordingSurface::new();
        s.fail_after(1);
        let r = Rect::from_xywh(0.0, 0.0, 1.0, 1.0);
        assert!(s.clear_rect(r).is_ok());
        assert_eq!(
            s.clear_rect(r),
            Err(SurfaceError::Primitive { op: "clear_rect", reason: "injected failure".into() })
        );
        s.heal();
        assert!(s.clear_rect(r).is_ok());
        assert_eq!(s.take_calls().len(), 2);
        assert!(s.calls().is_empty());
    }
}
