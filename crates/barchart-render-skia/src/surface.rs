// File: crates/barchart-render-skia/src/surface.rs
// Summary: SkiaSurface: CPU raster DrawSurface plus PNG / RGBA8 readback.

use anyhow::{Context, Result};
use barchart_core::{Color, DrawSurface, Point, Rect, Stroke, SurfaceError, TextStyle};
use log::debug;
use skia_safe as skia;

use crate::text::TextShaper;

/// Raster surface sized in pixels; every primitive draws immediately.
pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: u32,
    height: u32,
    draw_text: bool,
}

impl SkiaSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: raster(width, height)?,
            shaper: TextShaper::new(),
            width,
            height,
            draw_text: true,
        })
    }

    /// Skip text primitives; keeps pixel snapshots independent of installed fonts.
    pub fn without_text(mut self) -> Self {
        self.draw_text = false;
        self
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// Encode the current pixels as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current pixels to `path` as PNG, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.width, self.height);
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels back failed");
        }
        Ok((px, w, h, stride))
    }
}

fn raster(width: u32, height: u32) -> Result<skia::Surface, SurfaceError> {
    let too_big = || SurfaceError::Unavailable(format!("{width}x{height} exceeds raster limits"));
    let w = i32::try_from(width).map_err(|_| too_big())?;
    let h = i32::try_from(height).map_err(|_| too_big())?;
    skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| SurfaceError::Unavailable(format!("failed to create {width}x{height} raster surface")))
}

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn sk_rect(op: &'static str, r: Rect) -> Result<skia::Rect, SurfaceError> {
    if ![r.x, r.y, r.width, r.height].iter().all(|v| v.is_finite()) {
        return Err(SurfaceError::primitive(op, format!("non-finite rectangle {r:?}")));
    }
    Ok(skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32))
}

fn sk_point(op: &'static str, p: Point) -> Result<skia::Point, SurfaceError> {
    if !(p.x.is_finite() && p.y.is_finite()) {
        return Err(SurfaceError::primitive(op, format!("non-finite point {p:?}")));
    }
    Ok(skia::Point::new(p.x as f32, p.y as f32))
}

fn stroke_paint(stroke: Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(sk_color(stroke.color));
    paint
}

impl DrawSurface for SkiaSurface {
    fn set_surface_size(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }
        self.surface = raster(width, height)?;
        self.width = width;
        self.height = height;
        debug!("raster surface reallocated at {width}x{height}");
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        let rect = sk_rect("fill_rect", rect)?;
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(sk_color(color));
        self.surface.canvas().draw_rect(rect, &paint);
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        let rect = sk_rect("clear_rect", rect)?;
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        self.surface.canvas().draw_rect(rect, &paint);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> Result<(), SurfaceError> {
        let rect = sk_rect("stroke_rect", rect)?;
        self.surface.canvas().draw_rect(rect, &stroke_paint(stroke));
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), SurfaceError> {
        let a = sk_point("stroke_line", from)?;
        let b = sk_point("stroke_line", to)?;
        self.surface.canvas().draw_line(a, b, &stroke_paint(stroke));
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point, style: TextStyle) -> Result<(), SurfaceError> {
        let at = sk_point("fill_text", at)?;
        if !self.draw_text {
            return Ok(());
        }
        let canvas = self.surface.canvas();
        self.shaper
            .draw_left(canvas, text, at.x, at.y, style.size as f32, sk_color(style.color));
        Ok(())
    }
}
