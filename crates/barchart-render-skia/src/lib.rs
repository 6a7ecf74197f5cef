// File: crates/barchart-render-skia/src/lib.rs
// Summary: Skia renderer crate; raster DrawSurface with text shaping and PNG/RGBA export.

pub mod surface;
pub mod text;

pub use surface::SkiaSurface;
pub use text::TextShaper;
