// File: crates/barchart-render-skia/tests/smoke.rs
// Purpose: End-to-end render through the skia surface: PNG output, pixel readback, redraw identity.

use barchart_core::{BarChart, Color, RawValue};
use barchart_render_skia::SkiaSurface;

fn votes() -> Vec<RawValue> {
    [4, 1, 4, 2, 4, 2].into_iter().map(RawValue::from).collect()
}

#[test]
fn render_smoke_png() {
    let surface = SkiaSurface::new(400, 300).expect("surface");
    let mut chart = BarChart::new(surface).expect("chart");
    chart.set_data(&votes()).expect("data");
    chart.set_headline("Smoke").expect("headline");
    chart.show_total().expect("total");

    let mut surface = chart.into_surface();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    surface.save_png(&out).expect("save png");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = surface.encode_png().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn background_color_reaches_pixels() {
    let surface = SkiaSurface::new(50, 40).unwrap().without_text();
    let mut chart = BarChart::with_size(surface, 50, 40).unwrap();
    chart.set_background_color(Color::rgb(10, 200, 30)).unwrap();
    let (px, w, h, stride) = chart.into_surface().to_rgba8().expect("rgba");
    assert_eq!((w, h), (50, 40));
    // center pixel, away from the frame
    let i = 20 * stride + 25 * 4;
    assert_eq!(&px[i..i + 4], &[10, 200, 30, 255]);
}

#[test]
fn resize_changes_the_raster() {
    let surface = SkiaSurface::new(400, 300).unwrap();
    let mut chart = BarChart::new(surface).unwrap();
    chart.set_data(&votes()).unwrap();
    chart.resize(640, 200).unwrap();
    let (px, w, h, stride) = chart.into_surface().to_rgba8().unwrap();
    assert_eq!((w, h, stride), (640, 200, 640 * 4));
    assert_eq!(px.len(), 640 * 200 * 4);
}

#[test]
fn cleared_headline_matches_plain_chart_pixels() {
    let mut plain = BarChart::new(SkiaSurface::new(400, 300).unwrap()).unwrap();
    plain.set_data(&votes()).unwrap();

    let mut titled = BarChart::new(SkiaSurface::new(400, 300).unwrap()).unwrap();
    titled.set_data(&votes()).unwrap();
    titled.set_headline("Poll").unwrap();
    titled.clear_headline().unwrap();

    let (a, ..) = plain.into_surface().to_rgba8().unwrap();
    let (b, ..) = titled.into_surface().to_rgba8().unwrap();
    assert!(a == b, "pixels differ after clearing the headline");
}
