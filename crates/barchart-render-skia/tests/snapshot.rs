// File: crates/barchart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshots with bless flow, backed by pixel anchors.
// Behavior:
// - Renders deterministic charts with text disabled.
// - Every test first checks anchor pixels (frame, bars, background) derived
//   from the chart layout, so a test never passes without asserting.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, a missing snapshot fails under CI=1 (or REQUIRE_SNAPSHOTS=1) and is
//   recorded locally so the next run compares against it.

use barchart_core::{BarChart, RawValue};
use barchart_render_skia::SkiaSurface;
use image::RgbaImage;
use serde_json::json;

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

fn env_flag(name: &str) -> bool {
    std::env::var(name).ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn bless_mode() -> bool {
    env_flag("UPDATE_SNAPSHOTS")
}

fn snapshots_required() -> bool {
    env_flag("CI") || env_flag("REQUIRE_SNAPSHOTS")
}

fn write_snapshot(path: &std::path::Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).expect("snapshot dir"); }
    std::fs::write(path, bytes).expect("write snapshot");
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        write_snapshot(path, bytes);
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions(), "Size differs: {}", path.display());
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
        return;
    }
    assert!(
        !snapshots_required(),
        "missing snapshot {}; run with UPDATE_SNAPSHOTS=1 and commit it",
        path.display()
    );
    write_snapshot(path, bytes);
    eprintln!("[snapshot] Recorded new {}; commit it to pin the output", path.display());
}

fn decode(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

#[track_caller]
fn assert_pixel(img: &RgbaImage, x: u32, y: u32, want: [u8; 3]) {
    let p = img.get_pixel(x, y).0;
    let close = p[..3].iter().zip(want).all(|(&got, want)| got.abs_diff(want) <= 8);
    assert!(close && p[3] == 255, "pixel ({x}, {y}) is {p:?}, want {want:?}");
}

fn render_to_bytes<F: FnOnce(&mut BarChart<SkiaSurface>)>(build: F) -> Vec<u8> {
    let surface = SkiaSurface::new(400, 300).expect("surface").without_text();
    let mut chart = BarChart::new(surface).expect("chart");
    build(&mut chart);
    chart.into_surface().encode_png().expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

/// The 5 px frame straddles the edges, so the outermost 2 px are solid ink.
fn assert_frame(img: &RgbaImage) {
    for (x, y) in [(1, 150), (398, 150), (200, 1), (200, 298), (0, 0), (399, 299)] {
        assert_pixel(img, x, y, BLACK);
    }
}

#[test]
fn golden_empty_chart() {
    let bytes = render_to_bytes(|_| {});
    let img = decode(&bytes);
    assert_eq!(img.dimensions(), (400, 300));
    assert_frame(&img);
    for (x, y) in [(200, 150), (60, 200), (133, 250), (5, 5)] {
        assert_pixel(&img, x, y, WHITE);
    }
    write_or_compare(&snapshot_path("empty.png"), &bytes);
}

#[test]
fn golden_sample_poll() {
    let bytes = render_to_bytes(|c| {
        let raw: Vec<RawValue> = [5, 3, 5, 5, 3].into_iter().map(RawValue::from).collect();
        c.set_data(&raw).expect("data");
    });
    let img = decode(&bytes);
    assert_frame(&img);
    // slots at 400/3: "3" (count 2, top 150) and "5" (count 3, top 75)
    assert_pixel(&img, 133, 250, BLACK);
    assert_pixel(&img, 133, 160, BLACK);
    assert_pixel(&img, 133, 100, WHITE);
    assert_pixel(&img, 267, 250, BLACK);
    assert_pixel(&img, 267, 100, BLACK);
    assert_pixel(&img, 267, 40, WHITE);
    // between bars and off the gridlines at 75/150/225
    assert_pixel(&img, 200, 200, WHITE);
    assert_pixel(&img, 60, 110, WHITE);
    write_or_compare(&snapshot_path("sample_poll.png"), &bytes);
}

#[test]
fn golden_pairs_on_tinted_background() {
    let bytes = render_to_bytes(|c| {
        c.set_data_json(&json!([{"x": "Yes", "y": 6}, {"x": "No", "y": 2}, {"x": "Unsure", "y": 3}]))
            .expect("pairs");
        c.set_background_color_str("#fdf6e3").expect("color");
    });
    let tint = [0xfd, 0xf6, 0xe3];
    let img = decode(&bytes);
    assert_frame(&img);
    // sorted No (2), Unsure (3), Yes (6) at x = 100, 200, 300; unit 300/7
    assert_pixel(&img, 100, 260, BLACK);
    assert_pixel(&img, 100, 150, tint);
    assert_pixel(&img, 200, 250, BLACK);
    assert_pixel(&img, 200, 150, tint);
    assert_pixel(&img, 300, 100, BLACK);
    assert_pixel(&img, 300, 20, tint);
    assert_pixel(&img, 150, 150, tint);
    write_or_compare(&snapshot_path("pairs_tinted.png"), &bytes);
}
