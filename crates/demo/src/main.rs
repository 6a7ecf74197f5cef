// File: crates/demo/src/main.rs
// Summary: Demo loads a poll (CSV samples, CSV category/count pairs, or a JSON chart document)
// and renders it to PNG through the skia surface.

use anyhow::{Context, Result};
use barchart_core::{BarChart, Category, ChartDocument, RawValue};
use barchart_render_skia::SkiaSurface;
use log::{debug, info, warn, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::{Path, PathBuf};

struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
}

fn main() -> Result<()> {
    let args = parse_args();
    init_log(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })?;

    let doc = match &args.input {
        Some(path) => {
            info!("Using input file: {}", path.display());
            load_document(path).with_context(|| format!("failed to load '{}'", path.display()))?
        }
        None => {
            info!("No input given, rendering the built-in sample poll");
            sample_document()?
        }
    };

    if doc.data.as_ref().map_or(true, Vec::is_empty) {
        warn!("input holds no votes; only the background will be drawn");
    }

    let dims = doc.dimensions_over(Default::default())?;
    let surface = SkiaSurface::new(dims.width(), dims.height())?;
    let chart = BarChart::from_document(surface, &doc)?;
    info!(
        "Chart {}x{}: {} categories, {} votes",
        dims.width(),
        dims.height(),
        chart.entries().len(),
        chart.total_count()
    );

    let out = args.output.unwrap_or_else(|| out_name(args.input.as_deref()));
    chart.into_surface().save_png(&out)?;
    info!("Wrote {}", out.display());
    Ok(())
}

/// Positional INPUT and OUTPUT, plus `--verbose` / `-v` anywhere.
fn parse_args() -> Args {
    let mut verbose = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ => positional.push(PathBuf::from(arg)),
        }
    }
    let mut positional = positional.into_iter();
    Args { input: positional.next(), output: positional.next(), verbose }
}

fn init_log(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn load_document(path: &Path) -> Result<ChartDocument> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase());
    match ext.as_deref() {
        Some("json") => {
            let text = std::fs::read_to_string(path)?;
            Ok(ChartDocument::parse(&text)?)
        }
        Some("csv") => load_csv(path),
        _ => anyhow::bail!("unsupported input '{}': expected .json or .csv", path.display()),
    }
}

/// Single column: one vote per row. Headers `category,count` (or `x,y`): pre-counted pairs.
fn load_csv(path: &Path) -> Result<ChartDocument> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!("Headers: {:?}", headers);
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let pairs = match (idx(&["category", "x", "option"]), idx(&["count", "y", "votes"])) {
        (Some(c), Some(n)) if headers.len() >= 2 => Some((c, n)),
        _ => None,
    };

    let mut raw = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        match pairs {
            Some((c, n)) => {
                let x = parse_category(rec.get(c).unwrap_or_default())?;
                let y = rec
                    .get(n)
                    .unwrap_or_default()
                    .parse::<u64>()
                    .with_context(|| format!("row {}: count is not a whole number", row + 1))?;
                raw.push(RawValue::Pair { x, y });
            }
            None => match rec.get(0) {
                Some(cell) if !cell.is_empty() => raw.push(RawValue::Scalar(parse_category(cell)?)),
                _ => warn!("row {}: empty cell skipped", row + 1),
            },
        }
    }

    let data = barchart_core::aggregate(&raw)?;
    Ok(ChartDocument { data: Some(data), show_total: Some(true), ..ChartDocument::default() })
}

/// Numeric cells become numbers, anything else text.
fn parse_category(cell: &str) -> Result<Category> {
    match cell.parse::<f64>() {
        Ok(n) => Ok(Category::number(n)?),
        Err(_) => Ok(Category::text(cell)),
    }
}

fn sample_document() -> Result<ChartDocument> {
    let doc = serde_json::json!({
        "headline": "Favourite weekday",
        "showTotal": true,
        "data": ["Mon", "Fri", "Fri", "Sat", "Sat", "Sat", "Sun", "Fri", "Sat", "Wed"]
    });
    Ok(ChartDocument::from_json(&doc)?)
}

/// Produce output file name like target/out/<stem>.png
fn out_name(input: Option<&Path>) -> PathBuf {
    let stem = input
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    PathBuf::from("target/out").join(format!("{stem}.png"))
}
