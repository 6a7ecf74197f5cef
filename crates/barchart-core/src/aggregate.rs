// File: crates/barchart-core/src/aggregate.rs
// Summary: Turns raw samples or pre-aggregated pairs into canonical category entries.
// Behavior:
// - The first element decides the mode: an `{x, y}` pair means the whole input
//   is pre-aggregated, anything else means every element is a sample.
// - Samples are counted through an ordered map, so output is sorted ascending
//   and independent of input order.
// - Pairs are kept in caller order; geometry sorts them before layout.
// - Every count is capped at `MAX_COUNT` and the total must fit in a u64, so
//   accepted entries can always be summed and laid out.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde_json::Value;

use crate::category::{Category, CategoryEntry, CategoryKind, RawValue, MAX_COUNT};
use crate::error::{ChartError, ChartResult};

/// Aggregate typed raw input into entries.
pub fn aggregate(raw: &[RawValue]) -> ChartResult<Vec<CategoryEntry>> {
    let entries = match raw.first() {
        Some(RawValue::Pair { .. }) => collect_pairs(raw.iter().enumerate().map(|(i, v)| match v {
            RawValue::Pair { x, y } => Ok((x.clone(), *y)),
            RawValue::Scalar(_) => Err(ChartError::InvalidInput(format!(
                "element {i} is a scalar but the input started with an {{x, y}} pair"
            ))),
        }))?,
        _ => count_samples(raw.iter().enumerate().map(|(i, v)| match v {
            RawValue::Scalar(c) => Ok(c.clone()),
            RawValue::Pair { .. } => Err(ChartError::InvalidInput(format!(
                "element {i} is an {{x, y}} pair but the input started with a scalar sample"
            ))),
        }))?,
    };
    let total = checked_total(&entries)?;
    debug!("aggregated {} raw values into {} categories, total {}", raw.len(), entries.len(), total);
    Ok(entries)
}

/// Aggregate a JSON value; anything but an array is rejected.
pub fn aggregate_json(raw: &Value) -> ChartResult<Vec<CategoryEntry>> {
    let items = raw
        .as_array()
        .ok_or_else(|| ChartError::InvalidInput(format!("expected an array, got {}", json_kind(raw))))?;

    let entries = match items.first() {
        Some(first) if is_json_pair(first) => collect_pairs(items.iter().enumerate().map(|(i, v)| {
            if !is_json_pair(v) {
                return Err(ChartError::InvalidInput(format!("element {i} is not an {{x, y}} pair")));
            }
            let x = json_category(&v["x"]).map_err(|e| at_element(i, e))?;
            let y = json_count(&v["y"]).map_err(|e| at_element(i, e))?;
            Ok((x, y))
        }))?,
        _ => count_samples(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| json_category(v).map_err(|e| at_element(i, e))),
        )?,
    };
    let total = checked_total(&entries)?;
    debug!("aggregated {} JSON values into {} categories, total {}", items.len(), entries.len(), total);
    Ok(entries)
}

fn count_samples<I>(samples: I) -> ChartResult<Vec<CategoryEntry>>
where
    I: Iterator<Item = ChartResult<Category>>,
{
    let mut counts: BTreeMap<Category, u64> = BTreeMap::new();
    let mut kind = None;
    for sample in samples {
        let sample = sample?;
        check_kind(&mut kind, &sample)?;
        *counts.entry(sample).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(category, count)| CategoryEntry::try_new(category, count))
        .collect()
}

fn collect_pairs<I>(pairs: I) -> ChartResult<Vec<CategoryEntry>>
where
    I: Iterator<Item = ChartResult<(Category, u64)>>,
{
    let mut seen = BTreeSet::new();
    let mut kind = None;
    let mut out = Vec::new();
    for pair in pairs {
        let (x, y) = pair?;
        check_kind(&mut kind, &x)?;
        if !seen.insert(x.clone()) {
            return Err(ChartError::InvalidInput(format!("category '{x}' appears more than once")));
        }
        out.push(CategoryEntry::try_new(x, y)?);
    }
    Ok(out)
}

/// Sum of all counts; overflow is an input error rather than a wrap.
pub(crate) fn checked_total(entries: &[CategoryEntry]) -> ChartResult<u64> {
    entries.iter().try_fold(0u64, |acc, e| {
        acc.checked_add(e.count())
            .ok_or_else(|| ChartError::InvalidInput(format!("total count exceeds {}", u64::MAX)))
    })
}

/// Numbers and text have no shared ordering; the first value fixes the kind.
fn check_kind(kind: &mut Option<CategoryKind>, value: &Category) -> ChartResult<()> {
    match *kind {
        None => {
            *kind = Some(value.kind());
            Ok(())
        }
        Some(k) if k == value.kind() => Ok(()),
        Some(k) => Err(ChartError::InvalidInput(format!(
            "cannot compare {:?} category '{value}' with {:?} categories",
            value.kind(),
            k
        ))),
    }
}

fn is_json_pair(v: &Value) -> bool {
    v.as_object().is_some_and(|o| o.contains_key("x") && o.contains_key("y"))
}

fn json_category(v: &Value) -> ChartResult<Category> {
    match v {
        Value::Number(n) => {
            let f = n
                .as_f64()
                .ok_or_else(|| ChartError::InvalidInput(format!("number {n} is out of range")))?;
            Category::number(f)
        }
        Value::String(s) => Ok(Category::text(s.as_str())),
        other => Err(ChartError::InvalidInput(format!("{} is not a comparable category", json_kind(other)))),
    }
}

fn json_count(v: &Value) -> ChartResult<u64> {
    match v.as_u64() {
        Some(n) if n > MAX_COUNT => {
            Err(ChartError::InvalidInput(format!("count {n} exceeds the limit of {MAX_COUNT}")))
        }
        Some(n) if n >= 1 => Ok(n),
        _ => Err(ChartError::InvalidInput(format!("count {v} is not a positive integer"))),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn at_element(i: usize, e: ChartError) -> ChartError {
    match e {
        ChartError::InvalidInput(msg) => ChartError::InvalidInput(format!("element {i}: {msg}")),
        other => other,
    }
}
