// File: crates/barchart-core/src/category.rs
// Summary: Category values, aggregated entries and the raw input element model.
// Notes:
// - Numbers and text never compare with each other inside one data set; the
//   aggregator rejects such input. `Ord` still orders numbers before text so
//   the type can key ordered maps.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{ChartError, ChartResult};

/// Largest count a single category may carry.
///
/// Gridlines are laid out one per unit of the maximum count, so the bound also
/// caps the work a single frame can do.
pub const MAX_COUNT: u64 = 100_000;

/// A distinct value along the horizontal axis.
///
/// Only the validated constructors can build one, so a numeric category is
/// always finite and never `-0.0`.
#[derive(Clone, Debug)]
pub struct Category(Repr);

#[derive(Clone, Debug)]
enum Repr {
    Number(f64),
    Text(String),
}

/// Which family a category belongs to; used to detect mixed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryKind {
    Number,
    Text,
}

impl Category {
    /// Try to construct a numeric category; NaN and infinities are rejected.
    pub fn number(value: f64) -> ChartResult<Self> {
        if !value.is_finite() {
            return Err(ChartError::InvalidInput(format!("category {value} is not a finite number")));
        }
        // 0.0 == -0.0 but total_cmp tells them apart
        Ok(Self(Repr::Number(if value == 0.0 { 0.0 } else { value })))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self(Repr::Text(value.into()))
    }

    pub fn kind(&self) -> CategoryKind {
        match self.0 {
            Repr::Number(_) => CategoryKind::Number,
            Repr::Text(_) => CategoryKind::Text,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.0 {
            Repr::Number(n) => Some(n),
            Repr::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.0 {
            Repr::Text(s) => Some(s),
            Repr::Number(_) => None,
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Category {}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Number(a), Repr::Number(b)) => a.total_cmp(b),
            (Repr::Text(a), Repr::Text(b)) => a.cmp(b),
            (Repr::Number(_), Repr::Text(_)) => Ordering::Less,
            (Repr::Text(_), Repr::Number(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            // integral values print as integers: 3, not 3.0
            Repr::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Repr::Number(n) => write!(f, "{n}"),
            Repr::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Category {
    fn from(v: i32) -> Self { Self(Repr::Number(f64::from(v))) }
}

impl From<u32> for Category {
    fn from(v: u32) -> Self { Self(Repr::Number(f64::from(v))) }
}

impl From<&str> for Category {
    fn from(v: &str) -> Self { Self(Repr::Text(v.to_owned())) }
}

impl From<String> for Category {
    fn from(v: String) -> Self { Self(Repr::Text(v)) }
}

/// One aggregated (category, count) pair.
/// Contract: `1 <= count <= MAX_COUNT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryEntry {
    category: Category,
    count: u64,
}

impl CategoryEntry {
    /// Try to construct an entry enforcing `1 <= count <= MAX_COUNT`.
    pub fn try_new(category: Category, count: u64) -> ChartResult<Self> {
        if count == 0 {
            return Err(ChartError::InvalidInput(format!("count for category '{category}' must be at least 1")));
        }
        if count > MAX_COUNT {
            return Err(ChartError::InvalidInput(format!(
                "count {count} for category '{category}' exceeds the limit of {MAX_COUNT}"
            )));
        }
        Ok(Self { category, count })
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// One element of raw chart input.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// A single sample; every occurrence counts once.
    Scalar(Category),
    /// A pre-aggregated `{x, y}` pair.
    Pair { x: Category, y: u64 },
}

impl RawValue {
    pub fn pair(x: impl Into<Category>, y: u64) -> Self {
        Self::Pair { x: x.into(), y }
    }
}

impl From<Category> for RawValue {
    fn from(v: Category) -> Self { Self::Scalar(v) }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self { Self::Scalar(v.into()) }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self { Self::Scalar(v.into()) }
}
