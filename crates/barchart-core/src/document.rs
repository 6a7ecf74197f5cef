// File: crates/barchart-core/src/document.rs
// Summary: JSON chart document: size, background, headline, total flag and data in one value.

use serde::Deserialize;
use serde_json::Value;

use crate::aggregate::aggregate_json;
use crate::category::CategoryEntry;
use crate::color::Color;
use crate::error::{ChartError, ChartResult};
use crate::types::Dimensions;

/// Loosely typed view of the document so every field can be checked with
/// its own error kind.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawDocument {
    width: Option<Value>,
    height: Option<Value>,
    background: Option<Value>,
    headline: Option<Value>,
    show_total: Option<Value>,
    data: Option<Value>,
}

/// A validated chart description. Absent fields leave the chart's current
/// value untouched when applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartDocument {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background: Option<Color>,
    pub headline: Option<String>,
    pub show_total: Option<bool>,
    pub data: Option<Vec<CategoryEntry>>,
}

impl ChartDocument {
    /// Parse and validate JSON text.
    pub fn parse(text: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ChartError::InvalidInput(format!("malformed chart document: {e}")))?;
        Self::from_json(&value)
    }

    pub fn from_json(value: &Value) -> ChartResult<Self> {
        if !value.is_object() {
            return Err(ChartError::InvalidInput("chart document must be a JSON object".into()));
        }
        let raw: RawDocument = serde_json::from_value(value.clone())
            .map_err(|e| ChartError::InvalidInput(format!("chart document: {e}")))?;

        let width = raw.width.as_ref().map(|v| side(v, "width")).transpose()?;
        let height = raw.height.as_ref().map(|v| side(v, "height")).transpose()?;
        let background = raw
            .background
            .as_ref()
            .map(|v| match v.as_str() {
                Some(s) => s.parse::<Color>(),
                None => Err(ChartError::InvalidColor(format!("background must be a color string, got {v}"))),
            })
            .transpose()?;
        let headline = raw
            .headline
            .as_ref()
            .map(|v| match v {
                Value::String(s) => Ok(s.clone()),
                other => Err(ChartError::InvalidHeadline(format!("headline must be a string, got {other}"))),
            })
            .transpose()?;
        let show_total = raw
            .show_total
            .as_ref()
            .map(|v| {
                v.as_bool()
                    .ok_or_else(|| ChartError::InvalidInput(format!("showTotal must be a boolean, got {v}")))
            })
            .transpose()?;
        let data = raw.data.as_ref().map(aggregate_json).transpose()?;

        Ok(Self { width, height, background, headline, show_total, data })
    }

    /// Resolve the final size against the chart's current one.
    pub fn dimensions_over(&self, current: Dimensions) -> ChartResult<Dimensions> {
        Dimensions::new(
            self.width.unwrap_or(current.width()),
            self.height.unwrap_or(current.height()),
        )
    }
}

/// Zero passes here and is rejected by [`Dimensions::new`] once the final size is known.
fn side(v: &Value, name: &str) -> ChartResult<u32> {
    v.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ChartError::InvalidDimensions(format!("{name} must be a positive integer, got {v}")))
}
