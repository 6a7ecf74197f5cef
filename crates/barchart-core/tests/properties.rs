// File: crates/barchart-core/tests/properties.rs
// Purpose: Property checks for aggregation totals, geometry idempotence and resize bounds.

use barchart_core::{compute_bars, compute_gridlines, BarChart, Dimensions, RawValue, RecordingSurface};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn total_equals_sample_count(values in prop::collection::vec(-20i32..20, 0..200)) {
        let raw: Vec<RawValue> = values.iter().copied().map(RawValue::from).collect();
        let mut chart = BarChart::new(RecordingSurface::new()).unwrap();
        chart.set_data(&raw).unwrap();
        prop_assert_eq!(chart.total_count(), values.len() as u64);
    }

    #[test]
    fn total_equals_sum_of_pair_counts(counts in prop::collection::vec(1u64..500, 1..40)) {
        let pairs: Vec<_> = counts
            .iter()
            .enumerate()
            .map(|(i, y)| json!({ "x": format!("option {i:02}"), "y": y }))
            .collect();
        let mut chart = BarChart::new(RecordingSurface::new()).unwrap();
        chart.set_data_json(&serde_json::Value::Array(pairs)).unwrap();
        prop_assert_eq!(chart.total_count(), counts.iter().sum::<u64>());
    }

    #[test]
    fn aggregation_is_order_independent(mut values in prop::collection::vec(0i32..10, 1..100)) {
        let forward: Vec<RawValue> = values.iter().copied().map(RawValue::from).collect();
        values.reverse();
        let backward: Vec<RawValue> = values.iter().copied().map(RawValue::from).collect();
        prop_assert_eq!(
            barchart_core::aggregate(&forward).unwrap(),
            barchart_core::aggregate(&backward).unwrap()
        );
    }

    #[test]
    fn geometry_is_idempotent(
        values in prop::collection::vec(0i32..15, 1..80),
        w in 1u32..2000,
        h in 1u32..2000,
    ) {
        let raw: Vec<RawValue> = values.iter().copied().map(RawValue::from).collect();
        let entries = barchart_core::aggregate(&raw).unwrap();
        let dims = Dimensions::new(w, h).unwrap();
        prop_assert_eq!(compute_bars(&entries, dims).unwrap(), compute_bars(&entries, dims).unwrap());
        prop_assert_eq!(compute_gridlines(&entries, dims).unwrap(), compute_gridlines(&entries, dims).unwrap());
    }

    #[test]
    fn bars_stay_inside_after_resize(
        values in prop::collection::vec(0i32..30, 1..120),
        w in 1u32..3000,
        h in 1u32..3000,
    ) {
        let raw: Vec<RawValue> = values.iter().copied().map(RawValue::from).collect();
        let mut chart = BarChart::new(RecordingSurface::new()).unwrap();
        chart.set_data(&raw).unwrap();
        chart.resize(w, h).unwrap();
        let (bars, grid) = chart.geometry().unwrap();
        for bar in &bars {
            prop_assert!(bar.base_x > 0.0 && bar.base_x < f64::from(w), "base_x {} outside (0, {})", bar.base_x, w);
            prop_assert!(bar.top_y <= f64::from(h));
        }
        prop_assert_eq!(grid.lines.len() as u64, grid.max_count);
    }
}
