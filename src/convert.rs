//! Result materialization.
//!
//! One query result, several shapes: JSON rows for plain-value consumers,
//! typed column vectors for numeric consumers. The frame and Arrow shapes
//! are covered by `DataFrame` itself and by `interop`.

use polars::prelude::*;
use serde_json::{Map, Number, Value};

use crate::error::Result;

/// Render every row as a JSON object keyed by column name.
pub fn frame_to_rows(frame: &DataFrame) -> Result<Vec<Map<String, Value>>> {
    let columns: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        let mut row = Map::new();
        for name in &columns {
            let series = frame.column(name)?;
            row.insert(name.clone(), cell_to_json(series, idx)?);
        }
        rows.push(row);
    }
    Ok(rows)
}

fn cell_to_json(series: &Series, idx: usize) -> Result<Value> {
    let value = series.get(idx)?;
    Ok(match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => Value::Bool(v),
        AnyValue::Int8(v) => Value::Number(v.into()),
        AnyValue::Int16(v) => Value::Number(v.into()),
        AnyValue::Int32(v) => Value::Number(v.into()),
        AnyValue::Int64(v) => Value::Number(v.into()),
        AnyValue::UInt8(v) => Value::Number(v.into()),
        AnyValue::UInt16(v) => Value::Number(v.into()),
        AnyValue::UInt32(v) => Value::Number(v.into()),
        AnyValue::UInt64(v) => Value::Number(v.into()),
        AnyValue::Float32(v) => Number::from_f64(f64::from(v))
            .map(Value::Number)
            .unwrap_or(Value::Null),
        AnyValue::Float64(v) => Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        AnyValue::String(v) => Value::String(v.to_string()),
        AnyValue::StringOwned(v) => Value::String(v.to_string()),
        // Dates, durations and anything nested fall back to their display form.
        other => Value::String(other.to_string()),
    })
}

/// Extract a column as `f64` values, nulls preserved.
pub fn column_f64(frame: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = frame.column(name)?.cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

/// Extract a column as `i64` values, nulls preserved.
pub fn column_i64(frame: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let series = frame.column(name)?.cast(&DataType::Int64)?;
    Ok(series.i64()?.into_iter().collect())
}
