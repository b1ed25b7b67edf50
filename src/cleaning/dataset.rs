//! Eager in-memory cleaning over [`crate::types::DataSet`].

use crate::types::{DataSet, DataType, Field, Value};

use super::observability::{CleaningStats, ColumnReport, ColumnRule};
use super::CleaningOptions;

/// Whether a non-null string cell is null-like: non-empty and composed entirely of
/// characters outside `[a-zA-Z0-9]`.
///
/// The empty string is NOT null-like (the pattern requires one-or-more characters), so it
/// always passes through unchanged.
pub(crate) fn is_special_chars_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| !c.is_ascii_alphanumeric())
}

/// The numeric sentinel coerced to a column's declared type.
///
/// Plain `as` casts; no rounding or range validation beyond what the cast does.
fn numeric_sentinel(data_type: &DataType, value: f64) -> Value {
    match data_type {
        DataType::Int32 => Value::Int32(value as i32),
        DataType::Int64 => Value::Int64(value as i64),
        DataType::Float32 => Value::Float32(value as f32),
        DataType::Float64 => Value::Float64(value),
        // Callers only reach this for numeric types.
        DataType::Bool | DataType::Utf8 => Value::Null,
    }
}

/// Rewrite one row according to the per-column rules, returning the new row and the number
/// of cells replaced with a sentinel.
pub(crate) fn clean_row(
    row: &[Value],
    fields: &[Field],
    options: &CleaningOptions,
) -> (Vec<Value>, u64) {
    let mut replaced = 0u64;
    let out = fields
        .iter()
        .zip(row.iter())
        .map(|(field, value)| match ColumnRule::for_type(&field.data_type) {
            ColumnRule::StringSentinel => match value {
                Value::Null => {
                    replaced += 1;
                    Value::Utf8(options.sentinels.string_null_value.clone())
                }
                Value::Utf8(s) if is_special_chars_only(s) => {
                    replaced += 1;
                    Value::Utf8(options.sentinels.string_null_value.clone())
                }
                other => other.clone(),
            },
            ColumnRule::NumericSentinel => match value {
                Value::Null => {
                    replaced += 1;
                    numeric_sentinel(&field.data_type, options.sentinels.numeric_null_value)
                }
                other => other.clone(),
            },
            ColumnRule::Passthrough => value.clone(),
        })
        .collect();
    (out, replaced)
}

/// Clean a dataset: a pure, single-pass, column-wise conditional rewrite.
///
/// - String columns: null cells and non-null cells made entirely of characters outside
///   `[a-zA-Z0-9]` become `string_null_value`.
/// - Numeric columns ([`DataType::Int32`], [`DataType::Int64`], [`DataType::Float32`],
///   [`DataType::Float64`]): null cells become `numeric_null_value` coerced to the column
///   type.
/// - All other columns pass through unmodified.
///
/// The returned dataset has the same schema and row count; the input is not mutated.
/// Every cell's replacement decision depends only on that cell's own value and nullity.
///
/// # Examples
///
/// ```
/// use rust_data_cleaning::cleaning::{clean, CleaningOptions};
/// use rust_data_cleaning::types::{DataSet, DataType, Field, Schema, Value};
///
/// let schema = Schema::new(vec![
///     Field::new("name", DataType::Utf8),
///     Field::new("age", DataType::Int64),
/// ]);
/// let ds = DataSet::new(
///     schema,
///     vec![vec![Value::Utf8("***".to_string()), Value::Null]],
/// );
///
/// let out = clean(&ds, &CleaningOptions::default());
/// assert_eq!(
///     out.rows[0],
///     vec![Value::Utf8("DESCONHECIDO".to_string()), Value::Int64(0)],
/// );
/// ```
pub fn clean(dataset: &DataSet, options: &CleaningOptions) -> DataSet {
    let fields = dataset.schema.fields.as_slice();

    let mut string_columns = 0usize;
    let mut numeric_columns = 0usize;
    let mut passthrough_columns = 0usize;
    for field in fields {
        let rule = ColumnRule::for_type(&field.data_type);
        match rule {
            ColumnRule::StringSentinel => string_columns += 1,
            ColumnRule::NumericSentinel => numeric_columns += 1,
            ColumnRule::Passthrough => passthrough_columns += 1,
        }
        if let Some(obs) = &options.observer {
            obs.on_column(&ColumnReport {
                name: field.name.clone(),
                rule,
            });
        }
    }

    let mut cells_replaced = 0u64;
    let out = dataset.map_rows(|row| {
        let (cleaned, replaced) = clean_row(row, fields, options);
        cells_replaced += replaced;
        cleaned
    });

    if let Some(obs) = &options.observer {
        obs.on_complete(&CleaningStats {
            rows: out.row_count(),
            string_columns,
            numeric_columns,
            passthrough_columns,
            cells_replaced,
        });
    }

    out
}
