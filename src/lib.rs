//! `rust-data-cleaning` normalizes null and degenerate values in tabular data by substituting
//! sentinel values, column by column:
//!
//! - **String columns**: cells that are null, or whose value is non-empty and composed
//!   entirely of characters outside `[a-zA-Z0-9]` (e.g. `"***"`, `"   "`, `"-"`), are
//!   replaced with a string sentinel (default `"DESCONHECIDO"`).
//! - **Numeric columns** (32/64-bit integers, single/double floats): null cells are replaced
//!   with a numeric sentinel (default `0`), coerced to the column's type.
//! - **Everything else** passes through untouched.
//!
//! The transform is pure and stateless: the output has the same schema and row count, the
//! input is never mutated, and each cell's rewrite depends only on that cell's own value.
//! With the default sentinels it is idempotent.
//!
//! Two backends share these semantics:
//!
//! - [`cleaning::clean`] over the in-memory [`types::DataSet`] (eager, cell-by-cell), with
//!   an optional parallel chunked variant via [`execution::ExecutionEngine`]
//! - [`cleaning::clean_lazy`] / [`cleaning::clean_dataframe`] over Polars frames, where the
//!   rewrite is built as an expression plan and evaluation belongs to the Polars engine
//!
//! ## Quick example: in-memory dataset
//!
//! ```
//! use rust_data_cleaning::cleaning::{clean, CleaningOptions};
//! use rust_data_cleaning::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("name", DataType::Utf8),
//!     Field::new("age", DataType::Int64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Utf8("***".to_string()), Value::Null],
//!         vec![Value::Utf8("Ana!".to_string()), Value::Int64(30)],
//!         vec![Value::Utf8(String::new()), Value::Null],
//!     ],
//! );
//!
//! let out = clean(&ds, &CleaningOptions::default());
//! assert_eq!(out.rows[0][0], Value::Utf8("DESCONHECIDO".to_string()));
//! assert_eq!(out.rows[0][1], Value::Int64(0));
//! // Mixed content and the empty string are preserved.
//! assert_eq!(out.rows[1][0], Value::Utf8("Ana!".to_string()));
//! assert_eq!(out.rows[2][0], Value::Utf8(String::new()));
//! ```
//!
//! ## Quick example: Polars frame
//!
//! ```
//! use polars::df;
//! use rust_data_cleaning::cleaning::clean_dataframe;
//! use rust_data_cleaning::Sentinels;
//!
//! let df = df!(
//!     "name" => &[Some("***"), Some("Ana!"), None],
//!     "age" => &[None, Some(30i64), None],
//! )
//! .unwrap();
//!
//! let out = clean_dataframe(&df, &Sentinels::new("N/A", -1.0)).unwrap();
//! let expected = df!(
//!     "name" => &["N/A", "Ana!", "N/A"],
//!     "age" => &[-1i64, 30, -1],
//! )
//! .unwrap();
//! assert!(out.equals(&expected));
//! ```
//!
//! Sentinels can also be loaded from a JSON config file via
//! [`Sentinels::from_json_path`]; missing fields fall back to the defaults.

pub mod cleaning;
pub mod config;
pub mod error;
pub mod execution;
pub mod types;

pub use config::Sentinels;
pub use error::{CleaningError, CleaningResult};
