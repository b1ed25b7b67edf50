//! Sentinel-based null and degenerate-value cleaning.
//!
//! There are two backends with identical observable semantics:
//!
//! - [`dataset::clean`]: eager, cell-by-cell, over an in-memory [`crate::types::DataSet`]
//! - [`frame`]: a plan of Polars expressions over a `LazyFrame`/`DataFrame`, with row
//!   evaluation owned by the Polars engine
//!
//! Both derive the per-column rule once from the schema ([`ColumnRule`]) and rewrite each
//! column independently:
//!
//! - string columns: null cells, and non-null cells composed entirely of characters
//!   outside `[a-zA-Z0-9]`, become the string sentinel
//! - numeric columns: null cells become the numeric sentinel, coerced to the column type
//! - everything else passes through untouched
//!
//! ## Example: clean an in-memory dataset
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
//!     ],
//! );
//!
//! let out = clean(&ds, &CleaningOptions::default());
//! assert_eq!(out.rows[0][0], Value::Utf8("DESCONHECIDO".to_string()));
//! assert_eq!(out.rows[0][1], Value::Int64(0));
//! assert_eq!(out.rows[1], ds.rows[1]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::Sentinels;

pub mod dataset;
pub mod frame;
pub mod observability;

pub use dataset::clean;
pub use frame::{clean_dataframe, clean_lazy, cleaning_exprs, SPECIAL_CHARS_ONLY_PATTERN};
pub use observability::{
    CleaningObserver, CleaningStats, ColumnReport, ColumnRule, CompositeObserver, StdErrObserver,
};

/// Options controlling an eager cleaning run.
///
/// Use [`Default`] for the stock sentinels and no observer.
#[derive(Clone)]
pub struct CleaningOptions {
    /// Replacement values for null-like cells.
    pub sentinels: Sentinels,
    /// Optional observer for the column plan and run stats.
    pub observer: Option<Arc<dyn CleaningObserver>>,
}

impl CleaningOptions {
    /// Options with the given sentinels and no observer.
    pub fn with_sentinels(sentinels: Sentinels) -> Self {
        Self {
            sentinels,
            observer: None,
        }
    }

    /// Attach an observer.
    pub fn with_observer(mut self, observer: Arc<dyn CleaningObserver>) -> Self {
        self.observer = Some(observer);
        self
    }
}

impl fmt::Debug for CleaningOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleaningOptions")
            .field("sentinels", &self.sentinels)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            sentinels: Sentinels::default(),
            observer: None,
        }
    }
}
