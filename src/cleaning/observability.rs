use std::fmt;
use std::sync::Arc;

use crate::types::DataType;

/// Rewrite rule applied to a column, derived once from its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRule {
    /// String column: nulls and special-characters-only cells become the string sentinel.
    StringSentinel,
    /// Numeric column: nulls become the numeric sentinel, coerced to the column type.
    NumericSentinel,
    /// Any other declared type: the column is not touched.
    Passthrough,
}

impl ColumnRule {
    /// Classify a declared type into its rewrite rule.
    pub fn for_type(data_type: &DataType) -> Self {
        if data_type.is_string() {
            Self::StringSentinel
        } else if data_type.is_numeric() {
            Self::NumericSentinel
        } else {
            Self::Passthrough
        }
    }
}

/// One entry of the column-rewrite plan, reported as the plan is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    /// Column name.
    pub name: String,
    /// Rule selected for this column.
    pub rule: ColumnRule,
}

/// Stats reported when an eager clean finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningStats {
    /// Number of rows in the dataset (unchanged by cleaning).
    pub rows: usize,
    /// Number of columns rewritten under [`ColumnRule::StringSentinel`].
    pub string_columns: usize,
    /// Number of columns rewritten under [`ColumnRule::NumericSentinel`].
    pub numeric_columns: usize,
    /// Number of columns left untouched.
    pub passthrough_columns: usize,
    /// Total cells replaced with a sentinel.
    pub cells_replaced: u64,
}

/// Observer interface for cleaning runs.
///
/// Implementors can record metrics, logs, or audit the per-column plan. Only the eager
/// in-memory paths report; the lazy Polars path defers evaluation to the engine and
/// has nothing to observe at plan-build time.
pub trait CleaningObserver: Send + Sync {
    /// Called once per column as the rewrite plan is derived, in schema order.
    fn on_column(&self, _report: &ColumnReport) {}

    /// Called when an eager clean finishes.
    fn on_complete(&self, _stats: &CleaningStats) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn CleaningObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn CleaningObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl CleaningObserver for CompositeObserver {
    fn on_column(&self, report: &ColumnReport) {
        for o in &self.observers {
            o.on_column(report);
        }
    }

    fn on_complete(&self, stats: &CleaningStats) {
        for o in &self.observers {
            o.on_complete(stats);
        }
    }
}

/// Logs cleaning events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl CleaningObserver for StdErrObserver {
    fn on_column(&self, report: &ColumnReport) {
        eprintln!("[clean][plan] column={} rule={:?}", report.name, report.rule);
    }

    fn on_complete(&self, stats: &CleaningStats) {
        eprintln!(
            "[clean][ok] rows={} string_cols={} numeric_cols={} passthrough_cols={} cells_replaced={}",
            stats.rows,
            stats.string_columns,
            stats.numeric_columns,
            stats.passthrough_columns,
            stats.cells_replaced
        );
    }
}
