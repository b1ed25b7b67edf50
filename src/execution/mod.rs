//! Execution engine for cleaning large in-memory datasets with configurable parallelism.
//!
//! This module sits "above" [`crate::cleaning::dataset`] and provides:
//!
//! - Parallel (chunked) cleaning over a [`DataSet`]
//! - Resource limits / throttling (e.g., in-flight chunks)
//! - Real-time metrics + observer hooks for monitoring
//!
//! Chunking cannot change the result: every cell's rewrite depends only on that cell's own
//! value and nullity, so [`ExecutionEngine::clean_parallel`] returns exactly what
//! [`crate::cleaning::clean`] returns.

mod observer;
mod semaphore;

use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;

use crate::cleaning::dataset::clean_row;
use crate::cleaning::{CleaningOptions, CleaningStats, ColumnReport, ColumnRule};
use crate::types::{DataSet, Value};

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver,
    StdErrExecutionObserver,
};

use semaphore::Semaphore;

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Number of worker threads used by the engine.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Number of rows per chunk.
    ///
    /// Chunking lets the engine bound working-set size and implement throttling.
    pub chunk_size: usize,
    /// Upper bound on concurrently executing chunks.
    ///
    /// This is an additional throttle on top of `num_threads`.
    pub max_in_flight_chunks: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self {
            num_threads: Some(n),
            chunk_size: 4_096,
            max_in_flight_chunks: n.max(1),
        }
    }
}

/// A configurable engine for chunked, parallel cleaning of in-memory datasets.
pub struct ExecutionEngine {
    pool: ThreadPool,
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size == 0`, `max_in_flight_chunks == 0`, or `num_threads == Some(0)`.
    pub fn new(opts: ExecutionOptions) -> Self {
        assert!(opts.chunk_size > 0, "chunk_size must be > 0");
        assert!(
            opts.max_in_flight_chunks > 0,
            "max_in_flight_chunks must be > 0"
        );
        if let Some(n) = opts.num_threads {
            assert!(n > 0, "num_threads must be > 0 when set");
        }

        let n_threads = opts
            .num_threads
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
            .max(1);

        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .expect("failed to build rayon thread pool");

        Self {
            pool,
            opts: opts.clone(),
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        }
    }

    /// Attach an observer for execution events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Clean a dataset in parallel chunks.
    ///
    /// Semantically identical to [`crate::cleaning::clean`] with the same options; rows are
    /// split into chunks of `chunk_size` and rewritten on the engine's thread pool.
    pub fn clean_parallel(&self, dataset: &DataSet, options: &CleaningOptions) -> DataSet {
        self.pool.install(|| self.clean_parallel_impl(dataset, options))
    }

    fn clean_parallel_impl(&self, dataset: &DataSet, options: &CleaningOptions) -> DataSet {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted);

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

        let sem = Semaphore::new(self.opts.max_in_flight_chunks);
        let chunk_ranges = chunk_ranges(dataset.row_count(), self.opts.chunk_size);

        let per_chunk: Vec<(Vec<Vec<Value>>, u64)> = chunk_ranges
            .into_par_iter()
            .map(|range| {
                let waited = sem.acquire();
                if waited > Duration::ZERO {
                    self.metrics.on_throttle_wait(waited);
                    self.emit(ExecutionEvent::ThrottleWaited { duration: waited });
                }

                self.metrics.on_chunk_start();
                self.emit(ExecutionEvent::ChunkStarted {
                    start_row: range.start,
                    row_count: range.end - range.start,
                });

                let mut out = Vec::with_capacity(range.end - range.start);
                let mut replaced = 0u64;
                for row in &dataset.rows[range] {
                    self.metrics.on_row_processed();
                    let (cleaned, n) = clean_row(row.as_slice(), fields, options);
                    replaced += n;
                    out.push(cleaned);
                }
                self.metrics.on_cells_replaced(replaced);

                self.emit(ExecutionEvent::ChunkFinished {
                    rows: out.len(),
                    cells_replaced: replaced,
                });
                self.metrics.on_chunk_end();
                sem.release();
                (out, replaced)
            })
            .collect();

        let mut cells_replaced = 0u64;
        let mut rows = Vec::with_capacity(dataset.row_count());
        for (chunk, replaced) in per_chunk {
            cells_replaced += replaced;
            rows.extend(chunk);
        }
        let out = DataSet::new(dataset.schema.clone(), rows);

        if let Some(obs) = &options.observer {
            obs.on_complete(&CleaningStats {
                rows: out.row_count(),
                string_columns,
                numeric_columns,
                passthrough_columns,
                cells_replaced,
            });
        }

        self.metrics.end_run(start.elapsed());
        self.emit(ExecutionEvent::RunFinished {
            elapsed: start.elapsed(),
            metrics: self.metrics.snapshot(),
        });

        out
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

fn chunk_ranges(row_count: usize, chunk_size: usize) -> Vec<std::ops::Range<usize>> {
    if row_count == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(row_count.div_ceil(chunk_size));
    let mut start = 0usize;
    while start < row_count {
        let end = (start + chunk_size).min(row_count);
        out.push(start..end);
        start = end;
    }
    out
}
