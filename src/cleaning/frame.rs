//! Polars-backed cleaning.
//!
//! This backend expresses the same rewrite rules as [`super::dataset::clean`] as a plan of
//! Polars expressions over a [`LazyFrame`]. The plan is built in one pass over the frame's
//! schema; row evaluation (and any parallelism) is owned entirely by the Polars engine and,
//! for the lazy entry point, deferred until the caller collects.

use polars::prelude::{
    col, lit, when, DataFrame, DataType, Expr, IntoLazy, LazyFrame, Schema,
};

use crate::config::Sentinels;
use crate::error::CleaningResult;

/// Matches values composed entirely of one-or-more characters outside `[a-zA-Z0-9]`.
///
/// The empty string does not match, so it is preserved rather than treated as null-like.
pub const SPECIAL_CHARS_ONLY_PATTERN: &str = r"^[^a-zA-Z0-9]+$";

/// Build the column-rewrite plan for a schema.
///
/// One expression per string or numeric column; columns of any other type get no
/// expression and are left untouched by `with_columns`.
pub fn cleaning_exprs(schema: &Schema, sentinels: &Sentinels) -> Vec<Expr> {
    let mut exprs = Vec::new();
    for (name, dtype) in schema.iter() {
        match dtype {
            DataType::String => {
                exprs.push(
                    when(col(name.clone()).is_null())
                        .then(lit(sentinels.string_null_value.clone()))
                        .when(
                            col(name.clone())
                                .str()
                                .contains(lit(SPECIAL_CHARS_ONLY_PATTERN), true),
                        )
                        .then(lit(sentinels.string_null_value.clone()))
                        .otherwise(col(name.clone()))
                        .alias(name.clone()),
                );
            }
            DataType::Int32 | DataType::Int64 | DataType::Float32 | DataType::Float64 => {
                exprs.push(
                    col(name.clone())
                        .fill_null(lit(sentinels.numeric_null_value).cast(dtype.clone()))
                        .alias(name.clone()),
                );
            }
            _ => {}
        }
    }
    exprs
}

/// Clean a lazy frame, deferring evaluation to collect time.
///
/// Schema resolution errors from the engine propagate unmodified.
pub fn clean_lazy(mut lf: LazyFrame, sentinels: &Sentinels) -> CleaningResult<LazyFrame> {
    let schema = lf.collect_schema()?;
    let exprs = cleaning_exprs(schema.as_ref(), sentinels);
    Ok(lf.with_columns(exprs))
}

/// Clean an eager frame, returning a new [`DataFrame`] with identical schema and height.
///
/// # Examples
///
/// ```
/// use polars::df;
/// use rust_data_cleaning::cleaning::clean_dataframe;
/// use rust_data_cleaning::Sentinels;
///
/// let df = df!(
///     "name" => &[Some("***"), Some("Ana!")],
///     "age" => &[None, Some(30i64)],
/// )
/// .unwrap();
///
/// let out = clean_dataframe(&df, &Sentinels::default()).unwrap();
/// let expected = df!(
///     "name" => &[Some("DESCONHECIDO"), Some("Ana!")],
///     "age" => &[Some(0i64), Some(30i64)],
/// )
/// .unwrap();
/// assert!(out.equals(&expected));
/// ```
pub fn clean_dataframe(df: &DataFrame, sentinels: &Sentinels) -> CleaningResult<DataFrame> {
    let out = clean_lazy(df.clone().lazy(), sentinels)?.collect()?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use polars::df;
    use polars::prelude::{DataType, IntoLazy};

    use super::{clean_dataframe, clean_lazy, cleaning_exprs};
    use crate::config::Sentinels;

    #[test]
    fn string_and_numeric_rules_with_defaults() {
        let df = df!(
            "name" => &[Some("***"), Some("Ana!"), None, Some(""), Some("   ")],
            "age" => &[None, Some(30i64), None, Some(7), Some(8)],
        )
        .unwrap();

        let out = clean_dataframe(&df, &Sentinels::default()).unwrap();
        let expected = df!(
            "name" => &["DESCONHECIDO", "Ana!", "DESCONHECIDO", "", "DESCONHECIDO"],
            "age" => &[0i64, 30, 0, 7, 8],
        )
        .unwrap();
        assert!(out.equals(&expected));
        // Input untouched.
        assert_eq!(df.column("name").unwrap().null_count(), 1);
    }

    #[test]
    fn custom_sentinels() {
        let df = df!(
            "name" => &[None::<&str>],
            "age" => &[None::<i64>],
        )
        .unwrap();

        let out = clean_dataframe(&df, &Sentinels::new("N/A", -1.0)).unwrap();
        let expected = df!(
            "name" => &["N/A"],
            "age" => &[-1i64],
        )
        .unwrap();
        assert!(out.equals(&expected));
    }

    #[test]
    fn numeric_sentinel_coerced_to_column_type() {
        let df = df!(
            "i32" => &[None::<i32>, Some(5i32)],
            "f32" => &[None::<f32>, Some(1.5f32)],
            "f64" => &[None::<f64>, Some(2.5f64)],
        )
        .unwrap();

        let out = clean_dataframe(&df, &Sentinels::new("X", -1.0)).unwrap();
        assert_eq!(out.column("i32").unwrap().dtype(), &DataType::Int32);
        assert_eq!(out.column("f32").unwrap().dtype(), &DataType::Float32);
        assert_eq!(out.column("f64").unwrap().dtype(), &DataType::Float64);

        let expected = df!(
            "i32" => &[-1i32, 5],
            "f32" => &[-1.0f32, 1.5],
            "f64" => &[-1.0f64, 2.5],
        )
        .unwrap();
        assert!(out.equals(&expected));
    }

    #[test]
    fn other_typed_columns_pass_through_with_nulls_intact() {
        let df = df!(
            "flag" => &[Some(true), None, Some(false)],
            "name" => &[Some("-"), Some("ok"), None],
        )
        .unwrap();

        let out = clean_dataframe(&df, &Sentinels::default()).unwrap();
        let expected = df!(
            "flag" => &[Some(true), None, Some(false)],
            "name" => &[Some("DESCONHECIDO"), Some("ok"), Some("DESCONHECIDO")],
        )
        .unwrap();
        assert!(out.equals_missing(&expected));
    }

    #[test]
    fn plan_skips_non_target_columns() {
        let df = df!(
            "flag" => &[true, false],
            "name" => &["a", "b"],
            "age" => &[1i64, 2],
        )
        .unwrap();
        let mut lf = df.lazy();
        let schema = lf.collect_schema().unwrap();

        let exprs = cleaning_exprs(schema.as_ref(), &Sentinels::default());
        // One expression for "name", one for "age", none for "flag".
        assert_eq!(exprs.len(), 2);
    }

    #[test]
    fn lazy_plan_preserves_schema_and_height() {
        let df = df!(
            "name" => &[None::<&str>, Some("Ana")],
            "age" => &[Some(1i64), None],
        )
        .unwrap();

        let lf = clean_lazy(df.clone().lazy(), &Sentinels::default()).unwrap();
        let out = lf.collect().unwrap();
        assert_eq!(out.height(), df.height());
        assert_eq!(out.get_column_names(), df.get_column_names());
        assert_eq!(out.dtypes(), df.dtypes());
        assert_eq!(out.column("name").unwrap().null_count(), 0);
        assert_eq!(out.column("age").unwrap().null_count(), 0);
    }

    #[test]
    fn idempotent_with_default_sentinels() {
        let df = df!(
            "name" => &[Some("***"), None, Some("Ana!"), Some("")],
            "age" => &[None, Some(30i64), None, Some(1)],
        )
        .unwrap();

        let sentinels = Sentinels::default();
        let once = clean_dataframe(&df, &sentinels).unwrap();
        let twice = clean_dataframe(&once, &sentinels).unwrap();
        assert!(twice.equals(&once));
    }
}
