use polars::df;
use polars::prelude::IntoLazy;

use rust_data_cleaning::cleaning::{clean_dataframe, clean_lazy};
use rust_data_cleaning::Sentinels;

#[test]
fn cleaned_frame_matches_expected_rows() {
    let df = df!(
        "name" => &[Some("***"), Some("Ana!"), None, Some(""), Some("abc!")],
        "age" => &[None, Some(30i64), None, None, Some(2)],
    )
    .unwrap();

    let out = clean_dataframe(&df, &Sentinels::default()).unwrap();
    let expected = df!(
        "name" => &["DESCONHECIDO", "Ana!", "DESCONHECIDO", "", "abc!"],
        "age" => &[0i64, 30, 0, 0, 2],
    )
    .unwrap();
    assert!(out.equals(&expected));

    // Schema preserved: names, order, dtypes, height.
    assert_eq!(out.get_column_names(), df.get_column_names());
    assert_eq!(out.dtypes(), df.dtypes());
    assert_eq!(out.height(), df.height());
}

#[test]
fn lazy_evaluation_is_deferred_until_collect() {
    let df = df!(
        "name" => &[None::<&str>, Some("-")],
        "age" => &[Some(5i64), None],
    )
    .unwrap();

    let lf = clean_lazy(df.lazy(), &Sentinels::new("N/A", -1.0)).unwrap();
    let out = lf.collect().unwrap();

    let expected = df!(
        "name" => &["N/A", "N/A"],
        "age" => &[5i64, -1],
    )
    .unwrap();
    assert!(out.equals(&expected));
}

#[test]
fn empty_frame_round_trips() {
    let df = df!(
        "name" => &Vec::<String>::new(),
        "age" => &Vec::<i64>::new(),
    )
    .unwrap();

    let out = clean_dataframe(&df, &Sentinels::default()).unwrap();
    assert_eq!(out.height(), 0);
    assert_eq!(out.get_column_names(), df.get_column_names());
    assert_eq!(out.dtypes(), df.dtypes());
}

#[test]
fn frame_without_target_columns_is_untouched() {
    let df = df!(
        "flag" => &[Some(true), None],
    )
    .unwrap();

    let out = clean_dataframe(&df, &Sentinels::default()).unwrap();
    assert!(out.equals_missing(&df));
}
