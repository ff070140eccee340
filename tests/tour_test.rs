use std::path::{Path, PathBuf};

use polars::prelude::*;
use tempfile::tempdir;

use sql_tour::engine::SqlEngine;
use sql_tour::step::{StepRunner, RULE_WIDTH};
use sql_tour::tour;

fn sample_csv(dir: &Path) -> PathBuf {
    let path = dir.join("customers-100.csv");
    std::fs::write(
        &path,
        "id,name,balance\n1,ada,10.5\n2,grace,20.0\n3,edsger,0.25\n",
    )
    .unwrap();
    path
}

#[test]
fn tour_steps_emit_one_rule_each() {
    let dir = tempdir().unwrap();
    let csv = sample_csv(dir.path());
    let out_dir = dir.path().join("tmp");

    let mut engine = SqlEngine::new();
    let mut runner = StepRunner::new(Vec::new());

    runner.run(|| tour::basic(&mut engine)).unwrap();
    runner.run(|| tour::data_input(&mut engine, &csv)).unwrap();
    runner.run(|| tour::dataframe_input(&mut engine)).unwrap();
    runner.run(|| tour::arrow_input(&mut engine)).unwrap();
    runner.run(|| tour::result_conversion(&mut engine)).unwrap();
    runner.run(|| tour::write_data(&mut engine, &out_dir)).unwrap();

    let out = String::from_utf8(runner.into_inner()).unwrap();
    let rule = "-".repeat(RULE_WIDTH);
    assert_eq!(out.lines().count(), 6);
    assert!(out.lines().all(|line| line == rule));
}

#[test]
fn basic_step_runs_on_a_fresh_engine() {
    let mut engine = SqlEngine::new();
    tour::basic(&mut engine).unwrap();

    // The step leaves its named result behind, so it can be queried again.
    let out = engine.sql("SELECT i * 2 AS k FROM r1").unwrap();
    assert_eq!(out.column("k").unwrap().i64().unwrap().get(0), Some(84));
}

#[test]
fn data_input_sees_the_csv_through_sql() {
    let dir = tempdir().unwrap();
    let csv = sample_csv(dir.path());

    let mut engine = SqlEngine::new();
    tour::data_input(&mut engine, &csv).unwrap();

    let names = engine
        .sql("SELECT id, name FROM customers ORDER BY id")
        .unwrap();
    assert_eq!(
        names.column("name").unwrap().str().unwrap().get(0),
        Some("ada")
    );
    assert_eq!(names.height(), 3);
}

#[test]
fn write_step_produces_readable_files() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("tmp");

    let mut engine = SqlEngine::new();
    tour::write_data(&mut engine, &out_dir).unwrap();

    let parquet = LazyFrame::scan_parquet(&out_dir.join("out.parquet"), ScanArgsParquet::default())
        .unwrap()
        .collect()
        .unwrap();
    assert_eq!(parquet.height(), 1);

    let csv = LazyCsvReader::new(&out_dir.join("out.csv"))
        .with_has_header(true)
        .finish()
        .unwrap()
        .collect()
        .unwrap();
    assert_eq!(csv.column("v").unwrap().i64().unwrap().get(0), Some(42));
}

#[test]
fn write_step_reruns_over_existing_dir() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("tmp");

    let mut engine = SqlEngine::new();
    tour::write_data(&mut engine, &out_dir).unwrap();
    tour::write_data(&mut engine, &out_dir).unwrap();
    assert!(out_dir.join("out.parquet").is_file());
    assert!(out_dir.join("out.csv").is_file());
}

#[test]
fn failing_step_surfaces_and_prints_no_rule() {
    let mut engine = SqlEngine::new();
    let mut runner = StepRunner::new(Vec::new());
    let missing = Path::new("no-such-dir/no-such-file.csv");

    let result = runner.run(|| tour::data_input(&mut engine, missing));
    assert!(result.is_err());
    assert!(runner.into_inner().is_empty());
}
