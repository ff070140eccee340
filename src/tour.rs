//! The demonstration steps, in the order the tour runs them.
//!
//! Every step takes its collaborators as parameters so the same functions run
//! against fixture files in tests and against the sample data set from the
//! binary.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use polars::df;
use polars::prelude::*;
use tracing::info;

use crate::convert;
use crate::engine::SqlEngine;
use crate::error::Result;
use crate::interop;
use crate::writer;

/// Default tour input, relative to the working directory.
pub const CUSTOMERS_CSV: &str = "../sample-data/customers-100.csv";

/// Directory the write step populates.
pub const OUT_DIR: &str = "tmp";

/// Literal selects, naming a result, and querying the named result.
///
/// The dialect requires a FROM clause, so literals are selected from a
/// one-row seed relation.
pub fn basic(engine: &mut SqlEngine) -> Result<()> {
    info!("step: basic queries");
    engine.register("seed", df!["x" => [1i64]]?.lazy());
    println!("{}", engine.sql("SELECT 42 AS answer FROM seed")?);

    let r1 = engine.sql_lazy("SELECT 42 AS i FROM seed")?;
    println!("{}", r1.clone().collect()?);
    engine.register("r1", r1);
    println!("{}", engine.sql("SELECT i * 2 AS k FROM r1")?);
    Ok(())
}

/// Read a CSV through the SQL surface and through the direct reader.
pub fn data_input(engine: &mut SqlEngine, csv: &Path) -> Result<()> {
    info!(path = %csv.display(), "step: data input");
    engine.register_csv("customers", csv)?;
    let preview = engine.sql("SELECT * FROM customers LIMIT 10")?;
    println!("{preview}");

    let direct = LazyCsvReader::new(csv)
        .with_has_header(true)
        .finish()?
        .collect()?;
    println!(
        "direct read: {} rows, sql preview: {} rows",
        direct.height(),
        preview.height()
    );
    Ok(())
}

/// Query an in-memory frame through the engine, then through a context that
/// only knows that one frame (Polars' own SQL entry point on a dataframe).
pub fn dataframe_input(engine: &mut SqlEngine) -> Result<()> {
    info!("step: dataframe input");
    let frame = df!["a" => [42i64]]?;
    engine.register("memory_df", frame.clone().lazy());
    println!("{}", engine.sql("SELECT * FROM memory_df")?);

    let mut scoped = SqlEngine::new();
    scoped.register("self", frame.lazy());
    println!("{}", scoped.sql("SELECT * FROM self")?);
    Ok(())
}

/// Query an `arrow` record batch through the engine.
pub fn arrow_input(engine: &mut SqlEngine) -> Result<()> {
    info!("step: arrow input");
    let schema = Arc::new(Schema::new(vec![Field::new("a", DataType::Int64, false)]));
    let batch = RecordBatch::try_new(
        schema,
        vec![Arc::new(Int64Array::from(vec![42])) as ArrayRef],
    )?;
    let frame = interop::batch_to_frame(&batch)?;
    engine.register("arrow_table", frame.lazy());
    println!("{}", engine.sql("SELECT * FROM arrow_table")?);
    Ok(())
}

/// One result, four shapes: JSON rows, a frame, arrow batches, typed columns.
pub fn result_conversion(engine: &mut SqlEngine) -> Result<()> {
    info!("step: result conversion");
    engine.register("sixty_two", df!["v" => [62i64]]?.lazy());
    let mut frame = engine.sql("SELECT v FROM sixty_two")?;

    for row in convert::frame_to_rows(&frame)? {
        println!("{}", serde_json::to_string(&row)?);
    }
    println!("{frame}");
    for batch in interop::frame_to_batches(&mut frame)? {
        println!(
            "arrow batch: {} rows x {} columns",
            batch.num_rows(),
            batch.num_columns()
        );
    }
    println!("{:?}", convert::column_i64(&frame, "v")?);
    Ok(())
}

/// Write a query result to Parquet and CSV under `dir`.
pub fn write_data(engine: &mut SqlEngine, dir: &Path) -> Result<()> {
    info!(dir = %dir.display(), "step: write data");
    writer::ensure_dir(dir)?;
    engine.register("answer", df!["v" => [42i64]]?.lazy());
    let mut frame = engine.sql("SELECT v FROM answer")?;
    writer::write_parquet(&mut frame, &dir.join("out.parquet"))?;
    writer::write_csv(&mut frame, &dir.join("out.csv"))?;
    Ok(())
}
