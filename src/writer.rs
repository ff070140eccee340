//! File output for query results.

use std::fs::{self, File};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// Create `dir` if it does not already exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

pub fn write_parquet(frame: &mut DataFrame, path: &Path) -> Result<()> {
    debug!(path = %path.display(), "writing parquet");
    let mut file = File::create(path)?;
    ParquetWriter::new(&mut file).finish(frame)?;
    Ok(())
}

pub fn write_csv(frame: &mut DataFrame, path: &Path) -> Result<()> {
    debug!(path = %path.display(), "writing csv");
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(frame)?;
    Ok(())
}
