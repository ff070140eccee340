//! Thin adapter over the Polars SQL context.
//!
//! All SQL parsing, planning, and execution belongs to Polars; this type only
//! names frames and file scans so queries can see them, and collects results.

use std::path::Path;

use polars::prelude::*;
use polars::sql::SQLContext;
use tracing::debug;

use crate::error::Result;

pub struct SqlEngine {
    ctx: SQLContext,
}

impl SqlEngine {
    pub fn new() -> Self {
        Self {
            ctx: SQLContext::new(),
        }
    }

    /// Execute a query and collect the result eagerly.
    pub fn sql(&mut self, query: &str) -> Result<DataFrame> {
        debug!(query, "executing sql");
        Ok(self.ctx.execute(query)?.collect()?)
    }

    /// Execute a query without collecting, so the result can be registered
    /// under a name and queried again, or handed to a writer.
    pub fn sql_lazy(&mut self, query: &str) -> Result<LazyFrame> {
        debug!(query, "planning sql");
        Ok(self.ctx.execute(query)?)
    }

    /// Expose a frame to subsequent queries under `name`.
    pub fn register(&mut self, name: &str, frame: LazyFrame) {
        self.ctx.register(name, frame);
    }

    /// Register a lazy CSV scan; rows are only read when a query needs them.
    pub fn register_csv(&mut self, name: &str, path: &Path) -> Result<()> {
        let scan = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_try_parse_dates(true)
            .with_infer_schema_length(Some(1000))
            .finish()?;
        self.ctx.register(name, scan);
        Ok(())
    }

    /// Register a lazy Parquet scan.
    pub fn register_parquet(&mut self, name: &str, path: &Path) -> Result<()> {
        let scan = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?;
        self.ctx.register(name, scan);
        Ok(())
    }

    /// Names currently visible to SQL.
    pub fn tables(&self) -> Vec<String> {
        self.ctx.get_tables()
    }
}

impl Default for SqlEngine {
    fn default() -> Self {
        Self::new()
    }
}
