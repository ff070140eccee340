//! Arrow interop.
//!
//! The `arrow` crate and Polars pin different arrow-rs internals, so record
//! batches cross the boundary as Arrow IPC file bytes instead of shared
//! buffers.

use std::io::Cursor;

use arrow::ipc::reader::FileReader;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use polars::prelude::*;

use crate::error::Result;

/// Read an `arrow` record batch into a Polars frame.
pub fn batch_to_frame(batch: &RecordBatch) -> Result<DataFrame> {
    let mut buf = Vec::new();
    {
        let mut writer = FileWriter::try_new(&mut buf, batch.schema().as_ref())?;
        writer.write(batch)?;
        writer.finish()?;
    }
    Ok(IpcReader::new(Cursor::new(buf)).finish()?)
}

/// Materialize a Polars frame as `arrow` record batches.
pub fn frame_to_batches(frame: &mut DataFrame) -> Result<Vec<RecordBatch>> {
    let mut buf = Vec::new();
    IpcWriter::new(&mut buf).finish(frame)?;
    let reader = FileReader::try_new(Cursor::new(buf), None)?;
    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    Ok(batches)
}
