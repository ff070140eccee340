use std::path::Path;

use anyhow::Result;
use tracing::info;

use sql_tour::engine::SqlEngine;
use sql_tour::step::StepRunner;
use sql_tour::tour;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("sql tour starting");

    let mut engine = SqlEngine::new();
    let mut runner = StepRunner::stdout();

    runner.run(|| tour::basic(&mut engine))?;
    runner.run(|| tour::data_input(&mut engine, Path::new(tour::CUSTOMERS_CSV)))?;
    runner.run(|| tour::dataframe_input(&mut engine))?;
    runner.run(|| tour::arrow_input(&mut engine))?;
    runner.run(|| tour::result_conversion(&mut engine))?;
    runner.run(|| tour::write_data(&mut engine, Path::new(tour::OUT_DIR)))?;

    Ok(())
}
