use std::process::ExitCode;

use anyhow::{Context, Result};
use bellgrid::{args::ValidateArgs, exit_status, init_tracing};
use bellgrid_validate::validate_with;
use clap::Parser;

fn main() -> Result<ExitCode> {
    init_tracing()?;

    let args = ValidateArgs::parse();
    let params = args.surface.params().context("invalid surface parameters")?;
    let tolerance = args.tolerance().context("invalid tolerance")?;

    let result = validate_with(&params, tolerance)?;
    println!("{result}");

    Ok(ExitCode::from(exit_status(&result)))
}
