use std::{env, time::Duration};

use anyhow::{Context, Result, anyhow};
use bellgrid::{args::DemoArgs, init_tracing, self_check};
use bellgrid_core::generate;
use bellgrid_plot::{ShowMode, SurfacePlot};
use tracing::{debug, info};

fn main() -> Result<()> {
    init_tracing()?;

    let args = DemoArgs::parse_with_legacy(env::args_os());
    if !args.ignored.is_empty() {
        debug!(ignored = ?args.ignored, "ignoring unrecognised arguments");
    }

    if args.test {
        self_check(true, Duration::from_millis(args.test_delay_ms));
    }

    let params = args.surface.params().context("invalid surface parameters")?;
    let grid = generate(&params)?;
    info!(shape = ?grid.shape(), "plotting surface");

    SurfacePlot::new(&grid)
        .title("Bivariate normal")
        .show(ShowMode::from_interactive(!args.no_block))
        .map_err(|err| anyhow!("failed to open plot window: {err}"))
}
