use crate::reports;
use clap::Args;
use finetune::config::{PhysicalConstants, SweepParams};
use finetune::error::FtResult;
use finetune::sweep;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub constants: PhysicalConstants,

    #[command(flatten)]
    pub params: SweepParams,

    /// Write the grid as CSV (g,lambda,life_score)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &SweepArgs, constants: &PhysicalConstants) -> FtResult<()> {
    let start = Instant::now();
    let grid = sweep::sweep_with(constants.electromagnetic, constants.strong_force, &args.params)?;
    let (rows, cols) = grid.shape();
    info!(
        "📈 Swept {}x{} grid in {:.2}ms",
        rows,
        cols,
        start.elapsed().as_secs_f64() * 1000.0
    );

    if let Some(path) = &args.output {
        grid.save_csv(path)?;
        info!("💾 Grid written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    reports::print_heatmap(&grid);
    reports::print_sweep_summary(&grid);
    Ok(())
}
