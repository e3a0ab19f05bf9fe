use crate::reports;
use clap::Args;
use finetune::config::PhysicalConstants;
use finetune::error::FtResult;
use finetune::sim::Universe;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub constants: PhysicalConstants,

    #[arg(short = 'n', long, default_value_t = 1000)]
    pub steps: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Frames between progress rows
    #[arg(long, default_value_t = 250)]
    pub report_every: usize,
}

pub fn run(args: &SimulateArgs, constants: &PhysicalConstants) -> FtResult<()> {
    let mut universe = Universe::new(*constants, args.seed)?;
    info!(
        "⚛️  Simulating {} frames ({:?} matter)",
        args.steps,
        universe.phase()
    );

    let interval = args.report_every.max(1);
    let mut snapshots = Vec::new();
    let mut done = 0;
    while done < args.steps {
        let chunk = interval.min(args.steps - done);
        snapshots.push(universe.run(chunk));
        done += chunk;
    }

    reports::print_simulation_report(&snapshots);

    println!("\nUniverse State: {}", universe.state());
    for line in universe.explanation() {
        println!("  - {}", line);
    }
    Ok(())
}
