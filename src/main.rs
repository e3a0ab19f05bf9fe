use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use finetune::config::PhysicalConstants;
use finetune::error::FtResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Tweak the fundamental constants and see if the universe remains life-permitting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with gravity / electromagnetic / strongForce / cosmologicalConstant
    #[arg(global = true, long)]
    constants: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one set of constants
    Evaluate(cmd::evaluate::EvaluateArgs),
    /// Life score heatmap over G and Λ
    Sweep(cmd::sweep::SweepArgs),
    /// Run the toy universe simulation
    Simulate(cmd::simulate::SimulateArgs),
    /// Full render payload as JSON
    Render(cmd::render::RenderArgs),
    /// Measured values of the real constants
    Reference,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> FtResult<()> {
    info!("🌌 Initializing Fine-Tuning Model...");

    match &cli.command {
        Commands::Evaluate(args) => {
            let sub = matches.subcommand_matches("evaluate");
            let constants = resolve_constants(&cli.constants, &args.constants, sub)?;
            cmd::evaluate::run(args, &constants)
        }
        Commands::Sweep(args) => {
            let sub = matches.subcommand_matches("sweep");
            let constants = resolve_constants(&cli.constants, &args.constants, sub)?;
            cmd::sweep::run(args, &constants)
        }
        Commands::Simulate(args) => {
            let sub = matches.subcommand_matches("simulate");
            let constants = resolve_constants(&cli.constants, &args.constants, sub)?;
            cmd::simulate::run(args, &constants)
        }
        Commands::Render(args) => {
            let sub = matches.subcommand_matches("render");
            let constants = resolve_constants(&cli.constants, &args.constants, sub)?;
            cmd::render::run(args, &constants)
        }
        Commands::Reference => {
            reports::print_reference_table();
            reports::print_precision_chart();
            Ok(())
        }
    }
}

/// File values form the base; flags typed on the command line win.
fn resolve_constants(
    path: &Option<String>,
    cli_constants: &PhysicalConstants,
    sub_matches: Option<&ArgMatches>,
) -> FtResult<PhysicalConstants> {
    let Some(path) = path else {
        return Ok(*cli_constants);
    };

    info!("📂 Loading Constants from: {}", path);
    let mut constants = PhysicalConstants::load_from_file(path)?;
    if let Some(m) = sub_matches {
        constants.merge_from_cli(cli_constants, m);
    }
    Ok(constants)
}
