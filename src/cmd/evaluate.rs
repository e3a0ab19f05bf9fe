use crate::reports;
use clap::Args;
use finetune::config::PhysicalConstants;
use finetune::error::FtResult;
use finetune::scorer::{self, explain, Severity};
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub constants: PhysicalConstants,

    /// Print the evaluation as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &EvaluateArgs, constants: &PhysicalConstants) -> FtResult<()> {
    let eval = scorer::evaluate(constants)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&eval)?);
        return Ok(());
    }

    for a in &eval.axis_verdicts {
        if a.verdict.severity() == Severity::Warning {
            warn!("⚠️  {}: {}", a.axis, a.verdict);
        }
    }

    println!("\n🔎 === UNIVERSE AUDIT === 🔎");
    reports::print_axis_report(&eval);
    println!("\n🌟 Universe Viability Score: {}", explain::headline(&eval));

    reports::print_comparison_report(constants);
    reports::print_combined_report(&eval);

    println!("\n🧠 Why This Universe Behaves This Way");
    println!("{}", explain::narrative(&eval.scores).join(" "));
    Ok(())
}
