use clap::Args;
use finetune::api;
use finetune::config::{PhysicalConstants, SweepParams};
use finetune::error::FtResult;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub constants: PhysicalConstants,

    #[command(flatten)]
    pub params: SweepParams,
}

pub fn run(args: &RenderArgs, constants: &PhysicalConstants) -> FtResult<()> {
    println!("{}", api::render_state_json(constants, &args.params)?);
    Ok(())
}
