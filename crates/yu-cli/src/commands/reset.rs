//! `yu reset`

use tracing::{info, instrument};

use crate::{cli::ResetArgs, commands::Context, error::CliResult};

#[instrument(skip_all, fields(without_cache = args.without_cache))]
pub fn execute(args: ResetArgs, ctx: &Context) -> CliResult<()> {
    ctx.compose_service().reset(args.without_cache)?;
    info!("reset complete");
    ctx.output.success("Reset complete")?;
    Ok(())
}
