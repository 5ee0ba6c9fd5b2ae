//! `yu start`, `yu restart` and `yu recreate`.

use tracing::instrument;

use crate::{cli::ServicesArgs, commands::Context, error::CliResult};

#[instrument(skip_all, fields(services = ?args.services))]
pub fn start(args: ServicesArgs, ctx: &Context) -> CliResult<()> {
    ctx.compose_service().start(&args.services)?;
    Ok(())
}

#[instrument(skip_all, fields(services = ?args.services))]
pub fn restart(args: ServicesArgs, ctx: &Context) -> CliResult<()> {
    ctx.compose_service().restart(&args.services)?;
    Ok(())
}

#[instrument(skip_all, fields(services = ?args.services))]
pub fn recreate(args: ServicesArgs, ctx: &Context) -> CliResult<()> {
    ctx.compose_service().recreate(&args.services)?;
    Ok(())
}
