//! `yu build`
//!
//! On success the process is replaced by `docker-compose build`, so this
//! handler only returns on failure (or on platforms without exec).

use tracing::instrument;

use crate::{cli::ServicesArgs, commands::Context, error::CliResult};

#[instrument(skip_all, fields(services = ?args.services))]
pub fn execute(args: ServicesArgs, ctx: &Context) -> CliResult<()> {
    ctx.compose_service().build(&args.services)?;
    Ok(())
}
