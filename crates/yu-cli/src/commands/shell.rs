//! `yu shell`

use tracing::instrument;

use crate::{cli::ShellArgs, commands::Context, error::CliResult};

#[instrument(skip_all, fields(test = args.test))]
pub fn execute(args: ShellArgs, ctx: &Context) -> CliResult<()> {
    ctx.compose_service().shell(&args.services, args.test)?;
    Ok(())
}
