//! `yu run`
//!
//! Arguments are joined with single spaces and handed to the shell as one
//! command line, without quoting.

use tracing::instrument;

use crate::{cli::RunArgs, commands::Context, error::CliResult};

#[instrument(skip_all, fields(test = args.test))]
pub fn execute(args: RunArgs, ctx: &Context) -> CliResult<()> {
    ctx.compose_service().run(&args.args, args.test)?;
    Ok(())
}
