//! `yu doctor`
//!
//! The success message is printed by the core through the reporter.

use tracing::instrument;

use crate::{commands::Context, error::CliResult};

#[instrument(skip_all)]
pub fn execute(ctx: &Context) -> CliResult<()> {
    ctx.compose_service().doctor()?;
    Ok(())
}
