//! `yu service`
//!
//! Template precedence: `--template DIR`, then `scaffold.template_dir` from
//! configuration, then the built-in `ruby_base` template.  Relative template
//! paths from either source are resolved against the project directory.

use std::path::PathBuf;

use tracing::{debug, info, instrument};
use yu_adapters::{DirectoryTemplate, template::ruby_base};
use yu_core::application::ports::TemplateSource;

use crate::{
    cli::ServiceArgs,
    commands::Context,
    error::{CliError, CliResult},
};

#[instrument(skip_all, fields(names = ?args.names))]
pub fn execute(args: ServiceArgs, ctx: &Context) -> CliResult<()> {
    let template = select_template(args.template, ctx)?;
    debug!(template = template.name(), "template selected");

    let compose_file = ctx.root.join(&ctx.settings.compose_file);
    let had_compose_file = compose_file.is_file();

    let created = ctx.scaffold_service(template).create(&args.names)?;

    for name in &created {
        ctx.output.success(&format!("Created service {name}"))?;
    }
    if !had_compose_file && compose_file.is_file() {
        ctx.output.warning(&format!(
            "{} did not exist and was created",
            ctx.settings.compose_file.display()
        ))?;
    }

    info!(count = created.len(), "services scaffolded");
    Ok(())
}

fn select_template(flag: Option<PathBuf>, ctx: &Context) -> CliResult<Box<dyn TemplateSource>> {
    let dir = flag
        .or_else(|| ctx.config.scaffold.template_dir.clone())
        .map(|dir| ctx.root.join(dir));

    match dir {
        Some(dir) if !dir.is_dir() => Err(CliError::InvalidInput {
            message: format!("template directory '{}' does not exist", dir.display()),
        }),
        Some(dir) => Ok(Box::new(DirectoryTemplate::new(dir))),
        None => Ok(Box::new(ruby_base())),
    }
}
