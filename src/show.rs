//! "Show configuration" entry points: fetch, then render to a writer.

use crate::context::ShowContext;
use crate::error::ShowError;
use crate::fetch::{fetch_subtree, fetch_with_args, ShowArgs};
use crate::render::{render, RenderOptions};
use crate::types::{ConfigInstance, Format, VariableSet};
use std::io::Write;
use tracing::info;

/// Name of the live variable holding the query for [`show_xpath`].
pub const XPATH_VAR: &str = "xpath";

/// Fetch the subtree described by `args` and render it in `format`.
pub fn show_config(
    ctx: &ShowContext,
    format: Format,
    args: &ShowArgs,
    vars: &VariableSet,
    options: &RenderOptions<'_>,
    out: &mut dyn Write,
) -> Result<(), ShowError> {
    args.instance.parse::<ConfigInstance>()?;
    if format == Format::Csv && options.fields.is_none() {
        return Err(ShowError::FieldProjection);
    }
    let tree = fetch_with_args(ctx, args, vars)?;
    render(ctx, &tree, format, options, out)?;
    info!(
        format = %format,
        instance = %args.instance,
        query = %args.query,
        "Showed configuration"
    );
    Ok(())
}

/// [`show_config`] taking the raw argument vector `(dbname, xpath[, attr])`.
pub fn show_config_argv<S: AsRef<str>>(
    ctx: &ShowContext,
    format: Format,
    argv: &[S],
    vars: &VariableSet,
    options: &RenderOptions<'_>,
    out: &mut dyn Write,
) -> Result<(), ShowError> {
    let args = ShowArgs::from_argv(argv)?;
    show_config(ctx, format, &args, vars, options, out)
}

/// Print every node matching the live `xpath` variable as XML.
pub fn show_xpath(
    ctx: &ShowContext,
    instance: &str,
    vars: &VariableSet,
    out: &mut dyn Write,
) -> Result<(), ShowError> {
    let instance: ConfigInstance = instance.parse()?;
    let xpath = vars
        .find(XPATH_VAR)
        .ok_or_else(|| ShowError::VariableNotFound(XPATH_VAR.to_string()))?
        .value
        .to_string();

    let tree = fetch_subtree(ctx, instance.as_str(), &xpath, None, vars)?;
    let matches = ctx.evaluator().select(tree.root(), &xpath)?;
    for node in &matches {
        ctx.serializers().xml(out, node, 0)?;
    }
    out.flush()?;
    info!(instance = %instance, xpath = %xpath, matches = matches.len(), "Showed xpath matches");
    Ok(())
}
