//! Subtree fetch shared by every show entry point.
//!
//! Validates the instance name, optionally substitutes one live variable into
//! a single-placeholder query, and performs the store fetch.

use crate::context::ShowContext;
use crate::error::ShowError;
use crate::resolve::PLACEHOLDER;
use crate::tree::ConfigSubtree;
use crate::types::{ConfigInstance, VariableSet};
use tracing::debug;

/// Arguments of a show command: `<dbname> <xpath> [<attr>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowArgs {
    pub instance: String,
    pub query: String,
    /// Name of the live variable substituted into `query`.
    pub attr: Option<String>,
}

impl ShowArgs {
    pub fn new(instance: impl Into<String>, query: impl Into<String>, attr: Option<String>) -> Self {
        Self {
            instance: instance.into(),
            query: query.into(),
            attr,
        }
    }

    /// Parse an argument vector of two or three elements.
    pub fn from_argv<S: AsRef<str>>(argv: &[S]) -> Result<Self, ShowError> {
        match argv {
            [db, query] => Ok(Self::new(db.as_ref(), query.as_ref(), None)),
            [db, query, attr] => Ok(Self::new(
                db.as_ref(),
                query.as_ref(),
                Some(attr.as_ref().to_string()),
            )),
            [single] => Err(ShowError::InvalidArguments(format!(
                "Got single argument:\"{}\". Expected \"<dbname>,<xpath>[,<attr>]\"",
                single.as_ref()
            ))),
            other => Err(ShowError::InvalidArguments(format!(
                "Got {} arguments. Expected: <dbname>,<xpath>[,<attr>]",
                other.len()
            ))),
        }
    }

    /// Parse the single-string form `"<dbname> <xpath> [<attr>]"`.
    pub fn from_spec(spec: &str) -> Result<Self, ShowError> {
        let parts: Vec<&str> = spec.split_whitespace().collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(ShowError::InvalidArguments(format!(
                "format error \"{}\" - expected <dbname> <xpath> [<attr>] got {} arg",
                spec,
                parts.len()
            )));
        }
        Self::from_argv(parts.as_slice())
    }
}

/// Number of `%` characters in a template. Every `%` counts, so `%%` is two.
pub fn count_placeholders(template: &str) -> usize {
    template.chars().filter(|c| *c == '%').count()
}

/// Substitute `value` into a template holding exactly one `%s`.
pub fn substitute_single(template: &str, value: &str) -> Result<String, ShowError> {
    let found = count_placeholders(template);
    if found != 1 {
        return Err(ShowError::TemplateArity {
            template: template.to_string(),
            found,
        });
    }
    if !template.contains(PLACEHOLDER) {
        return Err(ShowError::InvalidArguments(format!(
            "xpath '{}' placeholder must be '{}'",
            template, PLACEHOLDER
        )));
    }
    Ok(template.replacen(PLACEHOLDER, value, 1))
}

/// Build the concrete query path without touching the store.
pub fn concrete_path(
    template: &str,
    substitution_var: Option<&str>,
    vars: &VariableSet,
) -> Result<String, ShowError> {
    let Some(name) = substitution_var else {
        return Ok(template.to_string());
    };
    let found = count_placeholders(template);
    if found != 1 {
        return Err(ShowError::TemplateArity {
            template: template.to_string(),
            found,
        });
    }
    let var = vars
        .find(name)
        .ok_or_else(|| ShowError::VariableNotFound(name.to_string()))?;
    substitute_single(template, &var.value.to_string())
}

/// Fetch the subtree selected by `template` from `instance`.
///
/// All validation happens before the store is contacted.
pub fn fetch_subtree(
    ctx: &ShowContext,
    instance: &str,
    template: &str,
    substitution_var: Option<&str>,
    vars: &VariableSet,
) -> Result<ConfigSubtree, ShowError> {
    let instance: ConfigInstance = instance.parse()?;
    let path = concrete_path(template, substitution_var, vars)?;
    debug!(instance = %instance, path = %path, "Fetching configuration subtree");
    let tree = ctx.store().get_config(instance, &path)?;
    Ok(tree)
}

/// [`fetch_subtree`] driven by parsed show arguments.
pub fn fetch_with_args(
    ctx: &ShowContext,
    args: &ShowArgs,
    vars: &VariableSet,
) -> Result<ConfigSubtree, ShowError> {
    fetch_subtree(ctx, &args.instance, &args.query, args.attr.as_deref(), vars)
}
