//! Key-template resolution
//!
//! Turns a key-format template plus the live command-line variables into a
//! concrete query path for the tree evaluator.

use crate::error::ShowError;
use crate::tree::path::{closing_bracket, split_steps};
use crate::types::VariableSet;

/// Placeholder marking a variable slot in a template.
pub const PLACEHOLDER: &str = "%s";

/// Maps (template, live variables) to a concrete query path. Pure; no I/O.
pub trait PathResolver: Send + Sync {
    fn resolve(&self, template: &str, vars: &VariableSet) -> Result<String, ShowError>;
}

/// Resolver for `/`-separated key-format templates.
///
/// Placeholders are filled with the live variables in order. Once the
/// variables run out, a placeholder inside a predicate drops that predicate
/// and a placeholder standing for a whole step becomes `*`, so the path
/// matches every instance at that level:
///
/// `/interfaces/interface[name=%s]/ipv4/address[ip=%s]/ip` with one variable
/// `eth0` resolves to `/interfaces/interface[name=eth0]/ipv4/address/ip`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyFormatResolver;

impl KeyFormatResolver {
    pub fn new() -> Self {
        Self
    }
}

impl PathResolver for KeyFormatResolver {
    fn resolve(&self, template: &str, vars: &VariableSet) -> Result<String, ShowError> {
        let trimmed = template.trim();
        let body = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if body.is_empty() {
            return Ok("/".to_string());
        }

        let invalid = |msg: String| ShowError::InvalidPath(format!("{}: {}", template, msg));
        let mut values = vars.iter().map(|v| v.value.to_string());
        let mut resolved = String::new();

        for raw in split_steps(body).map_err(invalid)? {
            let (name_part, mut rest) = match raw.find('[') {
                Some(idx) => (&raw[..idx], &raw[idx..]),
                None => (raw.as_str(), ""),
            };

            resolved.push('/');
            let name_part = name_part.trim();
            if name_part == PLACEHOLDER {
                match values.next() {
                    Some(v) => resolved.push_str(&v),
                    None => resolved.push('*'),
                }
            } else if name_part.contains(PLACEHOLDER) {
                let filled = fill(name_part, &mut values).ok_or_else(|| {
                    invalid(format!("no value for placeholder in step '{}'", name_part))
                })?;
                resolved.push_str(&filled);
            } else {
                resolved.push_str(name_part);
            }

            while !rest.is_empty() {
                if !rest.starts_with('[') {
                    return Err(invalid(format!("unexpected '{}' after predicate", rest)));
                }
                let end = closing_bracket(rest)
                    .ok_or_else(|| invalid(format!("bad predicate in '{}'", raw)))?;
                let inner = &rest[1..end];
                if inner.contains(PLACEHOLDER) {
                    if let Some(filled) = fill(inner, &mut values) {
                        resolved.push('[');
                        resolved.push_str(&filled);
                        resolved.push(']');
                    }
                } else {
                    resolved.push_str(&rest[..=end]);
                }
                rest = rest[end + 1..].trim_start();
            }
        }

        Ok(resolved)
    }
}

/// Replace every placeholder in `text`; `None` when the values run out.
fn fill<I: Iterator<Item = String>>(text: &str, values: &mut I) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut parts = text.split(PLACEHOLDER);
    if let Some(first) = parts.next() {
        out.push_str(first);
    }
    for part in parts {
        out.push_str(&values.next()?);
        out.push_str(part);
    }
    Some(out)
}
