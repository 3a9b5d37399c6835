//! Candidate expansion from a key-format template.
//!
//! The template is resolved against the live variables, the whole instance is
//! fetched, the resolved path is evaluated locally and the text values of the
//! matches are deduplicated in first-seen order.

use crate::context::ShowContext;
use crate::error::ShowError;
use crate::store::WHOLE_INSTANCE;
use crate::tree::{Node, NodeKind};
use crate::types::{ConfigInstance, VariableSet};
use tracing::{debug, info};

/// Ordered, duplicate-free completion values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    values: Vec<String>,
}

impl CandidateList {
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl IntoIterator for CandidateList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Caller-owned accumulator for the legacy completion form.
///
/// Each expansion appends its values; `last_start` is the index of the first
/// value appended by the most recent call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyBuffer {
    entries: Vec<String>,
    last_start: usize,
}

impl LegacyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_start(&self) -> usize {
        self.last_start
    }

    /// Values appended by the most recent call.
    pub fn last_run(&self) -> &[String] {
        &self.entries[self.last_start..]
    }

    fn append(&mut self, values: Vec<String>) {
        self.last_start = self.entries.len();
        self.entries.extend(values);
    }
}

/// Text value of a matched node: a body node's text, or an element's first
/// body child.
pub fn candidate_value(node: &Node) -> Option<&str> {
    match node.kind() {
        NodeKind::Body => node.value(),
        NodeKind::Element => node.body_text(),
        NodeKind::Attribute => None,
    }
}

/// First-seen deduplication over the values of `matches`.
///
/// Exact, case-sensitive comparison. A match without a value fails the whole
/// call, wherever it appears.
pub fn dedup_values(matches: &[&Node]) -> Result<Vec<String>, ShowError> {
    let mut values: Vec<String> = Vec::with_capacity(matches.len());
    for node in matches {
        let value = candidate_value(node)
            .ok_or_else(|| ShowError::Extraction(node.name().to_string()))?;
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    Ok(values)
}

fn expand(
    ctx: &ShowContext,
    instance: &str,
    key_template: &str,
    vars: &VariableSet,
) -> Result<Vec<String>, ShowError> {
    let instance: ConfigInstance = instance.parse()?;
    let path = ctx.resolver().resolve(key_template, vars)?;
    debug!(instance = %instance, template = %key_template, path = %path, "Resolved completion path");

    let tree = ctx.store().get_config(instance, WHOLE_INSTANCE)?;
    let matches = ctx.evaluator().select(tree.root(), &path)?;
    let values = dedup_values(&matches)?;
    info!(
        instance = %instance,
        matches = matches.len(),
        candidates = values.len(),
        "Expanded completion candidates"
    );
    Ok(values)
}

/// Completion values for `key_template` in `instance`.
pub fn expand_candidates(
    ctx: &ShowContext,
    instance: &str,
    key_template: &str,
    vars: &VariableSet,
) -> Result<CandidateList, ShowError> {
    let values = expand(ctx, instance, key_template, vars)?;
    Ok(CandidateList { values })
}

/// Completion entry taking the argument vector `(dbname, keyfmt)`.
pub fn complete_argv<S: AsRef<str>>(
    ctx: &ShowContext,
    argv: &[S],
    vars: &VariableSet,
) -> Result<CandidateList, ShowError> {
    match argv {
        [db, keyfmt] => expand_candidates(ctx, db.as_ref(), keyfmt.as_ref(), vars),
        other => Err(ShowError::InvalidArguments(format!(
            "requires 2 arguments: <dbname> <keyfmt>, got {}",
            other.len()
        ))),
    }
}

/// Legacy form: append the candidates to `buffer`.
///
/// On error the buffer is left unchanged.
pub fn expand_into(
    ctx: &ShowContext,
    instance: &str,
    key_template: &str,
    vars: &VariableSet,
    buffer: &mut LegacyBuffer,
) -> Result<(), ShowError> {
    let values = expand(ctx, instance, key_template, vars)?;
    buffer.append(values);
    Ok(())
}

/// Legacy form taking the single string `"<dbname> <keyfmt>"`.
pub fn expand_into_spec(
    ctx: &ShowContext,
    spec: &str,
    vars: &VariableSet,
    buffer: &mut LegacyBuffer,
) -> Result<(), ShowError> {
    let parts: Vec<&str> = spec.split_whitespace().collect();
    match parts.as_slice() {
        [db, keyfmt] => expand_into(ctx, db, keyfmt, vars, buffer),
        _ => Err(ShowError::InvalidArguments(format!(
            "format error \"{}\" - expected <dbname> <keyfmt> got {} arg",
            spec,
            parts.len()
        ))),
    }
}
