//! Path expression parsing
//!
//! Grammar: an optional leading `/`, then `/`-separated steps. A step is an
//! element name or `*`, followed by zero or more `[child=value]` predicates.
//! Predicate values may be quoted with `'` or `"`, which lets them contain
//! `/`, `]` or `=`. The lone path `/` (or an empty path) selects the root.

use crate::error::ShowError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepName {
    Any,
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub child: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: StepName,
    pub predicates: Vec<Predicate>,
}

impl Step {
    pub fn matches_name(&self, name: &str) -> bool {
        match &self.name {
            StepName::Any => true,
            StepName::Named(n) => n == name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpr {
    pub steps: Vec<Step>,
}

impl PathExpr {
    pub fn parse(input: &str) -> Result<Self, ShowError> {
        let trimmed = input.trim();
        let body = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if body.is_empty() {
            return Ok(Self { steps: Vec::new() });
        }

        let steps = split_steps(body)
            .map_err(|msg| ShowError::InvalidPath(format!("{}: {}", input, msg)))?
            .into_iter()
            .map(|raw| parse_step(&raw))
            .collect::<Result<Vec<_>, String>>()
            .map_err(|msg| ShowError::InvalidPath(format!("{}: {}", input, msg)))?;

        Ok(Self { steps })
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("/");
        }
        for step in &self.steps {
            f.write_str("/")?;
            match &step.name {
                StepName::Any => f.write_str("*")?,
                StepName::Named(n) => f.write_str(n)?,
            }
            for p in &step.predicates {
                write!(f, "[{}='{}']", p.child, p.value)?;
            }
        }
        Ok(())
    }
}

/// Split on `/` outside of brackets and quotes.
pub(crate) fn split_steps(body: &str) -> Result<Vec<String>, String> {
    let mut steps = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;

    for c in body.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => {
                quote = None;
                current.push(c);
            }
            (Some(_), c) => current.push(c),
            (None, '\'') | (None, '"') if depth > 0 => {
                quote = Some(c);
                current.push(c);
            }
            (None, '[') => {
                depth += 1;
                current.push(c);
            }
            (None, ']') => {
                if depth == 0 {
                    return Err("unbalanced ']'".to_string());
                }
                depth -= 1;
                current.push(c);
            }
            (None, '/') if depth == 0 => {
                if current.is_empty() {
                    return Err("empty step".to_string());
                }
                steps.push(std::mem::take(&mut current));
            }
            (None, c) => current.push(c),
        }
    }

    if quote.is_some() {
        return Err("unterminated quote".to_string());
    }
    if depth != 0 {
        return Err("unbalanced '['".to_string());
    }
    if current.is_empty() {
        return Err("empty step".to_string());
    }
    steps.push(current);
    Ok(steps)
}

fn parse_step(raw: &str) -> Result<Step, String> {
    let (name_part, mut rest) = match raw.find('[') {
        Some(idx) => (&raw[..idx], &raw[idx..]),
        None => (raw, ""),
    };
    let name_part = name_part.trim();
    if name_part.is_empty() {
        return Err(format!("step '{}' has no name", raw));
    }
    let name = if name_part == "*" {
        StepName::Any
    } else {
        StepName::Named(name_part.to_string())
    };

    let mut predicates = Vec::new();
    while !rest.is_empty() {
        let inner_end = closing_bracket(rest).ok_or_else(|| format!("bad predicate in '{}'", raw))?;
        let inner = &rest[1..inner_end];
        predicates.push(parse_predicate(inner)?);
        rest = rest[inner_end + 1..].trim_start();
        if !rest.is_empty() && !rest.starts_with('[') {
            return Err(format!("unexpected '{}' after predicate", rest));
        }
    }

    Ok(Step { name, predicates })
}

/// Index of the `]` closing the predicate that starts at `s[0]`.
pub(crate) fn closing_bracket(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices().skip(1) {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'') | (None, '"') => quote = Some(c),
            (None, ']') => return Some(i),
            _ => {}
        }
    }
    None
}

fn parse_predicate(inner: &str) -> Result<Predicate, String> {
    let (child, value) = inner
        .split_once('=')
        .ok_or_else(|| format!("predicate '[{}]' must be [child=value]", inner))?;
    let child = child.trim();
    if child.is_empty() {
        return Err(format!("predicate '[{}]' has no child name", inner));
    }
    let value = value.trim();
    let value = unquote(value);
    Ok(Predicate {
        child: child.to_string(),
        value: value.to_string(),
    })
}

fn unquote(value: &str) -> &str {
    for q in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(q) && value.ends_with(q) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
