//! Shell-style glob patterns (`*`, `?`, `[...]`) for text event filters.

use crate::error::ShowError;
use regex::Regex;

/// Anchored regex equivalent to a glob pattern.
pub fn glob_regex(pattern: &str) -> Result<Regex, ShowError> {
    let mut re = String::with_capacity(pattern.len() * 2 + 2);
    re.push('^');
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            '[' => {
                let mut class = String::new();
                let mut closed = false;
                if let Some(&negate) = chars.peek() {
                    if negate == '!' || negate == '^' {
                        chars.next();
                        class.push('^');
                    }
                }
                // A leading ']' is a literal member.
                if chars.peek() == Some(&']') {
                    chars.next();
                    class.push_str("\\]");
                }
                for member in chars.by_ref() {
                    if member == ']' {
                        closed = true;
                        break;
                    }
                    if member == '\\' || member == '[' {
                        class.push('\\');
                    }
                    class.push(member);
                }
                if !closed {
                    return Err(ShowError::InvalidArguments(format!(
                        "unterminated '[' in pattern '{}'",
                        pattern
                    )));
                }
                re.push('[');
                re.push_str(&class);
                re.push(']');
            }
            other => re.push_str(&regex::escape(&other.to_string())),
        }
    }
    re.push('$');
    Regex::new(&re).map_err(|e| {
        ShowError::InvalidArguments(format!("invalid pattern '{}': {}", pattern, e))
    })
}

/// Compiled text filter. The empty pattern matches everything.
#[derive(Debug, Clone)]
pub struct GlobFilter {
    pattern: String,
    regex: Option<Regex>,
}

impl GlobFilter {
    pub fn new(pattern: &str) -> Result<Self, ShowError> {
        let regex = if pattern.is_empty() {
            None
        } else {
            Some(glob_regex(pattern)?)
        };
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, text: &str) -> bool {
        self.regex.as_ref().map_or(true, |re| re.is_match(text))
    }
}
