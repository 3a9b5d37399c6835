//! Core value types shared by completion, fetch and rendering.

use crate::error::ShowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three named configuration stores a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigInstance {
    Running,
    Candidate,
    Startup,
}

impl ConfigInstance {
    pub const ALL: [ConfigInstance; 3] = [
        ConfigInstance::Running,
        ConfigInstance::Candidate,
        ConfigInstance::Startup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigInstance::Running => "running",
            ConfigInstance::Candidate => "candidate",
            ConfigInstance::Startup => "startup",
        }
    }
}

impl FromStr for ConfigInstance {
    type Err = ShowError;

    /// Exact, case-sensitive match against the three instance names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(ConfigInstance::Running),
            "candidate" => Ok(ConfigInstance::Candidate),
            "startup" => Ok(ConfigInstance::Startup),
            other => Err(ShowError::InvalidInstance(other.to_string())),
        }
    }
}

impl fmt::Display for ConfigInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output encodings for "show configuration".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Raw XML
    Xml,
    /// XML wrapped in an edit-config envelope
    Netconf,
    Json,
    /// Indented text
    Text,
    /// Command-replay syntax
    Cli,
    /// Semicolon-separated rows
    Csv,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::Xml => "xml",
            Format::Netconf => "netconf",
            Format::Json => "json",
            Format::Text => "text",
            Format::Cli => "cli",
            Format::Csv => "csv",
        };
        f.write_str(s)
    }
}

/// How a node is rendered as CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenModelStyle {
    /// Values only
    None,
    /// Leaf names followed by values
    Vars,
    /// Leaf names, list key names and values
    All,
}

impl FromStr for GenModelStyle {
    type Err = ShowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(GenModelStyle::None),
            "vars" | "variables" => Ok(GenModelStyle::Vars),
            "all" => Ok(GenModelStyle::All),
            other => Err(ShowError::ConfigError(format!(
                "Invalid genmodel type: {} (must be 'none', 'vars' or 'all')",
                other
            ))),
        }
    }
}

/// Value of a live command-line variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl VarValue {
    /// Parse a raw command-line token, preferring integers and booleans.
    ///
    /// A token is only typed when its display form is the token itself, so
    /// `007` or `+5` stay strings and substitute back unchanged.
    pub fn parse(raw: &str) -> Self {
        if let Ok(n) = raw.parse::<i64>() {
            if n.to_string() == raw {
                return VarValue::Int(n);
            }
        }
        match raw {
            "true" => VarValue::Bool(true),
            "false" => VarValue::Bool(false),
            _ => VarValue::Str(raw.to_string()),
        }
    }
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::Bool(b) => write!(f, "{}", b),
            VarValue::Int(n) => write!(f, "{}", n),
            VarValue::Str(s) => f.write_str(s),
        }
    }
}

/// A named live variable from the invoking command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub value: VarValue,
}

/// Ordered set of live variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableSet {
    vars: Vec<Variable>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: VarValue) {
        self.vars.push(Variable {
            name: name.into(),
            value,
        });
    }

    pub fn with(mut self, name: impl Into<String>, value: VarValue) -> Self {
        self.push(name, value);
        self
    }

    /// First variable with the given name.
    pub fn find(&self, name: &str) -> Option<&Variable> {
        self.vars.iter().find(|v| v.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Parse `NAME=VALUE` assignments as given on the command line.
    pub fn from_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<Self, ShowError> {
        let mut set = VariableSet::new();
        for raw in assignments {
            let raw = raw.as_ref();
            let (name, value) = raw.split_once('=').ok_or_else(|| {
                ShowError::InvalidArguments(format!(
                    "variable '{}' must be given as NAME=VALUE",
                    raw
                ))
            })?;
            if name.is_empty() {
                return Err(ShowError::InvalidArguments(format!(
                    "variable '{}' has an empty name",
                    raw
                )));
            }
            set.push(name, VarValue::parse(value));
        }
        Ok(set)
    }
}
