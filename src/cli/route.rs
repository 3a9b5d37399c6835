//! CLI route: single route table and run context. Dispatches to the show
//! and completion operations and to presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Cli, Commands, ListFormat};
use crate::cli::presentation::{format_candidates, format_legacy_buffer};
use crate::complete::{complete_argv, expand_dir, expand_into, LegacyBuffer};
use crate::config::{AppConfig, ConfigLoader};
use crate::context::ShowContext;
use crate::error::{ShowError, StoreError};
use crate::fetch::ShowArgs;
use crate::render::RenderOptions;
use crate::show::{show_config, show_xpath};
use crate::store::SledConfigStore;
use crate::tree::convert::{nodes_to_json, subtree_from_json};
use crate::types::{ConfigInstance, VariableSet};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: the opened store, the show context
/// and the live variables of this invocation.
pub struct RunContext {
    show: ShowContext,
    store: Arc<SledConfigStore>,
    vars: VariableSet,
    store_path: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ShowError> {
        let config = load_config(&workspace_root, config_path.as_deref())?;
        Self::open(config, &workspace_root, VariableSet::new())
    }

    /// Create run context from parsed arguments, applying the flag overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self, ShowError> {
        let mut config = load_config(&cli.workspace, cli.config.as_deref())?;
        if let Some(ref store) = cli.store {
            config.store.path = store.clone();
        }
        if let Some(ref style) = cli.style {
            config.cli.genmodel_type = style.clone();
        }
        let vars = VariableSet::from_assignments(cli.vars.as_slice())?;
        Self::open(config, &cli.workspace, vars)
    }

    /// Open the store named by `config`, relative paths resolving against
    /// `workspace_root`.
    pub fn open(
        config: AppConfig,
        workspace_root: &Path,
        vars: VariableSet,
    ) -> Result<Self, ShowError> {
        let config = config.validated()?;
        let store_path = if config.store.path.is_absolute() {
            config.store.path.clone()
        } else {
            workspace_root.join(&config.store.path)
        };
        std::fs::create_dir_all(&store_path).map_err(StoreError::IoError)?;
        let store = Arc::new(SledConfigStore::new(&store_path)?);
        let show = ShowContext::new(store.clone()).with_settings(config.cli);
        Ok(Self {
            show,
            store,
            vars,
            store_path,
        })
    }

    pub fn show_context(&self) -> &ShowContext {
        &self.show
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn vars(&self) -> &VariableSet {
        &self.vars
    }

    /// Run one command and return what it prints on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, ShowError> {
        let mut out = Vec::new();
        self.execute_to(command, &mut out)?;
        into_text(out)
    }

    /// Run one command, writing its output to `out` as it is produced.
    ///
    /// Rendered configuration is streamed, so lines written before a failure
    /// stay in `out`.
    pub fn execute_to(&self, command: &Commands, out: &mut dyn Write) -> Result<(), ShowError> {
        let started = Instant::now();
        let result = self.dispatch(command, out);
        info!(
            command = %command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn dispatch(&self, command: &Commands, out: &mut dyn Write) -> Result<(), ShowError> {
        let text = match command {
            Commands::Show {
                format,
                instance,
                query,
                attr,
                fields,
                prefix,
            } => {
                let args = ShowArgs::new(instance.as_str(), query.as_str(), attr.clone());
                let options = RenderOptions {
                    fields: fields.as_deref(),
                    prefix: prefix.as_deref(),
                };
                return show_config(&self.show, *format, &args, &self.vars, &options, out);
            }
            Commands::Xpath { instance } => {
                return show_xpath(&self.show, instance, &self.vars, out);
            }
            Commands::Complete {
                instance,
                keyfmt,
                legacy,
                format,
            } => self.handle_complete(instance, keyfmt, *legacy, *format)?,
            Commands::Files { dir, mode } => {
                let names = expand_dir(dir, *mode)?;
                format_candidates(&names, ListFormat::Text)?
            }
            Commands::Import { instance, file } => self.handle_import(instance, file)?,
            Commands::Export { instance } => {
                let instance: ConfigInstance = instance.parse()?;
                let tree = self.store.load(instance)?;
                let value = nodes_to_json(tree.children());
                serde_json::to_string_pretty(&value)?
            }
        };
        write_line(out, &text)
    }

    fn handle_complete(
        &self,
        instance: &str,
        templates: &[String],
        legacy: bool,
        format: ListFormat,
    ) -> Result<String, ShowError> {
        if legacy {
            let mut buffer = LegacyBuffer::new();
            for template in templates {
                expand_into(&self.show, instance, template, &self.vars, &mut buffer)?;
            }
            return format_legacy_buffer(&buffer, format);
        }

        let mut values = Vec::new();
        for template in templates {
            let list = complete_argv(&self.show, &[instance, template.as_str()], &self.vars)?;
            values.extend(list);
        }
        format_candidates(&values, format)
    }

    fn handle_import(&self, instance: &str, file: &Path) -> Result<String, ShowError> {
        let instance: ConfigInstance = instance.parse()?;
        let raw = std::fs::read_to_string(file)?;
        let document: serde_json::Value = match file.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&raw)
                .map_err(|e| ShowError::Serialization(format!("Invalid TOML document: {}", e)))?,
            _ => serde_json::from_str(&raw)?,
        };
        let tree = subtree_from_json(&document)?;
        self.store.put(instance, &tree)?;
        Ok(format!(
            "Imported {} nodes into {}",
            tree.root().count() - 1,
            instance
        ))
    }
}

fn load_config(workspace_root: &Path, config_path: Option<&Path>) -> Result<AppConfig, ShowError> {
    let config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load(workspace_root)?,
    };
    Ok(config)
}

/// Write `text`, terminating it with a newline unless empty or already ended.
fn write_line(out: &mut dyn Write, text: &str) -> Result<(), ShowError> {
    out.write_all(text.as_bytes())?;
    if !text.is_empty() && !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn into_text(out: Vec<u8>) -> Result<String, ShowError> {
    String::from_utf8(out).map_err(|e| ShowError::Serialization(e.to_string()))
}
