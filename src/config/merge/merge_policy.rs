//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("store.path", ".confview/store")?
        .set_default("cli.genmodel_type", "vars")?
        .set_default("cli.list_keys", vec!["name"])?
        .set_default("cli.pretty", true)
}
