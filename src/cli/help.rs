//! CLI help and command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name used in log events (e.g. "show.xml", "complete").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Show { format, .. } => format!("show.{}", format),
        Commands::Xpath { .. } => "xpath".to_string(),
        Commands::Complete { legacy: true, .. } => "complete.legacy".to_string(),
        Commands::Complete { .. } => "complete".to_string(),
        Commands::Files { .. } => "files".to_string(),
        Commands::Import { .. } => "import".to_string(),
        Commands::Export { .. } => "export".to_string(),
    }
}
