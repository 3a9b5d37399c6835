//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the show and
//! completion operations.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ListFormat};
pub use presentation::{format_candidates, format_legacy_buffer};
pub use route::RunContext;
