//! Confview: Completion and Show-Configuration Rendering
//!
//! Interactive query layer over a configuration store holding the running,
//! candidate and startup instances. Expands completion candidates from
//! key-format templates, fetches subtrees and renders them as XML, netconf,
//! JSON, text, CLI commands or CSV rows.

pub mod cli;
pub mod complete;
pub mod config;
pub mod context;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod notify;
pub mod render;
pub mod resolve;
pub mod show;
pub mod store;
pub mod tree;
pub mod types;
