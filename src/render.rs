//! Format rendering for "show configuration".
//!
//! Every format renders the children of the fetched root in document order;
//! the root itself is the fetch envelope and never appears in the output.
//! Output goes straight to a forward-only writer, so a failure part-way
//! leaves the lines already written in place.

mod cli;
mod csv;
mod json;
mod text;
mod xml;

pub use cli::write_cli;
pub use csv::project;
pub use json::write_json;
pub use text::write_text;
pub use xml::{escape, write_xml};

use crate::context::ShowContext;
use crate::error::ShowError;
use crate::tree::{ConfigSubtree, Node};
use crate::types::{Format, GenModelStyle};
use std::io::Write;
use tracing::debug;

/// Written before the first child in netconf format.
pub const NETCONF_HEADER: &str = "<rpc><edit-config><target><candidate/></target><config>\n";

/// Written after the last child in netconf format.
pub const NETCONF_FOOTER: &str = "</config></edit-config></rpc>]]>]]>\n";

/// Indentation level of children inside the netconf envelope.
pub const NETCONF_LEVEL: usize = 2;

/// Per-format node encoders.
pub trait Serializers: Send + Sync {
    /// Pretty-printed XML of one node at the given indentation level.
    fn xml(&self, out: &mut dyn Write, node: &Node, level: usize) -> Result<(), ShowError>;

    /// One JSON object holding a sequence of sibling nodes.
    fn json(&self, out: &mut dyn Write, nodes: &[&Node], pretty: bool) -> Result<(), ShowError>;

    /// Indented text of one node.
    fn text(&self, out: &mut dyn Write, node: &Node, depth: usize) -> Result<(), ShowError>;

    /// One node as CLI commands.
    fn cli(
        &self,
        out: &mut dyn Write,
        node: &Node,
        prefix: &str,
        style: GenModelStyle,
        list_keys: &[String],
    ) -> Result<(), ShowError>;
}

/// The built-in encoders.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSerializers;

impl Serializers for DefaultSerializers {
    fn xml(&self, out: &mut dyn Write, node: &Node, level: usize) -> Result<(), ShowError> {
        write_xml(out, node, level)?;
        Ok(())
    }

    fn json(&self, out: &mut dyn Write, nodes: &[&Node], pretty: bool) -> Result<(), ShowError> {
        write_json(out, nodes, pretty)
    }

    fn text(&self, out: &mut dyn Write, node: &Node, depth: usize) -> Result<(), ShowError> {
        write_text(out, node, depth)?;
        Ok(())
    }

    fn cli(
        &self,
        out: &mut dyn Write,
        node: &Node,
        prefix: &str,
        style: GenModelStyle,
        list_keys: &[String],
    ) -> Result<(), ShowError> {
        write_cli(out, node, prefix, style, list_keys)?;
        Ok(())
    }
}

/// Caller-supplied rendering inputs that are not part of the handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Column names for CSV; required by that format.
    pub fields: Option<&'a [String]>,
    /// Prefix for command-replay lines; overrides the configured prefix.
    pub prefix: Option<&'a str>,
}

/// Render the children of `subtree` in `format`.
pub fn render(
    ctx: &ShowContext,
    subtree: &ConfigSubtree,
    format: Format,
    options: &RenderOptions<'_>,
    out: &mut dyn Write,
) -> Result<(), ShowError> {
    let serializers = ctx.serializers();
    let mut rendered = 0usize;

    match format {
        Format::Xml => {
            for child in subtree.children() {
                serializers.xml(out, child, 0)?;
                rendered += 1;
            }
        }
        Format::Netconf => {
            out.write_all(NETCONF_HEADER.as_bytes())?;
            for child in subtree.children() {
                serializers.xml(out, child, NETCONF_LEVEL)?;
                rendered += 1;
            }
            out.write_all(NETCONF_FOOTER.as_bytes())?;
        }
        Format::Json => {
            let children: Vec<&Node> = subtree.children().collect();
            rendered = children.len();
            serializers.json(out, &children, ctx.settings().pretty)?;
        }
        Format::Text => {
            for child in subtree.children() {
                serializers.text(out, child, 0)?;
                rendered += 1;
            }
        }
        Format::Cli => {
            let prefix = options
                .prefix
                .or(ctx.settings().prefix.as_deref())
                .unwrap_or("");
            for child in subtree.children() {
                // Re-read per child: the setting may be changed between children.
                let style = ctx.genmodel_style()?;
                serializers.cli(out, child, prefix, style, &ctx.settings().list_keys)?;
                rendered += 1;
            }
        }
        Format::Csv => {
            let fields = options.fields.ok_or(ShowError::FieldProjection)?;
            for child in subtree.children() {
                out.write_all(project(child, fields).as_bytes())?;
                rendered += 1;
            }
        }
    }

    out.flush()?;
    debug!(format = %format, children = rendered, "Rendered configuration");
    Ok(())
}
