//! Output renderers.
//!
//! - [`sankeymatic`]: SankeyMATIC flow text built from the aggregated flows
//! - [`plotly`]: Python snippet (pandas + plotly)
//! - [`networkd3`]: R snippet (dplyr + networkD3)
//!
//! The two snippets are templates: they only receive the file path and the
//! column names and recompute everything when executed.

pub mod networkd3;
pub mod plotly;
pub mod sankeymatic;

pub use networkd3::render_networkd3;
pub use plotly::render_plotly;
pub use sankeymatic::render_sankeymatic;

use clap::ValueEnum;

use crate::config::{DEFAULT_SOURCE_NAME, DEFAULT_TARGET_NAME, DEFAULT_VALUE_NAME};
use crate::models::{ColorAssignment, FlowColors};
use crate::transform::aggregator::AggregatedFlows;

/// Column names used by the code snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub source: String,
    pub target: String,
    pub value: String,
}

impl ColumnNames {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value: value.into(),
        }
    }
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_NAME, DEFAULT_TARGET_NAME, DEFAULT_VALUE_NAME)
    }
}

/// Requested output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SankeyMATIC flow text
    #[value(alias = "flow-text")]
    Sankeymatic,
    /// Python / plotly snippet
    #[value(alias = "general-purpose")]
    Python,
    /// R / networkD3 snippet
    #[value(alias = "statistical")]
    R,
    /// All three, in the order above
    All,
}

impl OutputFormat {
    /// Sections to render, in output order.
    pub fn sections(self) -> &'static [Section] {
        match self {
            OutputFormat::Sankeymatic => &[Section::Sankeymatic],
            OutputFormat::Python => &[Section::Python],
            OutputFormat::R => &[Section::R],
            OutputFormat::All => &[Section::Sankeymatic, Section::Python, Section::R],
        }
    }
}

/// One labeled block of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Sankeymatic,
    Python,
    R,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Sankeymatic => "SankeyMATIC Format:",
            Section::Python => "Python Code for Sankey Diagram:",
            Section::R => "R Code for Sankey Diagram:",
        }
    }
}

/// Everything a renderer may look at.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub flows: &'a AggregatedFlows,
    pub node_colors: Option<&'a ColorAssignment>,
    pub flow_colors: &'a FlowColors,
    pub file_path: &'a str,
    pub columns: &'a ColumnNames,
}

/// Render a single section body (no title).
pub fn render_section(section: Section, ctx: &RenderContext<'_>) -> String {
    match section {
        Section::Sankeymatic => render_sankeymatic(ctx.flows, ctx.node_colors, ctx.flow_colors),
        Section::Python => render_plotly(ctx.file_path, ctx.columns),
        Section::R => render_networkd3(ctx.file_path, ctx.columns),
    }
}

/// Render every section of `format`, each preceded by its title.
///
/// The code sections start with a blank line separating them from whatever
/// came before; each body is followed by a newline.
pub fn render_output(format: OutputFormat, ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    for &section in format.sections() {
        if section != Section::Sankeymatic {
            out.push('\n');
        }
        out.push_str(section.title());
        out.push('\n');
        out.push_str(&render_section(section, ctx));
        out.push('\n');
    }
    out
}
