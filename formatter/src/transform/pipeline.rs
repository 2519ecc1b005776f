//! High-level pipeline API: CSV file to rendered Sankey output.
//!
//! Combines all steps: parsing, aggregation, color assignment and rendering.
//! The full output string is built before returning, so a failure anywhere
//! leaves nothing half-written.
//!
//! # Example
//!
//! ```rust,no_run
//! use sankey_formatter::{format_csv, FormatterOptions, OutputFormat};
//! use std::path::Path;
//!
//! let text = format_csv(Path::new("flows.csv"), OutputFormat::All, &FormatterOptions::default())?;
//! print!("{}", text);
//! # Ok::<(), sankey_formatter::PipelineError>(())
//! ```

use std::path::Path;

use crate::config::FormatterOptions;
use crate::error::PipelineResult;
use crate::logs::{log_info, log_info_indent, log_success};
use crate::models::{ColorAssignment, FlowColors, NodeSet};
use crate::parser::{parse_file_auto, ParseResult};
use crate::render::{render_output, OutputFormat, RenderContext};

use super::aggregator::{aggregate_flows, AggregatedFlows};
use super::colors::ColorAssigner;

/// CSV file information
#[derive(Debug, Clone)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    /// Rows that became flow records
    pub row_count: usize,
    /// Lines skipped for having too few columns
    pub skipped_lines: Vec<u64>,
}

/// Aggregated flows plus everything needed to render them.
#[derive(Debug, Clone)]
pub struct SankeyGraph {
    pub flows: AggregatedFlows,
    /// Union of sources and targets
    pub nodes: NodeSet,
    pub node_colors: ColorAssignment,
    pub flow_colors: FlowColors,
    pub csv_info: CsvInfo,
}

impl SankeyGraph {
    /// Render this graph. `file_path` is what the snippets will read.
    pub fn render(&self, format: OutputFormat, file_path: &str, options: &FormatterOptions) -> String {
        let ctx = RenderContext {
            flows: &self.flows,
            node_colors: Some(&self.node_colors),
            flow_colors: &self.flow_colors,
            file_path,
            columns: &options.column_names,
        };
        render_output(format, &ctx)
    }
}

/// Parse, aggregate and color a CSV file.
pub fn build_graph(path: &Path, options: &FormatterOptions) -> PipelineResult<SankeyGraph> {
    log_info(format!("Reading {}", path.display()));
    let parse_options = options.parse_options()?;
    let parsed = parse_file_auto(path, &parse_options)?;
    Ok(graph_from_parsed(parsed, options))
}

/// Aggregate and color already parsed rows.
pub fn graph_from_parsed(parsed: ParseResult, options: &FormatterOptions) -> SankeyGraph {
    log_success(format!("Detected encoding: {}", parsed.encoding));
    log_success(format!("Separator: '{}'", format_delimiter(parsed.delimiter)));
    for (i, col) in parsed.headers.iter().enumerate() {
        log_info_indent(format!("[{:2}] {}", i, col), 1);
    }
    log_success(format!("Read {} rows", parsed.records.len()));
    if !parsed.skipped_lines.is_empty() {
        log_info(format!(
            "Skipped {} short rows (lines {:?})",
            parsed.skipped_lines.len(),
            parsed.skipped_lines
        ));
    }

    let flows = aggregate_flows(&parsed.records);
    log_success(format!(
        "{} flows, total weight {:.2}",
        flows.len(),
        flows.total_weight()
    ));

    let nodes = parsed.nodes();
    let node_colors = ColorAssigner::new(options.seed).assign(&nodes);
    log_success(format!("Colored {} nodes", node_colors.len()));

    let csv_info = CsvInfo {
        encoding: parsed.encoding,
        delimiter: parsed.delimiter,
        headers: parsed.headers,
        row_count: parsed.records.len(),
        skipped_lines: parsed.skipped_lines,
    };

    SankeyGraph {
        flows,
        nodes,
        node_colors,
        flow_colors: options.flow_colors.clone(),
        csv_info,
    }
}

/// Run the whole pipeline on a file and return the rendered text.
pub fn format_csv(
    path: &Path,
    format: OutputFormat,
    options: &FormatterOptions,
) -> PipelineResult<String> {
    let graph = build_graph(path, options)?;
    let file_path = path.display().to_string();
    Ok(graph.render(format, &file_path, options))
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}
