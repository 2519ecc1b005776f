//! # Sankey Formatter - CSV flows to Sankey diagram inputs
//!
//! Reads `source, weight, target` rows from a CSV file, sums the weights of
//! every (source, target) pair and renders the result for three Sankey tools:
//! SankeyMATIC, plotly (Python) and networkD3 (R).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Aggregate  │────▶│   Render     │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │  + colors   │     │ (3 formats)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sankey_formatter::{format_csv, FormatterOptions, OutputFormat};
//! use std::path::Path;
//!
//! let text = format_csv(Path::new("flows.csv"), OutputFormat::Sankeymatic, &FormatterOptions::default()).unwrap();
//! print!("{}", text);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (FlowRecord, NodeSet, HexColor)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Aggregation, colors, and pipeline
//! - [`render`] - SankeyMATIC, Python and R output
//! - [`config`] - Defaults and flow color files
//! - [`logs`] - Progress logging helpers

// Core modules
pub mod error;
pub mod models;

// Configuration
pub mod config;
pub mod logs;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Rendering
pub mod render;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, CsvError, PipelineError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{ColorAssignment, FlowColors, FlowKey, FlowRecord, HexColor, NodeSet};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{load_flow_colors, parse_flow_colors, FormatterOptions};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    parse_flows,
    parse_file_auto,
    parse_bytes_auto,
    detect_encoding,
    detect_delimiter,
    decode_content,
    ColumnSpec,
    ParseOptions,
    ParseResult,
};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    aggregate_flows,
    assign_colors,
    build_graph,
    format_csv,
    graph_from_parsed,
    AggregatedFlows,
    ColorAssigner,
    CsvInfo,
    SankeyGraph,
};

// =============================================================================
// Re-exports - Rendering
// =============================================================================

pub use render::{
    render_networkd3,
    render_output,
    render_plotly,
    render_sankeymatic,
    ColumnNames,
    OutputFormat,
    RenderContext,
};
