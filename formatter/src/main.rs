//! Sankey Formatter CLI - Turn CSV flows into Sankey diagram inputs
//!
//! ```bash
//! sankey-formatter flows.csv --output sankeymatic   # SankeyMATIC text
//! sankey-formatter flows.csv --output python        # plotly snippet
//! sankey-formatter flows.csv --output r             # networkD3 snippet
//! sankey-formatter flows.csv --output all --seed 7  # everything, stable colors
//! ```
//!
//! Progress goes to stderr (set `RUST_LOG=info` to see it); stdout carries
//! only the rendered output.

use clap::Parser;
use sankey_formatter::config::{
    DEFAULT_SOURCE_COLUMN, DEFAULT_SOURCE_NAME, DEFAULT_TARGET_COLUMN, DEFAULT_TARGET_NAME,
    DEFAULT_VALUE_NAME, DEFAULT_WEIGHT_COLUMN, ENV_FLOW_COLORS, ENV_SEED,
};
use sankey_formatter::{
    format_csv, load_flow_colors, ColumnNames, ColumnSpec, FlowColors, FormatterOptions,
    OutputFormat, PipelineError,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sankey-formatter")]
#[command(about = "Generate Sankey diagram input and code from a CSV of flows", long_about = None)]
struct Cli {
    /// Path to the CSV file
    file_path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    output: OutputFormat,

    /// Zero-based index of the source column
    #[arg(long, default_value_t = DEFAULT_SOURCE_COLUMN)]
    source_col: usize,

    /// Zero-based index of the weight column
    #[arg(long, default_value_t = DEFAULT_WEIGHT_COLUMN)]
    weight_col: usize,

    /// Zero-based index of the target column
    #[arg(long, default_value_t = DEFAULT_TARGET_COLUMN)]
    target_col: usize,

    /// Source column name used in the Python and R code
    #[arg(long, default_value = DEFAULT_SOURCE_NAME)]
    source_name: String,

    /// Target column name used in the Python and R code
    #[arg(long, default_value = DEFAULT_TARGET_NAME)]
    target_name: String,

    /// Value column name used in the Python and R code
    #[arg(long, default_value = DEFAULT_VALUE_NAME)]
    value_name: String,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Fail on rows with too few columns instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Seed for node colors (random if not specified)
    #[arg(long, env = ENV_SEED)]
    seed: Option<u64>,

    /// JSON file with per-flow colors: [{"source", "target", "color"}]
    #[arg(long, env = ENV_FLOW_COLORS)]
    flow_colors: Option<PathBuf>,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    let flow_colors = match cli.flow_colors {
        Some(ref path) => load_flow_colors(path)?,
        None => FlowColors::new(),
    };

    let options = FormatterOptions {
        columns: ColumnSpec::new(cli.source_col, cli.weight_col, cli.target_col),
        column_names: ColumnNames::new(cli.source_name, cli.target_name, cli.value_name),
        delimiter: cli.delimiter,
        strict: cli.strict,
        seed: cli.seed,
        flow_colors,
    };

    let text = format_csv(&cli.file_path, cli.output, &options)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
