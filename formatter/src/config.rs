//! Formatter configuration.
//!
//! Defaults, environment variable names, and the loader for flow color
//! override files. Values end up in [`FormatterOptions`], which the
//! pipeline consumes.

use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::models::{FlowColors, HexColor};
use crate::parser::{ColumnSpec, ParseOptions};
use crate::render::ColumnNames;

/// Default index of the source column.
pub const DEFAULT_SOURCE_COLUMN: usize = 0;

/// Default index of the weight column.
pub const DEFAULT_WEIGHT_COLUMN: usize = 1;

/// Default index of the target column.
pub const DEFAULT_TARGET_COLUMN: usize = 2;

/// Source column name used in generated snippets.
pub const DEFAULT_SOURCE_NAME: &str = "Engine";

/// Target column name used in generated snippets.
pub const DEFAULT_TARGET_NAME: &str = "Species";

/// Value column name used in generated snippets.
pub const DEFAULT_VALUE_NAME: &str = "Weight";

/// Seed for node colors.
pub const ENV_SEED: &str = "SANKEY_SEED";

/// Path to a flow color override file.
pub const ENV_FLOW_COLORS: &str = "SANKEY_FLOW_COLORS";

/// Options for a formatting run.
#[derive(Debug, Clone)]
pub struct FormatterOptions {
    /// Column positions in the input
    pub columns: ColumnSpec,
    /// Column names substituted into snippets
    pub column_names: ColumnNames,
    /// Explicit delimiter (auto-detect if `None`)
    pub delimiter: Option<char>,
    /// Fail on short rows instead of skipping them
    pub strict: bool,
    /// Seed for node colors (system entropy if `None`)
    pub seed: Option<u64>,
    /// Flow color overrides
    pub flow_colors: FlowColors,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            columns: ColumnSpec::new(
                DEFAULT_SOURCE_COLUMN,
                DEFAULT_WEIGHT_COLUMN,
                DEFAULT_TARGET_COLUMN,
            ),
            column_names: ColumnNames::default(),
            delimiter: None,
            strict: false,
            seed: None,
            flow_colors: FlowColors::new(),
        }
    }
}

impl FormatterOptions {
    /// Parser settings derived from these options.
    pub fn parse_options(&self) -> ConfigResult<ParseOptions> {
        Ok(ParseOptions {
            columns: self.columns,
            delimiter: self.delimiter.map(delimiter_byte).transpose()?,
            strict: self.strict,
        })
    }
}

/// The CSV reader only takes single-byte delimiters.
pub fn delimiter_byte(delimiter: char) -> ConfigResult<u8> {
    if delimiter.is_ascii() && delimiter != '"' && delimiter != '\n' && delimiter != '\r' {
        Ok(delimiter as u8)
    } else {
        Err(ConfigError::InvalidDelimiter(delimiter))
    }
}

/// One entry of a flow color file.
#[derive(Debug, Deserialize)]
struct FlowColorEntry {
    source: String,
    target: String,
    color: String,
}

/// Parse flow color overrides from JSON.
///
/// # Example
/// ```
/// use sankey_formatter::config::parse_flow_colors;
/// use sankey_formatter::models::FlowKey;
///
/// let json = r##"[{"source": "Coal", "target": "Power", "color": "#ff0000"}]"##;
/// let colors = parse_flow_colors(json).unwrap();
/// assert!(colors.get(&FlowKey::new("Coal", "Power")).is_some());
/// ```
pub fn parse_flow_colors(json: &str) -> ConfigResult<FlowColors> {
    let entries: Vec<FlowColorEntry> = serde_json::from_str(json)?;

    let mut colors = FlowColors::new();
    for entry in entries {
        let color: HexColor = entry.color.parse()?;
        colors.insert(&entry.source, &entry.target, color);
    }
    Ok(colors)
}

/// Load flow color overrides from a JSON file.
pub fn load_flow_colors(path: &Path) -> ConfigResult<FlowColors> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_flow_colors(&content)
}
