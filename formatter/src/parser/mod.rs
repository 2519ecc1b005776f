//! Flow CSV parser with encoding and delimiter auto-detection.
//!
//! Reads `source, weight, target` triples out of arbitrary delimited exports.
//! The first row is always treated as a header. Rows too short to hold every
//! configured column are skipped (or rejected in strict mode).

use log::debug;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::models::{FlowRecord, NodeSet};

/// Delimiters considered by [`detect_delimiter`], in tie-break order.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Zero-based positions of the three flow columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub source: usize,
    pub weight: usize,
    pub target: usize,
}

impl ColumnSpec {
    pub fn new(source: usize, weight: usize, target: usize) -> Self {
        Self {
            source,
            weight,
            target,
        }
    }

    /// Minimum number of fields a row needs to be accepted.
    pub fn required_columns(&self) -> usize {
        self.source.max(self.weight).max(self.target) + 1
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::new(0, 1, 2)
    }
}

/// Options controlling how rows are read.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub columns: ColumnSpec,
    /// Field delimiter; detected from the header line when `None`.
    pub delimiter: Option<u8>,
    /// Reject short rows instead of skipping them.
    pub strict: bool,
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Accepted rows, in input order
    pub records: Vec<FlowRecord>,
    /// Distinct source values
    pub sources: NodeSet,
    /// Distinct target values
    pub targets: NodeSet,
    /// Header row
    pub headers: Vec<String>,
    /// Detected or assumed encoding
    pub encoding: String,
    /// Delimiter used
    pub delimiter: char,
    /// Lines dropped for having too few columns
    pub skipped_lines: Vec<u64>,
}

impl ParseResult {
    /// Union of sources and targets.
    pub fn nodes(&self) -> NodeSet {
        self.sources.union(&self.targets)
    }
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    match encoding {
        "utf-8" => String::from_utf8(bytes.to_vec())
            .map_err(|e| CsvError::Encoding(e.to_string())),
        "iso-8859-1" => Ok(encoding_rs::ISO_8859_15.decode(bytes).0.into_owned()),
        "windows-1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()),
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => Ok(enc.decode(bytes).0.into_owned()),
            None => Ok(String::from_utf8_lossy(bytes).into_owned()),
        },
    }
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = CANDIDATE_DELIMITERS[0];
    let mut best_count = 0;

    for &sep in &CANDIDATE_DELIMITERS {
        let count = first_line.bytes().filter(|&b| b == sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse flow rows out of decoded CSV text.
///
/// # Example
/// ```
/// use sankey_formatter::parser::{parse_flows, ParseOptions};
///
/// let csv = "Engine,Weight,Species\nA,10.0,X\nA,5.0,X\n";
/// let parsed = parse_flows(csv, &ParseOptions::default()).unwrap();
///
/// assert_eq!(parsed.records.len(), 2);
/// assert_eq!(parsed.records[0].weight, 10.0);
/// ```
pub fn parse_flows(content: &str, options: &ParseOptions) -> CsvResult<ParseResult> {
    parse_flows_with_encoding(content, options, "utf-8".to_string())
}

/// Parse CSV file with auto-detection of encoding and delimiter.
pub fn parse_file_auto<P: AsRef<Path>>(path: P, options: &ParseOptions) -> CsvResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes_auto(&bytes, options)
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
///
/// Valid UTF-8 is taken as is; chardet only guesses for other bytes.
pub fn parse_bytes_auto(bytes: &[u8], options: &ParseOptions) -> CsvResult<ParseResult> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Ok(content) = std::str::from_utf8(bytes) {
        return parse_flows_with_encoding(content, options, "utf-8".to_string());
    }

    // Not UTF-8, whatever chardet says.
    let encoding = match detect_encoding(bytes) {
        enc if enc == "utf-8" => "windows-1252".to_string(),
        enc => enc,
    };
    let content = decode_content(bytes, &encoding)?;
    parse_flows_with_encoding(&content, options, encoding)
}

fn parse_flows_with_encoding(
    content: &str,
    options: &ParseOptions,
    encoding: String,
) -> CsvResult<ParseResult> {
    if content.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    // The reader drops blank lines, so a blank header line is consumed here.
    let (blank_header, body, line_offset) = match content.split_once('\n') {
        Some((first, rest)) if first.trim_end_matches('\r').is_empty() => (true, rest, 1),
        _ => (false, content, 0),
    };

    let delimiter = options
        .delimiter
        .unwrap_or_else(|| detect_delimiter(body));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(!blank_header)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = if blank_header {
        Vec::new()
    } else {
        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(String::from)
            .collect();
        if headers.is_empty() {
            return Err(CsvError::EmptyFile);
        }
        headers
    };

    let columns = options.columns;
    let required = columns.required_columns();

    let mut records = Vec::new();
    let mut sources = NodeSet::new();
    let mut targets = NodeSet::new();
    let mut skipped_lines = Vec::new();

    for (row_idx, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        // Header is line 1, rows follow unless the reader knows better.
        let line = row
            .position()
            .map(|p| p.line() + line_offset)
            .unwrap_or(row_idx as u64 + 2);

        if row.len() < required {
            if options.strict {
                return Err(CsvError::ShortRow {
                    line,
                    found: row.len(),
                    required,
                });
            }
            debug!("line {}: {} columns, need {}; skipped", line, row.len(), required);
            skipped_lines.push(line);
            continue;
        }

        let source = &row[columns.source];
        let target = &row[columns.target];
        let raw_weight = &row[columns.weight];
        let weight: f64 = raw_weight
            .trim()
            .parse()
            .map_err(|_| CsvError::InvalidWeight {
                line,
                value: raw_weight.to_string(),
            })?;

        sources.insert(source);
        targets.insert(target);
        records.push(FlowRecord::new(source, target, weight).at_line(line));
    }

    Ok(ParseResult {
        records,
        sources,
        targets,
        headers,
        encoding,
        delimiter: delimiter as char,
        skipped_lines,
    })
}

fn csv_error(err: csv::Error) -> CsvError {
    CsvError::Malformed {
        line: err.position().map(|p| p.line()).unwrap_or(0),
        message: err.to_string(),
    }
}
