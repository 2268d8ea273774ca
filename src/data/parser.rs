//! CSV parsing using the csv crate
//!
//! RFC 4180 compliant parsing with support for quoted fields,
//! escaped quotes, and custom delimiters.

use std::io::Cursor;
use std::path::Path;

use super::model::{Delimiter, TableData};

/// Error type for CSV parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse CSV content into TableData
///
/// Uses the csv crate for RFC 4180 compliant parsing. Rows may have
/// differing lengths; rows whose cells are all empty are dropped, matching
/// the blank-line handling of typical spreadsheet exports.
pub fn parse_csv(content: &str, delimiter: Delimiter) -> Result<TableData, ParseError> {
    let cursor = Cursor::new(content.as_bytes());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(cursor);

    let mut rows: Vec<Vec<String>> = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }
                rows.push(row);
            }
            Err(e) => {
                return Err(ParseError {
                    message: e.to_string(),
                    line: Some(line_num + 1),
                });
            }
        }
    }

    Ok(TableData::from_rows(rows))
}

/// Load and parse a CSV file from disk
///
/// The delimiter is taken from `delimiter` when given, otherwise detected
/// from the file extension and content.
pub fn load_csv_file(path: &Path, delimiter: Option<Delimiter>) -> Result<TableData, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ParseError {
        message: format!("failed to read {}: {}", path.display(), e),
        line: None,
    })?;

    let delimiter = delimiter.unwrap_or_else(|| {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Delimiter::from_extension)
            .unwrap_or_else(|| detect_delimiter(&content))
    });

    parse_csv(&content, delimiter)
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}
