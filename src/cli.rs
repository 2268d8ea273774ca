//! Command-line argument parsing
//!
//! Supports:
//! - Choosing the CSV file to visualize
//! - Overriding the configured theme and analysis columns
//! - Forcing a delimiter instead of detection
//! - Pointing at a specific TTF font

use clap::Parser;
use std::path::PathBuf;

use crate::data::Delimiter;

/// A fast CSV data visualizer
#[derive(Parser, Debug)]
#[command(name = "slate", version, about = "A fast CSV data visualizer")]
pub struct CliArgs {
    /// CSV file to visualize (row 1 is the header)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Theme id: "dark", "light", or a user theme in ~/.config/slate/themes
    #[arg(long)]
    pub theme: Option<String>,

    /// Field delimiter: comma, tab, pipe or semicolon (default: detected)
    #[arg(long, value_name = "DELIM")]
    pub delimiter: Option<String>,

    /// Zero-based column for the pie chart categories
    #[arg(long, value_name = "N")]
    pub category_column: Option<usize>,

    /// Zero-based numeric column for the bar chart distribution
    #[arg(long, value_name = "N")]
    pub value_column: Option<usize>,

    /// TTF font file to render with (default: probe system fonts)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the --delimiter flag, if present
    pub fn parse_delimiter(&self) -> Result<Option<Delimiter>, String> {
        let Some(raw) = &self.delimiter else {
            return Ok(None);
        };

        match raw.to_lowercase().as_str() {
            "comma" | "," => Ok(Some(Delimiter::Comma)),
            "tab" | "\t" => Ok(Some(Delimiter::Tab)),
            "pipe" | "|" => Ok(Some(Delimiter::Pipe)),
            "semicolon" | ";" => Ok(Some(Delimiter::Semicolon)),
            other => Err(format!(
                "Unknown delimiter {:?} (expected comma, tab, pipe or semicolon)",
                other
            )),
        }
    }
}
