//! Data model types
//!
//! Memory-efficient row storage using delimited strings instead of
//! Vec<Vec<String>>.

/// Internal delimiter for cell storage (0xFA - rarely used in real data)
pub const CELL_DELIMITER: char = '\u{00FA}';

/// Supported CSV delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Immutable table of string fields. Row 0 is the header row.
///
/// Each row is stored as a single string with cells delimited by
/// CELL_DELIMITER (0xFA). This reduces memory allocations while still
/// allowing O(1) row access.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    /// Each row stored as delimiter-separated string
    rows: Vec<String>,
}

impl TableData {
    /// Create empty table data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create table data from parsed rows
    pub fn from_rows(parsed_rows: Vec<Vec<String>>) -> Self {
        let rows = parsed_rows
            .into_iter()
            .map(|row| row.join(&CELL_DELIMITER.to_string()))
            .collect();

        Self { rows }
    }

    /// Get number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the header row (0 when there is no data)
    pub fn column_count(&self) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        self.row_cells(0).count()
    }

    /// Number of cells in a specific row
    pub fn row_len(&self, row: usize) -> usize {
        match self.rows.get(row) {
            Some(_) => self.row_cells(row).count(),
            None => 0,
        }
    }

    /// Get cell value at position, or "" when out of range
    pub fn get(&self, row: usize, col: usize) -> &str {
        let Some(row_str) = self.rows.get(row) else {
            return "";
        };
        row_str.split(CELL_DELIMITER).nth(col).unwrap_or("")
    }

    /// Iterate over the cells of one row
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = &str> {
        self.rows
            .get(row)
            .map(|s| s.as_str())
            .unwrap_or("")
            .split(CELL_DELIMITER)
    }

    /// Check if the table holds no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Mapping from category label to a non-negative count.
///
/// Entries keep first-seen insertion order, which makes ranking for the pie
/// chart deterministic: stable sorting by count leaves tied categories in
/// the order they first appeared in the data.
#[derive(Debug, Clone, Default)]
pub struct CategoryCounts {
    entries: Vec<(String, u32)>,
}

impl CategoryCounts {
    /// Create an empty count map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (label, count) pairs, keeping the given order
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(l, c)| (l.into(), c)).collect(),
        }
    }

    /// Increment the count for a label, inserting it at the end when new
    pub fn increment(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    /// Insert a label with an explicit count (used to pre-seed zero buckets)
    pub fn insert(&mut self, label: &str, count: u32) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, existing)) => *existing = count,
            None => self.entries.push((label.to_string(), count)),
        }
    }

    /// Count for a label; missing labels count as 0
    pub fn get(&self, label: &str) -> u32 {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c as u64).sum()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no labels are present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
