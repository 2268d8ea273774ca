//! Aggregation of parsed rows into chart inputs
//!
//! The pie chart consumes category counts from a text column; the bar chart
//! consumes counts of a numeric column bucketed into fixed half-open
//! intervals. Both skip the header row. Cells that fail numeric parsing are
//! skipped, as are values outside the interval range.

use super::model::{CategoryCounts, TableData};

/// Fixed ordered list of half-open buckets `[lo, lo+width)` for the bar chart
#[derive(Debug, Clone)]
pub struct Intervals {
    start: i64,
    width: i64,
    labels: Vec<String>,
}

impl Intervals {
    /// Build `count` buckets of `width` starting at `start`.
    ///
    /// `width` and `count` are clamped to at least 1 so the interval list is
    /// never empty or degenerate.
    pub fn new(start: i64, width: i64, count: usize) -> Self {
        let width = width.max(1);
        let count = count.max(1);
        let labels = (0..count)
            .map(|i| {
                let lo = start + i as i64 * width;
                format!("[{},{})", lo, lo + width)
            })
            .collect();

        Self {
            start,
            width,
            labels,
        }
    }

    /// Bucket labels in fixed order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of the bucket containing `value`, or None when out of range
    pub fn bucket_label(&self, value: i64) -> Option<&str> {
        if value < self.start {
            return None;
        }
        let index = ((value - self.start) / self.width) as usize;
        self.labels.get(index).map(|s| s.as_str())
    }
}

/// Count occurrences of each distinct value in `column`, header excluded.
///
/// Rows shorter than `column + 1` are skipped. Labels keep first-seen order.
pub fn count_categories(data: &TableData, column: usize) -> CategoryCounts {
    let mut counts = CategoryCounts::new();

    for row in 1..data.row_count() {
        if column >= data.row_len(row) {
            continue;
        }
        let label = data.get(row, column);
        if label.is_empty() {
            continue;
        }
        counts.increment(label);
    }

    counts
}

/// Bucket the integer values of `column` into `intervals`, header excluded.
///
/// Every interval label is present in the result (zero-seeded) so the bar
/// chart draws the full fixed axis even for empty buckets. Cells that do not
/// parse as integers and values outside the interval range are skipped.
pub fn bucket_values(data: &TableData, column: usize, intervals: &Intervals) -> CategoryCounts {
    let mut counts = CategoryCounts::new();
    for label in intervals.labels() {
        counts.insert(label, 0);
    }

    if data.is_empty() {
        return counts;
    }

    for row in 1..data.row_count() {
        if column >= data.row_len(row) {
            continue;
        }
        let Ok(value) = data.get(row, column).trim().parse::<i64>() else {
            continue;
        };
        if let Some(label) = intervals.bucket_label(value) {
            let current = counts.get(label);
            counts.insert(label, current + 1);
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(raw: &[&[&str]]) -> TableData {
        TableData::from_rows(
            raw.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_intervals_labels() {
        let intervals = Intervals::new(5, 5, 3);
        assert_eq!(intervals.labels(), &["[5,10)", "[10,15)", "[15,20)"]);
    }

    #[test]
    fn test_intervals_bucket_label() {
        let intervals = Intervals::new(5, 5, 6);
        assert_eq!(intervals.bucket_label(5), Some("[5,10)"));
        assert_eq!(intervals.bucket_label(9), Some("[5,10)"));
        assert_eq!(intervals.bucket_label(10), Some("[10,15)"));
        assert_eq!(intervals.bucket_label(34), Some("[30,35)"));
        assert_eq!(intervals.bucket_label(35), None);
        assert_eq!(intervals.bucket_label(4), None);
        assert_eq!(intervals.bucket_label(-3), None);
    }

    #[test]
    fn test_count_categories_skips_header_and_short_rows() {
        let data = table(&[
            &["name", "class"],
            &["SilverAsh", "Guard"],
            &["Exusiai", "Sniper"],
            &["Thorns"],
            &["Ch'en", "Guard"],
        ]);

        let counts = count_categories(&data, 1);
        assert_eq!(counts.get("Guard"), 2);
        assert_eq!(counts.get("Sniper"), 1);
        assert_eq!(counts.len(), 2);
        // "class" from the header must not be counted
        assert_eq!(counts.get("class"), 0);
    }

    #[test]
    fn test_bucket_values_seeds_all_labels() {
        let data = table(&[&["name", "cost"], &["a", "7"], &["b", "12"], &["c", "7"]]);
        let intervals = Intervals::new(5, 5, 3);

        let counts = bucket_values(&data, 1, &intervals);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("[5,10)"), 2);
        assert_eq!(counts.get("[10,15)"), 1);
        assert_eq!(counts.get("[15,20)"), 0);
    }

    #[test]
    fn test_bucket_values_skips_unparsable_and_out_of_range() {
        let data = table(&[
            &["name", "cost"],
            &["a", "n/a"],
            &["b", "99"],
            &["c", " 6 "],
        ]);
        let intervals = Intervals::new(5, 5, 2);

        let counts = bucket_values(&data, 1, &intervals);
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.get("[5,10)"), 1);
    }
}
