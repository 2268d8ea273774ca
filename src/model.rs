//! Application model
//!
//! One immutable-at-render value holding everything a frame needs: the
//! parsed rows, the pre-aggregated chart inputs, the active mode and the
//! scroll state. Renderers read it; only `update` mutates it.

use crate::data::{CategoryCounts, Intervals, TableData};
use crate::render::layout::TableLayout;
use crate::scroll::ScrollState;
use crate::theme::Theme;

/// The active presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Pie,
    Bar,
}

/// Everything a render call needs
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Parsed rows; row 0 is the header. Never mutated after load.
    pub table: TableData,
    /// Pie chart input: counts of the category column
    pub categories: CategoryCounts,
    /// Bar chart input: counts per fixed interval label
    pub buckets: CategoryCounts,
    /// Fixed ordered bucket labels for the bar chart
    pub intervals: Intervals,
    /// Pie chart title, derived from the category column header
    pub pie_title: String,
    /// Bar chart title, derived from the value column header
    pub bar_title: String,
    pub mode: ViewMode,
    pub scroll: ScrollState,
    /// Column widths computed once at load time
    pub layout: TableLayout,
    pub theme: Theme,
    /// Window size in physical pixels
    pub window_size: (u32, u32),
}

impl AppModel {
    /// Assemble the model from loaded data and pre-computed aggregates.
    ///
    /// `measure` maps a string to its rendered pixel width and is used to
    /// size the table columns once, up front.
    #[allow(clippy::too_many_arguments)]
    pub fn from_data<F>(
        table: TableData,
        categories: CategoryCounts,
        buckets: CategoryCounts,
        intervals: Intervals,
        category_column: usize,
        value_column: usize,
        theme: Theme,
        window_size: (u32, u32),
        measure: F,
    ) -> Self
    where
        F: FnMut(&str) -> f32,
    {
        let layout = TableLayout::from_data(&table, measure);

        let column_title = |col: usize, fallback: &str| {
            let header = table.get(0, col);
            if header.is_empty() {
                fallback.to_string()
            } else {
                header.to_string()
            }
        };

        let pie_title = format!("{} distribution", column_title(category_column, "Category"));
        let bar_title = format!("{} distribution", column_title(value_column, "Value"));

        Self {
            table,
            categories,
            buckets,
            intervals,
            pie_title,
            bar_title,
            mode: ViewMode::default(),
            scroll: ScrollState::default(),
            layout,
            theme,
            window_size,
        }
    }
}
