//! Shared layout geometry for rendering and hit-testing
//!
//! Single source of truth for the mode bar, table placement, column widths
//! and scrollbar track. All functions are pure so the same math serves the
//! renderer and the pointer-input path.

use crate::data::TableData;
use crate::model::ViewMode;
use crate::render::frame::Rect;
use crate::scroll::{self, Track, SCROLLBAR_MARGIN, SCROLLBAR_WIDTH};

/// Left edge of the table region
pub const TABLE_X: i32 = 60;
/// Top edge of the table region, inside the content rect
pub const TABLE_Y: i32 = 20;
/// Horizontal padding inside each cell, applied on both sides
pub const CELL_PADDING: i32 = 10;
/// Outer padding for chart bounding boxes
pub const CHART_PADDING: i32 = 50;

/// Height of the mode switcher bar at the top of the window
pub const MODE_BAR_HEIGHT: i32 = 36;

const BUTTON_WIDTH: i32 = 80;
const BUTTON_HEIGHT: i32 = 24;
const BUTTON_GAP: i32 = 8;

/// Per-column pixel widths for the table grid.
///
/// Computed once at load time from the full row set; the text measurer is
/// injected so layout stays independent of the font backend.
#[derive(Debug, Clone, Default)]
pub struct TableLayout {
    pub column_widths: Vec<i32>,
}

impl TableLayout {
    /// Width of column `c` = max over all rows holding that column of
    /// `text_width(cell) + 2 × CELL_PADDING`. The header row participates.
    pub fn from_data<F>(data: &TableData, mut measure: F) -> Self
    where
        F: FnMut(&str) -> f32,
    {
        let cols = data.column_count();
        let mut column_widths = vec![0i32; cols];

        for row in 0..data.row_count() {
            for (c, cell) in data.row_cells(row).enumerate() {
                if c >= cols {
                    break;
                }
                let width = measure(cell).ceil() as i32 + 2 * CELL_PADDING;
                column_widths[c] = column_widths[c].max(width);
            }
        }

        Self { column_widths }
    }

    /// Total width of the grid
    pub fn table_width(&self) -> i32 {
        self.column_widths.iter().sum()
    }
}

/// The region below the mode bar that renderers draw into
pub fn content_rect(window_size: (u32, u32)) -> Rect {
    Rect::new(
        0,
        MODE_BAR_HEIGHT,
        window_size.0 as i32,
        (window_size.1 as i32 - MODE_BAR_HEIGHT).max(0),
    )
}

/// Height available for table rows inside the content rect
pub fn table_avail_height(content: &Rect) -> i32 {
    content.height - 3 * CHART_PADDING
}

/// Rows that fit in the content rect (at least 1)
pub fn visible_rows(content: &Rect) -> usize {
    scroll::visible_rows(table_avail_height(content))
}

/// Scrollbar track: right of the table, spanning the row region
pub fn scrollbar_track(layout: &TableLayout, content: &Rect) -> Track {
    Track {
        x: content.x + TABLE_X + layout.table_width() + SCROLLBAR_MARGIN,
        top: content.y + TABLE_Y,
        width: SCROLLBAR_WIDTH,
        height: table_avail_height(content).max(0),
    }
}

/// Mode bar buttons in drawing order with their bounding boxes
pub fn mode_bar_buttons(_window_width: u32) -> [(ViewMode, &'static str, Rect); 3] {
    let y = (MODE_BAR_HEIGHT - BUTTON_HEIGHT) / 2;
    let rect_at = |i: i32| {
        Rect::new(
            10 + i * (BUTTON_WIDTH + BUTTON_GAP),
            y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    };

    [
        (ViewMode::Table, "Table", rect_at(0)),
        (ViewMode::Pie, "Pie", rect_at(1)),
        (ViewMode::Bar, "Bar", rect_at(2)),
    ]
}

/// Hit-test the mode bar, returning the mode under the pointer
pub fn hit_test_mode_bar(window_width: u32, x: i32, y: i32) -> Option<ViewMode> {
    mode_bar_buttons(window_width)
        .into_iter()
        .find(|(_, _, rect)| rect.contains(x, y))
        .map(|(mode, _, _)| mode)
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

    /// Fixed-advance fake measurer: 7px per char
    fn measure(s: &str) -> f32 {
        s.chars().count() as f32 * 7.0
    }

    #[test]
    fn test_column_widths_cover_every_cell() {
        let data = table(&[
            &["name", "class", "cost"],
            &["SilverAsh", "Guard", "19"],
            &["W", "Caster", "3"],
        ]);
        let layout = TableLayout::from_data(&data, measure);

        assert_eq!(layout.column_widths.len(), 3);
        for row in 0..data.row_count() {
            for (c, cell) in data.row_cells(row).enumerate() {
                assert!(
                    layout.column_widths[c] >= measure(cell) as i32 + 2 * CELL_PADDING,
                    "column {} too narrow for {:?}",
                    c,
                    cell
                );
            }
        }
        // widest cell of column 0 is "SilverAsh" (9 chars)
        assert_eq!(layout.column_widths[0], 63 + 2 * CELL_PADDING);
    }

    #[test]
    fn test_header_participates_in_widths() {
        let data = table(&[&["a-very-long-header"], &["x"]]);
        let layout = TableLayout::from_data(&data, measure);
        assert_eq!(
            layout.column_widths[0],
            measure("a-very-long-header") as i32 + 2 * CELL_PADDING
        );
    }

    #[test]
    fn test_ragged_rows_ignore_missing_columns() {
        let data = table(&[&["a", "b"], &["longer-cell"]]);
        let layout = TableLayout::from_data(&data, measure);
        // column 1 only sees the header cell
        assert_eq!(layout.column_widths[1], 7 + 2 * CELL_PADDING);
    }

    #[test]
    fn test_extra_cells_beyond_header_are_ignored() {
        let data = table(&[&["a"], &["x", "overflow"]]);
        let layout = TableLayout::from_data(&data, measure);
        assert_eq!(layout.column_widths.len(), 1);
    }

    #[test]
    fn test_scrollbar_track_position() {
        let data = table(&[&["ab", "cd"], &["ef", "gh"]]);
        let layout = TableLayout::from_data(&data, measure);
        let content = content_rect((800, 600));

        let track = scrollbar_track(&layout, &content);
        assert_eq!(
            track.x,
            TABLE_X + layout.table_width() + SCROLLBAR_MARGIN
        );
        assert_eq!(track.top, content.y + TABLE_Y);
        assert_eq!(track.height, content.height - 3 * CHART_PADDING);
    }

    #[test]
    fn test_mode_bar_hit_testing() {
        assert_eq!(hit_test_mode_bar(800, 15, 10), Some(ViewMode::Table));
        assert_eq!(hit_test_mode_bar(800, 105, 10), Some(ViewMode::Pie));
        assert_eq!(hit_test_mode_bar(800, 195, 10), Some(ViewMode::Bar));
        assert_eq!(hit_test_mode_bar(800, 400, 10), None);
        assert_eq!(hit_test_mode_bar(800, 15, 100), None);
    }
}
