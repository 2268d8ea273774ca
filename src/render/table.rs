//! Table grid rendering
//!
//! Draws the bold header row pinned at the top, the data rows visible at
//! the current scroll offset, and the scrollbar when rows overflow the
//! viewport.

use crate::data::TableData;
use crate::model::AppModel;
use crate::render::frame::{Frame, Rect, TextPainter};
use crate::render::layout::{self, TableLayout, CELL_PADDING, TABLE_X, TABLE_Y};
use crate::scroll::{ScrollMetrics, ROW_HEIGHT};
use crate::theme::Theme;

/// Size used for all table text; column widths are measured at this size
pub const FONT_SIZE: f32 = 12.0;

/// Index range of data rows to draw: `[offset / row_height, +visible_rows)`,
/// clamped to the row count
pub fn visible_row_range(offset: i32, visible_rows: usize, row_count: usize) -> (usize, usize) {
    let start = (offset.max(0) / ROW_HEIGHT) as usize;
    let end = (start + visible_rows).min(row_count);
    (start.min(row_count), end)
}

/// Draw the table mode into the content rect
pub fn draw(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel, content: &Rect) {
    let data = &model.table;
    let layout = &model.layout;
    let theme = &model.theme;

    let visible_rows = layout::visible_rows(content);
    let (start_row, end_row) =
        visible_row_range(model.scroll.offset, visible_rows, data.row_count());

    let origin_x = content.x + TABLE_X;
    let origin_y = content.y + TABLE_Y;

    // header row pinned above the data rows
    draw_row(frame, painter, theme, layout, data, 0, origin_x, origin_y, true);

    for row in start_row..end_row {
        if row == 0 {
            continue;
        }
        let row_y = origin_y + (row - start_row + 1) as i32 * ROW_HEIGHT;
        draw_row(frame, painter, theme, layout, data, row, origin_x, row_y, false);
    }

    draw_scrollbar(frame, model, content, visible_rows);
}

#[allow(clippy::too_many_arguments)]
fn draw_row(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    layout: &TableLayout,
    data: &TableData,
    row: usize,
    x: i32,
    y: i32,
    header: bool,
) {
    let grid = theme.table.grid.to_argb_u32();
    let foreground = if header {
        theme.table.header_foreground.to_argb_u32()
    } else {
        theme.ui.foreground.to_argb_u32()
    };
    let ascent = painter.ascent(FONT_SIZE) as i32;

    let mut cell_x = x;
    for (col, cell) in data.row_cells(row).enumerate() {
        let Some(&width) = layout.column_widths.get(col) else {
            break;
        };

        frame.draw_rect(Rect::new(cell_x, y, width, ROW_HEIGHT), grid);

        // left-aligned, vertically centered on the font ascent
        let text_x = cell_x + CELL_PADDING;
        let text_y = y + ROW_HEIGHT / 2 - ascent / 2 - 1;
        if header {
            painter.draw_bold(frame, text_x, text_y, cell, FONT_SIZE, foreground);
        } else {
            painter.draw(frame, text_x, text_y, cell, FONT_SIZE, foreground);
        }

        cell_x += width;
    }
}

fn draw_scrollbar(frame: &mut Frame, model: &AppModel, content: &Rect, visible_rows: usize) {
    let metrics = ScrollMetrics::new(model.table.row_count(), visible_rows);
    if !metrics.needs_scrollbar() {
        return;
    }

    let theme = &model.theme;
    let track = layout::scrollbar_track(&model.layout, content);

    frame.fill_rect(
        Rect::new(track.x, track.top, track.width, track.height),
        theme.table.scrollbar_track.to_argb_u32(),
    );

    let thumb = Rect::new(
        track.x,
        track.thumb_y(model.scroll.offset, &metrics),
        track.width,
        track.thumb_height(&metrics),
    );
    frame.fill_rect(thumb, theme.table.scrollbar_thumb.to_argb_u32());
    frame.draw_rect(thumb, theme.table.scrollbar_thumb_border.to_argb_u32());
}
