//! Bar chart rendering
//!
//! Bars are laid out left to right in the fixed interval-label order (never
//! sorted by value). The Y axis ceiling comes from the nice-number scaler
//! so tick labels land on round values.

use crate::data::CategoryCounts;
use crate::render::frame::{Frame, Rect, TextPainter};
use crate::render::layout::CHART_PADDING;
use crate::render::scale::{nice_ceiling, tick_step, TICK_COUNT};
use crate::theme::Theme;

const BAR_CHART_PADDING: i32 = 80;
const BAR_WIDTH: i32 = 60;
const BAR_SPACING: i32 = 80;
/// Length of the axis arrowhead strokes
const AXIS_ARROW: i32 = 20;
/// How far the X axis extends past the last bar
const X_AXIS_EXTRA: i32 = 40;

const LABEL_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 16.0;

/// Bar height in pixels for a count under the given axis ceiling
pub fn bar_height(count: u32, y_max: f64, chart_height: i32) -> i32 {
    (count as f64 / y_max * chart_height as f64) as i32
}

/// Draw the bar chart with axes, ticks and count labels into the content
/// rect
pub fn draw(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    labels: &[String],
    counts: &CategoryCounts,
    title: &str,
    content: &Rect,
) {
    if labels.is_empty() || counts.is_empty() {
        super::draw_placeholder(frame, painter, theme, "No value data to display", content);
        return;
    }

    let chart_height = (content.height - 2 * BAR_CHART_PADDING).max(1);

    let total_bar_width = labels.len() as i32 * (BAR_WIDTH + BAR_SPACING);
    let whole_chart_width = total_bar_width + X_AXIS_EXTRA;
    let usable_width = content.width - 2 * BAR_CHART_PADDING;
    let start_x = content.x + BAR_CHART_PADDING + (usable_width - whole_chart_width) / 2;
    let start_y = content.y + content.height - BAR_CHART_PADDING;

    let max = labels
        .iter()
        .map(|label| counts.get(label))
        .max()
        .unwrap_or(0)
        .max(1);

    let y_max = nice_ceiling(max as f64);
    let y_step = tick_step(y_max);

    let axis = theme.charts.axis.to_argb_u32();
    let label_color = theme.charts.label.to_argb_u32();
    let outline = theme.charts.outline.to_argb_u32();
    let ascent = painter.ascent(LABEL_SIZE) as i32;

    // X axis, extended past the last bar and arrow-terminated
    let last_bar_right = start_x + total_bar_width;
    let axis_end = last_bar_right + X_AXIS_EXTRA;
    frame.hline(start_x, axis_end, start_y, axis);
    frame.draw_line(axis_end, start_y, axis_end - AXIS_ARROW, start_y - AXIS_ARROW / 2, axis);
    frame.draw_line(axis_end, start_y, axis_end - AXIS_ARROW, start_y + AXIS_ARROW / 2, axis);
    painter.draw(
        frame,
        axis_end + 5,
        start_y - ascent / 2,
        title,
        LABEL_SIZE,
        label_color,
    );

    // Y axis with its own arrowhead at the top
    let axis_top = start_y - chart_height;
    frame.vline(start_x, axis_top, start_y, axis);
    frame.draw_line(start_x, axis_top, start_x - AXIS_ARROW / 2, axis_top + AXIS_ARROW, axis);
    frame.draw_line(start_x, axis_top, start_x + AXIS_ARROW / 2, axis_top + AXIS_ARROW, axis);

    // X axis labels under each bar slot
    for (i, label) in labels.iter().enumerate() {
        let x = start_x + i as i32 * (BAR_WIDTH + BAR_SPACING) + BAR_WIDTH / 2;
        let text_w = painter.measure(label, LABEL_SIZE) as i32;
        painter.draw(
            frame,
            x - text_w / 2,
            start_y + 25 - ascent,
            label,
            LABEL_SIZE,
            label_color,
        );
    }

    // Y axis tick labels at i × tick_step
    for i in 0..=TICK_COUNT as i32 {
        let value = i as f64 * y_step;
        let y = start_y - i * chart_height / TICK_COUNT as i32 + 1;
        let text = format!("{}", value as i64);
        let text_w = painter.measure(&text, LABEL_SIZE) as i32;
        painter.draw(
            frame,
            start_x - 10 - text_w,
            y - ascent / 2,
            &text,
            LABEL_SIZE,
            label_color,
        );
        frame.hline(start_x - 5, start_x, y, axis);
    }

    // bars in fixed label order, palette cycled by position
    for (i, label) in labels.iter().enumerate() {
        let count = counts.get(label);
        let height = bar_height(count, y_max, chart_height);
        let bar_x = start_x + i as i32 * (BAR_WIDTH + BAR_SPACING);
        let bar_y = start_y - height;

        let bar_rect = Rect::new(bar_x, bar_y, BAR_WIDTH, height);
        frame.fill_rect(bar_rect, theme.charts.bar_color(i).to_argb_u32());
        frame.draw_rect(bar_rect, outline);

        // count label centered above non-zero bars
        if count > 0 {
            let text = count.to_string();
            let text_w = painter.measure(&text, LABEL_SIZE) as i32;
            painter.draw(
                frame,
                bar_x + BAR_WIDTH / 2 - text_w / 2,
                bar_y - 5 - ascent,
                &text,
                LABEL_SIZE,
                label_color,
            );
        }
    }

    let title_w = painter.measure(title, TITLE_SIZE) as i32;
    painter.draw_bold(
        frame,
        content.x + (content.width - title_w) / 2,
        content.y + CHART_PADDING / 2 - painter.ascent(TITLE_SIZE) as i32 / 2,
        title,
        TITLE_SIZE,
        theme.ui.title.to_argb_u32(),
    );
}
