//! Pie chart rendering
//!
//! Categories are ranked descending by count and allocated integer-degree
//! slices proportional to their share. Flooring loses up to one degree per
//! slice; the remainder is absorbed by the lowest-ranked slice so the
//! slices always cover exactly 360°.

use crate::data::CategoryCounts;
use crate::render::frame::{Frame, Rect, TextPainter};
use crate::render::layout::CHART_PADDING;
use crate::theme::Theme;

/// Slices thinner than this keep their percentage label off the chart
pub const LABEL_MIN_SWEEP: i32 = 10;

const LABEL_RADIUS_FACTOR: f64 = 0.7;
const LEGEND_X: i32 = 100;
const LEGEND_SWATCH: i32 = 15;
const LEGEND_STEP: i32 = 25;

const LABEL_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 16.0;

/// One allocated wedge, in rank order
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<'a> {
    pub label: &'a str,
    pub count: u32,
    pub percent: f32,
    pub start_deg: i32,
    pub sweep_deg: i32,
}

/// Rank categories descending by count.
///
/// The sort is stable, so categories with equal counts keep their
/// first-seen order from aggregation.
pub fn rank_categories(counts: &CategoryCounts) -> Vec<(&str, u32)> {
    let mut ranked: Vec<(&str, u32)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Allocate integer-degree slices covering exactly 360°.
///
/// Returns an empty vector when there are no categories or the total count
/// is zero.
pub fn allocate_slices(counts: &CategoryCounts) -> Vec<Slice<'_>> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    let ranked = rank_categories(counts);
    let mut slices: Vec<Slice> = Vec::with_capacity(ranked.len());

    let mut allocated = 0i32;
    for (label, count) in &ranked {
        let sweep = (*count as f64 / total as f64 * 360.0) as i32;
        slices.push(Slice {
            label,
            count: *count,
            percent: *count as f32 / total as f32 * 100.0,
            start_deg: 0,
            sweep_deg: sweep,
        });
        allocated += sweep;
    }

    // rounding correction: the last-ranked slice absorbs the residual
    if let Some(last) = slices.last_mut() {
        last.sweep_deg += 360 - allocated;
    }

    let mut start = 0;
    for slice in &mut slices {
        slice.start_deg = start;
        start += slice.sweep_deg;
    }

    slices
}

/// Draw the pie chart with legend and title into the content rect
pub fn draw(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    counts: &CategoryCounts,
    title: &str,
    content: &Rect,
) {
    let slices = allocate_slices(counts);
    if slices.is_empty() {
        super::draw_placeholder(frame, painter, theme, "No category data to display", content);
        return;
    }

    let width = content.width - 2 * CHART_PADDING;
    let height = content.height - 3 * CHART_PADDING;
    let center_x = content.x + CHART_PADDING + width / 2;
    let center_y = content.y + CHART_PADDING + height / 2;
    let radius = (width.min(height) / 2).max(1);

    let outline = theme.charts.outline.to_argb_u32();
    let label_color = theme.charts.label.to_argb_u32();
    let ascent = painter.ascent(LABEL_SIZE) as i32;

    let mut legend_y = content.y + CHART_PADDING;

    for (rank, slice) in slices.iter().enumerate() {
        let color = theme.charts.pie_color(rank).to_argb_u32();

        frame.fill_wedge(
            center_x,
            center_y,
            radius,
            slice.start_deg,
            slice.sweep_deg,
            color,
        );
        frame.draw_arc(
            center_x,
            center_y,
            radius,
            slice.start_deg,
            slice.sweep_deg,
            outline,
        );

        // percentage label at the slice's mid-angle, 70% out
        if slice.sweep_deg > LABEL_MIN_SWEEP {
            let mid = (slice.start_deg + slice.sweep_deg / 2) as f64;
            let label_r = radius as f64 * LABEL_RADIUS_FACTOR;
            let lx = center_x + (label_r * mid.to_radians().cos()) as i32;
            let ly = center_y - (label_r * mid.to_radians().sin()) as i32;
            let text = format!("{:.1}%", slice.percent);
            let text_w = painter.measure(&text, LABEL_SIZE) as i32;
            painter.draw_bold(
                frame,
                lx - text_w / 2,
                ly - ascent / 2,
                &text,
                LABEL_SIZE,
                label_color,
            );
        }

        // legend: swatch + label + percentage, one line per rank
        let swatch = Rect::new(content.x + LEGEND_X, legend_y, LEGEND_SWATCH, LEGEND_SWATCH);
        frame.fill_rect(swatch, color);
        frame.draw_rect(swatch, outline);
        let legend_text = format!("{} ({:.1}%)", slice.label, slice.percent);
        painter.draw(
            frame,
            content.x + LEGEND_X + LEGEND_SWATCH + 5,
            legend_y,
            &legend_text,
            LABEL_SIZE,
            label_color,
        );
        legend_y += LEGEND_STEP;
    }

    let title_w = painter.measure(title, TITLE_SIZE) as i32;
    painter.draw_bold(
        frame,
        center_x - title_w / 2,
        content.y + CHART_PADDING / 2 - painter.ascent(TITLE_SIZE) as i32 / 2,
        title,
        TITLE_SIZE,
        theme.ui.title.to_argb_u32(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_equal_categories() {
        // floor(360/7) = 51 each; 7*51 = 357; the last-ranked slice takes
        // the remaining 3 degrees
        let counts = CategoryCounts::from_pairs([
            ("X", 1),
            ("Y", 1),
            ("Z", 1),
            ("W", 1),
            ("V", 1),
            ("U", 1),
            ("T", 1),
        ]);

        let slices = allocate_slices(&counts);
        assert_eq!(slices.len(), 7);
        for slice in &slices[..6] {
            assert_eq!(slice.sweep_deg, 51);
        }
        assert_eq!(slices[6].sweep_deg, 54);
        assert_eq!(slices.iter().map(|s| s.sweep_deg).sum::<i32>(), 360);
    }

    #[test]
    fn test_angles_always_sum_to_360() {
        let cases: Vec<Vec<(&str, u32)>> = vec![
            vec![("a", 1)],
            vec![("a", 1), ("b", 2)],
            vec![("a", 3), ("b", 3), ("c", 3)],
            vec![("a", 97), ("b", 1), ("c", 1), ("d", 1)],
            vec![("a", 1), ("b", 1000000)],
        ];

        for pairs in cases {
            let counts = CategoryCounts::from_pairs(pairs.clone());
            let slices = allocate_slices(&counts);
            let sum: i32 = slices.iter().map(|s| s.sweep_deg).sum();
            assert_eq!(sum, 360, "angles for {:?} sum to {}", pairs, sum);
            assert!(slices.iter().all(|s| s.sweep_deg >= 0));
        }
    }

    #[test]
    fn test_slices_are_contiguous_from_zero() {
        let counts = CategoryCounts::from_pairs([("a", 5), ("b", 3), ("c", 2)]);
        let slices = allocate_slices(&counts);

        assert_eq!(slices[0].start_deg, 0);
        for pair in slices.windows(2) {
            assert_eq!(pair[1].start_deg, pair[0].start_deg + pair[0].sweep_deg);
        }
    }

    #[test]
    fn test_ranking_is_descending_and_ties_stable() {
        let counts =
            CategoryCounts::from_pairs([("first", 2), ("big", 9), ("second", 2), ("small", 1)]);
        let ranked = rank_categories(&counts);

        let labels: Vec<&str> = ranked.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["big", "first", "second", "small"]);
    }

    #[test]
    fn test_zero_total_yields_no_slices() {
        let counts = CategoryCounts::from_pairs([("a", 0), ("b", 0)]);
        assert!(allocate_slices(&counts).is_empty());
        assert!(allocate_slices(&CategoryCounts::new()).is_empty());
    }

    #[test]
    fn test_single_category_takes_full_circle() {
        let counts = CategoryCounts::from_pairs([("only", 7)]);
        let slices = allocate_slices(&counts);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].sweep_deg, 360);
        assert!((slices[0].percent - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_dominant_category_residual() {
        // 97/100 -> floor(349.2) = 349; three 1% slices floor to 3 each;
        // 349 + 3*3 = 358, so the last slice gets 2 extra degrees
        let counts = CategoryCounts::from_pairs([("a", 97), ("b", 1), ("c", 1), ("d", 1)]);
        let slices = allocate_slices(&counts);
        assert_eq!(slices[0].sweep_deg, 349);
        assert_eq!(slices[1].sweep_deg, 3);
        assert_eq!(slices[2].sweep_deg, 3);
        assert_eq!(slices[3].sweep_deg, 5);
    }
}
