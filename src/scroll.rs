//! Vertical scroll state for the table view
//!
//! Owns the scroll offset and the drag gesture, and maps pointer, wheel and
//! track-click input to offset changes. All math is pure so the state
//! machine can be driven in tests without a live input device.
//!
//! The machine has two states: idle and dragging. A drag starts on
//! pointer-down inside the thumb, tracks pointer movement, and ends
//! unconditionally on pointer-up. A pointer-down on the track outside the
//! thumb pages by one screenful toward the click.

/// Height of one table row in pixels
pub const ROW_HEIGHT: i32 = 26;

/// Width of the scrollbar track
pub const SCROLLBAR_WIDTH: i32 = 16;

/// Gap between the table's right edge and the scrollbar
pub const SCROLLBAR_MARGIN: i32 = 10;

/// Smallest thumb the track will render, keeps it grabbable for huge tables
pub const MIN_THUMB_HEIGHT: i32 = 30;

/// Number of rows that fit in the given content height.
///
/// The last partially visible row counts, hence the +1; always at least 1.
pub fn visible_rows(avail_height: i32) -> usize {
    ((avail_height / ROW_HEIGHT) + 1).max(1) as usize
}

/// Row population driving the scroll range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Total rows, header included
    pub row_count: usize,
    /// Rows that fit in the viewport
    pub visible_rows: usize,
}

impl ScrollMetrics {
    pub fn new(row_count: usize, visible_rows: usize) -> Self {
        Self {
            row_count,
            visible_rows,
        }
    }

    /// Largest valid scroll offset in pixels.
    ///
    /// The header row is pinned and never scrolls out, hence the extra -1.
    pub fn max_offset(&self) -> i32 {
        let rows = self.row_count as i64 - self.visible_rows as i64 - 1;
        (rows.max(0) as i32) * ROW_HEIGHT
    }

    /// One screenful in pixels, used for track paging
    pub fn page_height(&self) -> i32 {
        self.visible_rows as i32 * ROW_HEIGHT
    }

    /// The scrollbar is only shown when rows overflow the viewport
    pub fn needs_scrollbar(&self) -> bool {
        self.row_count > self.visible_rows
    }
}

/// Scrollbar track rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub x: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Track {
    /// Thumb height proportional to the visible fraction, clamped to a
    /// usable minimum
    pub fn thumb_height(&self, metrics: &ScrollMetrics) -> i32 {
        let rows = metrics.row_count.max(1) as f64;
        let proportional = self.height as f64 * metrics.visible_rows as f64 / rows;
        (proportional as i32).max(MIN_THUMB_HEIGHT)
    }

    /// Thumb top edge for the given offset; the track top when there is no
    /// scroll range
    pub fn thumb_y(&self, offset: i32, metrics: &ScrollMetrics) -> i32 {
        let max = metrics.max_offset();
        if max <= 0 {
            return self.top;
        }
        let range = (self.height - self.thumb_height(metrics)) as f64;
        self.top + (offset as f64 / max as f64 * range) as i32
    }

    fn contains_x(&self, x: i32) -> bool {
        x >= self.x && x <= self.x + self.width
    }

    fn contains_y(&self, y: i32) -> bool {
        y >= self.top && y <= self.top + self.height
    }
}

/// Transient drag gesture; exists only between pointer-down on the thumb
/// and pointer-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragState {
    /// Pointer-to-thumb-top distance captured at drag start
    grab: i32,
}

/// Scroll offset plus the active drag gesture, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Vertical offset in pixels, kept within `[0, max_offset]`
    pub offset: i32,
    drag: Option<DragState>,
}

/// Clamp an offset into the valid scroll range. Total and idempotent.
pub fn clamp_offset(offset: i32, max: i32) -> i32 {
    offset.clamp(0, max.max(0))
}

impl ScrollState {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer-down over the scrollbar.
    ///
    /// Inside the thumb starts a drag; on the track outside the thumb pages
    /// one screenful toward the pointer. Returns true when the event was
    /// consumed.
    pub fn pointer_pressed(
        &mut self,
        x: i32,
        y: i32,
        track: Track,
        metrics: ScrollMetrics,
    ) -> bool {
        if !metrics.needs_scrollbar() || !track.contains_x(x) {
            return false;
        }

        let thumb_y = track.thumb_y(self.offset, &metrics);
        let thumb_height = track.thumb_height(&metrics);

        if y >= thumb_y && y <= thumb_y + thumb_height {
            self.drag = Some(DragState { grab: y - thumb_y });
            return true;
        }

        if track.contains_y(y) {
            let page = if y < thumb_y {
                -metrics.page_height()
            } else {
                metrics.page_height()
            };
            self.offset = clamp_offset(self.offset + page, metrics.max_offset());
            return true;
        }

        false
    }

    /// Pointer movement; only meaningful while dragging.
    ///
    /// Returns true when the offset changed.
    pub fn pointer_moved(&mut self, y: i32, track: Track, metrics: ScrollMetrics) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };

        let thumb_height = track.thumb_height(&metrics);
        let range = track.height - thumb_height;
        if range <= 0 {
            return false;
        }

        let new_thumb_y = (y - drag.grab).clamp(track.top, track.top + range);
        let ratio = (new_thumb_y - track.top) as f64 / range as f64;
        let new_offset = (ratio * metrics.max_offset() as f64) as i32;

        if new_offset != self.offset {
            self.offset = new_offset;
            true
        } else {
            false
        }
    }

    /// Pointer-up ends the drag unconditionally
    pub fn pointer_released(&mut self) {
        self.drag = None;
    }

    /// Wheel rotation in notches; positive scrolls toward later rows.
    ///
    /// Returns true when the offset changed.
    pub fn wheel(&mut self, notches: i32, metrics: ScrollMetrics) -> bool {
        let delta = notches.saturating_mul(ROW_HEIGHT);
        let new_offset = clamp_offset(self.offset.saturating_add(delta), metrics.max_offset());
        if new_offset != self.offset {
            self.offset = new_offset;
            true
        } else {
            false
        }
    }

    /// Re-clamp after the scroll range shrinks (e.g. window resize)
    pub fn reclamp(&mut self, metrics: ScrollMetrics) {
        self.offset = clamp_offset(self.offset, metrics.max_offset());
    }
}
