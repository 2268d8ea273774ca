//! Update functions for the Elm-style architecture
//!
//! `update` is the single entry point for state changes: it maps a message
//! onto the model and returns the side effect to perform, which keeps the
//! whole input path deterministic and testable without a window.

use crate::commands::Cmd;
use crate::messages::{Msg, PointerMsg, ViewMsg};
use crate::model::{AppModel, ViewMode};
use crate::render::layout;
use crate::scroll::ScrollMetrics;

/// Apply a message to the model, returning the side effect to run
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::View(ViewMsg::SetMode(mode)) => set_mode(model, mode),
        Msg::Pointer(pointer) => update_pointer(model, pointer),
        Msg::Resized(width, height) => resized(model, width, height),
    }
}

fn set_mode(model: &mut AppModel, mode: ViewMode) -> Option<Cmd> {
    if model.mode == mode {
        return None;
    }

    // a drag gesture cannot outlive the table view
    model.scroll.pointer_released();
    model.mode = mode;
    tracing::debug!(?mode, "view mode changed");
    Some(Cmd::Redraw)
}

fn resized(model: &mut AppModel, width: u32, height: u32) -> Option<Cmd> {
    model.window_size = (width, height);
    let metrics = table_metrics(model);
    model.scroll.reclamp(metrics);
    Some(Cmd::Redraw)
}

/// Scroll metrics for the current window size
fn table_metrics(model: &AppModel) -> ScrollMetrics {
    let content = layout::content_rect(model.window_size);
    ScrollMetrics::new(model.table.row_count(), layout::visible_rows(&content))
}

fn update_pointer(model: &mut AppModel, pointer: PointerMsg) -> Option<Cmd> {
    match pointer {
        PointerMsg::Pressed { x, y } => {
            if let Some(mode) = layout::hit_test_mode_bar(model.window_size.0, x, y) {
                return set_mode(model, mode);
            }

            if model.mode != ViewMode::Table {
                return None;
            }

            let content = layout::content_rect(model.window_size);
            let track = layout::scrollbar_track(&model.layout, &content);
            let metrics = table_metrics(model);
            model
                .scroll
                .pointer_pressed(x, y, track, metrics)
                .then_some(Cmd::Redraw)
        }
        PointerMsg::Moved { x: _, y } => {
            if model.mode != ViewMode::Table || !model.scroll.is_dragging() {
                return None;
            }

            let content = layout::content_rect(model.window_size);
            let track = layout::scrollbar_track(&model.layout, &content);
            let metrics = table_metrics(model);
            model
                .scroll
                .pointer_moved(y, track, metrics)
                .then_some(Cmd::Redraw)
        }
        PointerMsg::Released => {
            model.scroll.pointer_released();
            None
        }
        PointerMsg::Wheel { notches } => {
            if model.mode != ViewMode::Table {
                return None;
            }
            let metrics = table_metrics(model);
            model
                .scroll
                .wheel(notches, metrics)
                .then_some(Cmd::Redraw)
        }
    }
}
