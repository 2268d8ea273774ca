//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::ViewMode;

/// Pointer and wheel input, in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    /// Primary button pressed
    Pressed { x: i32, y: i32 },
    /// Pointer moved (only meaningful to an active drag)
    Moved { x: i32, y: i32 },
    /// Primary button released
    Released,
    /// Wheel rotated; positive notches scroll toward later rows
    Wheel { notches: i32 },
}

/// View-level messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMsg {
    /// Switch the active presentation
    SetMode(ViewMode),
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    View(ViewMsg),
    Pointer(PointerMsg),
    /// Window resized to the given physical size
    Resized(u32, u32),
}
