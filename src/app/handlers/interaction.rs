//! Handler für Hover-, Drag- und Cursor-Gesten.

use crate::app::{use_cases, AppState};
use crate::core::{Anchor, PipeId};
use glam::Vec2;

/// Zeiger betritt einen Anker.
pub fn anchor_hover_entered(state: &mut AppState, pipe: PipeId, anchor: Anchor) {
    use_cases::interaction::hover_enter(state, pipe, anchor);
}

/// Zeiger verlässt einen Anker.
pub fn anchor_hover_left(state: &mut AppState, pipe: PipeId, anchor: Anchor) {
    use_cases::interaction::hover_leave(state, pipe, anchor);
}

/// Drag auf einem Anker beginnt.
pub fn anchor_drag_started(state: &mut AppState, pipe: PipeId, anchor: Anchor) {
    use_cases::interaction::begin_drag(state, pipe, anchor);
}

/// Drag-Bewegung auf einem Anker.
pub fn anchor_drag_moved(state: &mut AppState, pipe: PipeId, anchor: Anchor, pos: Vec2) {
    use_cases::interaction::drag_move(state, pipe, anchor, pos);
}

/// Drag auf einem Anker endet.
pub fn anchor_drag_ended(state: &mut AppState, pipe: PipeId, anchor: Anchor) {
    use_cases::interaction::end_drag(state, pipe, anchor);
}

/// Zeiger betritt eine Hüllen-Region.
pub fn region_entered(state: &mut AppState, pipe: PipeId) {
    use_cases::interaction::region_enter(state, pipe);
}

/// Zeiger verlässt eine Hüllen-Region.
pub fn region_left(state: &mut AppState, pipe: PipeId) {
    use_cases::interaction::region_leave(state, pipe);
}
