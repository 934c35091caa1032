//! Handler für Pipe-Erstellung.

use crate::app::{use_cases, AppState};
use glam::Vec2;

/// Erstellt eine neue Pipe an der Klick-Position.
pub fn create_pipe(state: &mut AppState, pos: Vec2) {
    use_cases::creation::create_pipe_at(state, pos);
}
