//! Use-Case: Pipe-Erstellung per Klick auf leere Canvas-Fläche.

use crate::app::AppState;
use crate::core::{PipeId, QuadraticPipe};
use glam::Vec2;

/// Erstellt eine neue Pipe an der Klick-Position und registriert sie.
///
/// Steuer- und Endpunkt folgen der festen Offset-Kette: jeder Punkt liegt
/// um `create_offset_step` je Achse hinter dem vorherigen.
pub fn create_pipe_at(state: &mut AppState, pos: Vec2) -> Option<PipeId> {
    let step = Vec2::splat(state.options.create_offset_step);
    let control = pos + step;
    let end = control + step;

    match QuadraticPipe::new(pos, control, end) {
        Ok(pipe) => {
            let id = state.sketch.add_pipe(pipe);
            state.view.request_repaint();
            log::debug!("Pipe {} erstellt bei ({:.1}, {:.1})", id.0, pos.x, pos.y);
            Some(id)
        }
        Err(e) => {
            // Klick-Position außerhalb des Zahlenraums: keine Pipe, kein Redraw
            log::warn!("Pipe-Erstellung verworfen: {}", e);
            None
        }
    }
}
