//! Use-Case-Funktionen für den Oberflächen-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Oberflächen-Größe.
///
/// Idempotent; berührt keine Pipe-Geometrie.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.surface_size = size;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::creation::create_pipe_at;
    use glam::Vec2;

    #[test]
    fn test_resize_updates_surface_size() {
        let mut state = AppState::new();

        resize(&mut state, [1920.0, 1080.0]);

        assert_eq!(state.view.surface_size, [1920.0, 1080.0]);
    }

    #[test]
    fn test_resize_is_idempotent_and_leaves_geometry_untouched() {
        let mut state = AppState::new();
        let id = create_pipe_at(&mut state, Vec2::new(10.0, 10.0)).unwrap();
        let before = state.sketch.pipe(id).unwrap().clone();

        resize(&mut state, [800.0, 600.0]);
        resize(&mut state, [800.0, 600.0]);

        assert_eq!(state.view.surface_size, [800.0, 600.0]);
        assert_eq!(state.sketch.pipe(id).unwrap(), &before);
    }
}
