//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { pos } => {
            // Klick auf belegte Fläche: die bestehende Form schluckt den
            // Klick, es entsteht keine neue Pipe
            let occupied = state
                .sketch
                .pipe_at(pos, state.options.anchor_radius, state.options.curve_hit_width())
                .is_some();
            if occupied {
                vec![]
            } else {
                vec![AppCommand::CreatePipeAt { pos }]
            }
        }
        AppIntent::AnchorHoverEntered { pipe, anchor } => {
            vec![AppCommand::SetAnchorHovered { pipe, anchor }]
        }
        AppIntent::AnchorHoverLeft { pipe, anchor } => {
            vec![AppCommand::ClearAnchorHovered { pipe, anchor }]
        }
        AppIntent::AnchorDragStarted { pipe, anchor } => {
            vec![AppCommand::BeginAnchorDrag { pipe, anchor }]
        }
        AppIntent::AnchorDragMoved { pipe, anchor, pos } => {
            // Ein Command je Move-Event, keine Bündelung oder Drosselung
            vec![AppCommand::MoveAnchor { pipe, anchor, pos }]
        }
        AppIntent::AnchorDragEnded { pipe, anchor } => {
            vec![AppCommand::EndAnchorDrag { pipe, anchor }]
        }
        AppIntent::PipeRegionEntered { pipe } => vec![AppCommand::PushMoveCursor { pipe }],
        AppIntent::PipeRegionLeft { pipe: _ } => vec![AppCommand::PopMoveCursor],
        AppIntent::SurfaceResized { size } => {
            if state.view.surface_size == size {
                vec![]
            } else {
                vec![AppCommand::SetSurfaceSize { size }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::creation::create_pipe_at;
    use glam::Vec2;

    #[test]
    fn test_click_on_empty_canvas_maps_to_create() {
        let state = AppState::new();

        let commands = map_intent_to_commands(
            &state,
            AppIntent::CanvasClicked {
                pos: Vec2::new(10.0, 10.0),
            },
        );

        assert!(matches!(
            commands.as_slice(),
            [AppCommand::CreatePipeAt { .. }]
        ));
    }

    #[test]
    fn test_click_on_occupied_area_maps_to_nothing() {
        let mut state = AppState::new();
        create_pipe_at(&mut state, Vec2::new(10.0, 10.0));

        // Klick exakt auf den Start-Anker der bestehenden Pipe
        let commands = map_intent_to_commands(
            &state,
            AppIntent::CanvasClicked {
                pos: Vec2::new(10.0, 10.0),
            },
        );

        assert!(commands.is_empty());
    }

    #[test]
    fn test_unchanged_surface_size_maps_to_nothing() {
        let mut state = AppState::new();
        state.view.surface_size = [640.0, 480.0];

        let commands = map_intent_to_commands(
            &state,
            AppIntent::SurfaceResized {
                size: [640.0, 480.0],
            },
        );
        assert!(commands.is_empty());

        let commands = map_intent_to_commands(
            &state,
            AppIntent::SurfaceResized {
                size: [800.0, 600.0],
            },
        );
        assert!(matches!(
            commands.as_slice(),
            [AppCommand::SetSurfaceSize { .. }]
        ));
    }
}
