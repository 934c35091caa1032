//! Use-Case: Hover-, Drag- und Cursor-Gesten auf Pipes.
//!
//! Verbindliche Reihenfolge je Drag-Move: Punkt setzen → Hülle neu
//! ableiten → Redraw anfordern. Die Hülle darf nie veraltet relativ zum
//! gerade bewegten Punkt gezeichnet werden.

use crate::app::state::AnchorGesture;
use crate::app::AppState;
use crate::core::{Anchor, PipeId};
use glam::Vec2;

/// Zeiger betritt die Hit-Region eines Ankers.
pub fn hover_enter(state: &mut AppState, pipe: PipeId, anchor: Anchor) {
    if state.sketch.pipe(pipe).is_none() {
        log::warn!("Hover auf unbekannte Pipe {:?}", pipe);
        return;
    }
    // Ein laufender Drag hat Vorrang vor Hover-Übergängen
    if state.interaction.gesture(pipe, anchor) == AnchorGesture::Dragging {
        return;
    }
    state.interaction.begin_hover(pipe, anchor, &state.options);
    state.view.request_repaint();
}

/// Zeiger verlässt die Hit-Region eines Ankers.
pub fn hover_leave(state: &mut AppState, pipe: PipeId, anchor: Anchor) {
    if state.interaction.gesture(pipe, anchor) == AnchorGesture::Dragging {
        return;
    }
    state.interaction.end_hover(pipe, anchor);
    state.view.request_repaint();
}

/// Drag-Geste auf einem Anker beginnt.
pub fn begin_drag(state: &mut AppState, pipe: PipeId, anchor: Anchor) {
    if state.sketch.pipe(pipe).is_none() {
        log::warn!("Drag-Start auf unbekannte Pipe {:?}", pipe);
        return;
    }
    state
        .interaction
        .set_gesture(pipe, anchor, AnchorGesture::Dragging);
}

/// Drag-Bewegung: Punkt setzen, Hülle neu ableiten, Redraw anfordern.
///
/// Eine abgelehnte Mutation (nicht-endliche Zielposition) lässt den
/// vorherigen Zustand vollständig bestehen, ohne visuelle Änderung.
pub fn drag_move(state: &mut AppState, pipe: PipeId, anchor: Anchor, pos: Vec2) {
    let Some(p) = state.sketch.pipe_mut(pipe) else {
        log::warn!("Drag auf unbekannte Pipe {:?}", pipe);
        return;
    };

    if let Err(e) = p.set_anchor(anchor, pos) {
        log::warn!("Anker-Mutation verworfen: {}", e);
        return;
    }
    p.recompute_envelope();

    state
        .interaction
        .set_gesture(pipe, anchor, AnchorGesture::Dragging);
    state.view.request_repaint();
}

/// Plattform meldet Pointer-Up: Drag endet, Anker kehrt in den
/// Ruhezustand zurück (Betonung wird exakt wiederhergestellt).
pub fn end_drag(state: &mut AppState, pipe: PipeId, anchor: Anchor) {
    state.interaction.end_hover(pipe, anchor);
    state.view.request_repaint();
}

/// Zeiger betritt die Hüllen-Region: Move-Cursor über den Tiefe-1-Slot.
pub fn region_enter(state: &mut AppState, pipe: PipeId) {
    state.interaction.push_move_cursor(pipe);
    state.view.request_repaint();
}

/// Zeiger verlässt die Hüllen-Region: gemerkten Cursor wiederherstellen.
pub fn region_leave(state: &mut AppState, _pipe: PipeId) {
    state.interaction.pop_cursor();
    state.view.request_repaint();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::creation::create_pipe_at;
    use crate::shared::CursorStyle;

    fn with_one_pipe() -> (AppState, PipeId) {
        let mut state = AppState::new();
        let id = create_pipe_at(&mut state, Vec2::new(10.0, 10.0)).unwrap();
        state.view.take_repaint_request();
        (state, id)
    }

    #[test]
    fn test_drag_move_updates_point_then_envelope() {
        let (mut state, id) = with_one_pipe();

        drag_move(&mut state, id, Anchor::Control, Vec2::new(200.0, 5.0));

        let pipe = state.sketch.pipe(id).unwrap();
        assert_eq!(pipe.control(), Vec2::new(200.0, 5.0));
        // Hülle reflektiert den neuen Punkt sofort
        let env = pipe.envelope();
        assert_eq!(env.x, 10.0);
        assert_eq!(env.y, 5.0);
        assert_eq!(env.width, 190.0);
        assert_eq!(env.height, 105.0);
        assert!(state.view.repaint_requested());
    }

    #[test]
    fn test_drag_sequence_reflects_only_applied_steps() {
        let (mut state, id) = with_one_pipe();

        let steps = [
            Vec2::new(150.0, 60.0),
            Vec2::new(-20.0, 60.0),
            Vec2::new(60.0, 300.0),
        ];
        for step in steps {
            drag_move(&mut state, id, Anchor::Control, step);

            // Nach jedem Schritt: Hülle exakt aus den aktuellen Punkten
            let pipe = state.sketch.pipe(id).unwrap();
            let expected = crate::core::BoundingEnvelope::from_points(
                pipe.start(),
                pipe.control(),
                pipe.end(),
            );
            assert_eq!(pipe.envelope(), expected);
            assert_eq!(pipe.control(), step);
        }
    }

    #[test]
    fn test_rejected_drag_keeps_prior_state() {
        let (mut state, id) = with_one_pipe();
        let before = state.sketch.pipe(id).unwrap().clone();

        drag_move(&mut state, id, Anchor::End, Vec2::new(f32::INFINITY, 0.0));

        assert_eq!(state.sketch.pipe(id).unwrap(), &before);
        assert!(!state.view.repaint_requested());
    }

    #[test]
    fn test_hover_cycle_restores_emphasis() {
        let (mut state, id) = with_one_pipe();
        let before = state
            .interaction
            .emphasis(id, Anchor::Start, &state.options);

        hover_enter(&mut state, id, Anchor::Start);
        assert_eq!(state.interaction.cursor(), CursorStyle::Pointer);
        let hovered = state
            .interaction
            .emphasis(id, Anchor::Start, &state.options);
        assert_eq!(hovered.radius, state.options.anchor_radius_hover);

        hover_leave(&mut state, id, Anchor::Start);
        let after = state
            .interaction
            .emphasis(id, Anchor::Start, &state.options);
        assert_eq!(after, before);
    }

    #[test]
    fn test_hover_on_unknown_pipe_is_ignored() {
        let mut state = AppState::new();

        hover_enter(&mut state, PipeId(7), Anchor::Start);

        assert_eq!(state.interaction.cursor(), CursorStyle::Default);
        assert!(!state.view.repaint_requested());
    }

    #[test]
    fn test_drag_suppresses_hover_transitions() {
        let (mut state, id) = with_one_pipe();

        begin_drag(&mut state, id, Anchor::End);
        hover_leave(&mut state, id, Anchor::End);

        assert_eq!(
            state.interaction.gesture(id, Anchor::End),
            AnchorGesture::Dragging
        );

        end_drag(&mut state, id, Anchor::End);
        assert_eq!(
            state.interaction.gesture(id, Anchor::End),
            AnchorGesture::Idle
        );
    }

    #[test]
    fn test_region_cycle_restores_cursor() {
        let (mut state, id) = with_one_pipe();

        region_enter(&mut state, id);
        assert_eq!(state.interaction.cursor(), CursorStyle::Move);

        region_leave(&mut state, id);
        assert_eq!(state.interaction.cursor(), CursorStyle::Default);
    }
}
