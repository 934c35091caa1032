//! Interaktionszustand: Gesten je Anker, Betonung, Cursor-Slot der Tiefe 1.

use crate::core::{Anchor, PipeId};
use crate::shared::{AnchorEmphasis, CursorStyle, SketchOptions};
use std::collections::HashMap;

/// Gesten-Phase eines einzelnen Ankers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorGesture {
    #[default]
    Idle,
    Hovered,
    Dragging,
}

/// Zustand aller laufenden Gesten plus Cursor-Verwaltung.
///
/// Der Cursor-"Stack" hat bewusst Tiefe 1: beim Betreten einer
/// Hüllen-Region wird genau der aktuelle Cursor gemerkt; ein weiteres
/// Betreten vor dem Verlassen überschreibt den gemerkten Wert
/// (last-writer-wins). Jedes Verlassen stellt den Slot wieder her.
#[derive(Debug, Default)]
pub struct InteractionState {
    gestures: HashMap<(PipeId, Anchor), AnchorGesture>,
    /// Aktuelle Betonung abweichend von den Basis-Optionen
    emphasis: HashMap<(PipeId, Anchor), AnchorEmphasis>,
    /// Exakte Vor-Hover-Betonung, wiederhergestellt beim Verlassen
    saved_emphasis: HashMap<(PipeId, Anchor), AnchorEmphasis>,
    /// Pipe, deren Hüllen-Region der Zeiger aktuell überstreicht
    pub region_pipe: Option<PipeId>,
    cursor: CursorStyle,
    saved_cursor: Option<CursorStyle>,
}

impl InteractionState {
    /// Erstellt den Ruhezustand (alle Anker idle, Standard-Cursor).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gesten-Phase eines Ankers (Idle wenn nie berührt).
    pub fn gesture(&self, pipe: PipeId, anchor: Anchor) -> AnchorGesture {
        self.gestures
            .get(&(pipe, anchor))
            .copied()
            .unwrap_or_default()
    }

    /// Setzt die Gesten-Phase; Idle-Einträge werden entfernt.
    pub fn set_gesture(&mut self, pipe: PipeId, anchor: Anchor, gesture: AnchorGesture) {
        if gesture == AnchorGesture::Idle {
            self.gestures.remove(&(pipe, anchor));
        } else {
            self.gestures.insert((pipe, anchor), gesture);
        }
    }

    /// Aktuelle Betonung eines Ankers; Basis-Werte aus den Optionen,
    /// solange keine Hover-Anhebung aktiv ist.
    pub fn emphasis(&self, pipe: PipeId, anchor: Anchor, options: &SketchOptions) -> AnchorEmphasis {
        self.emphasis
            .get(&(pipe, anchor))
            .copied()
            .unwrap_or(AnchorEmphasis {
                radius: options.anchor_radius,
                stroke_width: options.anchor_stroke_width,
            })
    }

    /// Hover-Beginn: merkt die exakte Vor-Hover-Betonung, hebt Radius und
    /// Strichstärke an, setzt Zeige-Cursor.
    pub fn begin_hover(&mut self, pipe: PipeId, anchor: Anchor, options: &SketchOptions) {
        let current = self.emphasis(pipe, anchor, options);
        self.saved_emphasis.insert((pipe, anchor), current);
        self.emphasis.insert(
            (pipe, anchor),
            AnchorEmphasis {
                radius: options.anchor_radius_hover,
                stroke_width: options.anchor_stroke_width_hover,
            },
        );
        self.set_gesture(pipe, anchor, AnchorGesture::Hovered);
        self.cursor = CursorStyle::Pointer;
    }

    /// Hover-Ende: stellt die gemerkte Betonung exakt wieder her.
    /// Der Cursor fällt auf Move zurück, solange eine Hüllen-Region aktiv
    /// ist, sonst auf Standard.
    pub fn end_hover(&mut self, pipe: PipeId, anchor: Anchor) {
        match self.saved_emphasis.remove(&(pipe, anchor)) {
            Some(saved) => {
                self.emphasis.insert((pipe, anchor), saved);
            }
            None => {
                self.emphasis.remove(&(pipe, anchor));
            }
        }
        self.set_gesture(pipe, anchor, AnchorGesture::Idle);
        self.cursor = if self.saved_cursor.is_some() {
            CursorStyle::Move
        } else {
            CursorStyle::Default
        };
    }

    /// Aktueller Cursor.
    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Setzt den Cursor direkt (ohne den Slot zu berühren).
    pub fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }

    /// Merkt den aktuellen Cursor im Slot und aktiviert den Move-Cursor.
    pub fn push_move_cursor(&mut self, pipe: PipeId) {
        self.saved_cursor = Some(self.cursor);
        self.cursor = CursorStyle::Move;
        self.region_pipe = Some(pipe);
    }

    /// Stellt den gemerkten Cursor wieder her und leert den Slot.
    pub fn pop_cursor(&mut self) {
        self.cursor = self.saved_cursor.take().unwrap_or_default();
        self.region_pipe = None;
    }

    /// `true` wenn die Pipe gerade Interaktion erfährt (Anker-Geste oder
    /// überstrichene Hüllen-Region); steuert die Formel-Annotation.
    pub fn pipe_active(&self, pipe: PipeId) -> bool {
        self.region_pipe == Some(pipe)
            || self
                .gestures
                .iter()
                .any(|((p, _), g)| *p == pipe && *g != AnchorGesture::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIPE: PipeId = PipeId(0);

    #[test]
    fn test_hover_bumps_and_restores_emphasis_exactly() {
        let options = SketchOptions::default();
        let mut state = InteractionState::new();
        let before = state.emphasis(PIPE, Anchor::Control, &options);

        state.begin_hover(PIPE, Anchor::Control, &options);
        let hovered = state.emphasis(PIPE, Anchor::Control, &options);
        assert_eq!(hovered.radius, options.anchor_radius_hover);
        assert_eq!(hovered.stroke_width, options.anchor_stroke_width_hover);

        state.end_hover(PIPE, Anchor::Control);
        let after = state.emphasis(PIPE, Anchor::Control, &options);
        assert_eq!(after, before);
        assert_eq!(state.gesture(PIPE, Anchor::Control), AnchorGesture::Idle);
    }

    #[test]
    fn test_cursor_slot_restores_previous_cursor() {
        let mut state = InteractionState::new();
        state.set_cursor(CursorStyle::Pointer);

        state.push_move_cursor(PIPE);
        assert_eq!(state.cursor(), CursorStyle::Move);

        state.pop_cursor();
        assert_eq!(state.cursor(), CursorStyle::Pointer);
        assert_eq!(state.region_pipe, None);
    }

    #[test]
    fn test_nested_region_entry_overwrites_slot() {
        // Tiefe-1-Slot: zweites Betreten vor dem Verlassen überschreibt
        // den gemerkten Wert, ein Pop stellt nur noch Move wieder her
        let mut state = InteractionState::new();
        state.push_move_cursor(PipeId(0));
        state.push_move_cursor(PipeId(1));

        state.pop_cursor();
        assert_eq!(state.cursor(), CursorStyle::Move);

        // Ein weiterer Pop fällt auf Standard zurück (Slot ist leer)
        state.pop_cursor();
        assert_eq!(state.cursor(), CursorStyle::Default);
    }

    #[test]
    fn test_anchor_hover_overrides_region_cursor() {
        let options = SketchOptions::default();
        let mut state = InteractionState::new();

        state.push_move_cursor(PIPE);
        state.begin_hover(PIPE, Anchor::Start, &options);
        assert_eq!(state.cursor(), CursorStyle::Pointer);

        // Anker verlassen, Region noch aktiv → zurück auf Move
        state.end_hover(PIPE, Anchor::Start);
        assert_eq!(state.cursor(), CursorStyle::Move);
    }

    #[test]
    fn test_pipe_active_tracks_gestures_and_region() {
        let options = SketchOptions::default();
        let mut state = InteractionState::new();
        assert!(!state.pipe_active(PIPE));

        state.begin_hover(PIPE, Anchor::End, &options);
        assert!(state.pipe_active(PIPE));
        state.end_hover(PIPE, Anchor::End);
        assert!(!state.pipe_active(PIPE));

        state.push_move_cursor(PIPE);
        assert!(state.pipe_active(PIPE));
        state.pop_cursor();
        assert!(!state.pipe_active(PIPE));
    }
}
