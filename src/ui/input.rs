//! Pointer-Normalisierung: egui-Events → App-Intents.
//!
//! Hält den Frame-übergreifenden Eingabe-Zustand (gemerkter Hover, aktiver
//! Drag) und synthetisiert daraus Enter/Leave- und Drag-Übergänge.

use crate::app::AppIntent;
use crate::app::AppState;
use crate::core::{Anchor, PipeId};
use glam::Vec2;

/// Frame-übergreifender Eingabe-Zustand.
#[derive(Default)]
pub struct InputState {
    /// Anker unter dem Zeiger im letzten Frame
    hovered_anchor: Option<(PipeId, Anchor)>,
    /// Hüllen-Region unter dem Zeiger im letzten Frame
    hovered_region: Option<PipeId>,
    /// Aktiver Anker-Drag
    dragging: Option<(PipeId, Anchor)>,
}

impl InputState {
    /// Erstellt den leeren Eingabe-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt alle Intents aus den Pointer-Events eines Frames.
    ///
    /// Jedes Move-Event erzeugt genau einen `AnchorDragMoved`-Intent;
    /// gedrosselt oder gebündelt wird hier nichts.
    pub fn collect_canvas_events(
        &mut self,
        rect: egui::Rect,
        response: &egui::Response,
        state: &AppState,
        events: &mut Vec<AppIntent>,
    ) {
        let to_canvas = |pos: egui::Pos2| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);

        // Drag-Lifecycle zuerst: während eines Drags sind Hover-Übergänge
        // und Klick-Erstellung unterdrückt
        if response.drag_started() {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let pos = to_canvas(pointer_pos);
                if let Some((pipe, anchor)) =
                    state.sketch.anchor_at(pos, state.options.anchor_radius)
                {
                    self.dragging = Some((pipe, anchor));
                    events.push(AppIntent::AnchorDragStarted { pipe, anchor });
                }
            }
        }

        if let Some((pipe, anchor)) = self.dragging {
            if response.dragged() {
                if let Some(pointer_pos) = response.interact_pointer_pos() {
                    events.push(AppIntent::AnchorDragMoved {
                        pipe,
                        anchor,
                        pos: to_canvas(pointer_pos),
                    });
                }
            }
            if response.drag_stopped() {
                self.dragging = None;
                // Hover wird im nächsten Frame neu erkannt
                self.hovered_anchor = None;
                events.push(AppIntent::AnchorDragEnded { pipe, anchor });
            }
            return;
        }

        // Klick: ob eine neue Pipe entsteht, entscheidet das Mapping per Hit-Test
        if response.clicked() {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::CanvasClicked {
                    pos: to_canvas(pointer_pos),
                });
            }
        }

        let pointer = response.hover_pos().map(to_canvas);

        // Hover-Übergänge für Anker
        let anchor_hit =
            pointer.and_then(|p| state.sketch.anchor_at(p, state.options.anchor_radius));
        if anchor_hit != self.hovered_anchor {
            if let Some((pipe, anchor)) = self.hovered_anchor {
                events.push(AppIntent::AnchorHoverLeft { pipe, anchor });
            }
            if let Some((pipe, anchor)) = anchor_hit {
                events.push(AppIntent::AnchorHoverEntered { pipe, anchor });
            }
            self.hovered_anchor = anchor_hit;
        }

        // Grobe Hüllen-Region (Move-Cursor)
        let region_hit = pointer.and_then(|p| state.sketch.envelope_at(p));
        if region_hit != self.hovered_region {
            if let Some(pipe) = self.hovered_region {
                events.push(AppIntent::PipeRegionLeft { pipe });
            }
            if let Some(pipe) = region_hit {
                events.push(AppIntent::PipeRegionEntered { pipe });
            }
            self.hovered_region = region_hit;
        }
    }
}
