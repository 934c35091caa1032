//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Erstellung ===
            AppCommand::CreatePipeAt { pos } => handlers::creation::create_pipe(state, pos),

            // === Anker-Gesten ===
            AppCommand::SetAnchorHovered { pipe, anchor } => {
                handlers::interaction::anchor_hover_entered(state, pipe, anchor)
            }
            AppCommand::ClearAnchorHovered { pipe, anchor } => {
                handlers::interaction::anchor_hover_left(state, pipe, anchor)
            }
            AppCommand::BeginAnchorDrag { pipe, anchor } => {
                handlers::interaction::anchor_drag_started(state, pipe, anchor)
            }
            AppCommand::MoveAnchor { pipe, anchor, pos } => {
                handlers::interaction::anchor_drag_moved(state, pipe, anchor, pos)
            }
            AppCommand::EndAnchorDrag { pipe, anchor } => {
                handlers::interaction::anchor_drag_ended(state, pipe, anchor)
            }

            // === Cursor ===
            AppCommand::PushMoveCursor { pipe } => {
                handlers::interaction::region_entered(state, pipe)
            }
            AppCommand::PopMoveCursor => {
                // Die Region-ID ist für das Pop irrelevant (Slot der Tiefe 1)
                if let Some(pipe) = state.interaction.region_pipe {
                    handlers::interaction::region_left(state, pipe);
                } else {
                    state.interaction.pop_cursor();
                }
            }

            // === Fläche ===
            AppCommand::SetSurfaceSize { size } => handlers::view::set_surface_size(state, size),
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
