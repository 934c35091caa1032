use crate::app::CommandLog;
use crate::core::Sketch;
use crate::shared::SketchOptions;

use super::{InteractionState, ViewState};

/// Hauptzustand der Anwendung
#[derive(Default)]
pub struct AppState {
    /// Alle Pipes der Session
    pub sketch: Sketch,
    /// View-State
    pub view: ViewState,
    /// Interaktions-State (Gesten, Betonung, Cursor)
    pub interaction: InteractionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Breiten)
    pub options: SketchOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            sketch: Sketch::new(),
            view: ViewState::new(),
            interaction: InteractionState::new(),
            command_log: CommandLog::new(),
            options: SketchOptions::default(),
        }
    }

    /// Gibt die Anzahl der Pipes zurück (für UI-Anzeige)
    pub fn pipe_count(&self) -> usize {
        self.sketch.len()
    }
}
