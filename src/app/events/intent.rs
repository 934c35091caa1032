use crate::core::{Anchor, PipeId};
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Klick auf die Zeichenfläche (Position in Flächen-Koordinaten)
    CanvasClicked { pos: Vec2 },
    /// Zeiger betritt die Hit-Region eines Ankers
    AnchorHoverEntered { pipe: PipeId, anchor: Anchor },
    /// Zeiger verlässt die Hit-Region eines Ankers
    AnchorHoverLeft { pipe: PipeId, anchor: Anchor },
    /// Drag auf einem Anker beginnt
    AnchorDragStarted { pipe: PipeId, anchor: Anchor },
    /// Drag-Bewegung mit neuer Zielposition; ein Intent je Move-Event,
    /// niemals gebündelt oder gedrosselt
    AnchorDragMoved {
        pipe: PipeId,
        anchor: Anchor,
        pos: Vec2,
    },
    /// Plattform meldet Pointer-Up: Drag endet
    AnchorDragEnded { pipe: PipeId, anchor: Anchor },
    /// Zeiger betritt die Hüllen-Region einer Pipe (grobe Move-Affordanz)
    PipeRegionEntered { pipe: PipeId },
    /// Zeiger verlässt die Hüllen-Region einer Pipe
    PipeRegionLeft { pipe: PipeId },
    /// Oberflächen-Größe hat sich geändert
    SurfaceResized { size: [f32; 2] },
}
