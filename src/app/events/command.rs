use crate::core::{Anchor, PipeId};
use glam::Vec2;

/// Mutierende Commands auf dem AppState.
/// Entstehen ausschließlich über das Intent→Command-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neue Pipe an Klick-Position erstellen (Offset-Kette für Steuer/Ende)
    CreatePipeAt { pos: Vec2 },
    /// Anker visuell betonen und Zeige-Cursor setzen
    SetAnchorHovered { pipe: PipeId, anchor: Anchor },
    /// Anker-Betonung exakt auf Vor-Hover-Werte zurücksetzen
    ClearAnchorHovered { pipe: PipeId, anchor: Anchor },
    /// Drag-Geste auf einem Anker beginnen
    BeginAnchorDrag { pipe: PipeId, anchor: Anchor },
    /// Anker verschieben: Punkt setzen, Hülle neu ableiten, Redraw anfordern
    MoveAnchor {
        pipe: PipeId,
        anchor: Anchor,
        pos: Vec2,
    },
    /// Drag-Geste beenden
    EndAnchorDrag { pipe: PipeId, anchor: Anchor },
    /// Move-Cursor über Hüllen-Region aktivieren (Slot der Tiefe 1)
    PushMoveCursor { pipe: PipeId },
    /// Gemerkten Cursor wiederherstellen
    PopMoveCursor,
    /// Oberflächen-Größe setzen (idempotent, berührt keine Geometrie)
    SetSurfaceSize { size: [f32; 2] },
}
