//! Render-Szene als expliziter Übergabevertrag zwischen App und Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::SketchOptions;
use crate::core::{Anchor, BoundingEnvelope, PipeId};
use glam::Vec2;

/// Cursor-Affordanz, die das UI anwenden soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// Standard-Pfeil
    #[default]
    Default,
    /// Zeige-Hand über einem Anker
    Pointer,
    /// Move-Kreuz über einer Hüllen-Region
    Move,
}

/// Visuelle Betonung eines Ankers (Radius + Strichstärke).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorEmphasis {
    pub radius: f32,
    pub stroke_width: f32,
}

/// Darstellungsdaten eines einzelnen Ankers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorVisual {
    /// Welcher der drei Anker
    pub anchor: Anchor,
    /// Position auf der Zeichenfläche
    pub position: Vec2,
    /// Aktuelle Betonung (bei Hover angehoben)
    pub emphasis: AnchorEmphasis,
}

/// Darstellungsdaten einer Pipe für einen Frame.
#[derive(Debug, Clone)]
pub struct PipeVisual {
    pub id: PipeId,
    /// Abgetasteter Kurvenkörper
    pub polyline: Vec<Vec2>,
    /// Hüllen-Rahmen
    pub envelope: BoundingEnvelope,
    /// Die drei Anker in fester Reihenfolge
    pub anchors: [AnchorVisual; 3],
    /// Formel-Trace (x- und y-Achse), nur bei aktiver Pipe gesetzt
    pub annotation: Option<[String; 2]>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Pipes in Erstellungs-Reihenfolge
    pub pipes: Vec<PipeVisual>,
    /// Anzuwendende Cursor-Affordanz
    pub cursor: CursorStyle,
    /// Oberflächen-Größe in Pixeln [Breite, Höhe]
    pub surface_size: [f32; 2],
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: SketchOptions,
}

impl RenderScene {
    /// Gibt zurück, ob mindestens eine Pipe zu zeichnen ist.
    pub fn has_pipes(&self) -> bool {
        !self.pipes.is_empty()
    }
}
