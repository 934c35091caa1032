//! Die QuadraticPipe-Entität: drei Kontrollpunkte plus abgeleitete Hülle.

use super::evaluator::PipeEvaluator;
use glam::Vec2;
use thiserror::Error;

/// Domänen-Fehler für ungültige Geometrie-Eingaben.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Koordinate ist NaN oder unendlich.
    #[error("ungültige Geometrie: Koordinate ({0}, {1}) ist nicht endlich")]
    InvalidGeometry(f32, f32),
}

/// Einer der drei draggbaren Kontrollpunkte einer Pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Start,
    Control,
    End,
}

impl Anchor {
    /// Alle Anker in fester Reihenfolge.
    pub const ALL: [Anchor; 3] = [Anchor::Start, Anchor::Control, Anchor::End];
}

/// Achsen-parallele Hülle um die drei Kontrollpunkte.
///
/// Dient der visuellen Rahmung und der groben Move-Cursor-Region,
/// nicht dem Form-Hit-Testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingEnvelope {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingEnvelope {
    /// Berechnet die Hülle aus drei Punkten (min/max je Achse).
    pub fn from_points(a: Vec2, b: Vec2, c: Vec2) -> Self {
        let min_x = a.x.min(b.x).min(c.x);
        let min_y = a.y.min(b.y).min(c.y);
        let max_x = a.x.max(b.x).max(c.x);
        let max_y = a.y.max(b.y).max(c.y);
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Liegt `pos` innerhalb der Hülle (Ränder inklusive)?
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.x
            && pos.x <= self.x + self.width
            && pos.y >= self.y
            && pos.y <= self.y + self.height
    }
}

/// Eine quadratische Bézier-"Pipe" mit Start-, Steuer- und Endpunkt.
///
/// Invariante: alle drei Punkte sind nach Konstruktion endlich. Die Hülle
/// wird nicht automatisch nach Mutationen nachgezogen; Aufrufer stoßen
/// `recompute_envelope()` explizit an, bevor neu gezeichnet wird. Die
/// Trennung erlaubt gebündelte Mehrpunkt-Updates ohne redundante
/// Neuberechnung.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticPipe {
    start: Vec2,
    control: Vec2,
    end: Vec2,
    envelope: BoundingEnvelope,
}

impl QuadraticPipe {
    /// Erstellt eine Pipe aus drei endlichen Punkten.
    pub fn new(start: Vec2, control: Vec2, end: Vec2) -> Result<Self, GeometryError> {
        ensure_finite(start)?;
        ensure_finite(control)?;
        ensure_finite(end)?;
        Ok(Self {
            start,
            control,
            end,
            envelope: BoundingEnvelope::from_points(start, control, end),
        })
    }

    /// Startpunkt (Kopie).
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Steuerpunkt (Kopie).
    pub fn control(&self) -> Vec2 {
        self.control
    }

    /// Endpunkt (Kopie).
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Position eines Ankers (Kopie).
    pub fn anchor_position(&self, anchor: Anchor) -> Vec2 {
        match anchor {
            Anchor::Start => self.start,
            Anchor::Control => self.control,
            Anchor::End => self.end,
        }
    }

    /// Ersetzt den Startpunkt. Kein Hüllen-Refresh als Nebeneffekt.
    pub fn set_start(&mut self, p: Vec2) -> Result<(), GeometryError> {
        ensure_finite(p)?;
        self.start = p;
        Ok(())
    }

    /// Ersetzt den Steuerpunkt. Kein Hüllen-Refresh als Nebeneffekt.
    pub fn set_control(&mut self, p: Vec2) -> Result<(), GeometryError> {
        ensure_finite(p)?;
        self.control = p;
        Ok(())
    }

    /// Ersetzt den Endpunkt. Kein Hüllen-Refresh als Nebeneffekt.
    pub fn set_end(&mut self, p: Vec2) -> Result<(), GeometryError> {
        ensure_finite(p)?;
        self.end = p;
        Ok(())
    }

    /// Ersetzt den zum Anker gehörenden Punkt.
    ///
    /// Bei Ablehnung (nicht-endliche Koordinate) bleibt der vorherige
    /// Zustand vollständig erhalten.
    pub fn set_anchor(&mut self, anchor: Anchor, p: Vec2) -> Result<(), GeometryError> {
        match anchor {
            Anchor::Start => self.set_start(p),
            Anchor::Control => self.set_control(p),
            Anchor::End => self.set_end(p),
        }
    }

    /// Leitet die Hülle aus den aktuellen drei Punkten ab. Idempotent.
    pub fn recompute_envelope(&mut self) {
        self.envelope = BoundingEnvelope::from_points(self.start, self.control, self.end);
    }

    /// Zuletzt berechnete Hülle.
    pub fn envelope(&self) -> BoundingEnvelope {
        self.envelope
    }

    /// Parametrischer Evaluator (beide Achsen) unter gemeinsamem Namen.
    pub fn evaluator(&self, name: impl Into<String>) -> PipeEvaluator {
        PipeEvaluator::new(name, self.start, self.control, self.end)
    }
}

/// Beide Komponenten endlich, sonst `InvalidGeometry`.
fn ensure_finite(p: Vec2) -> Result<(), GeometryError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidGeometry(p.x, p.y))
    }
}
