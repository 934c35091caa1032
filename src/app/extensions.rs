//! Reservierte Erweiterungs-Schnittstellen.
//!
//! Andockpunkte für künftige Subsysteme des Sketchpads. Bewusst ohne
//! Methoden: die Verantwortlichkeiten sind noch nicht festgelegt und
//! werden erst mit dem jeweiligen Feature definiert.

/// Abschuss-Mechanik entlang einer Pipe (geplant).
pub trait LauncherExtension {}

/// Hindernisse auf der Zeichenfläche (geplant).
pub trait ObstacleExtension {}

/// Ziel-Objekte, die Pipes treffen sollen (geplant).
pub trait TargetExtension {}

/// Verwaltung mehrerer Pipes als Gruppe (geplant).
pub trait PipeGroupExtension {}
