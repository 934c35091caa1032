//! Core-Domänentypen: Pipes, Hülle, Evaluatoren, Sketch-Sammlung.

pub mod evaluator;
pub mod geometry;
/// Core-Datenmodelle für das Sketchpad
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - QuadraticPipe: Kurven-Entität mit drei Kontrollpunkten
/// - Sketch: Container für alle Pipes einer Session
pub mod pipe;
pub mod sketch;

pub use evaluator::{AxisEvaluator, PipeEvaluator};
pub use pipe::{Anchor, BoundingEnvelope, GeometryError, QuadraticPipe};
pub use sketch::{PipeId, Sketch};
