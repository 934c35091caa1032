//! QuadPipe Sketchpad Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AnchorGesture, AppCommand, AppController, AppIntent, AppState, InteractionState, ViewState,
};
pub use core::{
    Anchor, AxisEvaluator, BoundingEnvelope, GeometryError, PipeEvaluator, PipeId, QuadraticPipe,
    Sketch,
};
pub use shared::{AnchorEmphasis, CursorStyle, RenderScene, SketchOptions};
