//! Layer-übergreifende Verträge: Optionen und Render-Szene.

pub mod options;
pub mod render_scene;

pub use options::SketchOptions;
pub use render_scene::{AnchorEmphasis, AnchorVisual, CursorStyle, PipeVisual, RenderScene};
