//! UI-Glue: Eingabe-Normalisierung, Painter und Status-Bar.

pub mod canvas;
pub mod input;
pub mod status;

pub use canvas::{cursor_icon, paint_scene};
pub use input::InputState;
pub use status::render_status_bar;
