//! Anwendungszustand: Sketch, View und Interaktion.

mod app_state;
mod interaction;
mod view;

pub use app_state::AppState;
pub use interaction::{AnchorGesture, InteractionState};
pub use view::ViewState;
