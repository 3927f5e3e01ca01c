//! Application State — zentrale Datenhaltung.

mod app_state;
mod interaction;
mod view;

pub use app_state::AppState;
pub use interaction::{DragState, InteractionMode, InteractionState};
pub use view::ViewState;
