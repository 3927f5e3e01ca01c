//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kontrollpunkte, Modus, Drag).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::{AppController, RedrawListener};
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DragState, InteractionMode, InteractionState, ViewState};
