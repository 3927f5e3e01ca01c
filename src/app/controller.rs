//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Callback, der bei jedem angeforderten Redraw die aktuelle Szene erhält.
pub type RedrawListener = Box<dyn FnMut(&RenderScene)>;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Nach jedem Intent, der die Zeichenfläche verändert hat, werden alle
/// registrierten Redraw-Listener genau einmal mit einem frischen Snapshot aufgerufen.
#[derive(Default)]
pub struct AppController {
    redraw_listeners: Vec<RedrawListener>,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Listener für Redraw-Anforderungen.
    pub fn on_redraw_requested(&mut self, listener: impl FnMut(&RenderScene) + 'static) {
        self.redraw_listeners.push(Box::new(listener));
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));

        // Auch nach einem Fehler: bereits ausgeführte Mutationen sichtbar machen
        self.flush_redraw(state);
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::AddControlPoint { pos } => handlers::editing::add_control_point(state, pos),
            AppCommand::DeleteControlPoint { index } => {
                handlers::editing::delete_control_point(state, index)?
            }
            AppCommand::ClearAll => handlers::editing::clear_all(state),
            AppCommand::ToggleAddingMode => handlers::editing::toggle_adding_mode(state),

            // === Drag ===
            AppCommand::BeginDrag { index } => handlers::drag::begin(state, index)?,
            AppCommand::MoveDraggedPoint { pos } => handlers::drag::move_to(state, pos)?,
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Darstellung ===
            AppCommand::ToggleControlPolygon => handlers::view::toggle_control_polygon(state),
            AppCommand::RequestCurve => handlers::view::request_curve(state),
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, *options),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    /// Ruft alle Listener auf, falls seit dem letzten Aufruf ein Redraw angefordert wurde.
    fn flush_redraw(&mut self, state: &mut AppState) {
        if !state.view.take_redraw() || self.redraw_listeners.is_empty() {
            return;
        }
        let scene = render_scene::build(state);
        for listener in &mut self.redraw_listeners {
            listener(&scene);
        }
    }
}
