use crate::app::CommandLog;
use crate::core::ControlPointSet;
use crate::shared::EditorOptions;

use super::{InteractionState, ViewState};

/// Hauptzustand der Anwendung
///
/// Einzige veränderliche Ressource der Sitzung; wird ausschließlich über den
/// `AppController` mutiert.
pub struct AppState {
    /// Kontrollpunkte der Kurve
    pub control_points: ControlPointSet,
    /// Modus + Drag-Zustand
    pub interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Toleranz, Schrittweite, Farben)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            control_points: ControlPointSet::new(),
            interaction: InteractionState::new(),
            view: ViewState::new(options.show_control_polygon_default),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.control_points.len()
    }

    /// Hit-Test gegen die aktuellen Kontrollpunkte mit der konfigurierten Toleranz.
    pub fn hit_test(&self, pos: crate::core::Point) -> Option<usize> {
        crate::core::find_nearest(
            self.control_points.as_slice(),
            pos,
            self.options.hit_tolerance,
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
