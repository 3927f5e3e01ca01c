//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Gesten-Auflösung: ob ein Press einen Drag startet, ein Klick
//! einen Punkt anhängt oder ein Rechtsklick löscht, entscheidet sich allein aus
//! `AppState` und Hit-Test. Die Funktion mutiert nichts.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let adding = state.interaction.is_adding_points();

    match intent {
        AppIntent::Clicked { pos } => {
            if adding {
                vec![AppCommand::AddControlPoint { pos }]
            } else {
                // Ohne Add-Modus übernehmen Press/Release die Geste
                vec![]
            }
        }
        AppIntent::PointerPressed { pos } => {
            if adding {
                return vec![];
            }
            match state.hit_test(pos) {
                Some(index) => vec![AppCommand::BeginDrag { index }],
                None => {
                    log::debug!("Press bei ({:.1}, {:.1}) ohne Treffer", pos.x, pos.y);
                    vec![]
                }
            }
        }
        AppIntent::PointerMoved { pos } => {
            if state.interaction.drag.is_active() {
                vec![AppCommand::MoveDraggedPoint { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::SecondaryClicked { pos } => match state.hit_test(pos) {
            Some(index) => vec![AppCommand::DeleteControlPoint { index }],
            None => vec![],
        },
        AppIntent::ToggleAddingModeRequested => vec![AppCommand::ToggleAddingMode],
        AppIntent::ToggleControlPolygonRequested => vec![AppCommand::ToggleControlPolygon],
        AppIntent::DrawCurveRequested => vec![AppCommand::RequestCurve],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
