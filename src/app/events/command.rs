use crate::core::Point;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kontrollpunkt am Ende anhängen
    AddControlPoint { pos: Point },
    /// Drag auf Kontrollpunkt `index` beginnen
    BeginDrag { index: usize },
    /// Gezogenen Kontrollpunkt an neue Position setzen
    MoveDraggedPoint { pos: Point },
    /// Drag beenden (auch ohne aktiven Drag erlaubt)
    EndDrag,
    /// Kontrollpunkt `index` entfernen
    DeleteControlPoint { index: usize },
    /// Add-Modus umschalten
    ToggleAddingMode,
    /// Kontrollpolygon ein-/ausblenden
    ToggleControlPolygon,
    /// Kurvenanzeige anfordern
    RequestCurve,
    /// Alle Kontrollpunkte löschen
    ClearAll,
    /// Neue Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
}
