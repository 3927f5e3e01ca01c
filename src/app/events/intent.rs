use crate::core::Point;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen liegen in Canvas-Koordinaten (Ursprung oben links).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Maustaste gedrückt (Press-Down)
    PointerPressed { pos: Point },
    /// Maus bewegt
    PointerMoved { pos: Point },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Primärer Klick (Press + Release ohne Drag)
    Clicked { pos: Point },
    /// Sekundärer Klick (Rechtsklick)
    SecondaryClicked { pos: Point },
    /// Add-Modus umschalten
    ToggleAddingModeRequested,
    /// Sichtbarkeit des Kontrollpolygons umschalten
    ToggleControlPolygonRequested,
    /// Kurve zeichnen
    DrawCurveRequested,
    /// Alle Kontrollpunkte löschen und Zeichenfläche leeren
    ClearAllRequested,
    /// Optionen übernehmen
    OptionsChanged { options: Box<EditorOptions> },
}
