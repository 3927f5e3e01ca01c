/// Eingabemodus des Editors (gilt für die ganze Sitzung, nicht pro Punkt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Klicks fügen nichts hinzu; Drücken auf einen Punkt startet einen Drag
    #[default]
    Idle,
    /// Klicks hängen neue Kontrollpunkte an
    AddingPoints,
}

impl InteractionMode {
    /// Liefert den jeweils anderen Modus.
    pub fn toggled(self) -> Self {
        match self {
            Self::Idle => Self::AddingPoints,
            Self::AddingPoints => Self::Idle,
        }
    }
}

/// Drag-Zustand der primären Maustaste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Kontrollpunkt `index` wird verschoben (Index fest für den ganzen Drag)
    Dragging { index: usize },
}

impl DragState {
    /// Index des gezogenen Punkts, falls ein Drag aktiv ist.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { index } => Some(index),
        }
    }

    /// True wenn ein Drag aktiv ist.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Gesamter Interaktionszustand als ein Wert statt verstreuter Flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Aktueller Eingabemodus
    pub mode: InteractionMode,
    /// Aktueller Drag-Zustand
    pub drag: DragState,
}

impl InteractionState {
    /// Erstellt den Startzustand (kein Add-Modus, kein Drag).
    pub fn new() -> Self {
        Self::default()
    }

    /// True wenn Klicks Punkte hinzufügen.
    pub fn is_adding_points(&self) -> bool {
        self.mode == InteractionMode::AddingPoints
    }
}
