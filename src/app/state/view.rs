/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Kontrollpolygon sichtbar
    pub show_control_polygon: bool,
    /// Kurve seit dem letzten Leeren mindestens einmal angefordert
    pub curve_requested: bool,
    /// Signalisiert, dass nach dem aktuellen Intent neu gezeichnet werden muss
    pub redraw_pending: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new(show_control_polygon: bool) -> Self {
        Self {
            show_control_polygon,
            curve_requested: false,
            redraw_pending: false,
        }
    }

    /// Markiert die Zeichenfläche als veraltet.
    pub fn request_redraw(&mut self) {
        self.redraw_pending = true;
    }

    /// Liest und löscht das Redraw-Flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }
}
