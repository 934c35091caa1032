/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Aktuelle Oberflächen-Größe in Pixel
    pub surface_size: [f32; 2],
    /// Fire-and-forget Redraw-Anforderung; wird vom Shell pro Frame geleert
    repaint_requested: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            surface_size: [0.0, 0.0],
            repaint_requested: false,
        }
    }

    /// Fordert einen Redraw an. Mehrfache Anforderungen pro Frame kollabieren.
    pub fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }

    /// Liest und leert die Redraw-Anforderung (Shell, einmal pro Frame).
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Gibt zurück, ob aktuell ein Redraw angefordert ist (ohne zu leeren).
    pub fn repaint_requested(&self) -> bool {
        self.repaint_requested
    }
}
