//! Eingabe-Events einer Editier-Sitzung.

use glam::DVec2;

use crate::core::GuideOrientation;

/// Zeiger- und Menü-Eingaben ohne eigene Mutationslogik.
/// Werden von `EditorSession::handle_intent` auf die Engines verteilt.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIntent {
    /// Neuen Raum beginnen (optional mit Namen)
    RoomStartRequested { name: Option<String> },
    /// Klick im Raumwerkzeug
    RoomPointClicked { world_pos: DVec2 },
    /// Raum manuell abschließen
    RoomCompleteRequested,
    /// Raum im Aufbau bzw. in Bearbeitung verwerfen
    RoomCancelRequested,
    /// Abgeschlossenen Raum zur Bearbeitung öffnen
    RoomEditRequested { room_id: String },
    /// Schnittlinie beginnen
    SectionPointerDown { world_pos: DVec2 },
    /// Endpunkt der Schnittlinie ziehen
    SectionPointerMoved { world_pos: DVec2 },
    /// Schnittlinie loslassen → festschreiben
    SectionPointerUp { world_pos: DVec2 },
    /// Hilfslinie anlegen
    GuideAdded {
        orientation: GuideOrientation,
        offset: f64,
        temporary: bool,
    },
    /// Hilfslinie entfernen
    GuideRemoved { guide_id: String },
    /// Prüflauf anstoßen
    ValidateRequested,
}
