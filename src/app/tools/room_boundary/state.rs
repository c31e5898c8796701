//! State-Definitionen und Konstruktor für das Raumgrenzen-Werkzeug.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::RoomBoundary;
use crate::shared::RoomOptions;

/// Expliziter Zustand des Raumgrenzen-Werkzeugs.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BoundaryDrawState {
    /// Kein Raum in Arbeit
    #[default]
    Idle,
    /// Neuer Raum wird Punkt für Punkt definiert
    Defining {
        /// Raum im Aufbau
        boundary: RoomBoundary,
    },
    /// Abgeschlossener Raum wurde zur Bearbeitung wieder geöffnet
    Editing {
        /// Bearbeitete Kopie
        boundary: RoomBoundary,
        /// Unveränderter Stand (wird bei Abbruch zurückgelegt)
        original: RoomBoundary,
        /// Frühere Position im Raum-Set
        index: usize,
    },
}

/// Kurzform des Zustands für UI/Statuszeile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPhase {
    /// Kein Raum in Arbeit
    Idle,
    /// Neuer Raum im Aufbau
    Defining,
    /// Bestehender Raum in Bearbeitung
    Editing,
}

/// Rückgabe von `add_point`, steuert den Werkzeug-Flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomPointOutcome {
    /// Kein Raum in Arbeit, Punkt verworfen
    Ignored,
    /// Punkt an Index angehängt
    Appended(usize),
    /// Klick nahe am ersten Punkt hat den Raum geschlossen
    Closed(String),
}

/// Raumgrenzen-Werkzeug einer Editier-Sitzung.
#[derive(Debug, Clone)]
pub struct RoomBoundaryManager {
    pub(crate) options: RoomOptions,
    pub(crate) state: BoundaryDrawState,
    /// Abgeschlossene Räume in Einfügereihenfolge
    pub(crate) rooms: Vec<RoomBoundary>,
    pub(crate) next_id: u64,
    pub(crate) rng: StdRng,
}

impl RoomBoundaryManager {
    /// Erstellt ein Werkzeug ohne Räume.
    pub fn new(options: RoomOptions) -> Self {
        let rng = StdRng::seed_from_u64(options.color_seed);
        Self {
            options,
            state: BoundaryDrawState::Idle,
            rooms: Vec::new(),
            next_id: 0,
            rng,
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> BoundaryPhase {
        match self.state {
            BoundaryDrawState::Idle => BoundaryPhase::Idle,
            BoundaryDrawState::Defining { .. } => BoundaryPhase::Defining,
            BoundaryDrawState::Editing { .. } => BoundaryPhase::Editing,
        }
    }

    /// Expliziter Zustand (für Overlay-Rendering).
    pub fn state(&self) -> &BoundaryDrawState {
        &self.state
    }

    /// Raum im Aufbau bzw. in Bearbeitung.
    pub fn working(&self) -> Option<&RoomBoundary> {
        match &self.state {
            BoundaryDrawState::Idle => None,
            BoundaryDrawState::Defining { boundary }
            | BoundaryDrawState::Editing { boundary, .. } => Some(boundary),
        }
    }

    pub(crate) fn working_mut(&mut self) -> Option<&mut RoomBoundary> {
        match &mut self.state {
            BoundaryDrawState::Idle => None,
            BoundaryDrawState::Defining { boundary }
            | BoundaryDrawState::Editing { boundary, .. } => Some(boundary),
        }
    }

    /// Vergibt die nächste freie Raum-ID (`room-N`).
    ///
    /// IDs importierter Räume und des Raums in Arbeit werden übersprungen.
    pub(crate) fn next_room_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("room-{}", self.next_id);
            let taken = self.rooms.iter().any(|room| room.id == id)
                || self.working().is_some_and(|room| room.id == id);
            if !taken {
                return id;
            }
        }
    }

    /// Zufällige Pastellfarbe (Mischung mit Weiß) als `#rrggbb`.
    pub(crate) fn pastel_color(&mut self) -> String {
        let rng = &mut self.rng;
        let [r, g, b] = [(); 3].map(|_| (rng.gen_range(0..=255u16) + 255) / 2);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for RoomBoundaryManager {
    fn default() -> Self {
        Self::new(RoomOptions::default())
    }
}
