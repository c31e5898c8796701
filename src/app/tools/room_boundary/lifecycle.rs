//! Lifecycle-Methoden des Raumgrenzen-Werkzeugs.

use glam::DVec2;

use super::state::{BoundaryDrawState, RoomBoundaryManager, RoomPointOutcome};
use crate::app::snap::SnapResolver;
use crate::core::{RoomAttributes, RoomBoundary};

impl RoomBoundaryManager {
    /// Beginnt einen neuen Raum. Ein Raum in Arbeit wird vorher abgebrochen.
    pub fn start(&mut self, name: Option<&str>) -> String {
        if !matches!(self.state, BoundaryDrawState::Idle) {
            log::debug!("Neuer Raum gestartet, laufende Bearbeitung wird abgebrochen");
            self.cancel();
        }

        let id = self.next_room_id();
        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Room {}", self.next_id));
        let mut boundary = RoomBoundary::new(id.clone(), name, self.options.default_wall_height);
        boundary.color = self.pastel_color();

        log::debug!("Raum {} gestartet", id);
        self.state = BoundaryDrawState::Defining { boundary };
        id
    }

    /// Fügt einen Punkt hinzu (ohne Hilfslinien-Snap).
    ///
    /// Liegt der Punkt bei mindestens 3 vorhandenen Punkten näher als der
    /// Schließ-Abstand am ersten Punkt, wird der Raum abgeschlossen statt erweitert.
    pub fn add_point(&mut self, point: DVec2) -> RoomPointOutcome {
        let close_distance = self.options.close_distance;
        let Some(boundary) = self.working_mut() else {
            return RoomPointOutcome::Ignored;
        };
        if !point.is_finite() {
            return RoomPointOutcome::Ignored;
        }

        let closes = match boundary.points() {
            [first, _, _, ..] => point.distance(*first) < close_distance,
            _ => false,
        };
        if closes {
            return match self.complete() {
                Some(id) => RoomPointOutcome::Closed(id),
                None => RoomPointOutcome::Ignored,
            };
        }

        boundary.push_point(point);
        RoomPointOutcome::Appended(boundary.points().len() - 1)
    }

    /// Fügt einen Punkt hinzu und rastet ihn vorher auf Hilfslinien ein,
    /// sofern `snap_points_to_guides` aktiv ist.
    pub fn add_point_snapped(&mut self, point: DVec2, resolver: &SnapResolver) -> RoomPointOutcome {
        let point = if self.options.snap_points_to_guides {
            resolver.snap_to_guides(point).point
        } else {
            point
        };
        self.add_point(point)
    }

    /// Schließt den Raum in Arbeit ab und übernimmt ihn ins Raum-Set.
    ///
    /// No-op (Rückgabe `None`) bei weniger als 3 Punkten oder ohne Raum in Arbeit.
    pub fn complete(&mut self) -> Option<String> {
        if self.working().map_or(true, |b| b.points().len() < 3) {
            return None;
        }

        match std::mem::take(&mut self.state) {
            BoundaryDrawState::Idle => None,
            BoundaryDrawState::Defining { mut boundary } => {
                boundary.close();
                let id = boundary.id.clone();
                log::debug!("Raum {} abgeschlossen (Fläche {:.1})", id, boundary.area());
                self.rooms.push(boundary);
                Some(id)
            }
            BoundaryDrawState::Editing {
                mut boundary,
                index,
                ..
            } => {
                boundary.close();
                let id = boundary.id.clone();
                log::debug!("Raum {} nach Bearbeitung erneut abgeschlossen", id);
                let index = index.min(self.rooms.len());
                self.rooms.insert(index, boundary);
                Some(id)
            }
        }
    }

    /// Bricht ab. Ein bearbeiteter Raum kehrt unverändert ins Raum-Set zurück.
    pub fn cancel(&mut self) {
        match std::mem::take(&mut self.state) {
            BoundaryDrawState::Idle => {}
            BoundaryDrawState::Defining { boundary } => {
                log::debug!("Raum {} verworfen", boundary.id);
            }
            BoundaryDrawState::Editing {
                original, index, ..
            } => {
                log::debug!("Bearbeitung von Raum {} abgebrochen", original.id);
                let index = index.min(self.rooms.len());
                self.rooms.insert(index, original);
            }
        }
    }

    /// Öffnet einen abgeschlossenen Raum zur Bearbeitung.
    ///
    /// Der Raum verlässt das Raum-Set bis `complete()` oder `cancel()`.
    /// Unbekannte IDs → `false`.
    pub fn start_editing(&mut self, room_id: &str) -> bool {
        if !self.rooms.iter().any(|room| room.id == room_id) {
            return false;
        }
        if !matches!(self.state, BoundaryDrawState::Idle) {
            self.cancel();
        }
        // Erst nach `cancel()` suchen: ein zurückgelegter Raum verschiebt die Indizes
        let Some(index) = self.rooms.iter().position(|room| room.id == room_id) else {
            return false;
        };

        let original = self.rooms.remove(index);
        let mut boundary = original.clone();
        boundary.reopen();
        log::debug!("Raum {} zur Bearbeitung geöffnet", room_id);
        self.state = BoundaryDrawState::Editing {
            boundary,
            original,
            index,
        };
        true
    }

    /// Verschiebt einen Punkt des Raums in Arbeit.
    pub fn move_point(&mut self, index: usize, position: DVec2) -> bool {
        if !position.is_finite() {
            return false;
        }
        self.working_mut()
            .map_or(false, |boundary| boundary.move_point(index, position))
    }

    /// Entfernt einen Punkt des Raums in Arbeit (nie unter 3 Punkte).
    pub fn remove_point(&mut self, index: usize) -> bool {
        self.working_mut()
            .map_or(false, |boundary| boundary.remove_point(index))
    }

    // ── Raum-Set ─────────────────────────────────────────────────

    /// Alle abgeschlossenen Räume.
    pub fn rooms(&self) -> &[RoomBoundary] {
        &self.rooms
    }

    /// Abgeschlossener Raum per ID.
    pub fn room(&self, room_id: &str) -> Option<&RoomBoundary> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    /// Entfernt einen abgeschlossenen Raum.
    pub fn remove_room(&mut self, room_id: &str) -> Option<RoomBoundary> {
        let index = self.rooms.iter().position(|room| room.id == room_id)?;
        Some(self.rooms.remove(index))
    }

    /// Benennt einen abgeschlossenen Raum um.
    pub fn rename_room(&mut self, room_id: &str, name: impl Into<String>) -> bool {
        match self.rooms.iter_mut().find(|room| room.id == room_id) {
            Some(room) => {
                room.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Ändert Material- und Höhenattribute. Die Fläche bleibt aus den Punkten abgeleitet.
    pub fn update_attributes(
        &mut self,
        room_id: &str,
        edit: impl FnOnce(&mut RoomAttributes),
    ) -> bool {
        let Some(room) = self.rooms.iter_mut().find(|room| room.id == room_id) else {
            return false;
        };
        edit(&mut room.attributes);
        room.refresh_area();
        if !room.attributes.wall_height.is_finite() || room.attributes.wall_height < 0.0 {
            room.attributes.wall_height = self.options.default_wall_height;
        }
        true
    }

    /// Übernimmt bereits abgeschlossene Räume (z.B. aus einem Import).
    /// Offene Räume werden übersprungen.
    pub fn import_rooms(&mut self, rooms: impl IntoIterator<Item = RoomBoundary>) -> usize {
        let before = self.rooms.len();
        for room in rooms {
            if !room.is_closed() {
                log::warn!("Raum {} ist nicht geschlossen, wird nicht übernommen", room.id);
                continue;
            }
            if self.rooms.iter().any(|existing| existing.id == room.id) {
                log::warn!("Raum-ID {} existiert bereits, wird übersprungen", room.id);
                continue;
            }
            self.rooms.push(room);
        }
        self.rooms.len() - before
    }

    /// Verwirft alle Räume und den Raum in Arbeit.
    pub fn clear(&mut self) {
        self.state = BoundaryDrawState::Idle;
        self.rooms.clear();
    }
}
