//! Editier-Sitzung: bündelt je eine Instanz jeder Engine und verteilt Eingaben.
//!
//! Es gibt keinen globalen Zustand. Der Grundriss gehört dem Aufrufer und wird
//! pro Aufruf nur gelesen.

use glam::DVec2;

use super::events::SessionIntent;
use super::snap::{SnapContext, SnapResolver, SnapResult};
use super::tools::room_boundary::RoomBoundaryManager;
use super::tools::section_line::SectionEngine;
use super::validation::{ValidationEngine, ValidationReport};
use crate::core::FloorPlan;
use crate::shared::EngineOptions;

/// Alle Engines einer Editier-Sitzung.
#[derive(Debug)]
pub struct EditorSession {
    /// Optionen, mit denen die Sitzung erstellt wurde
    pub options: EngineOptions,
    /// Snap-Auflösung mit den Hilfslinien der Sitzung
    pub snap: SnapResolver,
    /// Raumgrenzen (in Arbeit und abgeschlossen)
    pub rooms: RoomBoundaryManager,
    /// Schnittlinien und ihre Ansichten
    pub sections: SectionEngine,
    /// Prüfregeln und letzter Bericht
    pub validation: ValidationEngine,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl EditorSession {
    /// Erstellt eine Sitzung mit eigenen Engine-Instanzen.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            snap: SnapResolver::new(options.snap.clone()),
            rooms: RoomBoundaryManager::new(options.rooms.clone()),
            sections: SectionEngine::new(options.sections.clone()),
            validation: ValidationEngine::new(&options.validation),
            options,
        }
    }

    /// Löst einen Punkt gegen alle aktiven Snap-Quellen auf.
    pub fn snap_point(&self, plan: &FloorPlan, world_pos: DVec2) -> SnapResult {
        self.snap.resolve(world_pos, SnapContext::new(plan))
    }

    /// Führt einen Prüflauf über Grundriss und abgeschlossene Räume aus.
    pub fn validate(&mut self, plan: &FloorPlan) -> &ValidationReport {
        self.validation.validate(plan, self.rooms.rooms())
    }

    /// Verarbeitet einen Intent.
    pub fn handle_intent(&mut self, plan: &FloorPlan, intent: SessionIntent) -> anyhow::Result<()> {
        log::trace!("Intent: {:?}", intent);
        match intent {
            // === Räume ===
            SessionIntent::RoomStartRequested { name } => {
                self.rooms.start(name.as_deref());
            }
            SessionIntent::RoomPointClicked { world_pos } => {
                self.rooms.add_point_snapped(world_pos, &self.snap);
            }
            SessionIntent::RoomCompleteRequested => {
                if self.rooms.complete().is_none() {
                    log::debug!("Raum kann noch nicht abgeschlossen werden");
                }
            }
            SessionIntent::RoomCancelRequested => self.rooms.cancel(),
            SessionIntent::RoomEditRequested { room_id } => {
                if !self.rooms.start_editing(&room_id) {
                    log::debug!("Raum {} nicht gefunden", room_id);
                }
            }

            // === Schnitte ===
            SessionIntent::SectionPointerDown { world_pos } => {
                let point = self.section_point(plan, world_pos);
                self.sections.begin(point);
            }
            SessionIntent::SectionPointerMoved { world_pos } => {
                let point = self.section_point(plan, world_pos);
                self.sections.update(point);
            }
            SessionIntent::SectionPointerUp { world_pos } => {
                let point = self.section_point(plan, world_pos);
                self.sections.update(point);
                self.sections.commit(plan);
            }

            // === Hilfslinien ===
            SessionIntent::GuideAdded {
                orientation,
                offset,
                temporary,
            } => {
                anyhow::ensure!(
                    offset.is_finite(),
                    "Hilfslinien-Offset muss endlich sein: {}",
                    offset
                );
                if temporary {
                    self.snap.add_temporary_guide(orientation, offset);
                } else {
                    self.snap.add_guide(orientation, offset);
                }
            }
            SessionIntent::GuideRemoved { guide_id } => {
                self.snap.remove_guide(&guide_id);
            }

            // === Prüfung ===
            SessionIntent::ValidateRequested => {
                let summary = self.validate(plan).summary();
                log::debug!(
                    "Prüfung: {} Befunde ({} kritisch)",
                    summary.total,
                    summary.critical
                );
            }
        }
        Ok(())
    }

    fn section_point(&self, plan: &FloorPlan, world_pos: DVec2) -> DVec2 {
        if self.options.sections.snap_endpoints {
            self.snap_point(plan, world_pos).point
        } else {
            world_pos
        }
    }
}
