//! JSON-Schnappschuss eines Grundrisses (Objekte + Räume) für Werkzeuge und Tests.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{FloorPlan, PlanObject, RoomBoundary};

/// Serialisierte Form: `{ "objects": [...], "rooms": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSnapshot {
    /// Alle Planobjekte in Dateireihenfolge
    pub objects: Vec<PlanObject>,
    /// Raumgrenzen; nur geschlossene werden übernommen
    pub rooms: Vec<RoomBoundary>,
}

impl PlanSnapshot {
    /// Parst einen Schnappschuss aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Grundriss-Schnappschuss ist kein gültiges JSON")
    }

    /// Liest einen Schnappschuss aus einer Datei.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Datei {} nicht lesbar", path.display()))?;
        Self::from_json(&content)
    }

    /// Baut den Grundriss; offene Räume werden verworfen.
    pub fn into_parts(self) -> (FloorPlan, Vec<RoomBoundary>) {
        let rooms = self
            .rooms
            .into_iter()
            .filter(|room| {
                if !room.is_closed() {
                    log::warn!("Raum {} ist nicht geschlossen, wird ignoriert", room.id);
                }
                room.is_closed()
            })
            .collect();
        (FloorPlan::from_objects(self.objects), rooms)
    }
}
