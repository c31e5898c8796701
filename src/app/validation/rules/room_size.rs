//! Mindestflächen je Raumtyp.
//!
//! Der Raumtyp wird per Teilstring im Raumnamen erkannt (ohne Groß-/Kleinschreibung),
//! der erste Treffer in Tabellenreihenfolge gilt. Mehrdeutige Namen wie
//! "Bedroom Closet" landen damit beim ersten passenden Eintrag.

use anyhow::ensure;

use super::room_marker;
use crate::app::validation::{
    IssueCategory, IssueKind, Severity, ValidationIssue, ValidationRule,
};
use crate::core::{FloorPlan, RoomBoundary};

/// Mindestfläche in Quadratfuß je Namensbestandteil.
pub const ROOM_MINIMUMS: &[(&str, f64)] = &[
    ("bedroom", 70.0),
    ("bathroom", 35.0),
    ("kitchen", 50.0),
    ("living", 120.0),
    ("dining", 80.0),
    ("office", 50.0),
    ("laundry", 35.0),
    ("closet", 6.0),
];

/// Erster passender Tabelleneintrag für einen Raumnamen.
pub fn minimum_area_for(room_name: &str) -> Option<(&'static str, f64)> {
    let name = room_name.to_lowercase();
    ROOM_MINIMUMS
        .iter()
        .find(|(key, _)| name.contains(key))
        .copied()
}

/// Meldet Räume unter der Mindestfläche ihres Typs.
#[derive(Debug, Clone, Copy)]
pub struct RoomSizeRule {
    /// Planeinheiten² je Quadratfuß
    area_unit_divisor: f64,
}

impl RoomSizeRule {
    /// Regel mit Umrechnungsteiler für die Fläche (z.B. 144 für sq ft).
    pub fn new(area_unit_divisor: f64) -> Self {
        Self { area_unit_divisor }
    }
}

impl ValidationRule for RoomSizeRule {
    fn id(&self) -> &str {
        "room-size"
    }

    fn name(&self) -> &str {
        "Room Size"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::Code
    }

    fn evaluate(
        &self,
        _plan: &FloorPlan,
        rooms: &[RoomBoundary],
    ) -> anyhow::Result<Vec<ValidationIssue>> {
        ensure!(
            self.area_unit_divisor.is_finite() && self.area_unit_divisor > 0.0,
            "ungültiger Flächen-Divisor {}",
            self.area_unit_divisor
        );

        let mut issues = Vec::new();
        for room in rooms.iter().filter(|room| room.is_closed()) {
            let Some((room_type, minimum)) = minimum_area_for(&room.name) else {
                continue;
            };
            let square_feet = room.area() / self.area_unit_divisor;
            if square_feet >= minimum {
                continue;
            }
            issues.push(
                ValidationIssue::new(
                    format!("{}:{}", self.id(), room.id),
                    IssueKind::Warning,
                    Severity::Medium,
                    self.category(),
                    "Room Too Small",
                )
                .with_description(format!(
                    "'{}' has {:.1} sq ft, a {} needs at least {:.0} sq ft",
                    room.name, square_feet, room_type, minimum
                ))
                .with_objects([room.id.as_str()])
                .at(room_marker(room))
                .with_suggestion(format!("Enlarge the room to at least {minimum:.0} sq ft")),
            );
        }
        Ok(issues)
    }
}
