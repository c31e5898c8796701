//! Fluchtweg: jeder Raum braucht eine Tür.

use super::room_marker;
use crate::app::validation::{
    IssueCategory, IssueKind, Severity, ValidationIssue, ValidationRule,
};
use crate::core::{point_in_boundary, FloorPlan, ObjectType, RoomBoundary};

/// Meldet abgeschlossene Räume ohne Tür-Mittelpunkt innerhalb der Grenze.
/// Abstellräume ("closet" im Namen) sind ausgenommen.
#[derive(Debug, Clone, Copy, Default)]
pub struct EgressRule;

impl ValidationRule for EgressRule {
    fn id(&self) -> &str {
        "egress"
    }

    fn name(&self) -> &str {
        "Egress"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::Safety
    }

    fn evaluate(
        &self,
        plan: &FloorPlan,
        rooms: &[RoomBoundary],
    ) -> anyhow::Result<Vec<ValidationIssue>> {
        let door_centers: Vec<_> = plan
            .objects_of_type(ObjectType::Door)
            .map(|door| door.center())
            .collect();

        let issues = rooms
            .iter()
            .filter(|room| room.is_closed())
            .filter(|room| !room.name.to_lowercase().contains("closet"))
            .filter(|room| {
                !door_centers
                    .iter()
                    .any(|center| point_in_boundary(*center, room))
            })
            .map(|room| {
                ValidationIssue::new(
                    format!("{}:{}", self.id(), room.id),
                    IssueKind::Error,
                    Severity::Critical,
                    self.category(),
                    "No Egress Door",
                )
                .with_description(format!("Room '{}' has no door", room.name))
                .with_objects([room.id.as_str()])
                .at(room_marker(room))
                .with_suggestion("Add a door to the room")
            })
            .collect();
        Ok(issues)
    }
}
