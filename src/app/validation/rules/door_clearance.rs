//! Freier Aufschlagbereich vor Türen.

use glam::DVec2;

use crate::app::validation::{
    IssueCategory, IssueKind, Severity, ValidationIssue, ValidationRule,
};
use crate::core::{Bounds, FloorPlan, ObjectType, PlanObject, RoomBoundary, SwingDirection};

/// Quadratischer Aufschlagbereich (Seitenlänge = Türbreite) auf der Aufschlagseite.
pub fn swing_area(door: &PlanObject) -> Bounds {
    let footprint = door.bounds();
    let side = door.width();
    let (min, max) = (footprint.min, footprint.max);
    match door.properties.swing.unwrap_or_default() {
        SwingDirection::South => Bounds::from_corners(
            DVec2::new(min.x, max.y),
            DVec2::new(min.x + side, max.y + side),
        ),
        SwingDirection::North => Bounds::from_corners(
            DVec2::new(min.x, min.y - side),
            DVec2::new(min.x + side, min.y),
        ),
        SwingDirection::East => Bounds::from_corners(
            DVec2::new(max.x, min.y),
            DVec2::new(max.x + side, min.y + side),
        ),
        SwingDirection::West => Bounds::from_corners(
            DVec2::new(min.x - side, min.y),
            DVec2::new(min.x, min.y + side),
        ),
    }
}

/// Meldet Objekte im Aufschlagbereich einer Tür.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoorClearanceRule;

fn is_obstacle(object: &PlanObject) -> bool {
    !matches!(
        object.object_type,
        ObjectType::Wall | ObjectType::Door | ObjectType::Text | ObjectType::Room
    )
}

impl ValidationRule for DoorClearanceRule {
    fn id(&self) -> &str {
        "door-clearance"
    }

    fn name(&self) -> &str {
        "Door Clearance"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::Accessibility
    }

    fn evaluate(
        &self,
        plan: &FloorPlan,
        _rooms: &[RoomBoundary],
    ) -> anyhow::Result<Vec<ValidationIssue>> {
        let mut issues = Vec::new();
        for door in plan.objects_of_type(ObjectType::Door) {
            let area = swing_area(door);
            for obstacle in plan.objects().filter(|o| is_obstacle(o)) {
                if !area.overlaps(&obstacle.bounds()) {
                    continue;
                }
                issues.push(
                    ValidationIssue::new(
                        format!("{}:{}+{}", self.id(), door.id, obstacle.id),
                        IssueKind::Warning,
                        Severity::Medium,
                        self.category(),
                        "Door Swing Blocked",
                    )
                    .with_description(format!(
                        "'{}' blocks the swing of door '{}'",
                        obstacle.id, door.id
                    ))
                    .with_objects([door.id.as_str(), obstacle.id.as_str()])
                    .at(area.center())
                    .with_suggestion("Keep the door swing area clear"),
                );
            }
        }
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door(swing: SwingDirection) -> PlanObject {
        PlanObject::door("d", DVec2::new(0.0, 0.0), 36.0).with_properties(|p| p.swing = Some(swing))
    }

    #[test]
    fn swing_area_follows_direction() {
        let south = swing_area(&door(SwingDirection::South));
        assert_eq!(south.min, DVec2::new(0.0, 6.0));
        assert_eq!(south.max, DVec2::new(36.0, 42.0));

        let north = swing_area(&door(SwingDirection::North));
        assert_eq!(north.min, DVec2::new(0.0, -36.0));
        assert_eq!(north.max, DVec2::new(36.0, 0.0));

        let east = swing_area(&door(SwingDirection::East));
        assert_eq!(east.min, DVec2::new(36.0, 0.0));

        let west = swing_area(&door(SwingDirection::West));
        assert_eq!(west.max, DVec2::new(0.0, 36.0));
    }

    #[test]
    fn furniture_in_swing_is_reported_walls_are_not() {
        let plan = FloorPlan::from_objects([
            door(SwingDirection::South),
            PlanObject::wall("w", DVec2::new(-50.0, 20.0), DVec2::new(100.0, 20.0)),
            PlanObject::rect("chair", ObjectType::Furniture, DVec2::new(10.0, 10.0), 10.0, 10.0),
            PlanObject::rect("bed", ObjectType::Furniture, DVec2::new(10.0, -80.0), 10.0, 10.0),
        ]);
        let issues = DoorClearanceRule.evaluate(&plan, &[]).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "door-clearance:d+chair");
        assert_eq!(issues[0].related_object_ids, vec!["d", "chair"]);
    }
}
