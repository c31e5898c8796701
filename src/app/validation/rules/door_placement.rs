//! Türen: Wandbezug und Breite.

use anyhow::ensure;

use super::host_walls;
use crate::app::validation::{
    AutoFix, IssueCategory, IssueKind, Severity, ValidationIssue, ValidationRule,
};
use crate::core::{FloorPlan, ObjectType, PlanObject, RoomBoundary};

/// Jede Tür muss in einer Wand sitzen und eine übliche Breite haben.
#[derive(Debug, Clone, Copy)]
pub struct DoorPlacementRule {
    width_min: f64,
    width_max: f64,
    width_standard: f64,
}

impl DoorPlacementRule {
    /// Regel mit Mindest-, Höchst- und Standardbreite.
    pub fn new(width_min: f64, width_max: f64, width_standard: f64) -> Self {
        Self {
            width_min,
            width_max,
            width_standard,
        }
    }

    fn width_fix(&self, door: &PlanObject) -> AutoFix {
        AutoFix::SetProperty {
            object_id: door.id.clone(),
            key: "width".into(),
            value: serde_json::json!(self.width_standard),
        }
    }
}

impl ValidationRule for DoorPlacementRule {
    fn id(&self) -> &str {
        "door-placement"
    }

    fn name(&self) -> &str {
        "Door Placement"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::Placement
    }

    fn evaluate(
        &self,
        plan: &FloorPlan,
        _rooms: &[RoomBoundary],
    ) -> anyhow::Result<Vec<ValidationIssue>> {
        ensure!(
            self.width_min <= self.width_max,
            "Türbreiten-Grenzen vertauscht ({} > {})",
            self.width_min,
            self.width_max
        );

        let mut issues = Vec::new();
        for door in plan.objects_of_type(ObjectType::Door) {
            let center = door.center();

            if host_walls(plan, door).next().is_none() {
                issues.push(
                    ValidationIssue::new(
                        format!("{}:{}", self.id(), door.id),
                        IssueKind::Error,
                        Severity::High,
                        self.category(),
                        "Door Not On Wall",
                    )
                    .with_description(format!("Door '{}' is not placed on a wall", door.id))
                    .with_objects([door.id.as_str()])
                    .at(center)
                    .with_suggestion("Move the door onto a wall"),
                );
            }

            let width = door.width();
            if width < self.width_min {
                issues.push(
                    ValidationIssue::new(
                        format!("{}:{}:width", self.id(), door.id),
                        IssueKind::Warning,
                        Severity::Medium,
                        self.category(),
                        "Door Too Narrow",
                    )
                    .with_description(format!(
                        "Door '{}' is {:.0} wide, minimum is {:.0}",
                        door.id, width, self.width_min
                    ))
                    .with_objects([door.id.as_str()])
                    .at(center)
                    .with_suggestion(format!("Widen the door to {:.0}", self.width_standard))
                    .with_auto_fix(self.width_fix(door)),
                );
            } else if width > self.width_max {
                issues.push(
                    ValidationIssue::new(
                        format!("{}:{}:width", self.id(), door.id),
                        IssueKind::Info,
                        Severity::Low,
                        self.category(),
                        "Door Unusually Wide",
                    )
                    .with_description(format!(
                        "Door '{}' is {:.0} wide, more than {:.0}",
                        door.id, width, self.width_max
                    ))
                    .with_objects([door.id.as_str()])
                    .at(center)
                    .with_suggestion("Consider a double door or a standard width")
                    .with_auto_fix(self.width_fix(door)),
                );
            }
        }
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn rule() -> DoorPlacementRule {
        DoorPlacementRule::new(24.0, 48.0, 36.0)
    }

    fn wall() -> PlanObject {
        PlanObject::wall("w", DVec2::new(0.0, 0.0), DVec2::new(200.0, 0.0))
    }

    #[test]
    fn door_on_wall_with_standard_width_is_clean() {
        let plan = FloorPlan::from_objects([wall(), PlanObject::door("d", DVec2::new(50.0, -3.0), 36.0)]);
        assert!(rule().evaluate(&plan, &[]).unwrap().is_empty());
    }

    #[test]
    fn free_standing_door_is_high_error() {
        let plan = FloorPlan::from_objects([wall(), PlanObject::door("d", DVec2::new(50.0, 80.0), 36.0)]);
        let issues = rule().evaluate(&plan, &[]).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Error);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].id, "door-placement:d");
    }

    #[test]
    fn narrow_and_wide_doors_carry_width_fix() {
        let plan = FloorPlan::from_objects([
            wall(),
            PlanObject::door("narrow", DVec2::new(10.0, -3.0), 20.0),
            PlanObject::door("wide", DVec2::new(100.0, -3.0), 60.0),
        ]);
        let issues = rule().evaluate(&plan, &[]).unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[1].severity, Severity::Low);
        assert_eq!(issues[1].kind, IssueKind::Info);
        assert_eq!(
            issues[0].auto_fix,
            Some(AutoFix::SetProperty {
                object_id: "narrow".into(),
                key: "width".into(),
                value: serde_json::json!(36.0),
            })
        );
    }

    #[test]
    fn swapped_limits_fail_the_rule() {
        let plan = FloorPlan::new();
        assert!(DoorPlacementRule::new(50.0, 10.0, 36.0)
            .evaluate(&plan, &[])
            .is_err());
    }
}
