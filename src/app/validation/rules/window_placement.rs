//! Fenster: Wandbezug und Abstand zur Wandecke.

use super::host_walls;
use crate::app::validation::{
    IssueCategory, IssueKind, Severity, ValidationIssue, ValidationRule,
};
use crate::core::{FloorPlan, ObjectType, RoomBoundary};

/// Jedes Fenster muss in einer Wand sitzen und Abstand zu deren Ecken halten.
#[derive(Debug, Clone, Copy)]
pub struct WindowPlacementRule {
    corner_clearance: f64,
}

impl WindowPlacementRule {
    /// Regel mit Mindestabstand zur Wandecke.
    pub fn new(corner_clearance: f64) -> Self {
        Self { corner_clearance }
    }
}

impl ValidationRule for WindowPlacementRule {
    fn id(&self) -> &str {
        "window-placement"
    }

    fn name(&self) -> &str {
        "Window Placement"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::Placement
    }

    fn evaluate(
        &self,
        plan: &FloorPlan,
        _rooms: &[RoomBoundary],
    ) -> anyhow::Result<Vec<ValidationIssue>> {
        let mut issues = Vec::new();
        for window in plan.objects_of_type(ObjectType::Window) {
            let center = window.center();
            let Some(wall) = host_walls(plan, window).next() else {
                issues.push(
                    ValidationIssue::new(
                        format!("{}:{}", self.id(), window.id),
                        IssueKind::Error,
                        Severity::High,
                        self.category(),
                        "Window Not On Wall",
                    )
                    .with_description(format!("Window '{}' is not placed on a wall", window.id))
                    .with_objects([window.id.as_str()])
                    .at(center)
                    .with_suggestion("Move the window onto a wall"),
                );
                continue;
            };

            let footprint = window.bounds();
            let corner_distance = wall
                .bounds()
                .corners()
                .into_iter()
                .map(|corner| footprint.distance_to(corner))
                .fold(f64::INFINITY, f64::min);

            if corner_distance < self.corner_clearance {
                issues.push(
                    ValidationIssue::new(
                        format!("{}:{}+{}:corner", self.id(), window.id, wall.id),
                        IssueKind::Warning,
                        Severity::Medium,
                        self.category(),
                        "Window Too Close To Corner",
                    )
                    .with_description(format!(
                        "Window '{}' is {:.1} from a corner of wall '{}', minimum is {:.0}",
                        window.id, corner_distance, wall.id, self.corner_clearance
                    ))
                    .with_objects([window.id.as_str(), wall.id.as_str()])
                    .at(center)
                    .with_suggestion("Move the window further from the wall corner"),
                );
            }
        }
        Ok(issues)
    }
}
