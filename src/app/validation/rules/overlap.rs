//! Kollisionen zwischen Objekten.

use crate::app::validation::{
    IssueCategory, IssueKind, Severity, ValidationIssue, ValidationRule,
};
use crate::core::{FloorPlan, ObjectType, PlanObject, RoomBoundary};

/// Meldet jedes Objektpaar, dessen Bounding-Boxen sich echt überlappen.
///
/// Ausgenommen: Text- und Raumobjekte, Öffnungen in Wänden (Wand ↔ Tür/Fenster)
/// und Wandanschlüsse (Wand ↔ Wand).
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapRule;

fn excluded_pair(a: &PlanObject, b: &PlanObject) -> bool {
    let (ta, tb) = (a.object_type, b.object_type);
    match (ta, tb) {
        (ObjectType::Wall, ObjectType::Wall) => true,
        (ObjectType::Wall, other) | (other, ObjectType::Wall) => other.is_opening(),
        _ => false,
    }
}

impl ValidationRule for OverlapRule {
    fn id(&self) -> &str {
        "overlap"
    }

    fn name(&self) -> &str {
        "Overlapping Objects"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::Spacing
    }

    fn evaluate(
        &self,
        plan: &FloorPlan,
        _rooms: &[RoomBoundary],
    ) -> anyhow::Result<Vec<ValidationIssue>> {
        let candidates: Vec<(&PlanObject, _)> = plan
            .objects()
            .filter(|o| !matches!(o.object_type, ObjectType::Text | ObjectType::Room))
            .map(|o| (o, o.bounds()))
            .collect();

        let mut issues = Vec::new();
        for (i, (a, bounds_a)) in candidates.iter().enumerate() {
            for (b, bounds_b) in &candidates[i + 1..] {
                if excluded_pair(a, b) || !bounds_a.overlaps(bounds_b) {
                    continue;
                }
                let position = (bounds_a.center() + bounds_b.center()) * 0.5;
                issues.push(
                    ValidationIssue::new(
                        format!("{}:{}+{}", self.id(), a.id, b.id),
                        IssueKind::Warning,
                        Severity::Medium,
                        self.category(),
                        "Overlapping Objects",
                    )
                    .with_description(format!("'{}' overlaps '{}'", a.id, b.id))
                    .with_objects([a.id.as_str(), b.id.as_str()])
                    .at(position)
                    .with_suggestion("Move one of the objects so they no longer intersect"),
                );
            }
        }
        Ok(issues)
    }
}
