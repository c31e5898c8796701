//! Standard-Prüfregeln.

mod door_clearance;
mod door_placement;
mod egress;
mod overlap;
mod room_size;
mod window_placement;

pub use door_clearance::{swing_area, DoorClearanceRule};
pub use door_placement::DoorPlacementRule;
pub use egress::EgressRule;
pub use overlap::OverlapRule;
pub use room_size::{minimum_area_for, RoomSizeRule, ROOM_MINIMUMS};
pub use window_placement::WindowPlacementRule;

use glam::DVec2;

use super::rule::ValidationRule;
use crate::core::{FloorPlan, ObjectType, PlanObject, RoomBoundary};
use crate::shared::ValidationOptions;

/// Alle Standardregeln in fester Reihenfolge.
pub fn default_rules(options: &ValidationOptions) -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(OverlapRule),
        Box::new(DoorPlacementRule::new(
            options.door_width_min,
            options.door_width_max,
            options.door_width_standard,
        )),
        Box::new(WindowPlacementRule::new(options.window_corner_clearance)),
        Box::new(RoomSizeRule::new(options.area_unit_divisor)),
        Box::new(DoorClearanceRule),
        Box::new(EgressRule),
    ]
}

/// Wände, deren Bounding-Box die Box des Objekts berührt oder überlappt.
pub(crate) fn host_walls<'a>(
    plan: &'a FloorPlan,
    object: &'a PlanObject,
) -> impl Iterator<Item = &'a PlanObject> + 'a {
    let bounds = object.bounds();
    plan.objects_of_type(ObjectType::Wall)
        .filter(move |wall| wall.bounds().touches(&bounds))
}

/// Eckpunkt-Mittel eines Raums (Marker-Position).
pub(crate) fn room_marker(room: &RoomBoundary) -> DVec2 {
    let points = room.points();
    if points.is_empty() {
        return DVec2::ZERO;
    }
    points.iter().copied().sum::<DVec2>() / points.len() as f64
}
