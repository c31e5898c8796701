//! Schnittpunkte zwischen linienförmigen Objekten.

use glam::DVec2;

use super::{SnapCandidate, SnapKind};
use crate::core::geometry::segment_intersection;
use crate::core::{ObjectShape, PlanObject};

/// Schnittpunkt-Kandidaten aller Segment-Paare, die höchstens `radius` von `query` entfernt liegen.
pub fn intersection_candidates<'a>(
    query: DVec2,
    objects: impl Iterator<Item = &'a PlanObject>,
    radius: f64,
) -> Vec<SnapCandidate> {
    // Ein Schnittpunkt innerhalb von `radius` liegt auf beiden Segmenten,
    // also liegen auch beide Bounding-Boxen innerhalb von `radius`.
    let segments: Vec<(&str, DVec2, DVec2)> = objects
        .filter(|object| object.bounds().distance_to(query) <= radius)
        .filter_map(|object| match object.shape() {
            ObjectShape::Linear { start, end, .. } => Some((object.id.as_str(), start, end)),
            _ => None,
        })
        .collect();

    let mut candidates = Vec::new();
    for (i, &(id_a, a1, a2)) in segments.iter().enumerate() {
        for &(id_b, b1, b2) in &segments[i + 1..] {
            let Some(point) = segment_intersection(a1, a2, b1, b2) else {
                continue;
            };
            let distance = point.distance(query);
            if distance <= radius {
                candidates.push(SnapCandidate {
                    point,
                    kind: SnapKind::Intersection,
                    source_object_id: Some(format!("{id_a}+{id_b}")),
                    label: String::from("Schnittpunkt"),
                    distance,
                });
            }
        }
    }

    candidates
}
