//! Geometrie-Hilfsfunktionen für Segmente.

use glam::DVec2;

/// Determinanten unterhalb dieses Betrags gelten als parallel.
pub const PARALLEL_EPSILON: f64 = 1e-10;
/// Toleranz für "Punkt liegt auf Segment".
const ON_SEGMENT_EPSILON: f64 = 1e-9;

/// Schnittpunkt zweier Segmente (parametrisch, t und u in [0, 1]).
///
/// Parallele oder degenerierte Segmente liefern `None`.
pub fn segment_intersection(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> Option<DVec2> {
    let r = a2 - a1;
    let s = b2 - b1;
    let det = r.perp_dot(s);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let qp = b1 - a1;
    let t = qp.perp_dot(s) / det;
    let u = qp.perp_dot(r) / det;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + r * t)
    } else {
        None
    }
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
pub fn point_on_segment(point: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let scale = ab.length().max(1.0);
    if ab.perp_dot(ap).abs() > ON_SEGMENT_EPSILON * scale {
        return false;
    }

    let dot = ap.dot(ab);
    dot >= -ON_SEGMENT_EPSILON && dot <= ab.length_squared() + ON_SEGMENT_EPSILON
}

/// Abstand der Projektion von `point` auf die Gerade `start → end`, gemessen ab `start`.
///
/// Bei degenerierter Linie: Abstand zu `start`.
pub fn projected_offset(point: DVec2, start: DVec2, end: DVec2) -> f64 {
    let dir = end - start;
    let len = dir.length();
    if len < PARALLEL_EPSILON {
        return point.distance(start);
    }
    (point - start).dot(dir) / len
}
