//! Snap-Features pro Objektform: eine reine Funktion je Form-Variante.

use glam::DVec2;

use super::SnapKind;
use crate::core::{ObjectShape, PlanObject};

/// Unterhalb dieser Ausdehnung gilt eine Form als Punkt.
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Ein einrastbarer Punkt eines Objekts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    /// Weltposition
    pub point: DVec2,
    /// Art des Features
    pub kind: SnapKind,
    /// Kurzbeschriftung für das Overlay
    pub label: &'static str,
}

impl Feature {
    fn new(point: DVec2, kind: SnapKind, label: &'static str) -> Self {
        Self { point, kind, label }
    }
}

/// Liefert alle Snap-Features eines Objekts.
pub fn object_features(object: &PlanObject) -> Vec<Feature> {
    match object.shape() {
        ObjectShape::Rect { min, max } => rect_features(min, max),
        ObjectShape::Circle { center, radius } => circle_features(center, radius),
        ObjectShape::Linear { start, end, .. } => linear_features(start, end),
    }
}

/// Rechteck: 4 Ecken, 4 Kantenmitten, Mittelpunkt.
pub fn rect_features(min: DVec2, max: DVec2) -> Vec<Feature> {
    let center = (min + max) * 0.5;
    if (max - min).abs().max_element() < DEGENERATE_EPSILON {
        return vec![Feature::new(center, SnapKind::ObjectCenter, "Mitte")];
    }

    vec![
        Feature::new(min, SnapKind::ObjectCorner, "Ecke"),
        Feature::new(DVec2::new(max.x, min.y), SnapKind::ObjectCorner, "Ecke"),
        Feature::new(max, SnapKind::ObjectCorner, "Ecke"),
        Feature::new(DVec2::new(min.x, max.y), SnapKind::ObjectCorner, "Ecke"),
        Feature::new(DVec2::new(center.x, min.y), SnapKind::ObjectEdge, "Kantenmitte"),
        Feature::new(DVec2::new(max.x, center.y), SnapKind::ObjectEdge, "Kantenmitte"),
        Feature::new(DVec2::new(center.x, max.y), SnapKind::ObjectEdge, "Kantenmitte"),
        Feature::new(DVec2::new(min.x, center.y), SnapKind::ObjectEdge, "Kantenmitte"),
        Feature::new(center, SnapKind::ObjectCenter, "Mitte"),
    ]
}

/// Kreis: Mittelpunkt + 4 Himmelsrichtungen.
pub fn circle_features(center: DVec2, radius: f64) -> Vec<Feature> {
    let mut features = vec![Feature::new(center, SnapKind::ObjectCenter, "Mittelpunkt")];
    if radius < DEGENERATE_EPSILON {
        return features;
    }

    features.extend([
        Feature::new(center + DVec2::new(0.0, -radius), SnapKind::ObjectEdge, "Quadrant"),
        Feature::new(center + DVec2::new(radius, 0.0), SnapKind::ObjectEdge, "Quadrant"),
        Feature::new(center + DVec2::new(0.0, radius), SnapKind::ObjectEdge, "Quadrant"),
        Feature::new(center + DVec2::new(-radius, 0.0), SnapKind::ObjectEdge, "Quadrant"),
    ]);
    features
}

/// Linie/Wand: 2 Endpunkte + Mittelpunkt.
pub fn linear_features(start: DVec2, end: DVec2) -> Vec<Feature> {
    if start.distance(end) < DEGENERATE_EPSILON {
        return vec![Feature::new(start, SnapKind::ObjectCorner, "Endpunkt")];
    }

    vec![
        Feature::new(start, SnapKind::ObjectCorner, "Endpunkt"),
        Feature::new(end, SnapKind::ObjectCorner, "Endpunkt"),
        Feature::new(start.lerp(end, 0.5), SnapKind::ObjectEdge, "Mittelpunkt"),
    ]
}
