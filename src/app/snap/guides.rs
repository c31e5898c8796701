//! Hilfslinien-Verwaltung und Hilfslinien-Kandidaten.

use glam::DVec2;

use super::{SnapCandidate, SnapKind};
use crate::core::{Guide, GuideOrientation};

/// Hilfslinien einer Editier-Sitzung.
#[derive(Debug, Clone, Default)]
pub struct GuideSet {
    guides: Vec<Guide>,
    next_id: u64,
}

impl GuideSet {
    /// Erstellt eine leere Hilfslinien-Sammlung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine dauerhafte Hilfslinie hinzu und gibt deren ID zurück.
    pub fn add(&mut self, orientation: GuideOrientation, offset: f64) -> String {
        self.push(orientation, offset, false)
    }

    /// Fügt eine temporäre Hilfslinie hinzu (z.B. Ausrichtungshilfe beim Ziehen).
    pub fn add_temporary(&mut self, orientation: GuideOrientation, offset: f64) -> String {
        self.push(orientation, offset, true)
    }

    fn push(&mut self, orientation: GuideOrientation, offset: f64, is_temporary: bool) -> String {
        self.next_id += 1;
        let id = format!("guide-{}", self.next_id);
        self.guides.push(Guide {
            id: id.clone(),
            orientation,
            offset,
            is_temporary,
        });
        id
    }

    /// Entfernt eine Hilfslinie. Unbekannte IDs → `false`.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.guides.len();
        self.guides.retain(|guide| guide.id != id);
        self.guides.len() != before
    }

    /// Entfernt alle temporären Hilfslinien.
    pub fn clear_temporary(&mut self) {
        self.guides.retain(|guide| !guide.is_temporary);
    }

    /// Alle Hilfslinien in Einfügereihenfolge.
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }
}

/// Kandidaten aller Hilfslinien plus ggf. kombinierter Kreuzungspunkt.
pub fn guide_candidates(query: DVec2, guides: &[Guide], tolerance: f64) -> Vec<SnapCandidate> {
    let mut candidates = Vec::with_capacity(guides.len() + 1);
    let mut nearest_horizontal: Option<(&Guide, f64)> = None;
    let mut nearest_vertical: Option<(&Guide, f64)> = None;

    for guide in guides {
        if !guide.offset.is_finite() {
            continue;
        }
        let (point, deviation, nearest) = match guide.orientation {
            GuideOrientation::Horizontal => (
                DVec2::new(query.x, guide.offset),
                (query.y - guide.offset).abs(),
                &mut nearest_horizontal,
            ),
            GuideOrientation::Vertical => (
                DVec2::new(guide.offset, query.y),
                (query.x - guide.offset).abs(),
                &mut nearest_vertical,
            ),
        };

        if deviation <= tolerance && nearest.map_or(true, |(_, best)| deviation < best) {
            *nearest = Some((guide, deviation));
        }

        candidates.push(SnapCandidate {
            point,
            kind: SnapKind::Guide,
            source_object_id: None,
            label: String::from("Hilfslinie"),
            distance: deviation,
        });
    }

    if let (Some((horizontal, dy)), Some((vertical, dx))) = (nearest_horizontal, nearest_vertical)
    {
        candidates.push(SnapCandidate {
            point: DVec2::new(vertical.offset, horizontal.offset),
            kind: SnapKind::Guide,
            source_object_id: None,
            label: String::from("Hilfslinien-Kreuzung"),
            distance: dx + dy,
        });
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_removable() {
        let mut set = GuideSet::new();
        let a = set.add(GuideOrientation::Horizontal, 10.0);
        let b = set.add_temporary(GuideOrientation::Vertical, 5.0);
        assert_eq!(a, "guide-1");
        assert_eq!(b, "guide-2");

        set.clear_temporary();
        assert_eq!(set.guides().len(), 1);
        assert!(set.remove(&a));
        assert!(!set.remove(&a));
    }

    #[test]
    fn crossing_candidate_uses_summed_deviation() {
        let guides = vec![Guide::horizontal("h", 50.0), Guide::vertical("v", 30.0)];
        let candidates = guide_candidates(DVec2::new(33.0, 46.0), &guides, 10.0);
        assert_eq!(candidates.len(), 3);
        let crossing = &candidates[2];
        assert_eq!(crossing.point, DVec2::new(30.0, 50.0));
        assert!((crossing.distance - 7.0).abs() < 1e-12);
    }

    #[test]
    fn no_crossing_when_one_axis_is_out_of_tolerance() {
        let guides = vec![Guide::horizontal("h", 50.0), Guide::vertical("v", 100.0)];
        let candidates = guide_candidates(DVec2::new(33.0, 46.0), &guides, 10.0);
        assert_eq!(candidates.len(), 2);
    }
}
