//! Snap-Resolver: korrigiert ungenaue Zeiger-Eingaben auf exakte Koordinaten.
//!
//! Kandidaten-Quellen (jeweils über `SnapOptions` schaltbar):
//! - Raster
//! - Objekt-Features (Ecken, Kantenmitten, Mittelpunkte, Endpunkte)
//! - Hilfslinien inkl. kombinierter Kreuzungspunkte
//! - Schnittpunkte linienförmiger Objekte
//!
//! Übernommen wird der nächste Kandidat innerhalb der Toleranz, sonst bleibt
//! der Eingabepunkt unverändert. Die Kandidatenliste wird immer vollständig
//! zurückgegeben (für visuelles Feedback).

pub mod features;
pub mod guides;
mod intersections;

pub use guides::GuideSet;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::{FloorPlan, Guide, GuideOrientation};
use crate::shared::options::{INTERSECTION_RADIUS_FACTOR, OBJECT_PRUNE_FACTOR};
use crate::shared::SnapOptions;

/// Herkunft eines Snap-Kandidaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapKind {
    /// Rasterpunkt
    Grid,
    /// Kantenmitte, Quadrant oder Linienmitte
    ObjectEdge,
    /// Mittelpunkt
    ObjectCenter,
    /// Ecke oder Endpunkt
    ObjectCorner,
    /// Schnittpunkt zweier Linien
    Intersection,
    /// Hilfslinie
    Guide,
}

/// Ein vorgeschlagener, korrigierter Punkt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapCandidate {
    /// Korrigierte Position
    pub point: DVec2,
    /// Herkunft
    pub kind: SnapKind,
    /// Quell-Objekt (bei Schnittpunkten beide IDs, mit `+` verbunden)
    pub source_object_id: Option<String>,
    /// Kurzbeschriftung für das Overlay
    pub label: String,
    /// Abstand zum Anfragepunkt, nach dem ausgewählt wird
    pub distance: f64,
}

/// Ergebnis einer Snap-Abfrage.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    /// Übernommener Punkt (oder der unveränderte Anfragepunkt)
    pub point: DVec2,
    /// Übernommener Kandidat
    pub accepted: Option<SnapCandidate>,
    /// Alle erzeugten Kandidaten
    pub candidates: Vec<SnapCandidate>,
}

impl SnapResult {
    fn unchanged(query: DVec2, candidates: Vec<SnapCandidate>) -> Self {
        Self {
            point: query,
            accepted: None,
            candidates,
        }
    }

    /// `true` wenn ein Kandidat übernommen wurde.
    pub fn is_accepted(&self) -> bool {
        self.accepted.is_some()
    }
}

/// Read-only Kontext einer Snap-Abfrage.
#[derive(Debug, Clone, Copy)]
pub struct SnapContext<'a> {
    /// Aktueller Grundriss
    pub plan: &'a FloorPlan,
    /// Objekt, das gerade gezogen wird (liefert keine Kandidaten)
    pub exclude_object_id: Option<&'a str>,
}

impl<'a> SnapContext<'a> {
    /// Kontext ohne ausgeschlossenes Objekt.
    pub fn new(plan: &'a FloorPlan) -> Self {
        Self {
            plan,
            exclude_object_id: None,
        }
    }

    /// Schließt ein Objekt von der Kandidatensuche aus.
    pub fn excluding(mut self, object_id: &'a str) -> Self {
        self.exclude_object_id = Some(object_id);
        self
    }
}

/// Snap-Resolver einer Editier-Sitzung.
#[derive(Debug, Clone, Default)]
pub struct SnapResolver {
    /// Snap-Quellen und Toleranz
    pub options: SnapOptions,
    guides: GuideSet,
}

impl SnapResolver {
    /// Erstellt einen Resolver mit den übergebenen Optionen.
    pub fn new(options: SnapOptions) -> Self {
        Self {
            options,
            guides: GuideSet::new(),
        }
    }

    /// Fügt eine dauerhafte Hilfslinie hinzu.
    pub fn add_guide(&mut self, orientation: GuideOrientation, offset: f64) -> String {
        self.guides.add(orientation, offset)
    }

    /// Fügt eine temporäre Hilfslinie hinzu.
    pub fn add_temporary_guide(&mut self, orientation: GuideOrientation, offset: f64) -> String {
        self.guides.add_temporary(orientation, offset)
    }

    /// Entfernt eine Hilfslinie.
    pub fn remove_guide(&mut self, id: &str) -> bool {
        self.guides.remove(id)
    }

    /// Entfernt alle temporären Hilfslinien.
    pub fn clear_temporary_guides(&mut self) {
        self.guides.clear_temporary();
    }

    /// Alle Hilfslinien.
    pub fn guides(&self) -> &[Guide] {
        self.guides.guides()
    }

    /// Löst einen Anfragepunkt gegen alle aktivierten Quellen auf.
    pub fn resolve(&self, query: DVec2, ctx: SnapContext<'_>) -> SnapResult {
        if !query.is_finite() {
            return SnapResult::unchanged(query, Vec::new());
        }

        let tolerance = self.tolerance();
        let mut candidates = Vec::new();

        if self.options.snap_to_grid {
            candidates.extend(grid_candidate(query, self.options.grid_size));
        }

        if self.options.snap_to_objects {
            candidates.extend(self.feature_candidates(query, ctx, tolerance));
            let linear = ctx
                .plan
                .objects()
                .filter(|object| object.object_type.is_linear())
                .filter(|object| Some(object.id.as_str()) != ctx.exclude_object_id);
            candidates.extend(intersections::intersection_candidates(
                query,
                linear,
                tolerance * INTERSECTION_RADIUS_FACTOR,
            ));
        }

        if self.options.snap_to_guides {
            candidates.extend(guides::guide_candidates(
                query,
                self.guides.guides(),
                tolerance,
            ));
        }

        select(query, candidates, tolerance)
    }

    /// Rastet nur auf Hilfslinien ein (unabhängig von `snap_to_guides`).
    pub fn snap_to_guides(&self, query: DVec2) -> SnapResult {
        if !query.is_finite() {
            return SnapResult::unchanged(query, Vec::new());
        }
        let tolerance = self.tolerance();
        let candidates = guides::guide_candidates(query, self.guides.guides(), tolerance);
        select(query, candidates, tolerance)
    }

    fn tolerance(&self) -> f64 {
        if self.options.tolerance.is_finite() {
            self.options.tolerance.max(0.0)
        } else {
            0.0
        }
    }

    fn feature_candidates(
        &self,
        query: DVec2,
        ctx: SnapContext<'_>,
        tolerance: f64,
    ) -> Vec<SnapCandidate> {
        let mut candidates = Vec::new();
        for hit in ctx.plan.objects_near(query, tolerance * OBJECT_PRUNE_FACTOR) {
            if Some(hit.object_id.as_str()) == ctx.exclude_object_id {
                continue;
            }
            let Some(object) = ctx.plan.object(&hit.object_id) else {
                continue;
            };
            candidates.extend(features::object_features(object).into_iter().map(|feature| {
                SnapCandidate {
                    point: feature.point,
                    kind: feature.kind,
                    source_object_id: Some(object.id.clone()),
                    label: feature.label.to_string(),
                    distance: feature.point.distance(query),
                }
            }));
        }
        candidates
    }
}

/// Rasterpunkt: `round(query / grid_size) * grid_size`.
fn grid_candidate(query: DVec2, grid_size: f64) -> Option<SnapCandidate> {
    if !grid_size.is_finite() || grid_size <= 0.0 {
        return None;
    }
    let point = (query / grid_size).round() * grid_size;
    Some(SnapCandidate {
        point,
        kind: SnapKind::Grid,
        source_object_id: None,
        label: String::from("Raster"),
        distance: point.distance(query),
    })
}

/// Wählt den nächsten Kandidaten innerhalb der Toleranz (bei Gleichstand den ersten).
fn select(query: DVec2, candidates: Vec<SnapCandidate>, tolerance: f64) -> SnapResult {
    let best = candidates
        .iter()
        .filter(|candidate| candidate.distance <= tolerance && candidate.point.is_finite())
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
        .cloned();

    match best {
        Some(candidate) => {
            log::trace!(
                "Snap {:?} → {:?} ({:?}, d={:.3})",
                query,
                candidate.point,
                candidate.kind,
                candidate.distance
            );
            SnapResult {
                point: candidate.point,
                accepted: Some(candidate),
                candidates,
            }
        }
        None => SnapResult::unchanged(query, candidates),
    }
}
