//! Spatial-Index (KD-Tree) über den Bounding-Box-Mittelpunkten der Planobjekte.

use glam::DVec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::PlanObject;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Objekts
    pub object_id: String,
    /// Euklidische Distanz vom Objekt-Mittelpunkt zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Objekten eines Grundrisses.
#[derive(Debug, Clone)]
pub struct ObjectIndex {
    tree: KdTree<f64, 2>,
    object_ids: Vec<String>,
}

impl ObjectIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            object_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Objekten.
    pub fn from_objects(objects: &IndexMap<String, PlanObject>) -> Self {
        let mut object_ids = Vec::with_capacity(objects.len());
        let mut entries = Vec::with_capacity(objects.len());
        for (id, object) in objects {
            let center = object.center();
            if !center.is_finite() {
                log::warn!("Objekt {} hat keine gültige Position, nicht indexiert", id);
                continue;
            }
            object_ids.push(id.clone());
            entries.push([center.x, center.y]);
        }

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, object_ids }
    }

    /// Gibt die Anzahl indexierter Objekte zurück.
    pub fn len(&self) -> usize {
        self.object_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Objekte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.object_ids.is_empty()
    }

    /// Findet alle Objekte, deren Mittelpunkt im Radius um die Query-Position liegt.
    ///
    /// Sortiert nach Distanz, bei Gleichstand nach Einfügereihenfolge.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() || !query.is_finite() {
            return Vec::new();
        }

        let mut hits = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let index = entry.item as usize;
                let object_id = self.object_ids.get(index)?;
                Some((index, entry.distance.sqrt(), object_id))
            })
            .collect::<Vec<_>>();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        hits.into_iter()
            .map(|(_, distance, object_id)| SpatialMatch {
                object_id: object_id.clone(),
                distance,
            })
            .collect()
    }
}
