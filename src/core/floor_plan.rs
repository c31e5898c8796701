//! Der Objekt-Schnappschuss eines Grundrisses mit persistentem Spatial-Index.

use glam::DVec2;
use indexmap::IndexMap;

use super::{ObjectIndex, ObjectType, PlanObject, SpatialMatch};

/// Alle Planobjekte eines Grundrisses in Einfügereihenfolge.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    objects: IndexMap<String, PlanObject>,
    /// Persistenter Spatial-Index für Umkreisabfragen
    spatial_index: ObjectIndex,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorPlan {
    /// Erstellt einen leeren Grundriss.
    pub fn new() -> Self {
        Self {
            objects: IndexMap::new(),
            spatial_index: ObjectIndex::empty(),
        }
    }

    /// Baut einen Grundriss aus einer flachen Objektliste.
    /// Spätere Objekte mit gleicher ID ersetzen frühere.
    pub fn from_objects(objects: impl IntoIterator<Item = PlanObject>) -> Self {
        let objects: IndexMap<String, PlanObject> = objects
            .into_iter()
            .map(|object| (object.id.clone(), object))
            .collect();
        let spatial_index = ObjectIndex::from_objects(&objects);
        Self {
            objects,
            spatial_index,
        }
    }

    /// Fügt ein Objekt hinzu (ersetzt ein bestehendes mit gleicher ID).
    pub fn add_object(&mut self, object: PlanObject) {
        self.objects.insert(object.id.clone(), object);
        self.rebuild_spatial_index();
    }

    /// Entfernt ein Objekt. Unbekannte IDs sind ein No-op.
    pub fn remove_object(&mut self, id: &str) -> Option<PlanObject> {
        let removed = self.objects.shift_remove(id);
        if removed.is_some() {
            self.rebuild_spatial_index();
        }
        removed
    }

    /// Verschiebt ein Objekt. Linienförmige Objekte werden samt Polylinie verschoben.
    pub fn update_object_position(&mut self, id: &str, new_position: DVec2) -> bool {
        let Some(object) = self.objects.get_mut(id) else {
            return false;
        };

        let delta = new_position - object.position;
        if delta == DVec2::ZERO {
            return true;
        }

        object.position = new_position;
        if let Some(points) = object.properties.points.as_mut() {
            for point in points.iter_mut() {
                *point += delta;
            }
        }
        self.rebuild_spatial_index();
        true
    }

    /// Baut den Spatial-Index aus den aktuellen Objekten neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = ObjectIndex::from_objects(&self.objects);
    }

    /// Objekt per ID.
    pub fn object(&self, id: &str) -> Option<&PlanObject> {
        self.objects.get(id)
    }

    /// Alle Objekte in Einfügereihenfolge.
    pub fn objects(&self) -> impl Iterator<Item = &PlanObject> {
        self.objects.values()
    }

    /// Alle Objekte eines Typs in Einfügereihenfolge.
    pub fn objects_of_type(&self, object_type: ObjectType) -> impl Iterator<Item = &PlanObject> {
        self.objects
            .values()
            .filter(move |object| object.object_type == object_type)
    }

    /// Anzahl der Objekte.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// `true` wenn der Grundriss keine Objekte enthält.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objekte, deren Bounding-Box-Mittelpunkt im Radius um `point` liegt.
    pub fn objects_near(&self, point: DVec2, radius: f64) -> Vec<SpatialMatch> {
        self.spatial_index.within_radius(point, radius)
    }
}
