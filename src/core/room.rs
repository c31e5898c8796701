//! Raumgrenzen: handgezeichnete Polygone mit Fläche und Attributen.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::point_on_segment;

/// Attribute eines Raums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAttributes {
    /// Bodenbelag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_material: Option<String>,
    /// Deckenmaterial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling_material: Option<String>,
    /// Wandhöhe
    pub wall_height: f64,
    /// Fläche in Quadrat-Welteinheiten (wird bei jeder Punktänderung neu berechnet)
    #[serde(default)]
    pub area: f64,
}

impl Default for RoomAttributes {
    fn default() -> Self {
        Self {
            floor_material: None,
            ceiling_material: None,
            wall_height: super::object::DEFAULT_WALL_HEIGHT,
            area: 0.0,
        }
    }
}

/// Eine Raumgrenze (offen während des Zeichnens, geschlossen nach Abschluss).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RoomBoundaryData")]
pub struct RoomBoundary {
    /// Eindeutige ID
    pub id: String,
    /// Raumname (z.B. "Bedroom 1")
    pub name: String,
    points: Vec<DVec2>,
    closed: bool,
    /// Attribute
    pub attributes: RoomAttributes,
    /// Anzeigefarbe als `#rrggbb`
    pub color: String,
}

/// Roh-Form beim Deserialisieren: Fläche und Abschluss werden danach neu abgeleitet.
#[derive(Deserialize)]
struct RoomBoundaryData {
    id: String,
    name: String,
    #[serde(default)]
    points: Vec<DVec2>,
    #[serde(default)]
    closed: bool,
    #[serde(default)]
    attributes: RoomAttributes,
    #[serde(default = "default_color")]
    color: String,
}

fn default_color() -> String {
    String::from("#dddddd")
}

impl From<RoomBoundaryData> for RoomBoundary {
    fn from(data: RoomBoundaryData) -> Self {
        let mut room = Self {
            id: data.id,
            name: data.name,
            points: Vec::new(),
            closed: false,
            attributes: data.attributes,
            color: data.color,
        };
        room.set_points(data.points);
        if data.closed {
            room.close();
        }
        room
    }
}

impl RoomBoundary {
    /// Erstellt eine leere, offene Raumgrenze.
    pub fn new(id: impl Into<String>, name: impl Into<String>, wall_height: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points: Vec::new(),
            closed: false,
            attributes: RoomAttributes {
                floor_material: None,
                ceiling_material: None,
                wall_height,
                area: 0.0,
            },
            color: default_color(),
        }
    }

    /// Erstellt eine bereits geschlossene Raumgrenze (z.B. aus einem Import).
    ///
    /// Mit weniger als 3 Punkten bleibt sie offen.
    pub fn closed_from_points(
        id: impl Into<String>,
        name: impl Into<String>,
        points: Vec<DVec2>,
    ) -> Self {
        let mut room = Self::new(id, name, super::object::DEFAULT_WALL_HEIGHT);
        room.set_points(points);
        room.close();
        room
    }

    /// Eckpunkte in Zeichenreihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// `true` wenn der Raum abgeschlossen ist.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Fläche (Shoelace, unabhängig von der Umlaufrichtung).
    pub fn area(&self) -> f64 {
        self.attributes.area
    }

    /// Ersetzt alle Punkte und berechnet die Fläche neu.
    pub fn set_points(&mut self, points: Vec<DVec2>) {
        self.points = points;
        self.refresh_area();
    }

    /// Hängt einen Punkt an.
    pub(crate) fn push_point(&mut self, point: DVec2) {
        self.points.push(point);
        self.refresh_area();
    }

    /// Verschiebt einen Punkt. Ungültiger Index → `false`.
    pub(crate) fn move_point(&mut self, index: usize, position: DVec2) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        *point = position;
        self.refresh_area();
        true
    }

    /// Entfernt einen Punkt, solange mindestens 3 übrig bleiben.
    pub(crate) fn remove_point(&mut self, index: usize) -> bool {
        if index >= self.points.len() || self.points.len() <= 3 {
            return false;
        }
        self.points.remove(index);
        self.refresh_area();
        true
    }

    /// Schließt den Raum. Mit weniger als 3 Punkten: No-op.
    pub(crate) fn close(&mut self) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        self.refresh_area();
        self.closed = true;
        true
    }

    /// Öffnet den Raum wieder zur Bearbeitung.
    pub(crate) fn reopen(&mut self) {
        self.closed = false;
    }

    pub(crate) fn refresh_area(&mut self) {
        self.attributes.area = polygon_area(&self.points);
    }

    /// Geordneter Pfad für Rendering/Serialisierung.
    /// Geschlossene Räume kehren implizit zum Startpunkt zurück.
    pub fn path(&self) -> Vec<DVec2> {
        let mut path = self.points.clone();
        if self.closed {
            if let Some(&first) = self.points.first() {
                path.push(first);
            }
        }
        path
    }

    /// Punkt-in-Polygon-Test gegen diese Raumgrenze.
    pub fn contains(&self, point: DVec2) -> bool {
        point_in_polygon(point, &self.points)
    }
}

/// Polygonfläche nach der Shoelace-Formel, immer ≥ 0.
pub fn polygon_area(points: &[DVec2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum();
    let area = twice.abs() * 0.5;
    if area.is_finite() {
        area
    } else {
        0.0
    }
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting).
///
/// Punkte exakt auf einer Kante zählen als innen. Weniger als 3 Punkte: nie innen.
pub fn point_in_polygon(point: DVec2, polygon: &[DVec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = last;

    for &current in polygon {
        if point_on_segment(point, previous, current) {
            return true;
        }

        let crosses = (current.y > point.y) != (previous.y > point.y)
            && point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x;
        if crosses {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

/// Punkt-in-Polygon-Test gegen eine Raumgrenze.
pub fn point_in_boundary(point: DVec2, boundary: &RoomBoundary) -> bool {
    boundary.contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn square_area_is_independent_of_winding() {
        let mut pts = square();
        assert_relative_eq!(polygon_area(&pts), 100.0);
        pts.reverse();
        assert_relative_eq!(polygon_area(&pts), 100.0);
    }

    #[test]
    fn area_of_degenerate_polygons_is_zero() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[DVec2::ZERO, DVec2::ONE]), 0.0);
        let collinear = [DVec2::ZERO, DVec2::new(5.0, 0.0), DVec2::new(10.0, 0.0)];
        assert_eq!(polygon_area(&collinear), 0.0);
    }

    #[test]
    fn point_in_square() {
        let pts = square();
        assert!(point_in_polygon(DVec2::new(5.0, 5.0), &pts));
        assert!(!point_in_polygon(DVec2::new(15.0, 5.0), &pts));
        assert!(!point_in_polygon(DVec2::new(5.0, -0.5), &pts));
    }

    #[test]
    fn points_on_edges_and_vertices_count_as_inside() {
        let pts = square();
        assert!(point_in_polygon(DVec2::new(10.0, 5.0), &pts));
        assert!(point_in_polygon(DVec2::new(0.0, 0.0), &pts));
        assert!(point_in_polygon(DVec2::new(5.0, 10.0), &pts));
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        // U-Form: Kerbe oben in der Mitte
        let pts = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(30.0, 0.0),
            DVec2::new(30.0, 30.0),
            DVec2::new(20.0, 30.0),
            DVec2::new(20.0, 10.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(10.0, 30.0),
            DVec2::new(0.0, 30.0),
        ];
        assert!(!point_in_polygon(DVec2::new(15.0, 20.0), &pts));
        assert!(point_in_polygon(DVec2::new(5.0, 20.0), &pts));
        assert_relative_eq!(polygon_area(&pts), 700.0);
    }

    #[test]
    fn path_of_closed_room_returns_to_start() {
        let room = RoomBoundary::closed_from_points("r", "Kitchen", square());
        let path = room.path();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), path.last());

        let mut open = RoomBoundary::new("o", "Open", 96.0);
        open.set_points(square());
        assert_eq!(open.path().len(), 4);
    }

    #[test]
    fn deserialize_recomputes_area_and_refuses_degenerate_closure() {
        let json = r#"{
            "id": "r1", "name": "Hall",
            "points": [[0.0, 0.0], [10.0, 0.0]],
            "closed": true,
            "attributes": { "wall_height": 96.0, "area": 999.0 }
        }"#;
        let room: RoomBoundary = serde_json::from_str(json).unwrap();
        assert!(!room.is_closed());
        assert_eq!(room.area(), 0.0);
    }

    #[test]
    fn remove_point_keeps_at_least_three() {
        let mut room = RoomBoundary::new("r", "Room", 96.0);
        room.set_points(square());
        assert!(room.remove_point(3));
        assert!(!room.remove_point(0));
        assert_eq!(room.points().len(), 3);
        assert_relative_eq!(room.area(), 50.0);
    }
}
