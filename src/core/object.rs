//! Planobjekte (Wände, Türen, Fenster, Möbel, …) und ihre Geometrie-Varianten.

use std::collections::BTreeMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::Bounds;

/// Standard-Wanddicke (auch Tiefe von Tür- und Fenster-Grundrissen).
pub const DEFAULT_WALL_THICKNESS: f64 = 6.0;
/// Standard-Wandhöhe.
pub const DEFAULT_WALL_HEIGHT: f64 = 96.0;
/// Standard-Türbreite.
pub const DEFAULT_DOOR_WIDTH: f64 = 36.0;
/// Standard-Türhöhe (Ansicht).
pub const DEFAULT_DOOR_HEIGHT: f64 = 80.0;
/// Standard-Fensterbreite.
pub const DEFAULT_WINDOW_WIDTH: f64 = 36.0;
/// Standard-Fensterhöhe (Ansicht).
pub const DEFAULT_WINDOW_HEIGHT: f64 = 48.0;
/// Standard-Brüstungshöhe.
pub const DEFAULT_SILL_HEIGHT: f64 = 36.0;

/// Objektart im Grundriss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Wand (linienförmig mit Dicke)
    Wall,
    /// Tür (Öffnung in einer Wand)
    Door,
    /// Fenster (Öffnung in einer Wand)
    Window,
    /// Freie Linie
    Line,
    /// Rechteck
    Rectangle,
    /// Kreis
    Circle,
    /// Möbelstück
    Furniture,
    /// Sanitär-/Kücheneinrichtung
    Fixture,
    /// Textbeschriftung
    Text,
    /// Raum-Objekt (Bodenfläche)
    Room,
}

impl ObjectType {
    /// Linienförmige Objekte liefern Endpunkte statt Ecken.
    pub fn is_linear(self) -> bool {
        matches!(self, ObjectType::Wall | ObjectType::Line)
    }

    /// Tür oder Fenster.
    pub fn is_opening(self) -> bool {
        matches!(self, ObjectType::Door | ObjectType::Window)
    }
}

/// Drehrichtung eines Türflügels (Seite, in die der Flügel aufschlägt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwingDirection {
    /// Aufschlag nach -y
    North,
    /// Aufschlag nach +y
    #[default]
    South,
    /// Aufschlag nach +x
    East,
    /// Aufschlag nach -x
    West,
}

/// Optionale Objekteigenschaften. Unbekannte Schlüssel landen in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectProperties {
    /// Breite (Grundriss bzw. Öffnungsbreite)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Höhe (Grundriss bei Rechtecken, Ansichtshöhe bei Wänden/Türen/Fenstern)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Radius bei Kreisen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Polylinie bei linienförmigen Objekten (absolute Koordinaten)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<DVec2>>,
    /// Wanddicke
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    /// Grundriss-Tiefe von Türen und Fenstern
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Material (Wände)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Türtyp (z.B. "single", "double", "sliding")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub door_type: Option<String>,
    /// Brüstungshöhe (Fenster)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sill_height: Option<f64>,
    /// Aufschlagrichtung (Türen)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swing: Option<SwingDirection>,
    /// Weitere, von der Engine nicht ausgewertete Eigenschaften
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Ein Objekt im Grundriss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanObject {
    /// Eindeutige ID
    pub id: String,
    /// Objektart
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    /// Position (linke obere Ecke, bei Kreisen der Mittelpunkt)
    pub position: DVec2,
    /// Eigenschaften
    #[serde(default)]
    pub properties: ObjectProperties,
}

/// Geometrische Variante eines Objekts, abgeleitet aus Typ und Eigenschaften.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectShape {
    /// Achsparalleles Rechteck
    Rect { min: DVec2, max: DVec2 },
    /// Kreis
    Circle { center: DVec2, radius: f64 },
    /// Liniensegment mit Dicke
    Linear {
        start: DVec2,
        end: DVec2,
        thickness: f64,
    },
}

impl PlanObject {
    /// Erstellt ein Objekt ohne Eigenschaften.
    pub fn new(id: impl Into<String>, object_type: ObjectType, position: DVec2) -> Self {
        Self {
            id: id.into(),
            object_type,
            position,
            properties: ObjectProperties::default(),
        }
    }

    /// Wand zwischen zwei Punkten.
    pub fn wall(id: impl Into<String>, start: DVec2, end: DVec2) -> Self {
        let mut wall = Self::new(id, ObjectType::Wall, start);
        wall.properties.points = Some(vec![start, end]);
        wall
    }

    /// Freie Linie zwischen zwei Punkten.
    pub fn line(id: impl Into<String>, start: DVec2, end: DVec2) -> Self {
        let mut line = Self::new(id, ObjectType::Line, start);
        line.properties.points = Some(vec![start, end]);
        line
    }

    /// Rechteckiges Objekt beliebigen Typs mit Breite und Höhe.
    pub fn rect(
        id: impl Into<String>,
        object_type: ObjectType,
        position: DVec2,
        width: f64,
        height: f64,
    ) -> Self {
        let mut object = Self::new(id, object_type, position);
        object.properties.width = Some(width);
        object.properties.height = Some(height);
        object
    }

    /// Kreis um einen Mittelpunkt.
    pub fn circle(id: impl Into<String>, center: DVec2, radius: f64) -> Self {
        let mut circle = Self::new(id, ObjectType::Circle, center);
        circle.properties.radius = Some(radius);
        circle
    }

    /// Tür mit Öffnungsbreite.
    pub fn door(id: impl Into<String>, position: DVec2, width: f64) -> Self {
        let mut door = Self::new(id, ObjectType::Door, position);
        door.properties.width = Some(width);
        door
    }

    /// Fenster mit Öffnungsbreite.
    pub fn window(id: impl Into<String>, position: DVec2, width: f64) -> Self {
        let mut window = Self::new(id, ObjectType::Window, position);
        window.properties.width = Some(width);
        window
    }

    /// Setzt eine Eigenschaft im Builder-Stil.
    pub fn with_properties(mut self, edit: impl FnOnce(&mut ObjectProperties)) -> Self {
        edit(&mut self.properties);
        self
    }

    /// Breite mit typabhängigem Default.
    pub fn width(&self) -> f64 {
        let fallback = match self.object_type {
            ObjectType::Door => DEFAULT_DOOR_WIDTH,
            ObjectType::Window => DEFAULT_WINDOW_WIDTH,
            _ => 0.0,
        };
        non_negative(self.properties.width.unwrap_or(fallback))
    }

    /// Ansichtshöhe (Wände, Türen, Fenster) bzw. Grundriss-Höhe (Rechtecke).
    pub fn height(&self) -> f64 {
        let fallback = match self.object_type {
            ObjectType::Wall => DEFAULT_WALL_HEIGHT,
            ObjectType::Door => DEFAULT_DOOR_HEIGHT,
            ObjectType::Window => DEFAULT_WINDOW_HEIGHT,
            _ => 0.0,
        };
        non_negative(self.properties.height.unwrap_or(fallback))
    }

    /// Wanddicke (0 bei freien Linien ohne Angabe).
    pub fn thickness(&self) -> f64 {
        let fallback = match self.object_type {
            ObjectType::Wall => DEFAULT_WALL_THICKNESS,
            _ => 0.0,
        };
        non_negative(self.properties.thickness.unwrap_or(fallback))
    }

    /// Brüstungshöhe (nur Fenster sinnvoll).
    pub fn sill_height(&self) -> f64 {
        non_negative(self.properties.sill_height.unwrap_or(DEFAULT_SILL_HEIGHT))
    }

    /// Leitet die Geometrie-Variante aus Typ und Eigenschaften ab.
    pub fn shape(&self) -> ObjectShape {
        match self.object_type {
            ObjectType::Wall | ObjectType::Line => {
                let (start, end) = match self.properties.points.as_deref() {
                    Some([first, .., last]) => (*first, *last),
                    _ => (self.position, self.position + DVec2::new(self.width(), 0.0)),
                };
                ObjectShape::Linear {
                    start,
                    end,
                    thickness: self.thickness(),
                }
            }
            ObjectType::Circle => ObjectShape::Circle {
                center: self.position,
                radius: non_negative(self.properties.radius.unwrap_or(0.0)),
            },
            ObjectType::Door | ObjectType::Window => {
                let depth = non_negative(self.properties.depth.unwrap_or(DEFAULT_WALL_THICKNESS));
                ObjectShape::Rect {
                    min: self.position,
                    max: self.position + DVec2::new(self.width(), depth),
                }
            }
            _ => ObjectShape::Rect {
                min: self.position,
                max: self.position + DVec2::new(self.width(), self.height()),
            },
        }
    }

    /// Bounding-Box der Grundriss-Geometrie.
    pub fn bounds(&self) -> Bounds {
        match self.shape() {
            ObjectShape::Rect { min, max } => Bounds::from_corners(min, max),
            ObjectShape::Circle { center, radius } => {
                Bounds::from_center(center, DVec2::splat(radius))
            }
            ObjectShape::Linear {
                start,
                end,
                thickness,
            } => Bounds::from_corners(start, end).inflate(thickness * 0.5),
        }
    }

    /// Mittelpunkt der Bounding-Box.
    pub fn center(&self) -> DVec2 {
        self.bounds().center()
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_bounds_are_inflated_by_half_thickness() {
        let wall = PlanObject::wall("w", DVec2::ZERO, DVec2::new(100.0, 0.0));
        let b = wall.bounds();
        assert_eq!(b.min, DVec2::new(-3.0, -3.0));
        assert_eq!(b.max, DVec2::new(103.0, 3.0));
    }

    #[test]
    fn door_footprint_uses_width_and_wall_depth() {
        let door = PlanObject::door("d", DVec2::new(10.0, -3.0), 32.0);
        assert_eq!(
            door.shape(),
            ObjectShape::Rect {
                min: DVec2::new(10.0, -3.0),
                max: DVec2::new(42.0, 3.0),
            }
        );
        assert_eq!(door.height(), DEFAULT_DOOR_HEIGHT);
    }

    #[test]
    fn linear_without_points_falls_back_to_width() {
        let mut line = PlanObject::new("l", ObjectType::Line, DVec2::new(5.0, 5.0));
        line.properties.width = Some(10.0);
        match line.shape() {
            ObjectShape::Linear { start, end, .. } => {
                assert_eq!(start, DVec2::new(5.0, 5.0));
                assert_eq!(end, DVec2::new(15.0, 5.0));
            }
            other => panic!("unerwartete Form: {other:?}"),
        }
    }

    #[test]
    fn negative_sizes_are_clamped() {
        let rect = PlanObject::rect("r", ObjectType::Rectangle, DVec2::ZERO, -5.0, 4.0);
        assert_eq!(rect.width(), 0.0);
    }

    #[test]
    fn deserializes_from_json_with_extra_properties() {
        let json = r#"{
            "id": "door-1",
            "type": "door",
            "position": [10.0, 20.0],
            "properties": { "width": 30.0, "swing": "north", "label": "Eingang" }
        }"#;
        let door: PlanObject = serde_json::from_str(json).unwrap();
        assert_eq!(door.object_type, ObjectType::Door);
        assert_eq!(door.properties.swing, Some(SwingDirection::North));
        assert!(door.properties.extra.contains_key("label"));
    }
}
