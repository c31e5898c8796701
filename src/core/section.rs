//! Schnittlinien und daraus abgeleitete Schnittansichten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Blickrichtung einer Schnittlinie. Bestimmt nur, an welchem Ende der Pfeil sitzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionDirection {
    /// Pfeil am Endpunkt
    #[default]
    LeftToRight,
    /// Pfeil am Startpunkt
    RightToLeft,
}

impl SectionDirection {
    /// Die jeweils andere Richtung.
    pub fn flipped(self) -> Self {
        match self {
            SectionDirection::LeftToRight => SectionDirection::RightToLeft,
            SectionDirection::RightToLeft => SectionDirection::LeftToRight,
        }
    }
}

/// Darstellungsparameter einer Schnittlinie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionStyle {
    /// Linienstärke
    pub weight: f64,
    /// Pfeilgröße
    pub arrow_size: f64,
    /// Abstand der Beschriftung
    pub label_offset: f64,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            weight: 2.0,
            arrow_size: 10.0,
            label_offset: 15.0,
        }
    }
}

/// Eine Schnittlinie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLine {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename (z.B. "Section A")
    pub name: String,
    /// Startpunkt
    pub start: DVec2,
    /// Endpunkt
    pub end: DVec2,
    /// Anzeigefarbe als `#rrggbb`
    pub color: String,
    /// Sichtbarkeit im Overlay
    pub visible: bool,
    /// Blickrichtung
    pub direction: SectionDirection,
    /// Darstellungsparameter
    pub style: SectionStyle,
}

impl SectionLine {
    /// Länge der Linie.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Endpunkt, an dem der Richtungspfeil gezeichnet wird.
    pub fn arrow_point(&self) -> DVec2 {
        match self.direction {
            SectionDirection::LeftToRight => self.end,
            SectionDirection::RightToLeft => self.start,
        }
    }
}

/// Geschnittene Wand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceWall {
    /// Quell-Objekt
    pub object_id: String,
    /// Position entlang der Schnittlinie (Abstand vom Start)
    pub offset: f64,
    /// Näherungsweiser Schnittpunkt (Bounding-Box-Mittelpunkt)
    pub point: DVec2,
    /// Wandhöhe
    pub height: f64,
    /// Wanddicke
    pub thickness: f64,
    /// Material
    pub material: Option<String>,
}

/// Geschnittene Tür.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceDoor {
    /// Quell-Objekt
    pub object_id: String,
    /// Position entlang der Schnittlinie
    pub offset: f64,
    /// Näherungsweiser Schnittpunkt
    pub point: DVec2,
    /// Öffnungsbreite
    pub width: f64,
    /// Türhöhe
    pub height: f64,
    /// Türtyp
    pub door_type: Option<String>,
}

/// Geschnittenes Fenster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceWindow {
    /// Quell-Objekt
    pub object_id: String,
    /// Position entlang der Schnittlinie
    pub offset: f64,
    /// Näherungsweiser Schnittpunkt
    pub point: DVec2,
    /// Öffnungsbreite
    pub width: f64,
    /// Fensterhöhe
    pub height: f64,
    /// Brüstungshöhe
    pub sill_height: f64,
}

/// Inhalt einer Schnittansicht.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionSlice {
    /// Geschnittene Wände, sortiert nach `offset`
    pub walls: Vec<SliceWall>,
    /// Geschnittene Türen, sortiert nach `offset`
    pub doors: Vec<SliceDoor>,
    /// Geschnittene Fenster, sortiert nach `offset`
    pub windows: Vec<SliceWindow>,
    /// Höchstes Element (mindestens die konfigurierte Untergrenze)
    pub max_height: f64,
}

impl SectionSlice {
    /// `true` wenn der Schnitt kein Element trifft.
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.doors.is_empty() && self.windows.is_empty()
    }
}

/// Abgeleitete Schnittansicht zu einer Schnittlinie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionView {
    /// Eindeutige ID
    pub id: String,
    /// Zugehörige Schnittlinie
    pub section_line_id: String,
    /// Darstellungsmaßstab
    pub scale: f64,
    /// Geschnittene Elemente
    pub slice: SectionSlice,
}
