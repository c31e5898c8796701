//! Achsparallele Bounding-Box.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Achsparallele Bounding-Box in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimale Ecke (links oben)
    pub min: DVec2,
    /// Maximale Ecke (rechts unten)
    pub max: DVec2,
}

impl Bounds {
    /// Erstellt eine Box aus zwei beliebigen Ecken (normalisiert min/max).
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box um einen Mittelpunkt mit halber Ausdehnung.
    pub fn from_center(center: DVec2, half_extent: DVec2) -> Self {
        Self::from_corners(center - half_extent, center + half_extent)
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Breite der Box.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Höhe der Box.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Vergrößert die Box in alle Richtungen.
    pub fn inflate(&self, amount: f64) -> Self {
        Self::from_corners(self.min - DVec2::splat(amount), self.max + DVec2::splat(amount))
    }

    /// Die vier Ecken im Uhrzeigersinn, beginnend links oben.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            self.min,
            DVec2::new(self.max.x, self.min.y),
            self.max,
            DVec2::new(self.min.x, self.max.y),
        ]
    }

    /// Echte Überlappung (reine Berührung an einer Kante zählt nicht).
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Überlappung inklusive Berührung.
    pub fn touches(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Prüft ob ein Punkt innerhalb der Box liegt (Rand inklusive).
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Abstand eines Punkts zur Box (0 innerhalb).
    pub fn distance_to(&self, point: DVec2) -> f64 {
        point.clamp(self.min, self.max).distance(point)
    }
}
