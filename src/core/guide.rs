//! Hilfslinien (horizontal/vertikal) für das Snapping.

use serde::{Deserialize, Serialize};

/// Ausrichtung einer Hilfslinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideOrientation {
    /// Waagerecht: `offset` ist die y-Koordinate
    Horizontal,
    /// Senkrecht: `offset` ist die x-Koordinate
    Vertical,
}

/// Eine Hilfslinie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    /// Eindeutige ID
    pub id: String,
    /// Ausrichtung
    pub orientation: GuideOrientation,
    /// Lage auf der Querachse
    pub offset: f64,
    /// Temporäre Hilfslinien werden mit `clear_temporary_guides` entfernt
    #[serde(default)]
    pub is_temporary: bool,
}

impl Guide {
    /// Waagerechte Hilfslinie bei `y`.
    pub fn horizontal(id: impl Into<String>, y: f64) -> Self {
        Self {
            id: id.into(),
            orientation: GuideOrientation::Horizontal,
            offset: y,
            is_temporary: false,
        }
    }

    /// Senkrechte Hilfslinie bei `x`.
    pub fn vertical(id: impl Into<String>, x: f64) -> Self {
        Self {
            id: id.into(),
            orientation: GuideOrientation::Vertical,
            offset: x,
            is_temporary: false,
        }
    }
}
