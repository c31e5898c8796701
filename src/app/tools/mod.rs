//! Zustandsbehaftete Zeichenwerkzeuge einer Editier-Sitzung.
//!
//! Jedes Werkzeug hält seinen "in Arbeit"-Zustand als expliziten Enum-Wert
//! und verwaltet die daraus festgeschriebenen Ergebnisse selbst.

/// Raumgrenzen: Polygon-Aufbau, Abschluss, Bearbeitung.
pub mod room_boundary;
/// Schnittlinien und abgeleitete Schnittansichten.
pub mod section_line;

pub use room_boundary::{BoundaryDrawState, BoundaryPhase, RoomBoundaryManager, RoomPointOutcome};
pub use section_line::{SectionDrawState, SectionEngine};
