//! Raumgrenzen-Werkzeug: verwaltet das Polygon im Aufbau und die abgeschlossenen Räume.
//!
//! Zustände: `Idle → Defining → (abgeschlossen, im Raum-Set)`, `Defining → Idle`
//! per Abbruch, abgeschlossene Räume können per `start_editing` wieder geöffnet
//! werden und verlassen dabei das Raum-Set bis zum erneuten Abschluss.

mod lifecycle;
mod state;

pub use state::{BoundaryDrawState, BoundaryPhase, RoomBoundaryManager, RoomPointOutcome};
