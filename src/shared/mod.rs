//! Geteilte Typen für modul-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von allen Engines gelesen wird.

pub mod options;

pub use options::{
    EngineOptions, RoomOptions, SectionOptions, SnapOptions, ValidationOptions,
};
pub use options::{GRID_SIZE, MIN_SECTION_LENGTH, ROOM_CLOSE_DISTANCE, SNAP_TOLERANCE};
