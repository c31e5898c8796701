//! Floor-Plan Engine Library.
//! Geometrische Interaktions-Engine eines Grundriss-Editors: Snapping, Raumgrenzen,
//! Schnittansichten und regelbasierte Prüfung. Als Library exportiert für Tests
//! und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    EditorSession, RoomBoundaryManager, SectionEngine, SessionIntent, Severity, SnapContext,
    SnapKind, SnapResolver, SnapResult, ValidationEngine, ValidationIssue, ValidationReport,
};
pub use core::{
    FloorPlan, Guide, GuideOrientation, ObjectType, PlanObject, PlanSnapshot, Point, RoomBoundary,
    SectionLine, SectionView,
};
pub use shared::EngineOptions;
