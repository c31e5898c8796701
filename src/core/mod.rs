//! Core-Domänentypen: Planobjekte, Grundriss, Räume, Schnitte, Hilfslinien, Spatial-Index, Schnappschüsse.

pub mod bounds;
pub mod floor_plan;
pub mod geometry;
pub mod guide;
pub mod object;
pub mod room;
pub mod section;
pub mod snapshot;
pub mod spatial;

pub use bounds::Bounds;
pub use floor_plan::FloorPlan;
pub use guide::{Guide, GuideOrientation};
pub use object::{ObjectProperties, ObjectShape, ObjectType, PlanObject, SwingDirection};
pub use room::{point_in_boundary, point_in_polygon, polygon_area, RoomAttributes, RoomBoundary};
pub use section::{
    SectionDirection, SectionLine, SectionSlice, SectionStyle, SectionView, SliceDoor, SliceWall,
    SliceWindow,
};
pub use snapshot::PlanSnapshot;
pub use spatial::{ObjectIndex, SpatialMatch};

/// Punkt in Weltkoordinaten.
pub type Point = glam::DVec2;
