//! Schnitt-Berechnung: welche Wände, Türen und Fenster eine Schnittlinie trifft.
//!
//! Der Schnittpunkt wird bewusst als Bounding-Box-Mittelpunkt des Elements
//! angenähert; Elemente nahe einer Box-Kante können dadurch verschoben
//! erscheinen.

use glam::DVec2;

use crate::core::geometry::projected_offset;
use crate::core::{
    Bounds, FloorPlan, ObjectType, PlanObject, SectionLine, SectionSlice, SliceDoor, SliceWall,
    SliceWindow,
};

/// Buchstabenfolge für Standardnamen: 0 → `A`, 25 → `Z`, 26 → `AA`, …
pub fn section_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut rest = index;
    loop {
        letters.push(char::from(b'A' + (rest % 26) as u8));
        if rest < 26 {
            break;
        }
        rest = rest / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Schneidet die Linie mit allen Wänden, Türen und Fenstern des Grundrisses.
///
/// Die Blickrichtung der Linie hat keinen Einfluss auf das Ergebnis.
pub fn derive_slice(line: &SectionLine, plan: &FloorPlan, height_floor: f64) -> SectionSlice {
    let mut slice = SectionSlice {
        max_height: if height_floor.is_finite() {
            height_floor.max(0.0)
        } else {
            0.0
        },
        ..SectionSlice::default()
    };

    for object in plan.objects() {
        if !matches!(
            object.object_type,
            ObjectType::Wall | ObjectType::Door | ObjectType::Window
        ) {
            continue;
        }
        let Some(point) = cut_point(line, object) else {
            continue;
        };
        let offset = projected_offset(point, line.start, line.end);

        match object.object_type {
            ObjectType::Wall => {
                let height = object.height();
                slice.max_height = slice.max_height.max(height);
                slice.walls.push(SliceWall {
                    object_id: object.id.clone(),
                    offset,
                    point,
                    height,
                    thickness: object.thickness(),
                    material: object.properties.material.clone(),
                });
            }
            ObjectType::Door => {
                let height = object.height();
                slice.max_height = slice.max_height.max(height);
                slice.doors.push(SliceDoor {
                    object_id: object.id.clone(),
                    offset,
                    point,
                    width: object.width(),
                    height,
                    door_type: object.properties.door_type.clone(),
                });
            }
            ObjectType::Window => {
                let height = object.height();
                let sill_height = object.sill_height();
                slice.max_height = slice.max_height.max(sill_height + height);
                slice.windows.push(SliceWindow {
                    object_id: object.id.clone(),
                    offset,
                    point,
                    width: object.width(),
                    height,
                    sill_height,
                });
            }
            _ => {}
        }
    }

    slice.walls.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    slice.doors.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    slice.windows.sort_by(|a, b| a.offset.total_cmp(&b.offset));

    log::trace!(
        "Schnitt {}: {} Wände, {} Türen, {} Fenster",
        line.id,
        slice.walls.len(),
        slice.doors.len(),
        slice.windows.len()
    );
    slice
}

/// Angenäherter Schnittpunkt mit einem Objekt (Mittelpunkt seiner Bounding-Box).
fn cut_point(line: &SectionLine, object: &PlanObject) -> Option<DVec2> {
    let bounds = object.bounds();
    if !bounds.min.is_finite() || !bounds.max.is_finite() {
        return None;
    }

    // Nur der Intervalltest entscheidet: auch diagonale Linien, deren Box die
    // Objekt-Box berührt, gelten als Treffer
    let line_bounds = Bounds::from_corners(line.start, line.end);
    if !line_bounds.touches(&bounds) {
        return None;
    }

    Some(bounds.center())
}
