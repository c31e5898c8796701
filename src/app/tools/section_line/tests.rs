use super::*;
use crate::core::{FloorPlan, ObjectType, PlanObject, SectionDirection};
use crate::shared::SectionOptions;
use approx::assert_relative_eq;
use glam::DVec2;

fn engine() -> SectionEngine {
    SectionEngine::new(SectionOptions::default())
}

/// Vertikale Wand bei x = 50, Tür bei x = 120, Fenster bei x = 200.
fn sample_plan() -> FloorPlan {
    FloorPlan::from_objects([
        PlanObject::wall("w1", DVec2::new(50.0, -50.0), DVec2::new(50.0, 50.0)),
        PlanObject::door("d1", DVec2::new(117.0, -18.0), 36.0).with_properties(|p| {
            // Tür quer zur Schnittlinie: Breite 6 entlang x, Tiefe 36 entlang y
            p.width = Some(6.0);
            p.depth = Some(36.0);
            p.door_type = Some("single".into());
        }),
        PlanObject::window("win1", DVec2::new(197.0, -18.0), 6.0).with_properties(|p| {
            p.depth = Some(36.0);
            p.sill_height = Some(60.0);
        }),
        PlanObject::rect(
            "sofa",
            ObjectType::Furniture,
            DVec2::new(80.0, -10.0),
            20.0,
            20.0,
        ),
    ])
}

fn draw(engine: &mut SectionEngine, plan: &FloorPlan, start: DVec2, end: DVec2) -> Option<String> {
    engine.begin(start);
    engine.update(end);
    engine.commit(plan)
}

#[test]
fn test_short_line_is_discarded() {
    let plan = FloorPlan::new();
    let mut e = engine();
    assert!(draw(&mut e, &plan, DVec2::ZERO, DVec2::new(5.0, 0.0)).is_none());
    assert!(!e.is_drawing());
    assert!(e.lines().is_empty());
    assert!(e.views().is_empty());
}

#[test]
fn test_long_enough_line_yields_exactly_one_view() {
    let plan = FloorPlan::new();
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::ZERO, DVec2::new(0.0, 30.0)).expect("Linie erwartet");
    assert_eq!(e.lines().len(), 1);
    assert_eq!(e.views().len(), 1);
    assert_eq!(e.views()[0].section_line_id, id);
    assert!(e.views()[0].slice.is_empty());
    assert_relative_eq!(e.views()[0].slice.max_height, 96.0);
    assert_relative_eq!(e.views()[0].scale, 1.0);
}

#[test]
fn test_minimum_length_is_inclusive() {
    let plan = FloorPlan::new();
    let mut e = engine();
    assert!(draw(&mut e, &plan, DVec2::ZERO, DVec2::new(20.0, 0.0)).is_some());
}

#[test]
fn test_begin_sets_start_and_end() {
    let mut e = engine();
    assert!(e.begin(DVec2::new(3.0, 4.0)));
    let line = e.drawing().unwrap();
    assert_eq!(line.start, DVec2::new(3.0, 4.0));
    assert_eq!(line.end, line.start);
    assert!(line.visible);
}

#[test]
fn test_update_and_commit_outside_drawing_are_noops() {
    let plan = FloorPlan::new();
    let mut e = engine();
    assert!(!e.update(DVec2::ONE));
    assert!(e.commit(&plan).is_none());
    assert!(e.lines().is_empty());
}

#[test]
fn test_default_names_are_sequential() {
    let plan = FloorPlan::new();
    let mut e = engine();
    draw(&mut e, &plan, DVec2::ZERO, DVec2::new(100.0, 0.0));
    // Verworfene Linien verbrauchen keinen Namen
    draw(&mut e, &plan, DVec2::ZERO, DVec2::new(1.0, 0.0));
    draw(&mut e, &plan, DVec2::ZERO, DVec2::new(0.0, 100.0));
    let names: Vec<_> = e.lines().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Section A", "Section B"]);
}

#[test]
fn test_section_letters_continue_after_z() {
    assert_eq!(section_letters(0), "A");
    assert_eq!(section_letters(25), "Z");
    assert_eq!(section_letters(26), "AA");
    assert_eq!(section_letters(27), "AB");
    assert_eq!(section_letters(701), "ZZ");
    assert_eq!(section_letters(702), "AAA");
}

#[test]
fn test_slice_collects_walls_doors_windows_sorted_by_offset() {
    let plan = sample_plan();
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::new(250.0, 0.0), DVec2::new(0.0, 0.0)).unwrap();
    let slice = &e.view_for(&id).unwrap().slice;

    assert_eq!(slice.walls.len(), 1);
    assert_eq!(slice.doors.len(), 1);
    assert_eq!(slice.windows.len(), 1);

    let wall = &slice.walls[0];
    assert_eq!(wall.object_id, "w1");
    assert_eq!(wall.point, DVec2::new(50.0, 0.0));
    assert_relative_eq!(wall.offset, 200.0);
    assert_relative_eq!(wall.height, 96.0);
    assert_relative_eq!(wall.thickness, 6.0);

    let door = &slice.doors[0];
    assert_relative_eq!(door.offset, 130.0);
    assert_relative_eq!(door.height, 80.0);
    assert_eq!(door.door_type.as_deref(), Some("single"));

    let window = &slice.windows[0];
    assert_relative_eq!(window.offset, 50.0);
    assert_relative_eq!(window.sill_height, 60.0);
    assert_relative_eq!(window.height, 48.0);

    // Fenster oben bei 60 + 48
    assert_relative_eq!(slice.max_height, 108.0);
}

#[test]
fn test_slice_ignores_non_structural_objects() {
    let plan = sample_plan();
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::new(70.0, 0.0), DVec2::new(110.0, 0.0)).unwrap();
    assert!(e.view_for(&id).unwrap().slice.is_empty());
}

#[test]
fn test_walls_sorted_by_offset_from_start() {
    let plan = FloorPlan::from_objects([
        PlanObject::wall("far", DVec2::new(80.0, -20.0), DVec2::new(80.0, 20.0)),
        PlanObject::wall("near", DVec2::new(10.0, -20.0), DVec2::new(10.0, 20.0)),
    ]);
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::ZERO, DVec2::new(100.0, 0.0)).unwrap();
    let ids: Vec<_> = e
        .view_for(&id)
        .unwrap()
        .slice
        .walls
        .iter()
        .map(|w| w.object_id.as_str())
        .collect();
    assert_eq!(ids, vec!["near", "far"]);
}

#[test]
fn test_interval_overlap_alone_is_a_hit() {
    // Diagonale Linie: die Linie selbst verfehlt die Tür, die Intervalle überlappen
    let plan = FloorPlan::from_objects([PlanObject::door("d", DVec2::new(80.0, 0.0), 20.0)]);
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::ZERO, DVec2::new(100.0, 100.0)).unwrap();
    let doors = &e.view_for(&id).unwrap().slice.doors;
    assert_eq!(doors.len(), 1);
    assert_eq!(doors[0].object_id, "d");
    assert_eq!(doors[0].point, DVec2::new(90.0, 3.0));
}

#[test]
fn test_disjoint_intervals_are_rejected() {
    let plan = FloorPlan::from_objects([PlanObject::door("d", DVec2::new(80.0, 0.0), 20.0)]);
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::new(0.0, 10.0), DVec2::new(100.0, 100.0)).unwrap();
    assert!(e.view_for(&id).unwrap().slice.doors.is_empty());
}

#[test]
fn test_direction_does_not_change_slice() {
    let plan = sample_plan();
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::new(0.0, 0.0), DVec2::new(250.0, 0.0)).unwrap();
    let before = e.view_for(&id).unwrap().clone();

    assert!(e.toggle_direction(&id));
    assert_eq!(e.line(&id).unwrap().direction, SectionDirection::RightToLeft);
    assert_eq!(e.line(&id).unwrap().arrow_point(), DVec2::ZERO);
    e.refresh_views(&plan);
    assert_eq!(e.view_for(&id).unwrap(), &before);
}

#[test]
fn test_move_endpoints_rederives_view() {
    let plan = sample_plan();
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::new(0.0, 100.0), DVec2::new(250.0, 100.0)).unwrap();
    assert!(e.view_for(&id).unwrap().slice.is_empty());

    assert!(e.move_endpoints(&id, DVec2::new(0.0, 0.0), DVec2::new(250.0, 0.0), &plan));
    let slice = &e.view_for(&id).unwrap().slice;
    assert_eq!(slice.walls.len(), 1);
    assert_eq!(e.views().len(), 1);
}

#[test]
fn test_move_endpoints_refuses_short_line() {
    let plan = sample_plan();
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::ZERO, DVec2::new(100.0, 0.0)).unwrap();
    assert!(!e.move_endpoints(&id, DVec2::ZERO, DVec2::new(3.0, 0.0), &plan));
    assert_eq!(e.line(&id).unwrap().end, DVec2::new(100.0, 0.0));
    assert!(!e.move_endpoints("section-99", DVec2::ZERO, DVec2::new(100.0, 0.0), &plan));
}

#[test]
fn test_scale_survives_rederive() {
    let plan = sample_plan();
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::ZERO, DVec2::new(100.0, 0.0)).unwrap();
    assert!(e.set_scale(&id, 0.5));
    assert!(!e.set_scale(&id, 0.0));
    assert!(e.move_endpoints(&id, DVec2::ZERO, DVec2::new(150.0, 0.0), &plan));
    assert_relative_eq!(e.view_for(&id).unwrap().scale, 0.5);
}

#[test]
fn test_refresh_views_picks_up_plan_changes() {
    let mut plan = FloorPlan::new();
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::ZERO, DVec2::new(100.0, 0.0)).unwrap();
    assert!(e.view_for(&id).unwrap().slice.is_empty());

    plan.add_object(PlanObject::wall(
        "w",
        DVec2::new(30.0, -10.0),
        DVec2::new(30.0, 10.0),
    ));
    e.refresh_views(&plan);
    assert_eq!(e.view_for(&id).unwrap().slice.walls.len(), 1);
}

#[test]
fn test_rename_hide_and_remove() {
    let plan = FloorPlan::new();
    let mut e = engine();
    let id = draw(&mut e, &plan, DVec2::ZERO, DVec2::new(100.0, 0.0)).unwrap();
    assert!(e.rename_line(&id, "Längsschnitt"));
    assert!(e.set_visible(&id, false));
    let line = e.line(&id).unwrap();
    assert_eq!(line.name, "Längsschnitt");
    assert!(!line.visible);

    assert!(e.remove_line(&id).is_some());
    assert!(e.views().is_empty());
    assert!(!e.rename_line(&id, "x"));
    assert!(!e.toggle_direction(&id));
}

#[test]
fn test_begin_while_drawing_replaces_line() {
    let plan = FloorPlan::new();
    let mut e = engine();
    e.begin(DVec2::ZERO);
    e.update(DVec2::new(100.0, 0.0));
    e.begin(DVec2::new(500.0, 500.0));
    assert_eq!(e.drawing().unwrap().start, DVec2::new(500.0, 500.0));
    assert!(e.commit(&plan).is_none());
}
