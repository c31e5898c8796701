//! Integrationstests für den Intent-Fluss einer Editier-Sitzung:
//! - Raum per Klicks zeichnen, schließen und bearbeiten
//! - Schnittlinie per Zeiger ziehen (mit Endpunkt-Snap)
//! - Prüfung über Räume der Sitzung

use floorplan_engine::app::BoundaryPhase;
use floorplan_engine::{
    EditorSession, EngineOptions, FloorPlan, GuideOrientation, PlanObject, SessionIntent, Severity,
};
use glam::DVec2;

/// Rechteckiger Raum 240 × 240 mit vier Wänden.
fn walled_plan() -> FloorPlan {
    FloorPlan::from_objects([
        PlanObject::wall("w-s", DVec2::new(0.0, 0.0), DVec2::new(240.0, 0.0)),
        PlanObject::wall("w-e", DVec2::new(240.0, 0.0), DVec2::new(240.0, 240.0)),
        PlanObject::wall("w-n", DVec2::new(240.0, 240.0), DVec2::new(0.0, 240.0)),
        PlanObject::wall("w-w", DVec2::new(0.0, 240.0), DVec2::new(0.0, 0.0)),
    ])
}

fn click(session: &mut EditorSession, plan: &FloorPlan, x: f64, y: f64) {
    session
        .handle_intent(
            plan,
            SessionIntent::RoomPointClicked {
                world_pos: DVec2::new(x, y),
            },
        )
        .expect("RoomPointClicked darf nicht fehlschlagen");
}

fn draw_room(session: &mut EditorSession, plan: &FloorPlan, name: &str) {
    session
        .handle_intent(
            plan,
            SessionIntent::RoomStartRequested {
                name: Some(name.to_string()),
            },
        )
        .unwrap();
    click(session, plan, 0.0, 0.0);
    click(session, plan, 240.0, 0.0);
    click(session, plan, 240.0, 240.0);
    click(session, plan, 0.0, 240.0);
    // Klick nahe am Startpunkt schließt den Raum
    click(session, plan, 5.0, 5.0);
}

#[test]
fn test_room_drawn_by_clicks_closes_near_start() {
    let plan = walled_plan();
    let mut session = EditorSession::default();
    draw_room(&mut session, &plan, "Living Room");

    assert_eq!(session.rooms.phase(), BoundaryPhase::Idle);
    let rooms = session.rooms.rooms();
    assert_eq!(rooms.len(), 1);
    assert!(rooms[0].is_closed());
    assert_eq!(rooms[0].points().len(), 4);
    assert_eq!(rooms[0].area(), 57_600.0);
}

#[test]
fn test_room_points_snap_to_guides_only() {
    let plan = walled_plan();
    let mut session = EditorSession::default();
    session
        .handle_intent(
            &plan,
            SessionIntent::GuideAdded {
                orientation: GuideOrientation::Vertical,
                offset: 100.0,
                temporary: false,
            },
        )
        .unwrap();
    session
        .handle_intent(&plan, SessionIntent::RoomStartRequested { name: None })
        .unwrap();
    click(&mut session, &plan, 96.0, 13.0);
    click(&mut session, &plan, 57.0, 13.0);

    let working = session.rooms.working().expect("Raum in Arbeit");
    // Hilfslinie zieht x auf 100, das Raster (20) greift für Raumpunkte nicht
    assert_eq!(working.points()[0], DVec2::new(100.0, 13.0));
    assert_eq!(working.points()[1], DVec2::new(57.0, 13.0));
}

#[test]
fn test_edit_and_cancel_through_intents() {
    let plan = walled_plan();
    let mut session = EditorSession::default();
    draw_room(&mut session, &plan, "Office");
    let room_id = session.rooms.rooms()[0].id.clone();

    session
        .handle_intent(
            &plan,
            SessionIntent::RoomEditRequested {
                room_id: room_id.clone(),
            },
        )
        .unwrap();
    assert_eq!(session.rooms.phase(), BoundaryPhase::Editing);
    assert!(session.rooms.rooms().is_empty());

    session
        .handle_intent(&plan, SessionIntent::RoomCancelRequested)
        .unwrap();
    assert_eq!(session.rooms.rooms().len(), 1);
    assert_eq!(session.rooms.rooms()[0].id, room_id);

    // Unbekannte ID: kein Fehler, keine Änderung
    session
        .handle_intent(
            &plan,
            SessionIntent::RoomEditRequested {
                room_id: "room-404".into(),
            },
        )
        .unwrap();
    assert_eq!(session.rooms.phase(), BoundaryPhase::Idle);
}

#[test]
fn test_complete_with_two_points_keeps_defining() {
    let plan = FloorPlan::new();
    let mut session = EditorSession::default();
    session
        .handle_intent(&plan, SessionIntent::RoomStartRequested { name: None })
        .unwrap();
    click(&mut session, &plan, 0.0, 0.0);
    click(&mut session, &plan, 100.0, 0.0);
    session
        .handle_intent(&plan, SessionIntent::RoomCompleteRequested)
        .unwrap();
    assert_eq!(session.rooms.phase(), BoundaryPhase::Defining);
    assert!(session.rooms.rooms().is_empty());
}

#[test]
fn test_section_drag_commits_view_across_walls() {
    let plan = walled_plan();
    let mut session = EditorSession::default();

    session
        .handle_intent(
            &plan,
            SessionIntent::SectionPointerDown {
                world_pos: DVec2::new(-41.0, 121.0),
            },
        )
        .unwrap();
    session
        .handle_intent(
            &plan,
            SessionIntent::SectionPointerMoved {
                world_pos: DVec2::new(150.0, 119.0),
            },
        )
        .unwrap();
    assert!(session.sections.is_drawing());
    session
        .handle_intent(
            &plan,
            SessionIntent::SectionPointerUp {
                world_pos: DVec2::new(281.0, 118.0),
            },
        )
        .unwrap();

    assert!(!session.sections.is_drawing());
    let line = &session.sections.lines()[0];
    assert_eq!(line.name, "Section A");
    assert_eq!(line.start, DVec2::new(-40.0, 120.0));
    assert_eq!(line.end, DVec2::new(280.0, 120.0));

    let view = &session.sections.views()[0];
    let walls: Vec<_> = view
        .slice
        .walls
        .iter()
        .map(|w| w.object_id.as_str())
        .collect();
    assert_eq!(walls, vec!["w-w", "w-e"]);
    assert_eq!(view.slice.walls[0].offset, 40.0);
    assert_eq!(view.slice.max_height, 96.0);
}

#[test]
fn test_short_section_drag_is_discarded() {
    let plan = walled_plan();
    let mut session = EditorSession::default();
    session
        .handle_intent(
            &plan,
            SessionIntent::SectionPointerDown {
                world_pos: DVec2::new(60.0, 60.0),
            },
        )
        .unwrap();
    session
        .handle_intent(
            &plan,
            SessionIntent::SectionPointerUp {
                world_pos: DVec2::new(63.0, 61.0),
            },
        )
        .unwrap();
    assert!(session.sections.lines().is_empty());
    assert!(session.sections.views().is_empty());
}

#[test]
fn test_validate_intent_uses_session_rooms() {
    let mut plan = walled_plan();
    let mut session = EditorSession::default();
    draw_room(&mut session, &plan, "Bedroom");

    session
        .handle_intent(&plan, SessionIntent::ValidateRequested)
        .unwrap();
    let critical = session.validation.report().by_severity(Severity::Critical);
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].title, "No Egress Door");

    plan.add_object(PlanObject::door("d", DVec2::new(100.0, -3.0), 36.0));
    session
        .handle_intent(&plan, SessionIntent::ValidateRequested)
        .unwrap();
    assert!(session.validation.report().is_empty());
}

#[test]
fn test_sessions_are_independent() {
    let plan = walled_plan();
    let mut a = EditorSession::new(EngineOptions::default());
    let b = EditorSession::new(EngineOptions::default());
    draw_room(&mut a, &plan, "Kitchen");
    assert_eq!(a.rooms.rooms().len(), 1);
    assert!(b.rooms.rooms().is_empty());
}
