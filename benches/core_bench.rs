use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use floorplan_engine::core::{ObjectType, RoomBoundary};
use floorplan_engine::{FloorPlan, PlanObject, SnapContext, SnapResolver, ValidationEngine};
use glam::DVec2;
use std::hint::black_box;

/// Raster aus quadratischen Zellen (Seite 120) mit Wänden, Türen, Fenstern und Möbeln.
fn build_synthetic_plan(cells_per_side: usize) -> (FloorPlan, Vec<RoomBoundary>) {
    let mut objects = Vec::new();
    let mut rooms = Vec::new();
    let cell = 120.0;

    for row in 0..cells_per_side {
        for column in 0..cells_per_side {
            let origin = DVec2::new(column as f64 * cell, row as f64 * cell);
            let key = format!("{row}-{column}");
            objects.push(PlanObject::wall(
                format!("wh-{key}"),
                origin,
                origin + DVec2::new(cell, 0.0),
            ));
            objects.push(PlanObject::wall(
                format!("wv-{key}"),
                origin,
                origin + DVec2::new(0.0, cell),
            ));
            objects.push(PlanObject::door(
                format!("d-{key}"),
                origin + DVec2::new(30.0, -3.0),
                36.0,
            ));
            objects.push(PlanObject::window(
                format!("win-{key}"),
                origin + DVec2::new(-3.0, 50.0),
                36.0,
            ));
            objects.push(PlanObject::rect(
                format!("f-{key}"),
                ObjectType::Furniture,
                origin + DVec2::new(70.0, 70.0),
                30.0,
                20.0,
            ));
            rooms.push(RoomBoundary::closed_from_points(
                format!("r-{key}"),
                if (row + column) % 2 == 0 { "Bedroom" } else { "Office" },
                vec![
                    origin,
                    origin + DVec2::new(cell, 0.0),
                    origin + DVec2::new(cell, cell),
                    origin + DVec2::new(0.0, cell),
                ],
            ));
        }
    }

    (FloorPlan::from_objects(objects), rooms)
}

fn build_query_points(count: usize, extent: f64) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) as f64 % extent) + 0.37;
            let y = ((i * 91) as f64 % extent) + 0.63;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_snap_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_resolve");
    let resolver = SnapResolver::default();

    for &cells in &[10usize, 40usize] {
        let (plan, _) = build_synthetic_plan(cells);
        let query_points = build_query_points(1024, cells as f64 * 120.0);

        group.bench_with_input(BenchmarkId::new("batch", cells * cells), &plan, |b, plan| {
            b.iter(|| {
                let mut accepted = 0usize;
                for point in &query_points {
                    if resolver
                        .resolve(black_box(*point), SnapContext::new(plan))
                        .is_accepted()
                    {
                        accepted += 1;
                    }
                }
                black_box(accepted)
            })
        });
    }

    group.finish();
}

fn bench_validation_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation_pass");

    for &cells in &[5usize, 15usize] {
        let (plan, rooms) = build_synthetic_plan(cells);
        let mut engine = ValidationEngine::default();

        group.bench_function(BenchmarkId::new("default_rules", cells * cells), |b| {
            b.iter(|| black_box(engine.validate(black_box(&plan), black_box(&rooms)).len()))
        });
    }

    group.finish();
}

criterion_group!(core_benches, bench_snap_resolve, bench_validation_pass);
criterion_main!(core_benches);
