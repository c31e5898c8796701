//! floorplan-check: prüft einen Grundriss-Schnappschuss auf der Kommandozeile.
//!
//! Aufruf: `floorplan-check <snapshot.json>`. Exit-Code 1 bei kritischen Befunden.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use floorplan_engine::{EngineOptions, PlanSnapshot, ValidationEngine};

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Aufruf: floorplan-check <snapshot.json>")?;

    log::info!(
        "floorplan-check v{} prüft {}",
        env!("CARGO_PKG_VERSION"),
        path.display()
    );

    let options = EngineOptions::load_from_file(&EngineOptions::config_path());
    let (plan, rooms) = PlanSnapshot::load(&path)?.into_parts();
    log::info!("{} Objekte, {} Räume geladen", plan.len(), rooms.len());

    let mut engine = ValidationEngine::new(&options.validation);
    let report = engine.validate(&plan, &rooms);

    for issue in report.sorted_by_severity() {
        let position = issue
            .position
            .map(|p| format!(" @ ({:.1}, {:.1})", p.x, p.y))
            .unwrap_or_default();
        println!(
            "[{:?}/{:?}] {}: {}{}",
            issue.severity, issue.kind, issue.title, issue.description, position
        );
        if let Some(suggestion) = &issue.suggestion {
            println!("    → {}", suggestion);
        }
    }

    let summary = report.summary();
    println!(
        "{} Befunde: {} kritisch, {} hoch, {} mittel, {} niedrig ({} Fehler, {} Warnungen, {} Hinweise)",
        summary.total,
        summary.critical,
        summary.high,
        summary.medium,
        summary.low,
        summary.errors,
        summary.warnings,
        summary.infos
    );

    Ok(if summary.has_blocking {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
