//! Schnittstelle einer Prüfregel.

use serde::Serialize;

use super::issue::{IssueCategory, ValidationIssue};
use crate::core::{FloorPlan, RoomBoundary};

/// Eine Prüfregel über einen Grundriss-Schnappschuss.
///
/// Regeln sind zustandslos: gleiche Eingabe → gleiche Befunde in gleicher
/// Reihenfolge. Ein `Err` (oder Panic) wird von der Engine abgefangen und
/// führt nur zum Ausfall dieser Regel im aktuellen Lauf.
pub trait ValidationRule {
    /// Stabile ID (Präfix der Befund-IDs)
    fn id(&self) -> &str;

    /// Anzeigename
    fn name(&self) -> &str;

    /// Themengruppe aller Befunde dieser Regel
    fn category(&self) -> IssueCategory;

    /// Prüft Grundriss und abgeschlossene Räume
    fn evaluate(
        &self,
        plan: &FloorPlan,
        rooms: &[RoomBoundary],
    ) -> anyhow::Result<Vec<ValidationIssue>>;
}

/// Registrierungsdaten einer Regel (für Einstellungs-Panels).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    /// Regel-ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Themengruppe
    pub category: IssueCategory,
    /// `false` wenn die Regel bei Prüfläufen übersprungen wird
    pub enabled: bool,
}
