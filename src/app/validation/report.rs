//! Ergebnis eines Prüflaufs mit Filtern und Zusammenfassung.

use serde::Serialize;

use super::issue::{IssueCategory, IssueKind, Severity, ValidationIssue};

/// Zählwerte eines Prüflaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Anzahl aller Befunde
    pub total: usize,
    /// Befunde der Art `Error`
    pub errors: usize,
    /// Befunde der Art `Warning`
    pub warnings: usize,
    /// Befunde der Art `Info`
    pub infos: usize,
    /// Kritische Befunde
    pub critical: usize,
    /// Befunde mit hoher Schwere
    pub high: usize,
    /// Befunde mit mittlerer Schwere
    pub medium: usize,
    /// Befunde mit niedriger Schwere
    pub low: usize,
    /// Mindestens ein kritischer Befund
    pub has_blocking: bool,
}

impl ValidationSummary {
    /// Anzahl der Befunde einer Schwere.
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// Befunde des letzten Prüflaufs in Regel-Registrierungsreihenfolge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Alle Befunde des Laufs
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Bericht aus einer Befundliste.
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// `true` wenn der Lauf keine Befunde ergab.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Anzahl der Befunde.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Befunde einer Themengruppe.
    pub fn by_category(&self, category: IssueCategory) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.category == category)
            .collect()
    }

    /// Befunde einer Schwere.
    pub fn by_severity(&self, severity: Severity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .collect()
    }

    /// Alle Befunde, die ein Objekt oder einen Raum betreffen.
    pub fn for_object(&self, object_id: &str) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.concerns(object_id))
            .collect()
    }

    /// Befunde absteigend nach Schwere; innerhalb einer Stufe stabil.
    pub fn sorted_by_severity(&self) -> Vec<&ValidationIssue> {
        let mut sorted: Vec<&ValidationIssue> = self.issues.iter().collect();
        sorted.sort_by(|a, b| b.severity.cmp(&a.severity));
        sorted
    }

    /// Zählwerte pro Art und Schwere.
    pub fn summary(&self) -> ValidationSummary {
        let mut summary = ValidationSummary {
            total: self.issues.len(),
            ..ValidationSummary::default()
        };
        for issue in &self.issues {
            match issue.kind {
                IssueKind::Error => summary.errors += 1,
                IssueKind::Warning => summary.warnings += 1,
                IssueKind::Info => summary.infos += 1,
            }
            match issue.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
        }
        summary.has_blocking = summary.critical > 0;
        summary
    }
}
