//! Datentypen der Prüfergebnisse.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Art eines Befunds (orthogonal zur Schwere).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Fehler
    Error,
    /// Warnung
    Warning,
    /// Hinweis
    Info,
}

/// Schwere eines Befunds. Ordnung: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Kosmetisch
    Low,
    /// Sollte behoben werden
    Medium,
    /// Muss behoben werden
    High,
    /// Blockiert die Freigabe
    Critical,
}

/// Themengruppe einer Prüfregel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    /// Tragwerk und Wände
    Structural,
    /// Bauvorschriften
    Code,
    /// Barrierefreiheit und Bewegungsflächen
    Accessibility,
    /// Sicherheit und Fluchtwege
    Safety,
    /// Abstände und Überschneidungen
    Spacing,
    /// Lage von Öffnungen
    Placement,
}

/// Beschreibung einer mechanischen Korrektur. Angewendet wird sie vom Aufrufer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AutoFix {
    /// Setzt eine Objekt-Eigenschaft auf einen neuen Wert
    SetProperty {
        /// Zielobjekt
        object_id: String,
        /// Name der Eigenschaft
        key: String,
        /// Neuer Wert
        value: serde_json::Value,
    },
}

/// Ein einzelner Befund. Wird bei jedem Prüflauf neu erzeugt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Deterministische ID: `<regel>:<objekte>[:<prüfung>]`
    pub id: String,
    /// Art des Befunds
    pub kind: IssueKind,
    /// Themengruppe der erzeugenden Regel
    pub category: IssueCategory,
    /// Kurztitel
    pub title: String,
    /// Ausführliche Beschreibung (kann leer sein)
    pub description: String,
    /// Betroffene Objekt- oder Raum-IDs
    pub related_object_ids: Vec<String>,
    /// Marker-Position in Weltkoordinaten
    pub position: Option<DVec2>,
    /// Schwere des Befunds
    pub severity: Severity,
    /// Lösungsvorschlag im Klartext
    pub suggestion: Option<String>,
    /// Mechanische Korrektur, falls vorhanden
    pub auto_fix: Option<AutoFix>,
}

impl ValidationIssue {
    /// Erstellt einen Befund ohne Beschreibung, Objekte und Position.
    pub fn new(
        id: impl Into<String>,
        kind: IssueKind,
        severity: Severity,
        category: IssueCategory,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            category,
            title: title.into(),
            description: String::new(),
            related_object_ids: Vec::new(),
            position: None,
            severity,
            suggestion: None,
            auto_fix: None,
        }
    }

    /// Setzt die Beschreibung.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Setzt die betroffenen Objekt-IDs.
    pub fn with_objects<'a>(mut self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        self.related_object_ids = ids.into_iter().map(str::to_string).collect();
        self
    }

    /// Setzt die Marker-Position.
    pub fn at(mut self, position: DVec2) -> Self {
        self.position = Some(position);
        self
    }

    /// Setzt den Lösungsvorschlag.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Hängt eine mechanische Korrektur an.
    pub fn with_auto_fix(mut self, fix: AutoFix) -> Self {
        self.auto_fix = Some(fix);
        self
    }

    /// `true` wenn der Befund das Objekt (oder den Raum) betrifft.
    pub fn concerns(&self, object_id: &str) -> bool {
        self.related_object_ids.iter().any(|id| id == object_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue() -> ValidationIssue {
        ValidationIssue::new(
            "door-placement:d1:width",
            IssueKind::Warning,
            Severity::Medium,
            IssueCategory::Placement,
            "Door Too Narrow",
        )
        .with_objects(["d1"])
        .at(DVec2::new(10.0, 0.0))
        .with_auto_fix(AutoFix::SetProperty {
            object_id: "d1".into(),
            key: "width".into(),
            value: serde_json::json!(36.0),
        })
    }

    #[test]
    fn builder_fills_optional_fields() {
        let issue = issue();
        assert!(issue.concerns("d1"));
        assert!(!issue.concerns("d2"));
        assert_eq!(issue.position, Some(DVec2::new(10.0, 0.0)));
        assert!(issue.description.is_empty());
        assert!(issue.suggestion.is_none());
    }

    #[test]
    fn severity_orders_critical_highest() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn auto_fix_serialises_with_action_tag() {
        let json = serde_json::to_value(issue()).unwrap();
        assert_eq!(json["auto_fix"]["action"], "set_property");
        assert_eq!(json["auto_fix"]["key"], "width");
        assert_eq!(json["category"], "placement");
    }
}

