//! Prüf-Engine: führt registrierte Regeln über einen Grundriss-Schnappschuss aus.
//!
//! Jeder Lauf erzeugt alle Befunde neu (keine Dirty-Verfolgung). Eine Regel,
//! die mit `Err` endet oder panict, wird protokolliert und liefert in diesem
//! Lauf keine Befunde; alle anderen Regeln laufen weiter.

mod issue;
mod report;
mod rule;
pub mod rules;

pub use issue::{AutoFix, IssueCategory, IssueKind, Severity, ValidationIssue};
pub use report::{ValidationReport, ValidationSummary};
pub use rule::{RuleInfo, ValidationRule};

use std::panic::{self, AssertUnwindSafe};

use crate::core::{FloorPlan, RoomBoundary};
use crate::shared::ValidationOptions;

struct RegisteredRule {
    rule: Box<dyn ValidationRule>,
    enabled: bool,
}

/// Regel-Registry mit dem Ergebnis des letzten Laufs.
pub struct ValidationEngine {
    rules: Vec<RegisteredRule>,
    report: ValidationReport,
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("rules", &self.rules())
            .field("issues", &self.report.len())
            .finish()
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(&ValidationOptions::default())
    }
}

impl ValidationEngine {
    /// Engine mit allen Standardregeln (alle aktiv).
    pub fn new(options: &ValidationOptions) -> Self {
        let mut engine = Self::empty();
        for rule in rules::default_rules(options) {
            engine.register(rule);
        }
        engine
    }

    /// Engine ohne Regeln.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            report: ValidationReport::default(),
        }
    }

    /// Registriert eine Regel (aktiv). Eine Regel gleicher ID wird ersetzt
    /// und behält ihre Position.
    pub fn register(&mut self, rule: Box<dyn ValidationRule>) {
        match self.rules.iter_mut().find(|r| r.rule.id() == rule.id()) {
            Some(existing) => {
                log::debug!("Prüfregel '{}' ersetzt", rule.id());
                existing.rule = rule;
                existing.enabled = true;
            }
            None => {
                log::debug!("Prüfregel '{}' registriert", rule.id());
                self.rules.push(RegisteredRule {
                    rule,
                    enabled: true,
                });
            }
        }
    }

    /// Entfernt eine Regel.
    pub fn unregister(&mut self, rule_id: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.rule.id() != rule_id);
        self.rules.len() != before
    }

    /// Aktiviert oder deaktiviert eine Regel.
    pub fn set_rule_enabled(&mut self, rule_id: &str, enabled: bool) -> bool {
        match self.rules.iter_mut().find(|r| r.rule.id() == rule_id) {
            Some(registered) => {
                registered.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Registrierte Regeln in Ausführungsreihenfolge.
    pub fn rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.rule.id().to_string(),
                name: r.rule.name().to_string(),
                category: r.rule.category(),
                enabled: r.enabled,
            })
            .collect()
    }

    /// Führt alle aktiven Regeln aus und ersetzt den gespeicherten Bericht.
    pub fn validate(&mut self, plan: &FloorPlan, rooms: &[RoomBoundary]) -> &ValidationReport {
        let mut issues = Vec::new();
        for registered in self.rules.iter().filter(|r| r.enabled) {
            let rule = registered.rule.as_ref();
            match panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(plan, rooms))) {
                Ok(Ok(found)) => issues.extend(found),
                Ok(Err(e)) => {
                    log::warn!("Prüfregel '{}' fehlgeschlagen: {:#}", rule.id(), e);
                }
                Err(payload) => {
                    let message = if let Some(s) = payload.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = payload.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "unbekannte Ursache".to_string()
                    };
                    log::warn!("Prüfregel '{}' abgestürzt: {}", rule.id(), message);
                }
            }
        }

        log::debug!(
            "Prüflauf: {} Befunde aus {} Regeln",
            issues.len(),
            self.rules.iter().filter(|r| r.enabled).count()
        );
        self.report = ValidationReport::new(issues);
        &self.report
    }

    /// Bericht des letzten Laufs.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }
}
