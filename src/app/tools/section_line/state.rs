//! State-Definitionen und Konstruktor für das Schnittlinien-Werkzeug.

use crate::core::{SectionLine, SectionView};
use crate::shared::SectionOptions;

/// Standardfarbe neuer Schnittlinien.
pub(crate) const SECTION_COLOR: &str = "#e53935";

/// Expliziter Zustand des Schnittlinien-Werkzeugs.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SectionDrawState {
    /// Keine Linie in Arbeit
    #[default]
    Idle,
    /// Endpunkt folgt dem Zeiger
    Drawing {
        /// Linie im Aufbau (`start` fix, `end` live)
        line: SectionLine,
    },
}

/// Schnittlinien-Werkzeug einer Editier-Sitzung.
#[derive(Debug, Clone)]
pub struct SectionEngine {
    pub(crate) options: SectionOptions,
    pub(crate) state: SectionDrawState,
    /// Festgeschriebene Linien in Einfügereihenfolge
    pub(crate) lines: Vec<SectionLine>,
    /// Abgeleitete Ansichten, gleiche Reihenfolge wie `lines`
    pub(crate) views: Vec<SectionView>,
    pub(crate) next_id: u64,
    /// Anzahl vergebener Standardnamen
    pub(crate) named: usize,
}

impl SectionEngine {
    /// Erstellt ein Werkzeug ohne Linien.
    pub fn new(options: SectionOptions) -> Self {
        Self {
            options,
            state: SectionDrawState::Idle,
            lines: Vec::new(),
            views: Vec::new(),
            next_id: 0,
            named: 0,
        }
    }

    /// Expliziter Zustand (für Overlay-Rendering).
    pub fn state(&self) -> &SectionDrawState {
        &self.state
    }

    /// `true` solange eine Linie gezogen wird.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, SectionDrawState::Drawing { .. })
    }

    /// Linie im Aufbau.
    pub fn drawing(&self) -> Option<&SectionLine> {
        match &self.state {
            SectionDrawState::Idle => None,
            SectionDrawState::Drawing { line } => Some(line),
        }
    }

    /// Konfiguration des Werkzeugs.
    pub fn options(&self) -> &SectionOptions {
        &self.options
    }

    pub(crate) fn next_line_id(&mut self) -> String {
        self.next_id += 1;
        format!("section-{}", self.next_id)
    }

    pub(crate) fn next_default_name(&mut self) -> String {
        let name = format!("Section {}", super::geometry::section_letters(self.named));
        self.named += 1;
        name
    }

    /// Lange genug zum Festschreiben?
    pub(crate) fn is_long_enough(&self, line: &SectionLine) -> bool {
        line.length() >= self.options.min_length
    }
}

impl Default for SectionEngine {
    fn default() -> Self {
        Self::new(SectionOptions::default())
    }
}
