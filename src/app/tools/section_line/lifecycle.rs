//! Lifecycle-Methoden des Schnittlinien-Werkzeugs.

use glam::DVec2;

use super::geometry::derive_slice;
use super::state::{SectionDrawState, SectionEngine, SECTION_COLOR};
use crate::core::{FloorPlan, SectionDirection, SectionLine, SectionStyle, SectionView};

impl SectionEngine {
    /// Beginnt eine neue Linie mit `start = end = point`.
    ///
    /// Eine bereits gezogene, noch nicht festgeschriebene Linie wird verworfen.
    pub fn begin(&mut self, point: DVec2) -> bool {
        if !point.is_finite() {
            return false;
        }
        if let SectionDrawState::Drawing { line } = &self.state {
            log::debug!("Schnittlinie {} verworfen (neuer Start)", line.id);
        }

        let id = self.next_line_id();
        log::debug!("Schnittlinie {} begonnen bei {:?}", id, point);
        self.state = SectionDrawState::Drawing {
            line: SectionLine {
                id,
                name: String::new(),
                start: point,
                end: point,
                color: SECTION_COLOR.to_string(),
                visible: true,
                direction: SectionDirection::default(),
                style: SectionStyle::default(),
            },
        };
        true
    }

    /// Setzt den Endpunkt der Linie im Aufbau (nur Vorschau).
    pub fn update(&mut self, point: DVec2) -> bool {
        match &mut self.state {
            SectionDrawState::Drawing { line } if point.is_finite() => {
                line.end = point;
                true
            }
            _ => false,
        }
    }

    /// Schreibt die Linie im Aufbau fest und leitet ihre Ansicht ab.
    ///
    /// Zu kurze Linien werden verworfen (Rückgabe `None`), das Werkzeug ist
    /// danach in jedem Fall wieder `Idle`.
    pub fn commit(&mut self, plan: &FloorPlan) -> Option<String> {
        let SectionDrawState::Drawing { mut line } = std::mem::take(&mut self.state) else {
            return None;
        };

        if !self.is_long_enough(&line) {
            log::debug!(
                "Schnittlinie {} zu kurz ({:.1} < {:.1}), verworfen",
                line.id,
                line.length(),
                self.options.min_length
            );
            return None;
        }

        line.name = self.next_default_name();
        let view = self.derive_view(&line, plan);
        let id = line.id.clone();
        log::debug!("Schnittlinie {} als '{}' festgeschrieben", id, line.name);
        self.lines.push(line);
        self.views.push(view);
        Some(id)
    }

    /// Bricht die Linie im Aufbau ab.
    pub fn cancel(&mut self) {
        if let SectionDrawState::Drawing { line } = std::mem::take(&mut self.state) {
            log::debug!("Schnittlinie {} abgebrochen", line.id);
        }
    }

    /// Leitet die Ansicht einer Linie aus dem aktuellen Grundriss ab.
    ///
    /// Der Maßstab einer bereits vorhandenen Ansicht bleibt erhalten.
    pub fn derive_view(&self, line: &SectionLine, plan: &FloorPlan) -> SectionView {
        let scale = self
            .view_for(&line.id)
            .map_or(self.options.default_scale, |view| view.scale);
        SectionView {
            id: format!("{}-view", line.id),
            section_line_id: line.id.clone(),
            scale,
            slice: derive_slice(line, plan, self.options.height_floor),
        }
    }

    // ── Festgeschriebene Linien ──────────────────────────────────

    /// Alle festgeschriebenen Linien.
    pub fn lines(&self) -> &[SectionLine] {
        &self.lines
    }

    /// Festgeschriebene Linie per ID.
    pub fn line(&self, line_id: &str) -> Option<&SectionLine> {
        self.lines.iter().find(|line| line.id == line_id)
    }

    /// Alle abgeleiteten Ansichten.
    pub fn views(&self) -> &[SectionView] {
        &self.views
    }

    /// Ansicht zu einer Linie.
    pub fn view_for(&self, line_id: &str) -> Option<&SectionView> {
        self.views.iter().find(|view| view.section_line_id == line_id)
    }

    /// Verschiebt die Endpunkte einer festgeschriebenen Linie und berechnet die Ansicht neu.
    ///
    /// Verweigert (`false`) bei unbekannter ID oder wenn die neue Linie zu kurz wäre.
    pub fn move_endpoints(
        &mut self,
        line_id: &str,
        start: DVec2,
        end: DVec2,
        plan: &FloorPlan,
    ) -> bool {
        if !start.is_finite() || !end.is_finite() {
            return false;
        }
        let Some(index) = self.lines.iter().position(|line| line.id == line_id) else {
            return false;
        };

        let mut moved = self.lines[index].clone();
        moved.start = start;
        moved.end = end;
        if !self.is_long_enough(&moved) {
            log::debug!("Schnittlinie {}: neue Länge zu kurz, ignoriert", line_id);
            return false;
        }

        let view = self.derive_view(&moved, plan);
        self.lines[index] = moved;
        self.store_view(view);
        true
    }

    /// Entfernt eine Linie samt Ansicht.
    pub fn remove_line(&mut self, line_id: &str) -> Option<SectionLine> {
        let index = self.lines.iter().position(|line| line.id == line_id)?;
        self.views.retain(|view| view.section_line_id != line_id);
        Some(self.lines.remove(index))
    }

    /// Benennt eine Linie um.
    pub fn rename_line(&mut self, line_id: &str, name: impl Into<String>) -> bool {
        self.with_line(line_id, |line| line.name = name.into())
    }

    /// Blendet eine Linie ein oder aus.
    pub fn set_visible(&mut self, line_id: &str, visible: bool) -> bool {
        self.with_line(line_id, |line| line.visible = visible)
    }

    /// Kehrt die Blickrichtung um. Die Ansicht bleibt unverändert.
    pub fn toggle_direction(&mut self, line_id: &str) -> bool {
        self.with_line(line_id, |line| line.direction = line.direction.flipped())
    }

    /// Setzt den Darstellungsmaßstab einer Ansicht (muss positiv sein).
    pub fn set_scale(&mut self, line_id: &str, scale: f64) -> bool {
        if !scale.is_finite() || scale <= 0.0 {
            return false;
        }
        match self
            .views
            .iter_mut()
            .find(|view| view.section_line_id == line_id)
        {
            Some(view) => {
                view.scale = scale;
                true
            }
            None => false,
        }
    }

    /// Leitet alle Ansichten neu ab (nach Änderungen am Grundriss).
    pub fn refresh_views(&mut self, plan: &FloorPlan) {
        let views: Vec<SectionView> = self
            .lines
            .iter()
            .map(|line| self.derive_view(line, plan))
            .collect();
        self.views = views;
    }

    /// Verwirft alle Linien und die Linie im Aufbau.
    pub fn clear(&mut self) {
        self.state = SectionDrawState::Idle;
        self.lines.clear();
        self.views.clear();
    }

    fn with_line(&mut self, line_id: &str, edit: impl FnOnce(&mut SectionLine)) -> bool {
        match self.lines.iter_mut().find(|line| line.id == line_id) {
            Some(line) => {
                edit(line);
                true
            }
            None => false,
        }
    }

    fn store_view(&mut self, view: SectionView) {
        match self
            .views
            .iter_mut()
            .find(|existing| existing.section_line_id == view.section_line_id)
        {
            Some(existing) => *existing = view,
            None => self.views.push(view),
        }
    }
}
