//! Schnittlinien-Werkzeug: zeichnet Schnittlinien und leitet Schnittansichten ab.
//!
//! Zustände je Linie: `Idle → Drawing → (festgeschrieben)`. Zu kurze Linien
//! werden beim Festschreiben verworfen. Jede festgeschriebene Linie besitzt
//! genau eine abgeleitete `SectionView`, die bei Endpunkt-Änderungen neu
//! berechnet wird.

mod geometry;
mod lifecycle;
mod state;

pub use geometry::{derive_slice, section_letters};
pub use state::{SectionDrawState, SectionEngine};

#[cfg(test)]
mod tests;
