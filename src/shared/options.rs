//! Zentrale Konfiguration der Grundriss-Engine.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Standard-Rasterweite in Welteinheiten.
pub const GRID_SIZE: f64 = 20.0;
/// Standard-Snap-Toleranz: Kandidaten innerhalb dieses Radius werden übernommen.
pub const SNAP_TOLERANCE: f64 = 10.0;
/// Grob-Vorfilter für Objekt-Features (Vielfaches der Toleranz).
pub const OBJECT_PRUNE_FACTOR: f64 = 5.0;
/// Linien-Schnittpunkte werden nur bis zu diesem Vielfachen der Toleranz gemeldet.
pub const INTERSECTION_RADIUS_FACTOR: f64 = 2.0;

// ── Räume ───────────────────────────────────────────────────────────

/// Abstand zum ersten Punkt, ab dem ein Klick den Raum schließt.
pub const ROOM_CLOSE_DISTANCE: f64 = 20.0;
/// Standard-Wandhöhe neuer Räume.
pub const DEFAULT_WALL_HEIGHT: f64 = 96.0;
/// Standard-Seed für die Raumfarben.
pub const ROOM_COLOR_SEED: u64 = 0x5eed_f100;

// ── Schnitte ────────────────────────────────────────────────────────

/// Schnittlinien kürzer als dieser Wert werden verworfen.
pub const MIN_SECTION_LENGTH: f64 = 20.0;
/// Untergrenze der Schnitt-Maximalhöhe.
pub const SECTION_HEIGHT_FLOOR: f64 = 96.0;
/// Standard-Maßstab neuer Schnittansichten.
pub const SECTION_SCALE: f64 = 1.0;

// ── Prüfregeln ──────────────────────────────────────────────────────

/// Minimale Türbreite, darunter Warnung.
pub const DOOR_WIDTH_MIN: f64 = 24.0;
/// Maximale Türbreite, darüber Hinweis.
pub const DOOR_WIDTH_MAX: f64 = 48.0;
/// Türbreite, die als Auto-Fix vorgeschlagen wird.
pub const DOOR_WIDTH_STANDARD: f64 = 36.0;
/// Mindestabstand eines Fensters zur Wandecke.
pub const WINDOW_CORNER_CLEARANCE: f64 = 12.0;
/// Flächen-Divisor: Quadrat-Einheiten → Quadratfuß.
pub const AREA_UNIT_DIVISOR: f64 = 144.0;

// ── Unter-Optionen ──────────────────────────────────────────────────

/// Snap-Quellen und Toleranz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SnapOptions {
    /// Raster-Kandidaten erzeugen
    pub snap_to_grid: bool,
    /// Objekt-Features und Linien-Schnittpunkte erzeugen
    pub snap_to_objects: bool,
    /// Hilfslinien-Kandidaten erzeugen
    pub snap_to_guides: bool,
    /// Akzeptanzradius in Welteinheiten
    pub tolerance: f64,
    /// Rasterweite in Welteinheiten
    pub grid_size: f64,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            snap_to_grid: true,
            snap_to_objects: true,
            snap_to_guides: true,
            tolerance: SNAP_TOLERANCE,
            grid_size: GRID_SIZE,
        }
    }
}

/// Verhalten des Raumgrenzen-Werkzeugs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoomOptions {
    /// Neue Raumpunkte auf Hilfslinien einrasten
    pub snap_points_to_guides: bool,
    /// Schließ-Abstand zum ersten Punkt
    pub close_distance: f64,
    /// Wandhöhe neuer Räume
    pub default_wall_height: f64,
    /// Seed für die Pastellfarben
    pub color_seed: u64,
}

impl Default for RoomOptions {
    fn default() -> Self {
        Self {
            snap_points_to_guides: true,
            close_distance: ROOM_CLOSE_DISTANCE,
            default_wall_height: DEFAULT_WALL_HEIGHT,
            color_seed: ROOM_COLOR_SEED,
        }
    }
}

/// Verhalten der Schnitt-Engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SectionOptions {
    /// Mindestlänge einer Schnittlinie
    pub min_length: f64,
    /// Untergrenze der Maximalhöhe einer Ansicht
    pub height_floor: f64,
    /// Maßstab neuer Ansichten
    pub default_scale: f64,
    /// Schnitt-Endpunkte über den Snap-Resolver führen
    pub snap_endpoints: bool,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            min_length: MIN_SECTION_LENGTH,
            height_floor: SECTION_HEIGHT_FLOOR,
            default_scale: SECTION_SCALE,
            snap_endpoints: true,
        }
    }
}

/// Grenzwerte der Standard-Prüfregeln.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ValidationOptions {
    /// Minimale Türbreite
    pub door_width_min: f64,
    /// Maximale Türbreite
    pub door_width_max: f64,
    /// Vorgeschlagene Standard-Türbreite
    pub door_width_standard: f64,
    /// Mindestabstand Fenster ↔ Wandecke
    pub window_corner_clearance: f64,
    /// Divisor Quadrat-Einheiten → Quadratfuß
    pub area_unit_divisor: f64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            door_width_min: DOOR_WIDTH_MIN,
            door_width_max: DOOR_WIDTH_MAX,
            door_width_standard: DOOR_WIDTH_STANDARD,
            window_corner_clearance: WINDOW_CORNER_CLEARANCE,
            area_unit_divisor: AREA_UNIT_DIVISOR,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `floorplan_engine.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineOptions {
    /// Snapping
    pub snap: SnapOptions,
    /// Raumgrenzen
    pub rooms: RoomOptions,
    /// Schnitte
    pub sections: SectionOptions,
    /// Prüfregeln
    pub validation: ValidationOptions,
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floorplan_engine"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floorplan_engine.toml")
    }
}
