//! Zentrale Konfiguration der Szenen-Statistik.
//!
//! `StatsOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Formatierung ────────────────────────────────────────────────────

/// Standard-Trennzeichen für Tausendergruppen.
pub const DIGIT_SEPARATOR: char = ',';
/// Maximale Länge des Info-Strings inklusive Terminator-Reserve.
pub const MAX_INFO_LEN: usize = 512;

/// Einheitensystem für Byte-Angaben
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ByteUnits {
    /// Basis 1000: B, KB, MB, GB, TB, PB
    #[default]
    Decimal,
    /// Basis 1024: B, KiB, MiB, GiB, TiB, PiB
    Binary,
}

impl ByteUnits {
    /// Basis des Einheitensystems
    pub fn base(self) -> u64 {
        match self {
            ByteUnits::Decimal => 1000,
            ByteUnits::Binary => 1024,
        }
    }

    /// Einheiten-Kürzel aufsteigend
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            ByteUnits::Decimal => &["B", "KB", "MB", "GB", "TB", "PB"],
            ByteUnits::Binary => &["B", "KiB", "MiB", "GiB", "TiB", "PiB"],
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Statistik-Optionen.
/// Wird als `scene_stats.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsOptions {
    /// Trennzeichen für Tausendergruppen
    pub digit_separator: char,
    /// Einheitensystem für Speicherangaben
    pub byte_units: ByteUnits,
    /// Speicherverbrauch anhängen
    pub show_memory: bool,
    /// GPU-Speicher anhängen (nur wenn das Backend ihn liefert)
    pub show_gpu_memory: bool,
    /// Versions-Tag am Ende des Strings
    pub version_tag: String,
    /// Maximale Länge des Info-Strings
    pub max_info_len: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            digit_separator: DIGIT_SEPARATOR,
            byte_units: ByteUnits::Decimal,
            show_memory: true,
            show_gpu_memory: true,
            version_tag: default_version_tag(),
            max_info_len: MAX_INFO_LEN,
        }
    }
}

/// Versions-Tag der Crate, z.B. `v0.3.0`
fn default_version_tag() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

impl StatsOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Statistik-Optionen geladen aus: {}", path.display());
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
        log::info!("Statistik-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("scene_stats"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("scene_stats.toml")
    }
}
