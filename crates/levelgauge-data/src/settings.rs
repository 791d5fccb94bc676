//! Resolved configuration snapshots.
//!
//! [`MonitorConfig`] is read from the monitoring unit's own blob and
//! [`SurfaceSettings`] from each display's blob. Both are plain values built
//! once per initialization and never mutated afterwards.

use crate::blob::{ConfigBlob, ConfigError};
use levelgauge_core::level::Category;
use log::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FULL_SYMBOL: &str = "█";
pub const DEFAULT_HALF_SYMBOL: &str = "▌";
/// Glyph used for unfilled segments.
pub const EMPTY_SYMBOL: &str = "░";
pub const DEFAULT_SEGMENTS: u32 = 10;
/// Upper bound on glyph segments per bar.
pub const MAX_SEGMENTS: u32 = 100;

// ===========================================================================
// MonitorConfig
// ===========================================================================

/// Monitor-wide options from the `[general]` and `[display]` sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Name fragments; blocks whose name contains one are not monitored.
    pub ignore: Vec<String>,
    /// Skip unresolvable or unusable displays instead of failing.
    pub suppress_errors: bool,
    /// Name pattern that selects displays.
    pub search: String,
    /// Displays selected by exact name.
    pub panels: Vec<String>,
}

impl MonitorConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_blob(&ConfigBlob::parse(text)?))
    }

    pub fn from_blob(blob: &ConfigBlob) -> Self {
        // Older configurations spell the key "supressErrors".
        let legacy = blob.get_bool("general", "supressErrors", false);
        Self {
            ignore: blob.get_list("general", "ignore"),
            suppress_errors: blob.get_bool("general", "suppressErrors", legacy),
            search: blob.get_string("display", "search", "").trim().to_string(),
            panels: blob.get_list("display", "panels"),
        }
    }

    /// Whether any display source is configured.
    pub fn has_display_source(&self) -> bool {
        !self.search.is_empty() || !self.panels.is_empty()
    }
}

// ===========================================================================
// SurfaceSettings
// ===========================================================================

/// Which gauge strategy a surface draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GaugeMode {
    /// Continuous bar of tapered boxes sized to the surface width.
    #[default]
    Pixel,
    /// Fixed number of full/half/empty glyph segments.
    Glyph,
}

impl GaugeMode {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pixel" => Some(GaugeMode::Pixel),
            "glyph" => Some(GaugeMode::Glyph),
            _ => None,
        }
    }
}

/// Per-surface options from the `[inventory]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSettings {
    pub show_cargo: bool,
    pub show_hydrogen: bool,
    pub show_oxygen: bool,
    pub full_symbol: String,
    pub half_symbol: String,
    /// Glyph segments per bar, in `1..=MAX_SEGMENTS`.
    pub segments: u32,
    pub mode: GaugeMode,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            show_cargo: true,
            show_hydrogen: true,
            show_oxygen: true,
            full_symbol: DEFAULT_FULL_SYMBOL.to_string(),
            half_symbol: DEFAULT_HALF_SYMBOL.to_string(),
            segments: DEFAULT_SEGMENTS,
            mode: GaugeMode::Pixel,
        }
    }
}

impl SurfaceSettings {
    /// Resolve settings from a surface's configuration text.
    ///
    /// Unparseable text yields the defaults.
    pub fn from_custom_data(text: &str) -> Self {
        match ConfigBlob::parse(text) {
            Ok(blob) => Self::from_blob(&blob),
            Err(e) => {
                warn!("Surface configuration ignored: {e}");
                Self::default()
            }
        }
    }

    pub fn from_blob(blob: &ConfigBlob) -> Self {
        let defaults = Self::default();
        if !blob.has_section("inventory") {
            return defaults;
        }
        let segments = blob.get_int("inventory", "segments", DEFAULT_SEGMENTS as i64);
        let mode = GaugeMode::from_name(&blob.get_string("inventory", "mode", ""))
            .unwrap_or(defaults.mode);
        Self {
            show_cargo: blob.get_bool("inventory", "cargo", true),
            show_hydrogen: blob.get_bool("inventory", "hydrogen", true),
            show_oxygen: blob.get_bool("inventory", "oxygen", true),
            full_symbol: non_empty(blob.get_string("inventory", "full-symbol", ""), defaults.full_symbol),
            half_symbol: non_empty(blob.get_string("inventory", "half-symbol", ""), defaults.half_symbol),
            segments: segments.clamp(1, MAX_SEGMENTS as i64) as u32,
            mode,
        }
    }

    /// Whether the row for `category` is drawn.
    pub fn shows(&self, category: Category) -> bool {
        match category {
            Category::Cargo => self.show_cargo,
            Category::Hydrogen => self.show_hydrogen,
            Category::Oxygen => self.show_oxygen,
        }
    }
}

fn non_empty(value: String, default: String) -> String {
    if value.is_empty() { default } else { value }
}
