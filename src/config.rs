//! Gallery settings
//!
//! Read from `config.json` in the platform config directory:
//! - Linux: ~/.config/folio-gallery/config.json
//! - macOS: ~/Library/Application Support/folio-gallery/config.json
//! - Windows: %APPDATA%\folio-gallery\config.json
//!
//! Every field is optional; a missing or broken file means defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{GalleryError, Result};
use crate::state::filter::CategorySelection;
use crate::state::viewport::{Layout, DEFAULT_MOBILE_BREAKPOINT};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Directory that image paths in the catalog are relative to
    pub assets_dir: PathBuf,
    /// Optional JSON catalog replacing the built-in one
    pub catalog: Option<PathBuf>,
    /// Delay before a closed sheet releases its project (exit transition)
    pub modal_exit_ms: u64,
    /// Duration of the sheet enter transition
    pub modal_enter_ms: u64,
    /// How long the mobile category bar stays up after reaching the top
    pub tab_bar_hide_ms: u64,
    /// Scroll offset at or below which the top sentinel counts as visible
    pub sentinel_px: f32,
    /// Window width below which the mobile layout is used
    pub mobile_breakpoint: f32,
    pub default_layout: Layout,
    /// "all" or a category label
    pub default_category: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            catalog: None,
            modal_exit_ms: 300,
            modal_enter_ms: 300,
            tab_bar_hide_ms: 2500,
            sentinel_px: 1.0,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            default_layout: Layout::default(),
            default_category: "all".to_string(),
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl GalleryConfig {
    /// Where the config file is looked up
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("folio-gallery");
        path.push("config.json");
        Some(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw, path)
    }

    fn from_json(raw: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| GalleryError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location; defaults when absent or unreadable
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("⚠️  Could not determine config directory, using defaults");
            return Self::default();
        };

        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                log::info!("⚙️  Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("⚠️  {e}; using defaults");
                Self::default()
            }
        }
    }

    /// The configured starting category, or "all" if it does not parse
    pub fn initial_category(&self) -> CategorySelection {
        CategorySelection::parse(&self.default_category).unwrap_or_else(|e| {
            log::warn!("⚠️  {e}; starting with all projects");
            CategorySelection::All
        })
    }

    pub fn modal_exit(&self) -> Duration {
        Duration::from_millis(self.modal_exit_ms)
    }

    pub fn modal_enter(&self) -> Duration {
        Duration::from_millis(self.modal_enter_ms)
    }

    pub fn tab_bar_hide(&self) -> Duration {
        Duration::from_millis(self.tab_bar_hide_ms)
    }

    /// Resolve a catalog image path against the assets directory
    pub fn asset(&self, relative: &str) -> PathBuf {
        self.assets_dir.join(relative.trim_start_matches('/'))
    }
}
