//! Configuration schema
//!
//! Defines the structure of the configuration file. Every path, URL, and
//! command the orb menu launches lives here rather than in code; the menu
//! tree is built from this structure once at startup.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub orb: OrbConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// UI theme (dark/light)
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

/// Floating orb window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbConfig {
    /// Icon drawn inside the orb (empty = built-in placeholder disc)
    #[serde(default)]
    pub icon_path: String,

    /// Window diameter in logical points
    #[serde(default = "default_diameter")]
    pub diameter: f32,

    /// Press-and-hold delay before a press becomes a drag, in milliseconds
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,

    /// Initial window position
    #[serde(default = "default_position")]
    pub position: [f32; 2],
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            icon_path: String::new(),
            diameter: default_diameter(),
            hold_ms: default_hold_ms(),
            position: default_position(),
        }
    }
}

/// Launch menu contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Editor command for project entries
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Remote desktop command (empty = no entry)
    #[serde(default = "default_remote_desktop")]
    pub remote_desktop: String,

    /// Project directories opened in the editor
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,

    /// Websites opened in the browser
    #[serde(default)]
    pub sites: Vec<SiteEntry>,

    /// Filesystem locations and shell folders
    #[serde(default = "default_places")]
    pub places: Vec<PlaceEntry>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            editor: default_editor(),
            remote_desktop: default_remote_desktop(),
            projects: Vec::new(),
            sites: Vec::new(),
            places: default_places(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub label: String,
    pub path: String,
    /// Companion URL opened alongside the editor (empty = none)
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteEntry {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceEntry {
    pub label: String,
    /// Plain directory to open (ignored when command is set)
    #[serde(default)]
    pub path: String,
    /// Command line to run instead of opening a path
    #[serde(default)]
    pub command: String,
}

/// Gallery viewer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Root directory to browse (empty = pictures directory)
    #[serde(default)]
    pub root: String,

    /// Thumbnail box side in logical points
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: f32,

    /// Thumbnails per grid row
    #[serde(default = "default_columns")]
    pub columns: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            root: String::new(),
            thumbnail_size: default_thumbnail_size(),
            columns: default_columns(),
        }
    }
}

// Default value functions for serde
fn default_theme() -> String {
    "dark".to_string()
}
fn default_diameter() -> f32 {
    60.0
}
fn default_hold_ms() -> u64 {
    100
}
fn default_position() -> [f32; 2] {
    [200.0, 200.0]
}
fn default_editor() -> String {
    "code".to_string()
}
fn default_remote_desktop() -> String {
    if cfg!(windows) { "mstsc" } else { "" }.to_string()
}
fn default_places() -> Vec<PlaceEntry> {
    let mut places = Vec::new();
    if cfg!(windows) {
        places.push(PlaceEntry {
            label: "Recycle bin".to_string(),
            path: String::new(),
            command: "explorer shell:RecycleBinFolder".to_string(),
        });
    }
    if let Some(downloads) = dirs::download_dir() {
        places.push(PlaceEntry {
            label: "Downloads".to_string(),
            path: downloads.to_string_lossy().into_owned(),
            command: String::new(),
        });
    }
    places
}
fn default_thumbnail_size() -> f32 {
    300.0
}
fn default_columns() -> usize {
    4
}
