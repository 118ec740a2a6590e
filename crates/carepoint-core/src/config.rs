use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::profile::PatientProfile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub profile: PatientProfile,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (logs, catalog override)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Content scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Bottom navigation bar
    #[serde(default)]
    pub tab_bar: TabBarConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
            tab_bar: TabBarConfig::default(),
        }
    }
}

/// Easing curve applied to a normalized progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump to the end value when the duration elapses
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Symmetric cubic ease-in-out
    EaseInOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate content scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of a scroll animation
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Rows moved per keypress when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Scroll units per terminal row, fed to the tab bar controller
    #[serde(default = "default_row_height")]
    pub row_height: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
            row_height: default_row_height(),
        }
    }
}

/// Bottom navigation bar and its scroll-driven visibility
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBarConfig {
    /// Render the bar (and accept show/hide transitions)
    pub enabled: bool,
    /// Scroll delta per sample beyond which the bar hides or shows
    pub velocity_threshold: f64,
    /// Offset of the fully hidden bar
    pub hidden_offset: f64,
    /// Duration of the slide between shown and hidden offsets
    pub offset_duration_ms: u64,
    /// Duration of the fade, shorter than the slide
    pub opacity_duration_ms: u64,
    pub easing: EasingType,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            velocity_threshold: default_velocity_threshold(),
            hidden_offset: default_hidden_offset(),
            offset_duration_ms: default_offset_duration(),
            opacity_duration_ms: default_opacity_duration(),
            easing: default_tab_bar_easing(),
        }
    }
}

/// Theme selection, written either as `theme = "nord"` or as a table
/// with `name` and `colors`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ThemeSetting")]
pub struct ThemeConfig {
    pub name: String,
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeSetting {
    Name(String),
    Table {
        #[serde(default = "default_theme_name")]
        name: String,
        #[serde(default)]
        colors: ThemeColorOverrides,
    },
}

impl From<ThemeSetting> for ThemeConfig {
    fn from(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Name(name) => Self {
                name,
                colors: ThemeColorOverrides::default(),
            },
            ThemeSetting::Table { name, colors } => Self { name, colors },
        }
    }
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg0: Option<String>,
    pub bg1: Option<String>,
    pub bg2: Option<String>,
    pub fg0: Option<String>,
    pub fg1: Option<String>,
    /// Focused borders, active tab target
    pub accent: Option<String>,
    pub selection: Option<String>,
    /// Inactive tab targets, secondary text
    pub muted: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub info: Option<String>,
}

/// Key bindings in Vim-style notation: "j", "G", "<C-d>", "<CR>", "<BS>",
/// "<Esc>", "<Tab>". Unset bindings keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeymapConfig {
    pub quit: String,
    pub move_down: String,
    pub move_up: String,
    pub scroll_half_down: String,
    pub scroll_half_up: String,
    pub scroll_page_down: String,
    pub scroll_page_up: String,
    pub jump_to_top: String,
    pub jump_to_bottom: String,
    /// Open the selected item
    pub select: String,
    /// Return to the previous screen
    pub back: String,
    /// Book the selected slot on a doctor screen
    pub book: String,
    /// Cancel the selected appointment
    pub cancel_appointment: String,
    /// Edit the selected profile field
    pub edit_field: String,
    pub help: String,
    // tab bar targets, left to right
    pub tab_appointments: String,
    pub tab_hospitals: String,
    pub tab_home: String,
    pub tab_lab_records: String,
    pub tab_profile: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        let key = |s: &str| s.to_string();
        Self {
            quit: key("q"),
            move_down: key("j"),
            move_up: key("k"),
            scroll_half_down: key("<C-d>"),
            scroll_half_up: key("<C-u>"),
            scroll_page_down: key("<C-f>"),
            scroll_page_up: key("<C-b>"),
            jump_to_top: key("gg"),
            jump_to_bottom: key("G"),
            select: key("<CR>"),
            back: key("<BS>"),
            book: key("b"),
            cancel_appointment: key("x"),
            edit_field: key("e"),
            help: key("?"),
            tab_appointments: key("1"),
            tab_hospitals: key("2"),
            tab_home: key("3"),
            tab_lab_records: key("4"),
            tab_profile: key("5"),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carepoint")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_row_height() -> f64 {
    4.0
}

fn default_velocity_threshold() -> f64 {
    5.0
}

fn default_hidden_offset() -> f64 {
    100.0
}

fn default_offset_duration() -> u64 {
    200
}

fn default_opacity_duration() -> u64 {
    150
}

fn default_tab_bar_easing() -> EasingType {
    EasingType::EaseInOut
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carepoint/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carepoint")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Directory receiving the TUI log file
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    /// Optional JSON file replacing the built-in catalog
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir().join("catalog.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_bar_defaults() {
        let config = TabBarConfig::default();
        assert!(config.enabled);
        assert_eq!(config.velocity_threshold, 5.0);
        assert_eq!(config.hidden_offset, 100.0);
        assert_eq!(config.offset_duration_ms, 200);
        assert_eq!(config.opacity_duration_ms, 150);
        assert_eq!(config.easing, EasingType::EaseInOut);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.keymap.tab_home, "3");
    }

    #[test]
    fn test_partial_tab_bar_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui.tab_bar]
            enabled = false
            velocity_threshold = 8.5
            easing = "linear"
            "#,
        )
        .unwrap();
        assert!(!config.ui.tab_bar.enabled);
        assert_eq!(config.ui.tab_bar.velocity_threshold, 8.5);
        assert_eq!(config.ui.tab_bar.easing, EasingType::Linear);
        assert_eq!(config.ui.tab_bar.offset_duration_ms, 200);
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config: AppConfig = toml::from_str("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");

        let config: AppConfig = toml::from_str(
            "[ui.theme]\nname = \"dracula\"\n[ui.theme.colors]\naccent = \"#ff00ff\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff00ff"));
    }

    #[test]
    fn test_save_and_load_roundtrip_keeps_profile() {
        let dir = std::env::temp_dir().join(format!("carepoint-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.profile.name = "Asha Menon".to_string();
        config.ui.scroll.row_height = 12.0;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.profile.name, "Asha Menon");
        assert_eq!(loaded.ui.scroll.row_height, 12.0);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("carepoint-does-not-exist/config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.ui.tab_bar.enabled);
    }
}
