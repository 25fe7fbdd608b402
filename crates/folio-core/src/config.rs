use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::perf::EffectiveType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub performance: PerformanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Path to the achievements JSON file
    #[serde(default = "default_content_path")]
    pub content_path: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            content_path: default_content_path(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Start advancing slides automatically on mount
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Autoplay interval in milliseconds
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Minimum |offset| * velocity for a drag release to count as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_confidence_threshold: f64,
    /// Slide transition duration in milliseconds (0 = instant)
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Easing curve for slide transitions
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            autoplay: default_true(),
            autoplay_interval_ms: default_autoplay_interval(),
            swipe_confidence_threshold: default_swipe_threshold(),
            transition_ms: default_transition_ms(),
            easing: EasingType::default(),
        }
    }
}

/// Easing curve applied to slide transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end pose
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
    /// cubic-bezier(0.22, 0.68, 0, 1): fast start, long soft landing
    #[default]
    Smooth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a transition is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Theme name ("gruvbox-dark", "nord", "dracula")
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a plain string or as a table with a `name` key
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
        }
    }
}

impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a theme name or a table with a 'name' key")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key == "name" {
                        name = Some(map.next_value()?);
                    } else {
                        let _: de::IgnoredAny = map.next_value()?;
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Overrides for the environment probe.
///
/// Any value left unset falls back to what the host reports. Useful on
/// machines where `/proc/meminfo` is missing or to preview the reduced
/// gallery on a fast workstation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Logical core count
    #[serde(default)]
    pub hardware_concurrency: Option<u32>,
    /// Device memory in GiB
    #[serde(default)]
    pub device_memory: Option<f64>,
    /// Network effective type: "slow-2g", "2g", "3g" or "4g"
    #[serde(default)]
    pub effective_type: Option<EffectiveType>,
    /// Data-saver preference
    #[serde(default)]
    pub save_data: bool,
    /// Skip slide transition animations
    #[serde(default)]
    pub reduced_motion: bool,
}

fn default_content_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("achievements.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_autoplay_interval() -> u64 {
    5000
}

fn default_swipe_threshold() -> f64 {
    10_000.0
}

fn default_transition_ms() -> u64 {
    650
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
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
    /// Load configuration from an explicit path, defaults when it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<PathBuf> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(path.to_path_buf())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Log file used while the full-screen viewer owns the terminal
    pub fn log_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("folio.log")
    }

    /// Get the content file path (with tilde expansion)
    pub fn content_path(&self) -> PathBuf {
        expand_tilde(&self.general.content_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.gallery.autoplay);
        assert_eq!(config.gallery.autoplay_interval_ms, 5000);
        assert_eq!(config.gallery.swipe_confidence_threshold, 10_000.0);
        assert_eq!(config.gallery.easing, EasingType::Smooth);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert!(config.performance.hardware_concurrency.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [gallery]
            autoplay_interval_ms = 3000
            easing = "quintic"

            [ui]
            theme = "nord"

            [performance]
            hardware_concurrency = 2
            effective_type = "slow-2g"
            "#,
        )
        .unwrap();

        assert_eq!(config.gallery.autoplay_interval_ms, 3000);
        assert_eq!(config.gallery.easing, EasingType::Quintic);
        assert_eq!(config.gallery.transition_ms, 650);
        assert_eq!(config.ui.theme.name, "nord");
        assert_eq!(config.performance.hardware_concurrency, Some(2));
        assert_eq!(config.performance.effective_type, Some(EffectiveType::Slow2g));
    }

    #[test]
    fn test_theme_as_table() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { accent = "#ff79c6" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("folio-missing-config-test.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let path = std::env::temp_dir().join(format!(
            "folio-invalid-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[gallery\nautoplay = ").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_save_to_round_trips() {
        let dir = std::env::temp_dir().join(format!("folio-save-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.gallery.autoplay_interval_ms = 1234;

        assert_eq!(config.save_to(&path).unwrap(), path);
        let loaded = AppConfig::load_from(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();
        assert_eq!(loaded.gallery.autoplay_interval_ms, 1234);
    }
}
