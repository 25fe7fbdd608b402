//! Built-in theme registry

mod dracula;
mod gruvbox;
mod nord;

use folio_core::config::ThemeConfig;
use tracing::warn;

use crate::theme::Theme;

pub use gruvbox::dark as gruvbox_dark;

/// Load a theme by name from config, falling back to gruvbox-dark
pub fn load_theme(config: &ThemeConfig) -> Theme {
    match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        other => {
            warn!(theme = other, "Unknown theme, using gruvbox-dark");
            gruvbox::dark()
        }
    }
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "nord", "dracula"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert!(matches!(theme.bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_load_theme_case_insensitive() {
        let theme = load_theme(&ThemeConfig {
            name: "Nord".to_string(),
        });
        assert!(matches!(theme.bg0, Color::Rgb(0x2e, 0x34, 0x40)));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let theme = load_theme(&ThemeConfig {
            name: "solarized".to_string(),
        });
        assert!(matches!(theme.bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_every_listed_theme_loads() {
        for name in available_themes() {
            let theme = load_theme(&ThemeConfig {
                name: name.to_string(),
            });
            assert!(matches!(theme.fg0, Color::Rgb(..)), "{name}");
        }
    }
}
