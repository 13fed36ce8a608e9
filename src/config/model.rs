//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

use crate::app::state::Section;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub games: GamesConfig,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub show_help: bool,
    #[serde(default)]
    pub bell_on_win: bool,
    #[serde(default)]
    pub start_section: Section,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_help: true,
            bell_on_win: false,
            start_section: Section::default(),
        }
    }
}

/// Mini-game settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GamesConfig {
    /// Fixed seed for the number-guessing secret. Unset draws from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Text shown in the hero header and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_developers")]
    pub developers: Vec<String>,
    #[serde(default = "default_credits")]
    pub credits: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            developers: default_developers(),
            credits: default_credits(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate() -> u64 {
    250
}
fn default_title() -> String {
    "Jonas & Julya".to_string()
}
fn default_tagline() -> String {
    "Two cousins who love to code!".to_string()
}
fn default_developers() -> Vec<String> {
    vec!["Jonas (12)".to_string(), "Julya (13)".to_string()]
}
fn default_credits() -> String {
    "Made with love by Jonas & Julya, mentored by Uncle Dev".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/minifolio/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert!(cfg.ui.show_help);
        assert!(!cfg.ui.bell_on_win);
        assert_eq!(cfg.ui.start_section, Section::Home);
        assert_eq!(cfg.games.seed, None);
        assert_eq!(cfg.portfolio.developers.len(), 2);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert_eq!(cfg.portfolio.title, "Jonas & Julya");
    }

    #[test]
    fn test_partial_file() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            start_section = "projects"
            bell_on_win = true

            [games]
            seed = 42

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.start_section, Section::Projects);
        assert!(cfg.ui.bell_on_win);
        assert!(cfg.ui.show_help);
        assert_eq!(cfg.games.seed, Some(42));
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.log_dir, "~/.local/share/minifolio/logs");
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[ui]\nstart_section = \"blog\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.games.seed = Some(7);
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.games.seed, Some(7));
        assert_eq!(back.portfolio.developers, cfg.portfolio.developers);
    }
}
