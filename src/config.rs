use std::path::Path;
use std::time::Duration;

use log::warn;

use crate::core::GameMode;
use crate::error::ConfigError;
use crate::strategy::StrategyChoice;

/// Upper bound for the computer's pause, in milliseconds.
pub const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

/// Shell configuration, loadable from TOML.
///
/// Every field is optional in the file; missing ones take their defaults.
/// Command-line flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Computer strategy for new sessions.
    pub strategy: StrategyChoice,

    /// Layout dealt at startup.
    pub mode: GameMode,

    /// Pause before the computer moves, so its move is noticeable.
    pub computer_delay_ms: u64,

    /// Fixed seed for reproducible games; drawn from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Print whether the position is winning after each computer move.
    pub show_hints: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            strategy: StrategyChoice::Novice,
            mode: GameMode::Multi,
            computer_delay_ms: 700,
            seed: None,
            show_hints: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "computer_delay_ms must be <= {MAX_COMPUTER_DELAY_MS}"
            )));
        }
        Ok(())
    }

    /// The computer's pause as a `Duration`.
    #[must_use]
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.computer_delay(), Duration::from_millis(700));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
strategy = "expert"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.strategy, StrategyChoice::Expert);
        assert_eq!(config.mode, GameMode::Multi);
        assert_eq!(config.computer_delay_ms, 700);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(r#"strategy = "pirate""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let config = AppConfig {
            computer_delay_ms: MAX_COMPUTER_DELAY_MS + 1,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_nim_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nim.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
mode = "single"
seed = 99
computer_delay_ms = 0
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.mode, GameMode::Single);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.computer_delay_ms, 0);
        assert_eq!(config.strategy, StrategyChoice::Novice);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nim.toml");
        std::fs::write(&path, "computer_delay_ms = 60000\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
