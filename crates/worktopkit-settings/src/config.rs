//! Configuration Management Module
//!
//! Application configuration with:
//! - Pricing rates and the currency symbol
//! - Preview constants (slab thickness, padding, labels)
//! - Export naming and column mode
//! - File persistence (JSON/TOML)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use worktopkit_core::{PricingRules, RuleError};
use worktopkit_quote::ExportMode;
use worktopkit_visualizer::PreviewStyle;

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "worktopkit";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Export naming and column mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub csv_file_name: String,
    pub pdf_file_name: String,
    pub mode: ExportMode,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            csv_file_name: "worktop_quotes.csv".to_string(),
            pdf_file_name: "worktop_quotes.pdf".to_string(),
            mode: ExportMode::Basic,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Pricing rates
    pub pricing: PricingRules,
    /// Preview constants
    pub preview: PreviewStyle,
    /// Export naming
    pub export: ExportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/worktopkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load config, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.pricing.validate().map_err(|e| match e {
            RuleError::NotFinite { name, value } | RuleError::Negative { name, value } => {
                ConfigError::out_of_range(&format!("pricing.{}", name), value)
            }
        })?;

        let v = &self.preview;
        if !v.thickness.is_finite() || v.thickness <= 0.0 {
            return Err(ConfigError::out_of_range("preview.thickness", v.thickness));
        }
        if !v.padding.is_finite() || v.padding < 0.0 {
            return Err(ConfigError::out_of_range("preview.padding", v.padding));
        }
        if !v.label_font_size.is_finite() || v.label_font_size <= 0.0 {
            return Err(ConfigError::out_of_range(
                "preview.label_font_size",
                v.label_font_size,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.pricing, PricingRules::default());
        assert_eq!(config.preview.thickness, 2.0);
        assert_eq!(config.export.csv_file_name, "worktop_quotes.csv");
        assert_eq!(config.export.mode, ExportMode::Basic);
    }

    #[test]
    fn test_validate_rejects_negative_tax() {
        let mut config = Config::new();
        config.pricing.tax_rate = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "pricing.tax_rate"
        ));
    }

    #[test]
    fn test_validate_rejects_nan_rate() {
        let mut config = Config::new();
        config.pricing.panel_base_rate = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_preview() {
        let mut config = Config::new();
        config.preview.thickness = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.preview.padding = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.preview.padding = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_of() {
        assert!(matches!(format_of(Path::new("a.json")), Ok(Format::Json)));
        assert!(matches!(format_of(Path::new("a.toml")), Ok(Format::Toml)));
        assert!(matches!(
            format_of(Path::new("a.yaml")),
            Err(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
        ));
        assert!(format_of(Path::new("config")).is_err());
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Ok(path) = Config::default_path() {
            assert!(path.ends_with("worktopkit/config.toml"));
        }
    }
}
