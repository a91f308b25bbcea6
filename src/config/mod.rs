pub mod model;

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::PathBuf;

pub use model::AppConfig;

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spendtrack")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    validate(&config).with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config)
}

/// Reject values that parse as TOML but cannot be used.
fn validate(config: &AppConfig) -> Result<()> {
    let format = &config.ui.timestamp_format;
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("ui.timestamp_format '{}' is not a valid strftime format", format);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_timestamp_format() {
        let mut config = AppConfig::default();
        assert!(validate(&config).is_ok());

        config.ui.timestamp_format = "%d/%m %H:%M".into();
        assert!(validate(&config).is_ok());

        config.ui.timestamp_format = "%Q".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("%Q"));
    }
}
