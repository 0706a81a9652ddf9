//! Loading and generating the store configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use vkusno_commerce::config::StoreConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["vkusno.toml", ".vkusno.toml", "vkusno.json"];

/// Load config from a file.
pub fn load(path: &Path) -> Result<StoreConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "json") {
        let config: StoreConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    } else {
        StoreConfig::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

/// Find and load the nearest config file from `start` upwards.
///
/// Returns `Ok(None)` when no directory has one.
pub fn find(start: &Path) -> Result<Option<(std::path::PathBuf, StoreConfig)>> {
    for dir in start.ancestors() {
        for name in CONFIG_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                let config = load(&candidate)?;
                return Ok(Some((candidate, config)));
            }
        }
    }
    Ok(None)
}

/// Generate a default vkusno.toml config file.
pub fn generate_default_config() -> String {
    r#"# Vkusno storefront configuration

[store]
name = "Вкусно & Свежо"
phone = "+7 (495) 123-45-67"
email = "info@vkusno-svezho.ru"
address = "Москва, ул. Примерная, 123"

[delivery]
# Orders from this subtotal (rubles) ship for free
free_threshold = 1000
# Fee below the threshold
flat_fee = 199

[expiry]
# Products this many days from expiry get the warning badge
warning_days = 3

[logging]
# "human" or "json"
format = "human"
level = "info"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vkusno_commerce::Money;

    #[test]
    fn test_generated_config_is_default() {
        let config = StoreConfig::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vkusno.toml");
        std::fs::write(&path, "[delivery]\nfree_threshold = 1500\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.delivery.free_threshold, Money::rub(1500));
        assert_eq!(config.delivery.flat_fee, Money::rub(199));
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vkusno.json");
        std::fs::write(&path, r#"{"expiry": {"warning_days": 5}}"#).unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.expiry.warning_days, 5);
    }

    #[test]
    fn test_find_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".vkusno.toml"), "[delivery]\nflat_fee = 150\n").unwrap();

        let (path, config) = find(&nested).unwrap().unwrap();
        assert!(path.ends_with(".vkusno.toml"));
        assert_eq!(config.delivery.flat_fee, Money::rub(150));
    }

    #[test]
    fn test_broken_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vkusno.toml");
        std::fs::write(&path, "[delivery\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
