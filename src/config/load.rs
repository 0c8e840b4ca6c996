use crate::config::types::{CatalogRules, Config, UserSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 編譯時嵌入的分類規則（不需要外部檔案）
const CATALOG_RULES_JSON: &str = include_str!("../data/catalog_rules.json");

pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        let settings = Self::load_settings(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
            log::warn!("Falling back to default settings: {e:#}");
            UserSettings::default()
        });
        Self::with_settings(settings)
    }

    /// 使用指定的設定建立 Config（分類規則一律來自嵌入資料）
    pub fn with_settings(settings: UserSettings) -> Result<Self> {
        Ok(Self {
            catalog_rules: Self::load_embedded_catalog_rules()?,
            settings,
        })
    }

    pub fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    /// 從編譯時嵌入的 JSON 載入品牌與子分類關鍵字表
    pub fn load_embedded_catalog_rules() -> Result<CatalogRules> {
        serde_json::from_str(CATALOG_RULES_JSON).context("Failed to parse embedded catalog rules")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_rules_parse() {
        let rules = Config::load_embedded_catalog_rules().unwrap();
        assert_eq!(rules.brands.rules()[0].pattern, "rolex");
        assert_eq!(rules.mixed_quality_brand, "oz-rx-quality");
        assert_eq!(rules.default_brand_tag, "luxury");
        assert_eq!(rules.fixed_tags, vec!["luxury", "automatic", "super-clone"]);
        assert_eq!(rules.subcategories.first_match("datejust"), Some("datejust"));
    }

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Config::load_settings(&temp_dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_invalid_settings_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_settings(&path).is_err());
    }
}
