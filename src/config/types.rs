use serde::{Deserialize, Serialize};
use std::path::Path;

/// 最近使用路徑的保留數量
pub const MAX_RECENT_PATHS: usize = 10;

/// 關鍵字規則：`pattern` 以子字串比對，命中時結果為 `value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub pattern: String,
    pub value: String,
}

/// 有序的關鍵字表，第一個命中的規則勝出，因此規則順序有意義
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable(Vec<KeywordRule>);

impl KeywordTable {
    #[must_use]
    pub const fn new(rules: Vec<KeywordRule>) -> Self {
        Self(rules)
    }

    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.0
    }

    /// 第一個命中的規則值
    #[must_use]
    pub fn first_match(&self, haystack: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|rule| haystack.contains(rule.pattern.as_str()))
            .map(|rule| rule.value.as_str())
    }

    /// `haystack` 是否含有任何對應到 `value` 的關鍵字
    #[must_use]
    pub fn mentions_value(&self, haystack: &str, value: &str) -> bool {
        self.0
            .iter()
            .filter(|rule| rule.value == value)
            .any(|rule| haystack.contains(rule.pattern.as_str()))
    }
}

/// 品牌與子分類關鍵字表及固定標籤（編譯時嵌入）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRules {
    pub brands: KeywordTable,
    pub subcategories: KeywordTable,
    /// 綜合品質分組的品牌值（OZ / RX）
    pub mixed_quality_brand: String,
    /// 綜合品質分組下依序尋找的原廠品牌
    pub mixed_quality_sub_brands: Vec<String>,
    pub default_brand_tag: String,
    pub fixed_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerSettings {
    pub dry_run: bool,
    pub extensions: Vec<String>,
}

impl Default for RenamerSettings {
    fn default() -> Self {
        Self {
            dry_run: true,
            extensions: vec![".jpg".to_string(), ".jpeg".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterSettings {
    pub source_extensions: Vec<String>,
    /// JPEG 品質，1-100
    pub quality: u8,
    pub delete_originals: bool,
    /// 加在檔名後的後綴，例如 `_converted`
    pub output_suffix: String,
}

/// HEIC 只在啟用 `heic` feature 時預設轉換
fn default_source_extensions() -> Vec<String> {
    let mut extensions: Vec<String> = [".png", ".webp", ".bmp", ".tif", ".tiff"]
        .iter()
        .map(ToString::to_string)
        .collect();
    if cfg!(feature = "heic") {
        extensions.push(".heic".to_string());
    }
    extensions
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
            quality: 95,
            delete_originals: false,
            output_suffix: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub output_file: String,
    pub base_url: String,
    pub vendor: String,
    pub product_category: String,
    pub product_type: String,
    pub default_price: u32,
    pub default_compare_price: u32,
    pub weight: u32,
    pub weight_unit: String,
    pub image_extensions: Vec<String>,
    /// 資料夾成為商品所需的最少圖片數
    pub min_images: usize,
    /// 除了 `rolex-datejust` 之外也輸出品牌本身的系列（如 `rolex`）
    pub include_brand_collection: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            output_file: "shopify_products.csv".to_string(),
            base_url: "https://gharyaalbytaimour.com/data/images/".to_string(),
            vendor: "Gharyaal".to_string(),
            product_category: "Accessories > Jewelry > Watches".to_string(),
            product_type: "Watches".to_string(),
            default_price: 25_000,
            default_compare_price: 35_000,
            weight: 150,
            weight_unit: "g".to_string(),
            image_extensions: [".jpg", ".jpeg", ".png", ".webp"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            min_images: 3,
            include_brand_collection: false,
        }
    }
}

/// 使用者設定（儲存於 settings.json）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub recent_paths: Vec<String>,
    pub renamer: RenamerSettings,
    pub converter: ConverterSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_rules: CatalogRules,
    pub settings: UserSettings,
}

/// 副檔名是否在 `.ext` 清單中（不分大小寫）
#[must_use]
pub fn has_listed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let dotted = format!(".{}", ext.to_lowercase());
            extensions.iter().any(|listed| listed.to_lowercase() == dotted)
        })
}
