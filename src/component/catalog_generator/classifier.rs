//! 路徑分類模組
//!
//! 依品牌與子分類關鍵字表，由資料夾路徑推導商品系列（collection）與標籤（tags）。
//!
//! 兩張表都採「第一個命中的規則」策略：依序掃描路徑各層，第一個含有任一關鍵字的
//! 層級決定結果，之後的層級不再檢查。品牌與子分類各自獨立掃描。

use super::text_format::slugify;
use crate::config::CatalogRules;
use std::collections::BTreeSet;

/// 路徑分類結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub brand: Option<String>,
    pub subcategory: Option<String>,
    /// 去重後的系列名稱（依字母排序）
    pub collections: BTreeSet<String>,
}

impl Classification {
    /// 以逗號串接的系列字串
    #[must_use]
    pub fn collection_string(&self) -> String {
        self.collections
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// 商品標籤
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTags {
    pub brand: String,
    pub subcategory: Option<String>,
    pub fixed: Vec<String>,
}

impl ProductTags {
    /// `[brand, fixed..., subcategory?]`，不去除重複
    #[must_use]
    pub fn to_list(&self) -> Vec<&str> {
        let mut tags = Vec::with_capacity(self.fixed.len() + 2);
        tags.push(self.brand.as_str());
        tags.extend(self.fixed.iter().map(String::as_str));
        if let Some(subcategory) = &self.subcategory {
            tags.push(subcategory.as_str());
        }
        tags
    }

    #[must_use]
    pub fn joined(&self) -> String {
        self.to_list().join(",")
    }
}

fn lowercase_segments(segments: &[String]) -> Vec<String> {
    segments.iter().map(|segment| segment.to_lowercase()).collect()
}

/// 子分類比對前只保留 ASCII 字母
fn letters_only(segment: &str) -> String {
    segment.chars().filter(char::is_ascii_alphabetic).collect()
}

fn find_brand<'r>(rules: &'r CatalogRules, lowered: &[String]) -> Option<&'r str> {
    lowered
        .iter()
        .find_map(|segment| rules.brands.first_match(segment))
}

fn find_subcategory<'r>(rules: &'r CatalogRules, lowered: &[String]) -> Option<&'r str> {
    lowered
        .iter()
        .find_map(|segment| rules.subcategories.first_match(&letters_only(segment)))
}

/// 由相對於根目錄的路徑各層推導品牌、子分類與系列
///
/// 品牌與子分類皆找到時產生 `<brand>-<subcategory>`；若品牌為綜合品質分組，
/// 改為在所有層級中尋找其下的原廠品牌，產生 `<brand>-<原廠品牌>`。
/// 沒有任何系列時，以前兩層的 slug 組成 `<seg0>-<seg1>`。
#[must_use]
pub fn classify_path(
    segments: &[String],
    rules: &CatalogRules,
    include_brand_collection: bool,
) -> Classification {
    let lowered = lowercase_segments(segments);
    let brand = find_brand(rules, &lowered);
    let subcategory = find_subcategory(rules, &lowered);
    let mut collections = BTreeSet::new();

    if include_brand_collection {
        collections.extend(brand.map(ToString::to_string));
    }

    if let (Some(brand), Some(subcategory)) = (brand, subcategory) {
        if brand == rules.mixed_quality_brand {
            let original_brand = rules.mixed_quality_sub_brands.iter().find(|sub_brand| {
                lowered
                    .iter()
                    .any(|segment| rules.brands.mentions_value(segment, sub_brand))
            });
            if let Some(original_brand) = original_brand {
                collections.insert(format!("{brand}-{original_brand}"));
            }
        } else {
            collections.insert(format!("{brand}-{subcategory}"));
        }
    }

    if collections.is_empty() && lowered.len() >= 2 {
        collections.insert(format!("{}-{}", slugify(&lowered[0]), slugify(&lowered[1])));
    }

    Classification {
        brand: brand.map(ToString::to_string),
        subcategory: subcategory.map(ToString::to_string),
        collections,
    }
}

/// 重新掃描路徑產生標籤
///
/// 這裡的品牌掃描獨立於 [`classify_path`]：停止條件是「標籤已不是預設值」，
/// 因此當規則值恰好等於預設標籤時，兩者結果可能不同。
/// 標籤值中的 `-` 轉為空白。
#[must_use]
pub fn derive_tags(segments: &[String], rules: &CatalogRules) -> ProductTags {
    let lowered = lowercase_segments(segments);
    let default_tag = rules.default_brand_tag.as_str();

    let mut brand_tag = default_tag.to_string();
    for segment in &lowered {
        if let Some(value) = rules.brands.first_match(segment) {
            brand_tag = value.replace('-', " ");
        }
        if brand_tag != default_tag {
            break;
        }
    }

    let subcategory_tag = find_subcategory(rules, &lowered).map(|value| value.replace('-', " "));

    ProductTags {
        brand: brand_tag,
        subcategory: subcategory_tag,
        fixed: rules.fixed_tags.clone(),
    }
}
