//! 商品展開模組
//!
//! 一個商品資料夾的圖片依路徑排序後，最後兩張為共用圖片，其餘每張各自成為一個商品；
//! 每個商品的圖片為 `[主圖] + 共用圖片`，每張圖片輸出一列。

use super::classifier::{Classification, ProductTags};
use super::folder_walker::ProductFolder;
use super::text_format::{base_title, describe_path, slugify};
use crate::config::CatalogSettings;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 每個商品共用的結尾圖片數
pub const SHARED_TAIL_LEN: usize = 2;

const SKU_MAX_LEN: usize = 20;

/// 輸出表格的欄位順序
pub const CSV_HEADERS: [&str; 19] = [
    "Handle",
    "Title",
    "Body (HTML)",
    "Vendor",
    "Product Category",
    "Type",
    "Tags",
    "Published",
    "Variant SKU",
    "Variant Price",
    "Variant Compare At Price",
    "Variant Weight",
    "Variant Weight Unit",
    "Variant Requires Shipping",
    "Variant Taxable",
    "Image Src",
    "Image Alt Text",
    "Collection",
    "Status",
];

/// 匯入表格的一列；欄位順序即 [`CSV_HEADERS`] 的順序
///
/// 延續列（同一商品的其他圖片）只有圖片欄位有值，其餘為空字串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    #[serde(rename = "Handle")]
    pub handle: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Body (HTML)")]
    pub body_html: String,
    #[serde(rename = "Vendor")]
    pub vendor: String,
    #[serde(rename = "Product Category")]
    pub product_category: String,
    #[serde(rename = "Type")]
    pub product_type: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Published")]
    pub published: String,
    #[serde(rename = "Variant SKU")]
    pub sku: String,
    #[serde(rename = "Variant Price")]
    pub price: String,
    #[serde(rename = "Variant Compare At Price")]
    pub compare_at_price: String,
    #[serde(rename = "Variant Weight")]
    pub weight: String,
    #[serde(rename = "Variant Weight Unit")]
    pub weight_unit: String,
    #[serde(rename = "Variant Requires Shipping")]
    pub requires_shipping: String,
    #[serde(rename = "Variant Taxable")]
    pub taxable: String,
    #[serde(rename = "Image Src")]
    pub image_src: String,
    #[serde(rename = "Image Alt Text")]
    pub image_alt_text: String,
    #[serde(rename = "Collection")]
    pub collection: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl CatalogRow {
    /// 是否為商品的第一列（Handle 不為空）
    #[must_use]
    pub fn is_primary(&self) -> bool {
        !self.handle.is_empty()
    }
}

/// 由一個資料夾展開出的單一商品
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedProduct {
    /// 從 1 開始的編號
    pub position: usize,
    pub handle: String,
    pub title: String,
    /// 永遠是 `[主圖, 共用圖 1, 共用圖 2]`
    pub images: Vec<PathBuf>,
}

/// 將已排序的圖片展開為商品；少於 3 張時回傳空集合
#[must_use]
pub fn expand_products(folder_name: &str, sorted_images: &[PathBuf]) -> Vec<SynthesizedProduct> {
    if sorted_images.len() <= SHARED_TAIL_LEN {
        return Vec::new();
    }

    let split = sorted_images.len() - SHARED_TAIL_LEN;
    let (main_images, shared_tail) = sorted_images.split_at(split);
    let title_base = base_title(folder_name);

    main_images
        .iter()
        .enumerate()
        .map(|(i, main_image)| {
            let position = i + 1;
            let mut images = Vec::with_capacity(1 + SHARED_TAIL_LEN);
            images.push(main_image.clone());
            images.extend_from_slice(shared_tail);

            SynthesizedProduct {
                position,
                handle: slugify(&format!("{folder_name}-{position}")),
                title: format!("{title_base} - {position}"),
                images,
            }
        })
        .collect()
}

/// 商品資料夾中所有商品共用的描述欄位
#[derive(Debug, Clone)]
pub struct ProductDetails<'a> {
    pub body_html: String,
    pub tags: String,
    pub collection: String,
    pub settings: &'a CatalogSettings,
}

impl<'a> ProductDetails<'a> {
    #[must_use]
    pub fn new(
        folder: &ProductFolder,
        classification: &Classification,
        tags: &ProductTags,
        settings: &'a CatalogSettings,
    ) -> Self {
        Self {
            body_html: describe_path(&folder.segments),
            tags: tags.joined(),
            collection: classification.collection_string(),
            settings,
        }
    }
}

/// 展開資料夾並產生所有輸出列
#[must_use]
pub fn build_rows(folder: &ProductFolder, details: &ProductDetails<'_>) -> Vec<CatalogRow> {
    expand_products(folder.folder_name(), &folder.images)
        .iter()
        .flat_map(|product| product_rows(product, details))
        .collect()
}

fn product_rows(product: &SynthesizedProduct, details: &ProductDetails<'_>) -> Vec<CatalogRow> {
    let settings = details.settings;

    product
        .images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let image_src = format!("{}{}", settings.base_url, file_name(image));
            let image_alt_text = format!("{} - Image {}", product.title, i + 1);

            if i > 0 {
                return CatalogRow {
                    image_src,
                    image_alt_text,
                    ..CatalogRow::default()
                };
            }

            CatalogRow {
                handle: product.handle.clone(),
                title: product.title.clone(),
                body_html: details.body_html.clone(),
                vendor: settings.vendor.clone(),
                product_category: settings.product_category.clone(),
                product_type: settings.product_type.clone(),
                tags: details.tags.clone(),
                published: "TRUE".to_string(),
                sku: sku_for(&product.handle),
                price: settings.default_price.to_string(),
                compare_at_price: settings.default_compare_price.to_string(),
                weight: settings.weight.to_string(),
                weight_unit: settings.weight_unit.clone(),
                requires_shipping: "TRUE".to_string(),
                taxable: "TRUE".to_string(),
                image_src,
                image_alt_text,
                collection: details.collection.clone(),
                status: "active".to_string(),
            }
        })
        .collect()
}

fn sku_for(handle: &str) -> String {
    handle.to_uppercase().chars().take(SKU_MAX_LEN).collect()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::catalog_generator::classifier::{classify_path, derive_tags};
    use crate::config::Config;

    fn images(count: usize) -> Vec<PathBuf> {
        (1..=count)
            .map(|i| PathBuf::from(format!("/watches/Blue Dial/img{i:02}.jpg")))
            .collect()
    }

    fn folder(segments: &[&str], image_count: usize) -> ProductFolder {
        ProductFolder {
            path: PathBuf::from("/watches/Blue Dial"),
            segments: segments.iter().map(ToString::to_string).collect(),
            images: images(image_count),
        }
    }

    #[test]
    fn test_expand_five_images_into_three_products() {
        let all = images(5);
        let products = expand_products("Blue Dial", &all);

        assert_eq!(products.len(), 3);
        for (i, product) in products.iter().enumerate() {
            assert_eq!(product.position, i + 1);
            assert_eq!(product.images.len(), 3);
            assert_eq!(product.images[0], all[i]);
            assert_eq!(&product.images[1..], &all[3..]);
        }
        assert_eq!(products[0].handle, "blue-dial-1");
        assert_eq!(products[2].title, "Blue Dial - 3");
    }

    #[test]
    fn test_expand_boundaries() {
        assert!(expand_products("x", &images(2)).is_empty());
        assert!(expand_products("x", &[]).is_empty());

        let products = expand_products("x", &images(3));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].images, images(3));
    }

    #[test]
    fn test_build_rows_primary_and_continuation() {
        let config = Config::with_settings(Default::default()).unwrap();
        let folder = folder(&["Rolex", "Datejust", "Blue Dial"], 4);
        let classification = classify_path(&folder.segments, &config.catalog_rules, false);
        let tags = derive_tags(&folder.segments, &config.catalog_rules);
        let details = ProductDetails::new(
            &folder,
            &classification,
            &tags,
            &config.settings.catalog,
        );

        let rows = build_rows(&folder, &details);

        assert_eq!(rows.len(), 6);
        let primary = &rows[0];
        assert_eq!(primary.handle, "blue-dial-1");
        assert_eq!(primary.title, "Blue Dial - 1");
        assert_eq!(primary.body_html, "<p>ROLEX - DATEJUST - BLUE DIAL</p>");
        assert_eq!(primary.vendor, "Gharyaal");
        assert_eq!(primary.tags, "rolex,luxury,automatic,super-clone,datejust");
        assert_eq!(primary.sku, "BLUE-DIAL-1");
        assert_eq!(primary.price, "25000");
        assert_eq!(primary.compare_at_price, "35000");
        assert_eq!(primary.weight, "150");
        assert_eq!(primary.collection, "rolex-datejust");
        assert_eq!(primary.status, "active");
        assert_eq!(
            primary.image_src,
            "https://gharyaalbytaimour.com/data/images/img01.jpg"
        );
        assert_eq!(primary.image_alt_text, "Blue Dial - 1 - Image 1");

        let continuation = &rows[1];
        assert!(!continuation.is_primary());
        assert_eq!(continuation.title, "");
        assert_eq!(continuation.collection, "");
        assert_eq!(
            continuation.image_src,
            "https://gharyaalbytaimour.com/data/images/img03.jpg"
        );
        assert_eq!(continuation.image_alt_text, "Blue Dial - 1 - Image 2");

        assert_eq!(rows[3].handle, "blue-dial-2");
        assert!(rows[3].image_src.ends_with("img02.jpg"));
        assert!(rows[5].image_src.ends_with("img04.jpg"));
    }

    #[test]
    fn test_sku_is_truncated() {
        assert_eq!(
            sku_for("oyster-perpetual-41mm-blue-12"),
            "OYSTER-PERPETUAL-41M"
        );
    }
}
