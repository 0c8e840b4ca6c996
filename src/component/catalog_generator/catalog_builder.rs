//! 由資料夾樹產生完整的商品匯入列

use super::classifier::{classify_path, derive_tags};
use super::csv_writer::write_catalog_file;
use super::folder_walker::{FolderWalker, SkippedFolder};
use super::product_expander::{CatalogRow, ProductDetails, build_rows};
use crate::config::Config;
use crate::tools::{UnreadableDirectory, validate_directory_exists};
use anyhow::Result;
use log::{debug, info, warn};
use std::path::Path;
use std::sync::atomic::AtomicBool;

/// 產生結果
#[derive(Debug, Default)]
pub struct CatalogReport {
    pub rows: Vec<CatalogRow>,
    pub products_processed: usize,
    pub skipped: Vec<SkippedFolder>,
    pub unreadable: Vec<UnreadableDirectory>,
    pub interrupted: bool,
}

impl CatalogReport {
    /// 展開出的商品數（每個商品一列主列）
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_primary()).count()
    }

    /// 寫出表格；中斷的結果不完整，不寫出也不動到既有檔案
    ///
    /// 回傳是否實際寫出。
    pub fn write_to(&self, path: &Path) -> Result<bool> {
        if self.interrupted {
            warn!("Catalog build was interrupted, leaving {} untouched", path.display());
            return Ok(false);
        }
        write_catalog_file(path, &self.rows)?;
        Ok(true)
    }
}

/// 走訪 `root` 並為每個商品資料夾產生輸出列
///
/// 根目錄不存在或無法讀取時直接失敗；其餘問題都記錄在報告中。
pub fn build_catalog(root: &Path, config: &Config, shutdown_signal: &AtomicBool) -> Result<CatalogReport> {
    validate_directory_exists(root)?;

    let settings = &config.settings.catalog;
    let rules = &config.catalog_rules;
    let scan = FolderWalker::new(&settings.image_extensions, settings.min_images, shutdown_signal)
        .scan(root);

    let mut report = CatalogReport {
        skipped: scan.skipped,
        unreadable: scan.unreadable,
        interrupted: scan.interrupted,
        ..CatalogReport::default()
    };

    for folder in &scan.products {
        let classification = classify_path(&folder.segments, rules, settings.include_brand_collection);
        let tags = derive_tags(&folder.segments, rules);
        let details = ProductDetails::new(folder, &classification, &tags, settings);
        let rows = build_rows(folder, &details);

        if rows.is_empty() {
            report.skipped.push(SkippedFolder {
                relative_path: folder.relative_path(),
                image_count: folder.images.len(),
            });
            continue;
        }

        debug!(
            "Processing product folder {} -> {} rows, collections [{}]",
            folder.relative_path(),
            rows.len(),
            classification.collection_string()
        );
        report.products_processed += 1;
        report.rows.extend(rows);
    }

    info!(
        "Catalog built - folders: {}, rows: {}, skipped: {}",
        report.products_processed,
        report.rows.len(),
        report.skipped.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserSettings;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> Config {
        Config::with_settings(UserSettings::default()).unwrap()
    }

    #[test]
    fn test_interrupted_report_keeps_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("watches");
        for name in ["1.jpg", "2.jpg", "3.jpg"] {
            let path = root.join("Rolex/Datejust/Blue").join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "img").unwrap();
        }
        let output = temp_dir.path().join("out.csv");
        fs::write(&output, "previous catalog").unwrap();

        let report = build_catalog(&root, &config(), &AtomicBool::new(true)).unwrap();

        assert!(report.interrupted);
        assert!(!report.write_to(&output).unwrap());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous catalog");
    }

    #[test]
    fn test_complete_report_is_written() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("watches");
        fs::create_dir_all(&root).unwrap();
        let output = temp_dir.path().join("out.csv");
        fs::write(&output, "previous catalog").unwrap();

        let report = build_catalog(&root, &config(), &AtomicBool::new(false)).unwrap();

        assert!(report.write_to(&output).unwrap());
        assert!(fs::read_to_string(&output).unwrap().starts_with("Handle,"));
    }
}
