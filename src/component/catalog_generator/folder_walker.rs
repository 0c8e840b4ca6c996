//! 商品資料夾走訪模組
//!
//! 含有圖片（任何深度）的資料夾即為商品資料夾，不再往下走訪；
//! 完全沒有圖片的資料夾視為分類資料夾，繼續走訪其子資料夾。

use crate::tools::{UnreadableDirectory, list_directory, scan_files_by_extension};
use log::{debug, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// 商品資料夾
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFolder {
    pub path: PathBuf,
    /// 相對於根目錄的各層名稱，最後一層即資料夾名稱
    pub segments: Vec<String>,
    /// 資料夾內（含子資料夾）所有圖片，依路徑排序
    pub images: Vec<PathBuf>,
}

impl ProductFolder {
    #[must_use]
    pub fn folder_name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    #[must_use]
    pub fn relative_path(&self) -> String {
        self.segments.join("/")
    }
}

/// 圖片數量不足而略過的資料夾
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFolder {
    pub relative_path: String,
    pub image_count: usize,
}

impl fmt::Display for SkippedFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (only {} images)", self.relative_path, self.image_count)
    }
}

/// 走訪結果
#[derive(Debug, Default)]
pub struct FolderScan {
    pub products: Vec<ProductFolder>,
    pub skipped: Vec<SkippedFolder>,
    pub unreadable: Vec<UnreadableDirectory>,
    pub interrupted: bool,
}

/// 商品資料夾掃描器
pub struct FolderWalker<'a> {
    image_extensions: &'a [String],
    min_images: usize,
    shutdown_signal: &'a AtomicBool,
}

impl<'a> FolderWalker<'a> {
    pub const fn new(
        image_extensions: &'a [String],
        min_images: usize,
        shutdown_signal: &'a AtomicBool,
    ) -> Self {
        Self {
            image_extensions,
            min_images,
            shutdown_signal,
        }
    }

    /// 走訪 `root` 的所有子資料夾（根目錄本身不會成為商品）
    pub fn scan(&self, root: &Path) -> FolderScan {
        let mut scan = FolderScan::default();
        self.visit(root, &[], 0, &mut scan);
        info!(
            "Found {} product folders, skipped {}, unreadable {}",
            scan.products.len(),
            scan.skipped.len(),
            scan.unreadable.len()
        );
        scan
    }

    fn visit(&self, directory: &Path, segments: &[String], depth: usize, scan: &mut FolderScan) {
        debug!(
            "{}Checking directory: {}",
            "  ".repeat(depth),
            if segments.is_empty() {
                "root".to_string()
            } else {
                segments.join("/")
            }
        );

        let listing = match list_directory(directory) {
            Ok(listing) => listing,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {e}", directory.display());
                scan.unreadable.push(UnreadableDirectory {
                    path: directory.to_path_buf(),
                    error: e.to_string(),
                });
                return;
            }
        };

        for child in listing.directories {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                scan.interrupted = true;
                return;
            }

            let mut child_segments = segments.to_vec();
            child_segments.push(child.file_name().unwrap_or_default().to_string_lossy().into_owned());

            let images = scan_files_by_extension(&child, self.image_extensions);
            debug!(
                "{}Found folder: {} - Images: {}",
                "  ".repeat(depth + 1),
                child_segments.join("/"),
                images.len()
            );

            if images.is_empty() {
                self.visit(&child, &child_segments, depth + 1, scan);
            } else if images.len() >= self.min_images {
                scan.products.push(ProductFolder {
                    path: child,
                    segments: child_segments,
                    images,
                });
            } else {
                scan.skipped.push(SkippedFolder {
                    relative_path: child_segments.join("/"),
                    image_count: images.len(),
                });
            }
        }
    }
}
