use crate::config::has_listed_extension;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 遞迴掃描目錄，回傳符合副檔名的檔案，依路徑排序
///
/// 無法讀取的項目會記錄警告後略過
pub fn scan_files_by_extension(directory: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {e}", directory.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_listed_extension(entry.path(), extensions))
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    files
}
