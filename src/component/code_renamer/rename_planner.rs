//! 重新命名規劃與執行模組
//!
//! 遞迴走訪資料夾，為每個含有 JPEG 的資料夾產生 `<prefix>-img<N>.<ext>` 的新檔名

use super::short_code::build_prefix;
use crate::config::{RenamerSettings, has_listed_extension};
use crate::tools::{FailedItem, UnreadableDirectory, list_directory, new_progress_bar};
use log::{debug, info, warn};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// 一筆重新命名操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl RenameOperation {
    #[must_use]
    pub fn source_name(&self) -> Cow<'_, str> {
        file_name_lossy(&self.source)
    }

    #[must_use]
    pub fn target_name(&self) -> Cow<'_, str> {
        file_name_lossy(&self.target)
    }
}

/// 重新命名計畫
#[derive(Debug, Default)]
pub struct RenamePlan {
    pub operations: Vec<RenameOperation>,
    pub unreadable: Vec<UnreadableDirectory>,
}

/// 重新命名結果統計
#[derive(Debug, Default)]
pub struct RenameSummary {
    /// 成功完成的操作
    pub renamed: Vec<RenameOperation>,
    /// 目標檔名已被其他檔案佔用，未覆寫
    pub conflicts: Vec<PathBuf>,
    pub failed: Vec<FailedItem>,
    pub interrupted: bool,
}

impl RenameSummary {
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.renamed.len() + self.conflicts.len() + self.failed.len()
    }
}

/// 掃描 `root` 並產生重新命名計畫
///
/// 前綴從 `root` 本身的名稱開始（相對於 `root` 的上一層）。
/// 已經是目標名稱的檔案不會出現在計畫中，因此重複執行不會產生變更。
pub fn plan_renames(root: &Path, settings: &RenamerSettings) -> RenamePlan {
    let base = root.parent().unwrap_or(root);
    let mut plan = RenamePlan::default();
    let mut pending = vec![root.to_path_buf()];

    while let Some(directory) = pending.pop() {
        let listing = match list_directory(&directory) {
            Ok(listing) => listing,
            Err(e) => {
                warn!("Skipping unreadable directory {}: {e}", directory.display());
                plan.unreadable.push(UnreadableDirectory {
                    path: directory,
                    error: e.to_string(),
                });
                continue;
            }
        };

        let images: Vec<&PathBuf> = listing
            .files
            .iter()
            .filter(|path| has_listed_extension(path, &settings.extensions))
            .collect();

        if !images.is_empty() {
            let prefix = prefix_for(base, &directory);
            debug!("{} -> prefix {prefix}", directory.display());

            let proposed: Vec<(&PathBuf, String)> = images
                .into_iter()
                .enumerate()
                .map(|(index, source)| (source, numbered_name(&prefix, index + 1, source)))
                .collect();

            if is_already_numbered(&proposed) {
                debug!("{} is already renamed", directory.display());
            } else {
                for (source, new_name) in proposed {
                    if source.file_name().is_some_and(|name| name == new_name.as_str()) {
                        continue;
                    }
                    plan.operations.push(RenameOperation {
                        source: source.clone(),
                        target: directory.join(new_name),
                    });
                }
            }
        }

        // 反向推入以維持依檔名的深度優先順序
        pending.extend(listing.directories.into_iter().rev());
    }

    info!(
        "Planned {} renames under {}",
        plan.operations.len(),
        root.display()
    );
    plan
}

/// 執行重新命名，單一失敗不會中斷整批
pub fn apply_renames(operations: &[RenameOperation], shutdown_signal: &AtomicBool) -> RenameSummary {
    let mut summary = RenameSummary::default();
    let progress_bar = new_progress_bar(operations.len(), "Renaming...");

    for operation in operations {
        if shutdown_signal.load(Ordering::SeqCst) {
            progress_bar.abandon_with_message("Interrupted");
            summary.interrupted = true;
            return summary;
        }

        if operation.target.exists() {
            warn!(
                "Target already exists, not overwriting: {}",
                operation.target.display()
            );
            progress_bar.println(format!(
                "[SKIPPED] {} -> {} (target exists)",
                operation.source_name(),
                operation.target_name()
            ));
            summary.conflicts.push(operation.source.clone());
            progress_bar.inc(1);
            continue;
        }

        match fs::rename(&operation.source, &operation.target) {
            Ok(()) => {
                debug!(
                    "Renamed {} -> {}",
                    operation.source.display(),
                    operation.target.display()
                );
                progress_bar.println(format!(
                    "[RENAMED] {} -> {}",
                    operation.source_name(),
                    operation.target_name()
                ));
                summary.renamed.push(operation.clone());
            }
            Err(e) => {
                warn!("Could not rename {}: {e}", operation.source.display());
                progress_bar.println(format!("[FAILED] {}: {e}", operation.source_name()));
                summary.failed.push(FailedItem {
                    path: operation.source.clone(),
                    error: e.to_string(),
                });
            }
        }

        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("Done");
    summary
}

/// 資料夾內的檔名恰好是 `img1..imgN` 的一組排列
///
/// 依檔名排序時 `img10` 會排在 `img2` 之前，已命名的資料夾重排後編號會錯位，
/// 因此比對整組檔名而不是逐一比對。
fn is_already_numbered(proposed: &[(&PathBuf, String)]) -> bool {
    let current: HashSet<Cow<'_, str>> = proposed
        .iter()
        .map(|(source, _)| file_name_lossy(source))
        .collect();
    proposed
        .iter()
        .all(|(_, new_name)| current.contains(new_name.as_str()))
}

fn prefix_for(base: &Path, directory: &Path) -> String {
    let relative = directory.strip_prefix(base).unwrap_or(directory);
    let segments: Vec<Cow<'_, str>> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect();
    build_prefix(segments.iter().map(|segment| &**segment))
}

fn numbered_name(prefix: &str, index: usize, source: &Path) -> String {
    let extension = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    format!("{prefix}-img{index}{extension}")
}

fn file_name_lossy(path: &Path) -> Cow<'_, str> {
    path.file_name().unwrap_or_default().to_string_lossy()
}
