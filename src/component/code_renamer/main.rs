//! 圖片依資料夾代碼重新命名主模組
//!
//! 協調掃描、預覽、確認與實際重新命名的整體流程

use super::rename_planner::{RenameOperation, RenameSummary, apply_renames, plan_renames};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::{print_capped_list, prompt_directory, validate_directory_exists};
use anyhow::Result;
use console::style;
use dialoguer::Confirm;
use log::{info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 圖片重新命名器
pub struct CodeRenamer {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl CodeRenamer {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== Rename images by folder code ===").cyan().bold());

        let Some(directory) =
            prompt_directory(&self.config.settings.recent_paths, "Folder to rename images in")?
        else {
            return Ok(());
        };
        validate_directory_exists(&directory)?;
        self.remember_path(&directory.to_string_lossy());

        let settings = &self.config.settings.renamer;
        println!("{}", style("Scanning folders...").dim());
        let plan = plan_renames(&directory, settings);

        print_capped_list(
            "Unreadable folders (skipped):",
            &plan.unreadable,
        );

        if plan.operations.is_empty() {
            println!("{}", style("Nothing to rename, every image is already named").green());
            return Ok(());
        }

        self.display_preview(&plan.operations, settings.dry_run);

        if settings.dry_run {
            println!("{}", style("-".repeat(40)).dim());
            println!(
                "{}",
                style("Dry run complete. No files were changed.").yellow().bold()
            );
            println!(
                "{}",
                style("Turn off dry run in Settings to apply these changes.").dim()
            );
            return Ok(());
        }

        if !self.confirm_rename(plan.operations.len())? {
            println!("{}", style("Cancelled").yellow());
            return Ok(());
        }

        let summary = apply_renames(&plan.operations, &self.shutdown_signal);
        if self.shutdown_signal.load(Ordering::SeqCst) {
            warn!("Rename interrupted by shutdown signal");
        }
        self.display_summary(&summary);

        Ok(())
    }

    fn remember_path(&self, path: &str) {
        let mut settings = self.config.settings.clone();
        add_recent_path(&mut settings, path);
        if let Err(e) = save_settings(&settings) {
            warn!("Could not save recent paths: {e}");
        }
    }

    fn confirm_rename(&self, count: usize) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(format!("Rename {count} files?"))
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    fn display_preview(&self, operations: &[RenameOperation], dry_run: bool) {
        let label = if dry_run { "[WOULD RENAME]" } else { "[RENAME]" };
        println!();
        for operation in operations {
            println!("{}", style(label).cyan());
            println!("  {} {}", style("Old:").dim(), operation.source_name());
            println!("  {} {}", style("New:").dim(), operation.target_name());
        }
        println!();
    }

    fn display_summary(&self, summary: &RenameSummary) {
        println!();
        println!("{}", style("=== Rename result ===").cyan().bold());
        println!("  Renamed: {}", style(summary.renamed.len()).green());
        if !summary.conflicts.is_empty() {
            println!(
                "  Skipped (target exists): {}",
                style(summary.conflicts.len()).yellow()
            );
        }
        if !summary.failed.is_empty() {
            println!("  Failed: {}", style(summary.failed.len()).red());
        }
        if summary.interrupted {
            println!("{}", style("Interrupted before finishing").yellow());
        }

        print_capped_list("Failed renames:", &summary.failed);

        info!(
            "Rename finished - renamed: {}, conflicts: {}, failed: {}",
            summary.renamed.len(),
            summary.conflicts.len(),
            summary.failed.len()
        );
    }
}
