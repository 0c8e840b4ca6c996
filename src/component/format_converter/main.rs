//! 圖片格式轉換主模組

use super::image_converter::{ConversionSummary, convert_all};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::{
    print_capped_list, prompt_directory, scan_files_by_extension, validate_directory_exists,
};
use anyhow::Result;
use console::style;
use log::warn;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 圖片格式轉換器
pub struct FormatConverter {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl FormatConverter {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== Convert images to JPEG ===").cyan().bold());

        let Some(directory) =
            prompt_directory(&self.config.settings.recent_paths, "Folder with images to convert")?
        else {
            return Ok(());
        };
        validate_directory_exists(&directory)?;
        self.remember_path(&directory.to_string_lossy());

        let settings = &self.config.settings.converter;
        println!("  Folder: {}", directory.display());
        println!("  JPEG quality: {}", settings.quality);
        println!("  Delete originals: {}", settings.delete_originals);

        let files = scan_files_by_extension(&directory, &settings.source_extensions);
        if files.is_empty() {
            println!(
                "{}",
                style(format!(
                    "No files found matching {}",
                    settings.source_extensions.join(", ")
                ))
                .yellow()
            );
            return Ok(());
        }

        println!(
            "{}",
            style(format!("Found {} files to convert", files.len())).green()
        );

        let summary = convert_all(&files, &directory, settings, &self.shutdown_signal);
        self.display_summary(&summary, settings.delete_originals);

        Ok(())
    }

    fn remember_path(&self, path: &str) {
        let mut settings = self.config.settings.clone();
        add_recent_path(&mut settings, path);
        if let Err(e) = save_settings(&settings) {
            warn!("Could not save recent paths: {e}");
        }
    }

    fn display_summary(&self, summary: &ConversionSummary, delete_originals: bool) {
        println!();
        println!("{}", style("=== Conversion complete ===").cyan().bold());
        println!("  Converted: {}", style(summary.converted).green());
        println!("  Failed: {}", style(summary.failed.len()).red());
        if delete_originals {
            println!("  Originals deleted: {}", summary.originals_deleted);
        }
        if summary.interrupted {
            println!("{}", style("Interrupted before finishing").yellow());
        }

        print_capped_list("Failed files:", &summary.failed);
        print_capped_list("Could not delete originals:", &summary.delete_failures);
    }
}
