//! 商品匯入表格產生主模組

use super::catalog_builder::{CatalogReport, build_catalog};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::{print_capped_list, prompt_directory};
use anyhow::Result;
use console::style;
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 商品匯入表格產生器
pub struct CatalogGenerator {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl CatalogGenerator {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== Generate product import CSV ===").cyan().bold());

        let Some(directory) =
            prompt_directory(&self.config.settings.recent_paths, "Folder with product images")?
        else {
            return Ok(());
        };

        println!("{}", style(format!("Processing {}", directory.display())).dim());
        let report = build_catalog(&directory, &self.config, &self.shutdown_signal)?;
        self.remember_path(&directory.to_string_lossy());

        let output_file = Path::new(&self.config.settings.catalog.output_file);
        if !report.write_to(output_file)? {
            println!(
                "{}",
                style(format!(
                    "Interrupted, {} was not written",
                    output_file.display()
                ))
                .yellow()
                .bold()
            );
            return Ok(());
        }
        info!("Wrote {} rows to {}", report.rows.len(), output_file.display());

        self.display_summary(&report, output_file);
        Ok(())
    }

    fn remember_path(&self, path: &str) {
        let mut settings = self.config.settings.clone();
        add_recent_path(&mut settings, path);
        if let Err(e) = save_settings(&settings) {
            warn!("Could not save recent paths: {e}");
        }
    }

    fn display_summary(&self, report: &CatalogReport, output_file: &Path) {
        println!();
        println!("{}", style("=== CSV generated ===").cyan().bold());
        println!("  File: {}", output_file.display());
        println!(
            "  Product folders processed: {}",
            style(report.products_processed).green()
        );
        println!("  Products: {}", report.product_count());
        println!("  Total rows: {}", report.rows.len());

        print_capped_list(
            &format!(
                "Skipped folders (need {}+ images):",
                self.config.settings.catalog.min_images
            ),
            &report.skipped,
        );
        print_capped_list("Unreadable folders:", &report.unreadable);

        println!();
        println!("{}", style("Next steps:").cyan());
        println!("  1. Upload the product images to the image host");
        println!("  2. Review prices, descriptions and collections in the CSV");
        println!("  3. Import the CSV in the store admin");
    }
}
