use crate::config::Config;
use crate::config::save::save_settings;
use crate::menu::handlers::{run_catalog_generator, run_code_renamer, run_format_converter};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== Watch catalog image tools ===").cyan().bold());
    println!("{}", style("(ESC to exit)").dim());

    let options = [
        "Rename images by folder code",
        "Convert images to JPEG",
        "Generate product import CSV",
        "Settings",
        "Exit",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a tool")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_code_renamer(term, shutdown_signal)?;
            Ok(true)
        }
        Some(1) => {
            run_format_converter(term, shutdown_signal)?;
            Ok(true)
        }
        Some(2) => {
            run_catalog_generator(term, shutdown_signal)?;
            Ok(true)
        }
        Some(3) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(4) | None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    // 元件執行時會寫入最近路徑，先重新載入避免覆蓋
    *config = Config::new()?;

    loop {
        term.clear_screen()?;

        println!("{}", style("=== Settings ===").cyan().bold());
        println!("{}", style("(ESC to go back)").dim());

        let settings = &config.settings;
        let options = vec![
            format!("Renamer dry run: {}", on_off(settings.renamer.dry_run)),
            format!(
                "Delete originals after conversion: {}",
                on_off(settings.converter.delete_originals)
            ),
            format!(
                "Include brand collection in CSV: {}",
                on_off(settings.catalog.include_brand_collection)
            ),
            "Back".to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Toggle a setting")
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => config.settings.renamer.dry_run = !config.settings.renamer.dry_run,
            Some(1) => {
                config.settings.converter.delete_originals =
                    !config.settings.converter.delete_originals;
            }
            Some(2) => {
                config.settings.catalog.include_brand_collection =
                    !config.settings.catalog.include_brand_collection;
            }
            Some(3) | None => break,
            _ => unreachable!(),
        }

        save_settings(&config.settings)?;
    }

    Ok(())
}

const fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
