use crate::component::{CatalogGenerator, CodeRenamer, FormatConverter};
use crate::config::Config;
use crate::pause;
use crate::signal::clear_shutdown_signal;
use anyhow::Result;
use console::{Term, style};
use log::warn;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

fn report_error(e: &anyhow::Error) {
    warn!("Component failed: {e:#}");
    eprintln!("{} {:#}", style("Error:").red().bold(), e);
}

pub fn run_code_renamer(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    clear_shutdown_signal(shutdown_signal);
    let config = Config::new()?;
    let renamer = CodeRenamer::new(config, Arc::clone(shutdown_signal));

    if let Err(e) = renamer.run() {
        report_error(&e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_format_converter(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    clear_shutdown_signal(shutdown_signal);
    let config = Config::new()?;
    let converter = FormatConverter::new(config, Arc::clone(shutdown_signal));

    if let Err(e) = converter.run() {
        report_error(&e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_catalog_generator(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    clear_shutdown_signal(shutdown_signal);
    let config = Config::new()?;
    let generator = CatalogGenerator::new(config, Arc::clone(shutdown_signal));

    if let Err(e) = generator.run() {
        report_error(&e);
    }

    pause(term)?;
    Ok(())
}
