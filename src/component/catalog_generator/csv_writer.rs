//! 匯入表格輸出

use super::product_expander::{CSV_HEADERS, CatalogRow};
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// 寫出表格；即使沒有任何列也會寫出標題列
pub fn write_catalog<W: Write>(writer: W, rows: &[CatalogRow]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .context("Failed to write CSV header")?;
    for row in rows {
        csv_writer.serialize(row).context("Failed to write CSV row")?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;

    Ok(())
}

pub fn write_catalog_file(path: &Path, rows: &[CatalogRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_catalog(file, rows).with_context(|| format!("Failed to write {}", path.display()))
}
