use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// 確認路徑存在、是資料夾且可以列出內容；任何一項不符都是致命錯誤
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("Path is not a directory: {}", path.display());
    }
    fs::read_dir(path).with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}
