use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::path::{Path, PathBuf};

/// 詢問資料夾路徑，若有歷史路徑則先提供選單
///
/// 回傳 `None` 代表使用者按下 ESC
pub fn prompt_directory(recent_paths: &[String], prompt: &str) -> Result<Option<PathBuf>> {
    if recent_paths.is_empty() {
        return prompt_new_path(prompt).map(Some);
    }

    let mut options: Vec<String> = recent_paths
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let indicator = if Path::new(p).exists() { "✓" } else { "✗" };
            format!("{} [{}] {}", i + 1, indicator, p)
        })
        .collect();
    options.push("Enter a new path...".to_string());

    println!("{}", style("(ESC to return to the main menu)").dim());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose a folder")
        .items(&options)
        .default(0)
        .interact_opt()?;

    match selection {
        None => Ok(None),
        Some(idx) if idx < recent_paths.len() => Ok(Some(PathBuf::from(&recent_paths[idx]))),
        Some(_) => prompt_new_path(prompt).map(Some),
    }
}

fn prompt_new_path(prompt: &str) -> Result<PathBuf> {
    let path: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(PathBuf::from(path.trim()))
}
