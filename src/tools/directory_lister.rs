use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 單層目錄內容（依檔名排序）
#[derive(Debug, Default)]
pub struct DirectoryListing {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// 列出目錄下一層的子資料夾與檔案，不跟隨符號連結
pub fn list_directory(directory: &Path) -> io::Result<DirectoryListing> {
    let mut listing = DirectoryListing::default();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            listing.directories.push(entry.path());
        } else if file_type.is_file() {
            listing.files.push(entry.path());
        }
    }

    listing.directories.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    listing.files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_directory_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::create_dir(base.join("zeta")).unwrap();
        fs::create_dir(base.join("alpha")).unwrap();
        fs::write(base.join("b.jpg"), "b").unwrap();
        fs::write(base.join("a.jpg"), "a").unwrap();
        fs::write(base.join("alpha/inner.jpg"), "i").unwrap();

        let listing = list_directory(base).unwrap();

        assert_eq!(listing.directories, vec![base.join("alpha"), base.join("zeta")]);
        assert_eq!(listing.files, vec![base.join("a.jpg"), base.join("b.jpg")]);
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_directory(&temp_dir.path().join("missing")).is_err());
    }
}
