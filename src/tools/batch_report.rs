use std::fmt;
use std::path::PathBuf;

/// 單一項目處理失敗（批次繼續執行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    pub path: PathBuf,
    pub error: String,
}

impl fmt::Display for FailedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.error)
    }
}

/// 無法列出內容的資料夾
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableDirectory {
    pub path: PathBuf,
    pub error: String,
}

impl fmt::Display for UnreadableDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.error)
    }
}
