//! 圖片依資料夾代碼重新命名元件
//!
//! 將每層資料夾名稱縮寫為代碼，圖片重新命名為 `<prefix>-img<N>.<ext>`

mod main;
mod rename_planner;
mod short_code;

pub use main::CodeRenamer;
pub use rename_planner::{
    RenameOperation, RenamePlan, RenameSummary, apply_renames, plan_renames,
};
pub use short_code::{build_prefix, derive_short_code};
