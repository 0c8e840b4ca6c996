use env_logger::Env;

/// 初始化日誌；未設定 `RUST_LOG` 時只顯示警告以上，避免干擾互動選單
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
