//! 資料夾名稱縮寫模組
//!
//! 將資料夾名稱轉換為短代碼，例如 `Date-just` -> `DJ`、`36mm` -> `36`

/// 由資料夾名稱產生短代碼
///
/// `-` 與 `_` 視為空白；以 ASCII 數字開頭的字保留開頭的連續數字，
/// 其餘的字取第一個字元並轉為大寫。
#[must_use]
pub fn derive_short_code(folder_name: &str) -> String {
    folder_name
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(word_code)
        .collect()
}

fn word_code(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_digit() => {
            word.chars().take_while(char::is_ascii_digit).collect()
        }
        Some(first) => first.to_uppercase().collect(),
        None => String::new(),
    }
}

/// 以 `-` 串接每一層資料夾的短代碼
#[must_use]
pub fn build_prefix<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .map(derive_short_code)
        .collect::<Vec<_>>()
        .join("-")
}
