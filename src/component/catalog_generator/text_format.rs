//! Handle / 標題 / 描述的文字格式化

use regex::Regex;
use std::sync::LazyLock;

static REGEX_NON_HANDLE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s-]").expect("Invalid regex"));

static REGEX_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// 轉為商品 handle：小寫、移除非英數與連字號、空白改為 `-`、去除頭尾 `-`
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = REGEX_NON_HANDLE_CHARS.replace_all(&lowered, "");
    let hyphenated = REGEX_WHITESPACE.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}

/// `-` 與 `_` 改為空白
#[must_use]
pub fn spaced(text: &str) -> String {
    text.replace(['-', '_'], " ")
}

/// 每個「字」首字大寫，其餘小寫；任何非字母字元都視為字的分界（`36mm` -> `36Mm`）
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && !previous_cased {
            result.extend(c.to_uppercase());
        } else if cased {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        previous_cased = cased;
    }

    result
}

/// 由資料夾名稱產生基本標題，例如 `date-just_blue` -> `Date Just Blue`
#[must_use]
pub fn base_title(folder_name: &str) -> String {
    title_case(&spaced(folder_name))
}

/// 以路徑各層產生 HTML 描述：`<p>ROLEX - DATE JUST - BLUE</p>`
#[must_use]
pub fn describe_path(segments: &[String]) -> String {
    let parts: Vec<String> = segments
        .iter()
        .map(|segment| spaced(segment).to_uppercase())
        .collect();
    format!("<p>{}</p>", parts.join(" - "))
}
