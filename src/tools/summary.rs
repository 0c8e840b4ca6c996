use console::style;
use std::fmt::Display;

/// 摘要中最多列出的項目數
pub const SUMMARY_SAMPLE_LIMIT: usize = 10;

/// 取出要顯示的樣本，並回傳未顯示的數量
#[must_use]
pub fn capped_sample<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

/// 印出最多 [`SUMMARY_SAMPLE_LIMIT`] 個項目，其餘以「... and N more」帶過
pub fn print_capped_list<T: Display>(title: &str, items: &[T]) {
    if items.is_empty() {
        return;
    }

    println!();
    println!("{}", style(title).yellow());

    let (sample, remaining) = capped_sample(items, SUMMARY_SAMPLE_LIMIT);
    for item in sample {
        println!("  {} {}", style("-").dim(), item);
    }
    if remaining > 0 {
        println!("  {} ... and {} more", style("⋯").dim(), remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_sample_under_limit() {
        let items = [1, 2, 3];
        let (sample, remaining) = capped_sample(&items, 10);
        assert_eq!(sample, &[1, 2, 3]);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_capped_sample_over_limit() {
        let items: Vec<usize> = (0..13).collect();
        let (sample, remaining) = capped_sample(&items, SUMMARY_SAMPLE_LIMIT);
        assert_eq!(sample.len(), 10);
        assert_eq!(remaining, 3);
    }
}
