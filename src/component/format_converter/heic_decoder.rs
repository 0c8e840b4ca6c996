//! HEIC 解碼
//!
//! `image` 無法讀取 HEIC，這類檔案改由 libheif 解碼；未啟用 `heic` feature 時回傳錯誤

use anyhow::Result;
use image::DynamicImage;
use std::path::Path;

/// 副檔名為 `.heic` / `.heif`（不分大小寫）
#[must_use]
pub fn is_heic(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("heic") || ext.eq_ignore_ascii_case("heif"))
}

#[cfg(feature = "heic")]
pub fn decode_heic(source: &Path) -> Result<DynamicImage> {
    use anyhow::Context;
    use image::RgbaImage;
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

    let path = source
        .to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", source.display()))?;

    let lib_heif = LibHeif::new();
    let context = HeifContext::read_from_file(path)
        .with_context(|| format!("Failed to open {}", source.display()))?;
    let handle = context
        .primary_image_handle()
        .with_context(|| format!("No primary image in {}", source.display()))?;
    let decoded = lib_heif
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgba), None)
        .with_context(|| format!("Failed to decode {}", source.display()))?;

    let planes = decoded.planes();
    let plane = planes
        .interleaved
        .with_context(|| format!("Unexpected HEIC layout in {}", source.display()))?;

    // 每列可能有對齊用的填充位元組
    let row_len = plane.width as usize * 4;
    let mut pixels = Vec::with_capacity(row_len * plane.height as usize);
    for row in plane.data.chunks(plane.stride).take(plane.height as usize) {
        pixels.extend_from_slice(&row[..row_len]);
    }

    let rgba = RgbaImage::from_raw(plane.width, plane.height, pixels)
        .with_context(|| format!("Truncated pixel data in {}", source.display()))?;
    Ok(DynamicImage::ImageRgba8(rgba))
}

#[cfg(not(feature = "heic"))]
pub fn decode_heic(source: &Path) -> Result<DynamicImage> {
    anyhow::bail!(
        "HEIC support is not enabled (build with --features heic): {}",
        source.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_heic() {
        assert!(is_heic(Path::new("/photos/IMG_0001.HEIC")));
        assert!(is_heic(Path::new("IMG_0001.heif")));
        assert!(!is_heic(Path::new("IMG_0001.png")));
        assert!(!is_heic(Path::new("heic")));
    }

    #[cfg(not(feature = "heic"))]
    #[test]
    fn test_heic_without_feature_is_an_error() {
        let err = decode_heic(Path::new("/photos/IMG_0001.heic")).unwrap_err();
        assert!(err.to_string().contains("--features heic"));
    }
}
