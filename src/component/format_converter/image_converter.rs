//! 圖片格式轉換模組
//!
//! 解碼來源圖片、去除透明度後以固定品質輸出為 JPEG

use super::heic_decoder::{decode_heic, is_heic};
use crate::config::ConverterSettings;
use crate::tools::{FailedItem, new_progress_bar};
use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader, Rgb, RgbImage};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// 輸出副檔名
pub const TARGET_EXTENSION: &str = "jpg";

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// 批次轉換結果統計
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub converted: usize,
    /// 轉換失敗（路徑相對於掃描根目錄）
    pub failed: Vec<FailedItem>,
    pub originals_deleted: usize,
    /// 刪除原檔失敗，不計入轉換失敗
    pub delete_failures: Vec<FailedItem>,
    pub interrupted: bool,
}

impl ConversionSummary {
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.converted + self.failed.len()
    }
}

/// 計算輸出路徑：與來源同目錄，替換副檔名並加上選用的後綴
#[must_use]
pub fn output_path_for(source: &Path, suffix: &str) -> PathBuf {
    if suffix.is_empty() {
        return source.with_extension(TARGET_EXTENSION);
    }
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    source.with_file_name(format!("{stem}{suffix}.{TARGET_EXTENSION}"))
}

/// 轉為不含透明度的 RGB 影像；有 alpha 的影像以 alpha 為遮罩疊在白色背景上
#[must_use]
pub fn flatten_to_rgb(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut canvas = RgbImage::from_pixel(width, height, WHITE);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        canvas.put_pixel(x, y, Rgb([blend(r, a), blend(g, a), blend(b, a)]));
    }

    canvas
}

fn blend(channel: u8, alpha: u8) -> u8 {
    let alpha = u16::from(alpha);
    let value = (u16::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255;
    value as u8
}

/// HEIC 交給 libheif，其餘格式由 `image` 依內容判斷
fn decode_source(source: &Path) -> Result<DynamicImage> {
    if is_heic(source) {
        return decode_heic(source);
    }

    ImageReader::open(source)
        .with_context(|| format!("Failed to open {}", source.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to detect format of {}", source.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", source.display()))
}

/// 轉換單一檔案，成功時回傳輸出路徑
pub fn convert_image(source: &Path, settings: &ConverterSettings) -> Result<PathBuf> {
    let image = decode_source(source)?;
    let rgb = flatten_to_rgb(&image);
    let output_path = output_path_for(source, &settings.output_suffix);

    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, settings.quality.clamp(1, 100))
        .encode_image(&rgb)
        .with_context(|| format!("Failed to encode {}", output_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    debug!("Converted {} -> {}", source.display(), output_path.display());
    Ok(output_path)
}

/// 依序轉換所有檔案；單一檔案失敗不影響其餘檔案
pub fn convert_all(
    files: &[PathBuf],
    root: &Path,
    settings: &ConverterSettings,
    shutdown_signal: &AtomicBool,
) -> ConversionSummary {
    let mut summary = ConversionSummary::default();
    let progress_bar = new_progress_bar(files.len(), "Converting...");

    for source in files {
        if shutdown_signal.load(Ordering::SeqCst) {
            progress_bar.abandon_with_message("Interrupted");
            summary.interrupted = true;
            return summary;
        }

        let relative = source.strip_prefix(root).unwrap_or(source).to_path_buf();
        progress_bar.set_message(relative.display().to_string());

        match convert_image(source, settings) {
            Ok(output_path) => {
                summary.converted += 1;
                // 來源本身就是 .jpg 時輸出會覆蓋來源，不可再刪除
                if settings.delete_originals && output_path != *source {
                    delete_original(source, relative, &mut summary);
                }
            }
            Err(e) => {
                warn!("Conversion failed for {}: {e:#}", source.display());
                summary.failed.push(FailedItem {
                    path: relative,
                    error: format!("{e:#}"),
                });
            }
        }

        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("Done");
    info!(
        "Conversion finished - converted: {}, failed: {}",
        summary.converted,
        summary.failed.len()
    );
    summary
}

fn delete_original(source: &Path, relative: PathBuf, summary: &mut ConversionSummary) {
    match fs::remove_file(source) {
        Ok(()) => summary.originals_deleted += 1,
        Err(e) => {
            warn!("Could not delete original {}: {e}", source.display());
            summary.delete_failures.push(FailedItem {
                path: relative,
                error: e.to_string(),
            });
        }
    }
}
