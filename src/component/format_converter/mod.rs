//! 圖片格式轉換元件
//!
//! 遞迴尋找來源格式的圖片，轉為白底 JPEG 存放於原檔旁

mod heic_decoder;
mod image_converter;
mod main;

pub use heic_decoder::{decode_heic, is_heic};
pub use image_converter::{
    ConversionSummary, TARGET_EXTENSION, convert_all, convert_image, flatten_to_rgb,
    output_path_for,
};
pub use main::FormatConverter;
