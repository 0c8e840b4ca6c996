//! 商品匯入表格產生元件
//!
//! 走訪資料夾樹，依路徑推導系列與標籤，將每個商品資料夾展開為多個商品並輸出 CSV

mod catalog_builder;
mod classifier;
mod csv_writer;
mod folder_walker;
mod main;
mod product_expander;
mod text_format;

pub use catalog_builder::{CatalogReport, build_catalog};
pub use classifier::{Classification, ProductTags, classify_path, derive_tags};
pub use csv_writer::{write_catalog, write_catalog_file};
pub use folder_walker::{FolderScan, FolderWalker, ProductFolder, SkippedFolder};
pub use main::CatalogGenerator;
pub use product_expander::{
    CSV_HEADERS, CatalogRow, ProductDetails, SHARED_TAIL_LEN, SynthesizedProduct, build_rows,
    expand_products,
};
pub use text_format::{base_title, describe_path, slugify, title_case};
