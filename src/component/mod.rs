//! 功能元件模組
//!
//! 每個子模組實現一個獨立的批次流程，包含主要邏輯和專用工具

pub mod catalog_generator;
pub mod code_renamer;
pub mod format_converter;

pub use catalog_generator::CatalogGenerator;
pub use code_renamer::CodeRenamer;
pub use format_converter::FormatConverter;
