pub mod load;
pub mod save;
pub mod types;

pub use types::{
    CatalogRules, CatalogSettings, Config, ConverterSettings, KeywordRule, KeywordTable,
    MAX_RECENT_PATHS, RenamerSettings, UserSettings, has_listed_extension,
};
