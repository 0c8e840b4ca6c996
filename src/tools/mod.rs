mod batch_report;
mod directory_lister;
mod file_scanner;
mod path_prompt;
mod path_validator;
mod progress;
mod summary;

pub use batch_report::{FailedItem, UnreadableDirectory};
pub use directory_lister::{DirectoryListing, list_directory};
pub use file_scanner::scan_files_by_extension;
pub use path_prompt::prompt_directory;
pub use path_validator::validate_directory_exists;
pub use progress::new_progress_bar;
pub use summary::{SUMMARY_SAMPLE_LIMIT, capped_sample, print_capped_list};
