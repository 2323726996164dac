pub mod file_collector;
pub mod file_filter;

pub use file_collector::{CollectedFile, FileCollector};
pub use file_filter::FileFilter;
