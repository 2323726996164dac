pub mod formatter;
pub mod writer;

pub use formatter::{format_entry, BLOCK_SEPARATOR, EMPTY_PLACEHOLDER, SECTION_SEPARATOR};
pub use writer::{ExportSummary, ExportWriter};
