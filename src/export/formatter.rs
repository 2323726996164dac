/// Full-width delimiter opening each export block.
pub const BLOCK_SEPARATOR: &str =
    "================================================================================";

/// Delimiter between the header lines and the file body.
pub const SECTION_SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// Body rendered when a file has no content or no usable encoding.
pub const EMPTY_PLACEHOLDER: &str = "[EMPTY OR UNREADABLE FILE]";

/// Render one file into its fixed-layout export block: a separator line, a
/// path line, a name line, another separator, then the trimmed content.
///
/// The content appears verbatim. A file that itself contains the separator
/// sequence is indistinguishable from a block boundary on re-parsing; this
/// is an accepted limitation of the format.
pub fn format_entry(full_path: &str, file_name: &str, content: Option<&str>) -> String {
    let body = match content {
        Some(text) if !text.is_empty() => text.trim(),
        _ => EMPTY_PLACEHOLDER,
    };

    format!(
        "\n{}\n📂 File Path: {}\n📝 File Name: {}\n{}\n{}\n",
        BLOCK_SEPARATOR, full_path, file_name, SECTION_SEPARATOR, body
    )
}
