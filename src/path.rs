//! Path manipulation utilities for the application builder

use std::path::Path;

/// Encode a URL to be usable as a single filesystem path component
///
/// This converts URL characters that are problematic for filesystems
/// into safe alternatives.
pub fn encode_url_path(url: &str) -> String {
    url.chars()
        .map(|c| match c {
            '/' => '-',
            '\\' => '-',
            ':' => '_',
            '*' => '_',
            '?' => '_',
            '"' => '_',
            '<' => '_',
            '>' => '_',
            '|' => '_',
            // Keep alphanumeric, dots, dashes, underscores as-is
            c if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' => c,
            // Replace other characters with underscores
            _ => '_',
        })
        .collect()
}

/// Whether a directory entry is hidden (its name starts with a dot).
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Split a comma-separated command-line value, dropping empty segments.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
