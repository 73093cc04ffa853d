//! Unique file names for stored images.

use std::path::Path;

use uuid::Uuid;

/// Build a fresh `<uuid-v4><extension>` file name.
///
/// `extension` is appended verbatim, so it should carry its leading dot.
pub fn unique_file_name(extension: &str) -> String {
    format!("{}{}", Uuid::new_v4(), extension)
}

/// Extension of an uploaded file name, with its leading dot, or `""`.
///
/// Only the last path component is inspected, so client-supplied directory
/// parts never leak into stored names.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .file_name()
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
