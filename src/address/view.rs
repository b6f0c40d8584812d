use std::path::Path;

use super::ViewExtension;

/// Extension of the view's file name, lowercased.
///
/// `layouts/post.blade.php` → `php`, `feed.XML` → `xml`, no extension → empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathExtension;

impl ViewExtension for PathExtension {
    fn extension(&self, view: &str) -> String {
        Path::new(view)
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default()
    }
}
