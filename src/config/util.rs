//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Split a site URL into `(origin, path prefix)`.
///
/// Uses the `url` crate, so ports, credentials, queries and fragments are
/// handled. Returns `None` for anything that isn't an absolute URL.
///
/// # Examples
/// ```ignore
/// split_site_url("https://example.github.io/my-project/") -> Some(("https://example.github.io", "my-project"))
/// split_site_url("https://example.com:8080")              -> Some(("https://example.com:8080", ""))
/// split_site_url("invalid")                               -> None
/// ```
pub fn split_site_url(url_str: &str) -> Option<(String, String)> {
    let parsed = url::Url::parse(url_str).ok()?;
    if !parsed.has_host() {
        return None;
    }
    let origin = parsed.origin().ascii_serialization();
    let prefix = parsed.path().trim_matches('/').to_string();
    Some((origin, prefix))
}

/// Find config file by searching upward from `start`.
///
/// ```text
/// /home/user/site/content/posts/  ← start
/// /home/user/site/permalink.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================
