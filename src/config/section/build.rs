//! `[build]` section configuration.

use serde::{Deserialize, Serialize};

use super::SlugConfig;
use crate::config::ConfigDiagnostics;

/// `[build]` section.
///
/// ```toml
/// [build]
/// format = "html"
/// pretty = true
/// bare_extensions = ["php", "html"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Format tag handed to the naming service.
    pub format: String,

    /// `/posts/hello/` links (`posts/hello/index.html`) instead of
    /// `/posts/hello.html`.
    pub pretty: bool,

    /// View extensions that add no extension to the output path.
    pub bare_extensions: Vec<String>,

    /// `[build.slug]`
    pub slug: SlugConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            format: "html".into(),
            pretty: true,
            bare_extensions: vec!["php".into(), "html".into()],
            slug: SlugConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    /// Normalize user input (`".php"` → `"php"`, lowercase).
    pub fn normalize(&mut self) {
        self.format = self.format.trim().trim_start_matches('.').to_ascii_lowercase();
        for ext in &mut self.bare_extensions {
            *ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.format.is_empty() {
            diag.error_with_hint(
                "build.format",
                "output format must not be empty",
                "the default is \"html\"",
            );
        }
        if self.bare_extensions.iter().any(String::is_empty) {
            diag.error("build.bare_extensions", "extensions must not be empty");
        }
    }
}
