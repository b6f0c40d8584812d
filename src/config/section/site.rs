//! `[site]` configuration.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::split_site_url;
use crate::core::UrlPath;

/// Site-wide settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site URL, used to print absolute links (e.g., "https://example.com/blog").
    pub url: Option<String>,
}

impl SiteSectionConfig {
    /// Absolute, percent-encoded URL for a resolved link.
    ///
    /// `https://example.com/blog` + `/posts/hello/` → `https://example.com/blog/posts/hello/`
    pub fn absolute_url(&self, link: &UrlPath) -> Option<String> {
        let (origin, prefix) = split_site_url(self.url.as_deref()?)?;
        let path = link.to_encoded();
        if prefix.is_empty() {
            Some(format!("{origin}{path}"))
        } else {
            Some(format!("{origin}/{prefix}{path}"))
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && split_site_url(url).is_none()
        {
            diag.error_with_hint(
                "site.url",
                format!("`{url}` is not a valid URL"),
                "use an absolute URL such as \"https://example.com\"",
            );
        }
    }
}
