//! Site configuration management for `permalink.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build] and [build.slug]
//! │   ├── collection # [collections.<name>]
//! │   └── site       # [site]
//! ├── error          # ConfigError, ConfigDiagnostics
//! ├── util           # Config discovery, URL splitting
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section                | Purpose                                        |
//! |------------------------|------------------------------------------------|
//! | `[site]`               | Site URL for absolute links                    |
//! | `[build]`              | Output format, pretty URLs, bare extensions    |
//! | `[build.slug]`         | Slug separator and transliteration             |
//! | `[collections.<name>]` | Permalink template and views per collection    |

pub mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use section::{
    BuildSectionConfig, CollectionConfig, SiteSectionConfig, SlugConfig, SlugSeparator,
};
pub use util::{find_config_file, split_site_url};

use crate::log;
use crate::permalink::ResolveOptions;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing permalink.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Collections by name
    #[serde(default)]
    pub collections: BTreeMap<String, CollectionConfig>,
}

impl SiteConfig {
    /// Locate and load the config file, searching upward from `cwd`.
    ///
    /// A missing config is not an error: every setting has a default, so
    /// the resolver runs with an empty configuration rooted at `cwd`.
    pub fn load(config_name: &Path, cwd: &Path) -> Result<Self> {
        let Some(config_path) = find_config_file(config_name, cwd) else {
            log!("config"; "{} not found, using defaults", config_name.display());
            let mut config = Self::default();
            config.root = cwd.to_path_buf();
            config.finalize();
            return Ok(config);
        };

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.finalize();
        config
            .validate()
            .with_context(|| format!("invalid config {}", config.config_path.display()))?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Normalize values that users commonly write loosely.
    fn finalize(&mut self) {
        self.build.normalize();
    }

    /// Validate every section, reporting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        for (name, collection) in &self.collections {
            collection.validate(name, &mut diag);
        }

        diag.into_result().map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Collection settings by name (defaults for unknown collections).
    pub fn collection(&self, name: &str) -> CollectionConfig {
        self.collections.get(name).cloned().unwrap_or_default()
    }

    /// Options for [`crate::permalink::PermalinkResolver`].
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions::from(&self.build)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (mut parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.finalize();
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[build\nformat = \"html\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert!(config.site.url.is_none());
        assert_eq!(config.build.format, "html");
        assert!(config.collections.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[build]\nformat = \"html\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.build.format, "html");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_collection_lookup_defaults() {
        let config = test_parse_config("[collections.posts]\npermalink = \"blog/{slug}\"");
        assert!(config.collection("posts").permalink.templates().next().is_some());
        assert!(config.collection("missing").permalink.is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[site]\nurl = \"nope\"\n[build]\nformat = \"\"\n[collections.posts]\npermalink = \"{}\"",
        );
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("permalink.toml"),
            "[build]\nformat = \".HTML\"\n[collections.posts]\npermalink = \"blog/{-title}\"",
        )
        .unwrap();
        let nested = dir.path().join("_posts");
        fs::create_dir_all(&nested).unwrap();

        let config = SiteConfig::load(Path::new("permalink.toml"), &nested).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.build.format, "html");
        assert!(config.collections.contains_key("posts"));
        assert_eq!(
            config.root_relative(dir.path().join("_posts/a.md")),
            Path::new("_posts/a.md")
        );
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            SiteConfig::load(Path::new("no-such-permalink-config.toml"), dir.path()).unwrap();
        assert_eq!(config.root, dir.path());
        assert!(config.collections.is_empty());
    }

    #[test]
    fn test_load_invalid_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("permalink.toml"), "[build]\nformat = \"\"").unwrap();
        assert!(SiteConfig::load(Path::new("permalink.toml"), dir.path()).is_err());
    }
}
