//! URL slug configuration.

use serde::{Deserialize, Serialize};

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

/// `[build.slug]` section.
///
/// Applies to default paths (`collection/filename`) and to the filename
/// appended to token-less permalinks. Tokens such as `{_title}` pick their
/// own separator but share `transliterate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Separator character for spaces and punctuation.
    pub separator: SlugSeparator,
    /// Transliterate Unicode → ASCII (`Crème` → `creme`).
    pub transliterate: bool,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            separator: SlugSeparator::Dash,
            transliterate: true,
        }
    }
}
