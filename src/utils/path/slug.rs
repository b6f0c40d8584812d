//! URL slugification.
//!
//! One rule for every slug the resolver produces (collection names,
//! filenames, `{-field}` tokens):
//!
//! - Optionally transliterate Unicode → ASCII (`deunicode`)
//! - Lowercase
//! - Collapse every run of non-alphanumeric characters into one separator
//! - Never start or end with the separator

use std::borrow::Cow;

use crate::config::SlugConfig;

/// Default separator for slugs that don't carry their own.
pub const DEFAULT_SEPARATOR: char = '-';

/// Explicit slug settings, resolved from `[build.slug]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    /// Separator used for default paths and filename slugs.
    pub separator: char,
    /// Transliterate Unicode to ASCII before slugging.
    pub transliterate: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            transliterate: true,
        }
    }
}

impl SlugOptions {
    /// Same options, different separator (token-level `{_field}` override).
    pub const fn with_separator(self, separator: char) -> Self {
        Self { separator, ..self }
    }

    /// Slugify `text` with these options.
    #[inline]
    pub fn slugify(&self, text: &str) -> String {
        slugify(text, self.separator, self.transliterate)
    }
}

impl From<&SlugConfig> for SlugOptions {
    fn from(config: &SlugConfig) -> Self {
        Self {
            separator: config.separator.as_char(),
            transliterate: config.transliterate,
        }
    }
}

/// Convert text to a URL slug joined by `separator`.
///
/// # Examples
/// ```
/// use tola_permalink::utils::path::slug::slugify;
/// assert_eq!(slugify("Hello World", '-', true), "hello-world");
/// assert_eq!(slugify("  Blog Posts!  ", '_', true), "blog_posts");
/// assert_eq!(slugify("Crème Brûlée", '-', true), "creme-brulee");
/// ```
pub fn slugify(text: &str, separator: char, transliterate: bool) -> String {
    let source: Cow<'_, str> = if transliterate {
        Cow::Owned(deunicode::deunicode(text))
    } else {
        Cow::Borrowed(text)
    };

    let mut slug = String::with_capacity(source.len());
    let mut pending_separator = false;

    for c in source.chars() {
        if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(separator);
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
