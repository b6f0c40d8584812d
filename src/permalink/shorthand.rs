//! `{token}` placeholders in literal templates.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::param::{Param, evaluate};
use crate::page::ContentItem;
use crate::utils::path::SlugOptions;

/// `{...}` without nesting; the closest `}` ends the token.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// One placeholder found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
}

impl<'a> Token<'a> {
    /// Literal token text, braces included.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Dotted field path the token looks up (`{-author.name|Y}` → `author.name`).
    pub fn field_path(&self) -> &'a str {
        Param::parse(self.text).field_path
    }
}

/// Placeholders of `template`, left to right.
pub fn tokens(template: &str) -> impl Iterator<Item = Token<'_>> {
    TOKEN.find_iter(template).map(|m| Token { text: m.as_str() })
}

/// Substitute every token in `template`.
///
/// A template without tokens is a directory: the slugged filename is
/// appended. Substituted values are never scanned for further tokens.
pub fn parse_shorthand<I>(template: &str, item: &I, slug: &SlugOptions) -> String
where
    I: ContentItem + ?Sized,
{
    if !TOKEN.is_match(template) {
        return format!("{template}/{}", slug.slugify(item.filename()));
    }

    TOKEN
        .replace_all(template, |caps: &Captures<'_>| evaluate(&caps[0], item, slug))
        .into_owned()
}
