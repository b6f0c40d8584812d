//! Evaluation of a single `{token}`.
//!
//! ```text
//! {-title}          separator `-`, field `title`
//! {_author.name}    separator `_`, field `author.name`
//! {date|Y/m}        field `date`, date format `Y/m`
//! {category}        field `category`, inserted as-is
//! ```

use serde_json::Value as JsonValue;

use crate::page::{ContentItem, lookup};
use crate::utils::date;
use crate::utils::path::SlugOptions;

/// Parsed token body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Param<'a> {
    pub separator: Option<char>,
    pub field_path: &'a str,
    pub date_format: Option<&'a str>,
}

impl<'a> Param<'a> {
    /// Parse a token, with or without its braces.
    ///
    /// Only the first `|` splits; the rest belongs to the date format.
    pub fn parse(token: &'a str) -> Self {
        let body = token.trim_matches(['{', '}']);
        let (param, date_format) = match body.split_once('|') {
            Some((param, format)) => (param, Some(format).filter(|f| !f.is_empty())),
            None => (body, None),
        };

        let separator = param.chars().next().filter(|c| !c.is_ascii_alphabetic());
        let field_path = match separator {
            Some(sep) => param.trim_start_matches(sep),
            None => param,
        };

        Self {
            separator,
            field_path,
            date_format,
        }
    }
}

/// Evaluate a token against an item.
///
/// Missing values, empty values and unparsable dates all give `""`.
pub fn evaluate<I>(token: &str, item: &I, slug: &SlugOptions) -> String
where
    I: ContentItem + ?Sized,
{
    let param = Param::parse(token);
    if param.field_path.is_empty() {
        return String::new();
    }

    let Some(value) = lookup(item, param.field_path).filter(|v| !is_empty_value(v)) else {
        return String::new();
    };

    let text = match param.date_format {
        Some(format) => date::format_value(value, format),
        None => scalar_text(value),
    };

    match param.separator {
        Some(sep) => slug.with_separator(sep).slugify(&text),
        None => text,
    }
}

fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null | JsonValue::Bool(false) => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
        JsonValue::Bool(true) | JsonValue::Number(_) => false,
    }
}

fn scalar_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(true) => "1".into(),
        _ => String::new(),
    }
}
