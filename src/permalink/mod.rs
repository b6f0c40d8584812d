//! Permalink resolution.
//!
//! Turns a collection's permalink setting into one output path per rendered
//! variant of an item.
//!
//! ```text
//! Permalink ──► resolve (dispatch) ──► shorthand ──► param
//!                     │                         (tokens)  (lookup, date, slug)
//!                     ▼
//!              utils::path::route (clean, split)
//!                     ▼
//!              address::OutputPathResolver (link + output file)
//! ```
//!
//! # Permalink shapes
//!
//! | Shape      | Source                                 | Resolves to                    |
//! |------------|----------------------------------------|--------------------------------|
//! | `Absent`   | no `permalink` set                     | `collection/filename`          |
//! | `Literal`  | `permalink = "blog/{-title}"`          | tokens substituted             |
//! | `Keyed`    | `[permalink] web = "..."`              | one entry per template key     |
//! | `Callable` | [`Permalink::callable`] (library use)  | whatever the closure returns   |

mod param;
mod resolve;
pub mod shorthand;

pub use param::evaluate;
pub use resolve::{PermalinkResolver, ResolveOptions};
pub use shorthand::parse_shorthand;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::UrlPath;
use crate::page::ContentItem;

/// Closure computing a link from an item.
pub type PermalinkFn = dyn Fn(&dyn ContentItem) -> String + Send + Sync;

/// Permalink setting of a collection or item.
#[derive(Clone, Default, Deserialize)]
#[serde(from = "RawPermalink")]
pub enum Permalink {
    /// Nothing configured: `collection/filename`.
    #[default]
    Absent,
    /// Computed per item.
    Callable(Arc<PermalinkFn>),
    /// Template with `{token}` placeholders.
    Literal(String),
    /// One permalink per template key (`web`, `feed`, ...).
    Keyed(FxHashMap<String, Permalink>),
}

impl Permalink {
    /// Wrap a closure as a permalink.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&dyn ContentItem) -> String + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(f))
    }

    /// Build a keyed permalink from `(key, permalink)` pairs.
    pub fn keyed<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Permalink)>,
    {
        Self::Keyed(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Whether this permalink configures nothing.
    ///
    /// Empty literals and empty maps count as unset.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Callable(_) => false,
            Self::Literal(template) => template.is_empty(),
            Self::Keyed(entries) => entries.is_empty(),
        }
    }

    /// Every literal template, including those nested in keyed entries.
    pub fn templates(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Literal(template) => Box::new(std::iter::once(template.as_str())),
            Self::Keyed(entries) => Box::new(entries.values().flat_map(Permalink::templates)),
            Self::Absent | Self::Callable(_) => Box::new(std::iter::empty()),
        }
    }
}

impl From<&str> for Permalink {
    fn from(template: &str) -> Self {
        Self::Literal(template.to_owned())
    }
}

impl fmt::Debug for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Callable(_) => f.write_str("Callable(..)"),
            Self::Literal(template) => f.debug_tuple("Literal").field(template).finish(),
            Self::Keyed(entries) => f.debug_tuple("Keyed").field(entries).finish(),
        }
    }
}

/// On-disk shape of a permalink: a string or a table of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPermalink {
    Literal(String),
    Keyed(FxHashMap<String, RawPermalink>),
}

impl From<RawPermalink> for Permalink {
    fn from(raw: RawPermalink) -> Self {
        match raw {
            RawPermalink::Literal(template) => Self::Literal(template),
            RawPermalink::Keyed(entries) => Self::Keyed(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

/// Outcome of resolving one output variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Link {
    /// Keyed permalink with no entry for this template key: don't render.
    Suppressed,
    /// Template or closure produced nothing.
    Empty,
    /// Resolved link and the file it is written to.
    Path { url: UrlPath, file: PathBuf },
}

impl Link {
    pub fn url(&self) -> Option<&UrlPath> {
        match self {
            Self::Path { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Resolved link of one output variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantLink {
    pub template_key: Option<String>,
    pub view: String,
    pub link: Link,
}
