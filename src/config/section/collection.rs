//! `[collections.<name>]` configuration.

use serde::Deserialize;

use crate::config::ConfigDiagnostics;
use crate::page::Extends;
use crate::permalink::{Permalink, shorthand};

/// Defaults shared by every item of one collection.
///
/// ```toml
/// [collections.posts]
/// permalink = "blog/{date|Y/m}/{-title}"
/// extends = "layouts/post.blade.php"
///
/// [collections.talks.permalink]
/// web = "talks/{-title}"
/// feed = "talks/{-title}/feed"
///
/// [collections.talks.extends]
/// web = "layouts/talk.blade.php"
/// feed = "layouts/talk.blade.xml"
/// ```
///
/// Items may override both fields in their own data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Permalink template; absent means `collection/filename`.
    pub permalink: Permalink,

    /// Views the items render through, one per output variant.
    pub extends: Option<Extends>,
}

impl CollectionConfig {
    /// Report tokens that can never resolve (`{}`, `{-}`, `{|Y}`).
    pub fn validate(&self, name: &str, diag: &mut ConfigDiagnostics) {
        let field = format!("collections.{name}.permalink");
        for template in self.permalink.templates() {
            for token in shorthand::tokens(template) {
                if token.field_path().is_empty() {
                    diag.error_with_hint(
                        field.clone(),
                        format!("`{}` in `{template}` names no field", token.as_str()),
                        "write tokens as {field}, {-field} or {field|Y/m}",
                    );
                }
            }
        }
    }
}
