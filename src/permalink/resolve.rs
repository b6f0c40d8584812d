//! Permalink dispatch: one [`Link`] per output variant.

use crate::address::{OutputPathResolver, ViewExtension};
use crate::config::BuildSectionConfig;
use crate::core::UrlPath;
use crate::page::ContentItem;
use crate::utils::path::{SlugOptions, clean_input_path, normalize, split_link};

use super::{Link, Permalink, VariantLink, parse_shorthand};

/// Settings that shape resolved paths, taken from `[build]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Format tag passed to the naming service.
    pub format: String,
    /// View extensions that add nothing to the path (lowercase, no dot).
    pub bare_extensions: Vec<String>,
    /// Slug settings for default paths and filenames.
    pub slug: SlugOptions,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::from(&BuildSectionConfig::default())
    }
}

impl From<&BuildSectionConfig> for ResolveOptions {
    fn from(build: &BuildSectionConfig) -> Self {
        Self {
            format: build.format.clone(),
            bare_extensions: build.bare_extensions.clone(),
            slug: SlugOptions::from(&build.slug),
        }
    }
}

/// Resolves permalinks against items through a naming service.
///
/// Holds no per-item state; one resolver can be shared across threads.
pub struct PermalinkResolver<'a> {
    output: &'a dyn OutputPathResolver,
    views: &'a dyn ViewExtension,
    options: ResolveOptions,
}

impl<'a> PermalinkResolver<'a> {
    pub fn new(
        output: &'a dyn OutputPathResolver,
        views: &'a dyn ViewExtension,
        options: ResolveOptions,
    ) -> Self {
        Self {
            output,
            views,
            options,
        }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve every output variant the item declares, in order.
    pub fn resolve_all(&self, permalink: &Permalink, item: &dyn ContentItem) -> Vec<VariantLink> {
        item.variants()
            .iter()
            .map(|variant| {
                let extension = self.output_extension(&variant.view);
                VariantLink {
                    template_key: variant.template_key.clone(),
                    view: variant.view.clone(),
                    link: self.resolve_one(
                        permalink,
                        item,
                        &extension,
                        variant.template_key.as_deref(),
                    ),
                }
            })
            .collect()
    }

    /// Extension a view adds to its output path: `.xml`, or empty for bare
    /// extensions and extension-less views.
    pub fn output_extension(&self, view: &str) -> String {
        let ext = self.views.extension(view);
        let bare = self
            .options
            .bare_extensions
            .iter()
            .any(|b| b.eq_ignore_ascii_case(&ext));
        if ext.is_empty() || bare {
            String::new()
        } else {
            format!(".{ext}")
        }
    }

    /// Resolve one variant.
    ///
    /// 1. Keyed permalink with a template key: use that entry, or suppress
    ///    the variant when there is none. The key is not appended.
    /// 2. Callable: the closure's result.
    /// 3. Non-empty literal: the template with its tokens substituted.
    /// 4. Anything else: `collection/filename`, both slugged.
    ///
    /// Unconsumed template keys are appended as `/key`, then the extension.
    pub fn resolve_one(
        &self,
        permalink: &Permalink,
        item: &dyn ContentItem,
        extension: &str,
        template_key: Option<&str>,
    ) -> Link {
        let mut permalink = permalink;
        let mut suffix = template_key.map(|key| format!("/{key}")).unwrap_or_default();

        if let (Some(key), Permalink::Keyed(entries)) = (template_key, permalink) {
            match entries.get(key).filter(|entry| !entry.is_empty()) {
                Some(entry) => {
                    permalink = entry;
                    suffix.clear();
                }
                None => return Link::Suppressed,
            }
        }

        let slug = &self.options.slug;
        let path = match permalink {
            Permalink::Callable(f) => clean_input_path(&f(item)),
            Permalink::Literal(template) if !template.is_empty() => {
                parse_shorthand(&clean_input_path(template), item, slug)
            }
            _ => format!(
                "{}/{}",
                slug.slugify(item.collection_name()),
                slug.slugify(item.filename())
            ),
        };

        if path.trim_matches(['/', '.']).is_empty() {
            return Link::Empty;
        }

        self.name(&format!("{path}{suffix}{extension}"))
    }

    /// Normalize and hand off to the naming service.
    fn name(&self, path: &str) -> Link {
        let path = normalize(path);
        let (dir, name) = split_link(&path);
        let format = &self.options.format;
        Link::Path {
            url: UrlPath::from_link(&self.output.link(dir, name, format)),
            file: self.output.output_file(dir, name, format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{BasicOutputPaths, PathExtension, PrettyOutputPaths};
    use crate::page::{OutputVariant, Page};
    use serde_json::{Value as JsonValue, json};
    use std::path::PathBuf;

    fn page(collection: &str, filename: &str, value: JsonValue) -> Page {
        let JsonValue::Object(fields) = value else {
            unreachable!()
        };
        Page::new(collection, filename, fields)
    }

    /// Naming that returns the normalized path untouched.
    fn raw() -> PermalinkResolver<'static> {
        let options = ResolveOptions {
            format: String::new(),
            ..ResolveOptions::default()
        };
        PermalinkResolver::new(&BasicOutputPaths, &PathExtension, options)
    }

    fn pretty() -> PermalinkResolver<'static> {
        PermalinkResolver::new(&PrettyOutputPaths, &PathExtension, ResolveOptions::default())
    }

    fn url(link: &Link) -> &str {
        link.url().map(UrlPath::as_str).unwrap_or("<none>")
    }

    #[test]
    fn test_default_path() {
        let item = page("Blog Posts", "My Item", json!({}));
        let link = raw().resolve_one(&Permalink::Absent, &item, "", None);
        assert_eq!(url(&link), "/blog-posts/my-item");
    }

    #[test]
    fn test_default_path_with_key_and_extension() {
        let item = page("posts", "hello", json!({}));
        let link = raw().resolve_one(&Permalink::Absent, &item, ".xml", Some("feed"));
        assert_eq!(url(&link), "/posts/hello/feed.xml");
    }

    #[test]
    fn test_empty_literal_uses_default() {
        let item = page("posts", "hello", json!({}));
        let link = raw().resolve_one(&Permalink::from(""), &item, "", None);
        assert_eq!(url(&link), "/posts/hello");
    }

    #[test]
    fn test_literal_without_tokens() {
        let item = page("posts", "hello", json!({}));
        let link = raw().resolve_one(&Permalink::from("posts"), &item, "", None);
        assert_eq!(url(&link), "/posts/hello");
    }

    #[test]
    fn test_literal_with_tokens() {
        let item = page(
            "posts",
            "hello",
            json!({"category": "News", "slug": "Hello World", "date": "2023-03-15"}),
        );
        let permalink = Permalink::from("/{category}/{date|Y/m}/{-slug}/");
        let link = raw().resolve_one(&permalink, &item, "", None);
        assert_eq!(url(&link), "/News/2023/03/hello-world");
    }

    #[test]
    fn test_missing_token_collapses() {
        let item = page("posts", "hello", json!({}));
        let link = raw().resolve_one(&Permalink::from("a/{missing}/b"), &item, "", None);
        assert_eq!(url(&link), "/a/b");
    }

    #[test]
    fn test_literal_suffix_and_extension() {
        let item = page("posts", "hello", json!({"title": "Hi There"}));
        let permalink = Permalink::from("blog/{-title}");
        let link = raw().resolve_one(&permalink, &item, ".xml", Some("feed"));
        assert_eq!(url(&link), "/blog/hi-there/feed.xml");
    }

    #[test]
    fn test_keyed_entry_consumes_key() {
        let item = page("posts", "hello", json!({"title": "Hi"}));
        let permalink = Permalink::keyed([
            ("web", Permalink::from("blog/{-title}")),
            ("feed", Permalink::from("feeds/{-title}")),
        ]);
        let link = raw().resolve_one(&permalink, &item, ".xml", Some("feed"));
        assert_eq!(url(&link), "/feeds/hi.xml");
    }

    #[test]
    fn test_keyed_missing_entry_suppressed() {
        let item = page("posts", "hello", json!({"slug": "x"}));
        let permalink = Permalink::keyed([("html", Permalink::from("posts/{slug}"))]);
        let link = raw().resolve_one(&permalink, &item, ".xml", Some("feed"));
        assert_eq!(link, Link::Suppressed);
    }

    #[test]
    fn test_keyed_empty_entry_suppressed() {
        let item = page("posts", "hello", json!({}));
        let permalink = Permalink::keyed([("feed", Permalink::from(""))]);
        let link = raw().resolve_one(&permalink, &item, "", Some("feed"));
        assert_eq!(link, Link::Suppressed);
    }

    #[test]
    fn test_keyed_without_key_uses_default() {
        let item = page("posts", "hello", json!({}));
        let permalink = Permalink::keyed([("web", Permalink::from("blog/{filename}"))]);
        let link = raw().resolve_one(&permalink, &item, "", None);
        assert_eq!(url(&link), "/posts/hello");
    }

    #[test]
    fn test_nested_keyed_entry_uses_default() {
        let item = page("posts", "hello", json!({}));
        let permalink = Permalink::keyed([(
            "web",
            Permalink::keyed([("inner", Permalink::from("x"))]),
        )]);
        let link = raw().resolve_one(&permalink, &item, "", Some("web"));
        assert_eq!(url(&link), "/posts/hello");
    }

    #[test]
    fn test_callable() {
        let item = page("posts", "hello", json!({"year": 2024}));
        let permalink = Permalink::callable(|item| {
            let year = item.field("year").map(ToString::to_string).unwrap_or_default();
            format!("archive/{year}/{}/", item.filename())
        });
        let link = raw().resolve_one(&permalink, &item, "", Some("web"));
        assert_eq!(url(&link), "/archive/2024/hello/web");
    }

    #[test]
    fn test_callable_output_is_not_tokenized() {
        let item = page("posts", "hello", json!({"a": "x"}));
        let permalink = Permalink::callable(|_| "raw/{a}".into());
        let link = raw().resolve_one(&permalink, &item, "", None);
        assert_eq!(url(&link), "/raw/{a}");
    }

    #[test]
    fn test_empty_resolution() {
        let item = page("posts", "hello", json!({}));
        let callable = Permalink::callable(|_| "/./".into());
        assert_eq!(raw().resolve_one(&callable, &item, "", None), Link::Empty);
        let literal = Permalink::from("{missing}/{other}");
        assert_eq!(raw().resolve_one(&literal, &item, ".xml", Some("k")), Link::Empty);
    }

    #[test]
    fn test_pretty_naming() {
        let item = page("posts", "hello", json!({}));
        let link = pretty().resolve_one(&Permalink::from("blog"), &item, "", None);
        assert_eq!(
            link,
            Link::Path {
                url: UrlPath::from_link("/blog/hello/"),
                file: PathBuf::from("blog/hello/index.html"),
            }
        );
    }

    #[test]
    fn test_output_extension() {
        let resolver = pretty();
        assert_eq!(resolver.output_extension("post.blade.php"), "");
        assert_eq!(resolver.output_extension("post.HTML"), "");
        assert_eq!(resolver.output_extension("layouts/post"), "");
        assert_eq!(resolver.output_extension("post.blade.xml"), ".xml");
    }

    #[test]
    fn test_resolve_all_variants() {
        let item = page("talks", "intro", json!({"title": "Intro Talk"})).with_variants(vec![
            OutputVariant::new(Some("web"), "talk.blade.php"),
            OutputVariant::new(Some("feed"), "talk.blade.xml"),
            OutputVariant::new(Some("amp"), "talk.amp.html"),
        ]);
        let permalink = Permalink::keyed([
            ("web", Permalink::from("talks/{-title}")),
            ("feed", Permalink::from("talks/{-title}/feed")),
        ]);

        let links = pretty().resolve_all(&permalink, &item);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].template_key.as_deref(), Some("web"));
        assert_eq!(url(&links[0].link), "/talks/intro-talk/");
        assert_eq!(url(&links[1].link), "/talks/intro-talk/feed.xml");
        assert_eq!(links[1].view, "talk.blade.xml");
        assert_eq!(links[2].link, Link::Suppressed);
    }

    #[test]
    fn test_resolve_all_single_view() {
        let mut item = page("posts", "hello", json!({}));
        item.apply_collection(&Default::default());
        let links = pretty().resolve_all(&Permalink::Absent, &item);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].template_key, None);
        assert_eq!(url(&links[0].link), "/posts/hello/");
    }

    #[test]
    fn test_underscore_slug_option() {
        let options = ResolveOptions {
            format: String::new(),
            slug: SlugOptions::default().with_separator('_'),
            ..ResolveOptions::default()
        };
        let resolver = PermalinkResolver::new(&BasicOutputPaths, &PathExtension, options);
        let item = page("Blog Posts", "My Item", json!({}));
        let link = resolver.resolve_one(&Permalink::Absent, &item, "", None);
        assert_eq!(url(&link), "/blog_posts/my_item");
    }

    #[test]
    fn test_resolver_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PermalinkResolver<'static>>();
        assert_send_sync::<Page>();
    }
}
