//! Item collection and batch resolution shared by the subcommands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, bail};
use jwalk::WalkDir;
use rayon::prelude::*;
use serde::Serialize;

use crate::address::{PathExtension, output_paths};
use crate::config::SiteConfig;
use crate::page::{ContentItem, Page, collection_from_path};
use crate::permalink::{Link, PermalinkResolver, VariantLink};

/// Extensions the item loaders understand.
const ITEM_EXTENSIONS: &[&str] = &["json", "toml", "md", "markdown"];

/// Resolved variants of one item file.
#[derive(Debug, Serialize)]
pub struct ItemReport {
    /// Source path, relative to the site root when inside it.
    pub source: String,
    pub collection: String,
    pub variants: Vec<VariantReport>,
}

/// One resolved variant, with its absolute URL when `[site] url` is set.
#[derive(Debug, Serialize)]
pub struct VariantReport {
    #[serde(flatten)]
    pub variant: VariantLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_url: Option<String>,
}

/// Outcome of resolving a batch: reports in input order, plus failures.
#[derive(Debug, Default)]
pub struct Batch {
    pub items: Vec<ItemReport>,
    pub failures: Vec<(PathBuf, anyhow::Error)>,
}

/// Expand CLI paths into item files.
///
/// `-` reads paths from stdin; directories are walked recursively.
pub fn collect_item_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    let mut files = Vec::new();
    for path in &paths {
        if path.is_file() {
            if !is_item_file(path) {
                bail!("Not a supported item file: {}", path.display());
            }
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(collect_dir_items(path));
        } else {
            bail!("Path not found: {}", path.display());
        }
    }

    Ok(files)
}

/// Read file paths from stdin, one per line
fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

/// Collect item files under `dir`, sorted by name within each directory.
fn collect_dir_items(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| is_item_file(path))
        .collect()
}

fn is_item_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| ITEM_EXTENSIONS.contains(&ext.as_str()))
}

/// Load an item with its collection defaults applied.
pub fn load_item(path: &Path, collection: Option<&str>, config: &SiteConfig) -> Result<Page> {
    let collection = match collection {
        Some(name) => name.to_owned(),
        None => collection_from_path(path).ok_or_else(|| {
            anyhow!(
                "cannot infer a collection for {}, pass --collection",
                path.display()
            )
        })?,
    };

    let mut page = Page::from_file(path, &collection)?;
    page.apply_collection(&config.collection(&collection));
    Ok(page)
}

/// Load and resolve every file in parallel.
pub fn resolve_files(files: &[PathBuf], collection: Option<&str>, config: &SiteConfig) -> Batch {
    let output = output_paths(config.build.pretty);
    let resolver = PermalinkResolver::new(output.as_ref(), &PathExtension, config.resolve_options());

    let results: Vec<_> = files
        .par_iter()
        .map(|file| {
            resolve_file(file, collection, config, &resolver).map_err(|e| (file.clone(), e))
        })
        .collect();

    let mut batch = Batch::default();
    for result in results {
        match result {
            Ok(item) => batch.items.push(item),
            Err(failure) => batch.failures.push(failure),
        }
    }
    batch
}

fn resolve_file(
    file: &Path,
    collection: Option<&str>,
    config: &SiteConfig,
    resolver: &PermalinkResolver<'_>,
) -> Result<ItemReport> {
    let page = load_item(file, collection, config)?;
    let source = display_path(file, config);

    let variants = resolver
        .resolve_all(page.permalink(), &page)
        .into_iter()
        .map(|variant| {
            if let Some(url) = variant.link.url() {
                crate::debug!("resolve"; "{} -> {}", source, url);
            }
            let absolute_url = variant.link.url().and_then(|url| config.site.absolute_url(url));
            VariantReport {
                variant,
                absolute_url,
            }
        })
        .collect();

    Ok(ItemReport {
        source,
        collection: page.collection_name().to_owned(),
        variants,
    })
}

/// Path for display, relative to the site root when inside it.
fn display_path(file: &Path, config: &SiteConfig) -> String {
    let absolute = std::path::absolute(file).unwrap_or_else(|_| file.to_path_buf());
    config.root_relative(absolute).display().to_string()
}

/// Format count with noun, handling pluralization
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", if count == 1 { "" } else { "s" })
}

impl VariantReport {
    pub fn link(&self) -> &Link {
        &self.variant.link
    }

    /// Label for text output: the template key, or `-` for single-view items.
    pub fn label(&self) -> &str {
        self.variant.template_key.as_deref().unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::config::test_parse_config;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn site(dir: &Path, content: &str) -> SiteConfig {
        let mut config = test_parse_config(content);
        config.root = dir.to_path_buf();
        config
    }

    #[test]
    fn test_collect_item_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "_posts/b.md", "");
        write(dir.path(), "_posts/a.json", "{}");
        write(dir.path(), "_posts/notes.txt", "");
        write(dir.path(), "_posts/nested/c.toml", "");

        let files = collect_item_files(&[dir.path().join("_posts")]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.json", "b.md", "c.toml"]);
    }

    #[test]
    fn test_collect_dir_items_depth_first_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "z.md", "");
        write(dir.path(), "m/b.json", "");
        write(dir.path(), "a.toml", "");
        write(dir.path(), "m/.DS_Store", "");

        let files = collect_dir_items(dir.path());
        let rel: Vec<_> = files
            .iter()
            .map(|f| f.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            [
                PathBuf::from("a.toml"),
                PathBuf::from("m/b.json"),
                PathBuf::from("z.md")
            ]
        );
    }

    #[test]
    fn test_collect_rejects_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let txt = write(dir.path(), "notes.txt", "");
        assert!(collect_item_files(&[txt]).is_err());
        assert!(collect_item_files(&[dir.path().join("missing.md")]).is_err());
    }

    #[test]
    fn test_load_item_infers_collection() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "_posts/hello.md", "---\ntitle: Hello\n---\n");
        let config = site(dir.path(), "[collections.posts]\npermalink = \"blog/{-title}\"");

        let page = load_item(&file, None, &config).unwrap();
        assert!(!page.permalink().is_empty());

        let loose = write(dir.path(), "hello.md", "");
        let config = site(Path::new("/"), "");
        assert!(load_item(&loose, Some("pages"), &config).is_ok());
    }

    #[test]
    fn test_resolve_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "_posts/hello.md", "---\ntitle: Hello World\n---\n");
        let bad = write(dir.path(), "_posts/broken.json", "{");
        let config = site(
            dir.path(),
            "[site]\nurl = \"https://example.com/docs\"\n\
             [collections.posts]\npermalink = \"blog/{-title}\"",
        );

        let batch = resolve_files(&[good, bad], None, &config);
        assert_eq!(batch.items.len(), 1);
        assert_eq!(batch.failures.len(), 1);

        let item = &batch.items[0];
        assert_eq!(item.collection, "posts");
        assert_eq!(item.source, Path::new("_posts/hello.md").display().to_string());
        let variant = &item.variants[0];
        assert_eq!(variant.label(), "-");
        assert_eq!(variant.link().url().unwrap().as_str(), "/blog/hello-world/");
        assert_eq!(
            variant.absolute_url.as_deref(),
            Some("https://example.com/docs/blog/hello-world/")
        );
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "file"), "0 files");
        assert_eq!(plural_count(1, "file"), "1 file");
    }
}
