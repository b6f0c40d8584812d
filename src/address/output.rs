//! The two naming services.

use std::path::{Path, PathBuf};

use super::OutputPathResolver;

/// Directory-style URLs: `/blog/hello/` written as `blog/hello/index.html`.
///
/// Only `html` output gets a directory; other formats and basenames that
/// already carry an extension are plain files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyOutputPaths;

/// File URLs: `/blog/hello.html` written as `blog/hello.html`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicOutputPaths;

impl OutputPathResolver for PrettyOutputPaths {
    fn link(&self, dir: &str, name: &str, format: &str) -> String {
        let dir = dir_prefix(dir);
        match page_name(name, format) {
            Some("index" | "") => format!("{dir}/"),
            Some(name) => format!("{dir}/{name}/"),
            None => format!("{dir}/{}", file_name(name, format)),
        }
    }

    fn output_file(&self, dir: &str, name: &str, format: &str) -> PathBuf {
        let dir = PathBuf::from(dir_prefix(dir).trim_start_matches('/'));
        match page_name(name, format) {
            Some("index" | "") => dir.join("index.html"),
            Some(name) => dir.join(name).join("index.html"),
            None => dir.join(file_name(name, format)),
        }
    }
}

impl OutputPathResolver for BasicOutputPaths {
    fn link(&self, dir: &str, name: &str, format: &str) -> String {
        format!("{}/{}", dir_prefix(dir), file_name(name, format))
    }

    fn output_file(&self, dir: &str, name: &str, format: &str) -> PathBuf {
        PathBuf::from(dir_prefix(dir).trim_start_matches('/')).join(file_name(name, format))
    }
}

/// `/blog` for `/blog/`, `blog` or `./blog`; empty for the root.
fn dir_prefix(dir: &str) -> String {
    let trimmed = dir.trim_matches(['/', '.']);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Basename served as a directory, if it is one.
fn page_name<'a>(name: &'a str, format: &str) -> Option<&'a str> {
    (format == "html" && !has_extension(name)).then_some(name)
}

/// Basename with the format extension, unless it already has one.
fn file_name(name: &str, format: &str) -> String {
    if has_extension(name) || format.is_empty() {
        name.to_owned()
    } else {
        format!("{name}.{format}")
    }
}

fn has_extension(name: &str) -> bool {
    Path::new(name).extension().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_page() {
        let paths = PrettyOutputPaths;
        assert_eq!(paths.link("/blog", "hello", "html"), "/blog/hello/");
        assert_eq!(
            paths.output_file("/blog", "hello", "html"),
            PathBuf::from("blog/hello/index.html")
        );
    }

    #[test]
    fn test_pretty_top_level() {
        let paths = PrettyOutputPaths;
        assert_eq!(paths.link("/", "about", "html"), "/about/");
        assert_eq!(
            paths.output_file("/", "about", "html"),
            PathBuf::from("about/index.html")
        );
    }

    #[test]
    fn test_pretty_index_collapses() {
        let paths = PrettyOutputPaths;
        assert_eq!(paths.link("/docs", "index", "html"), "/docs/");
        assert_eq!(
            paths.output_file("/docs", "index", "html"),
            PathBuf::from("docs/index.html")
        );
        assert_eq!(paths.link("/", "index", "html"), "/");
        assert_eq!(paths.output_file("/", "index", "html"), PathBuf::from("index.html"));
    }

    #[test]
    fn test_pretty_file_with_extension() {
        let paths = PrettyOutputPaths;
        assert_eq!(paths.link("/blog", "feed.xml", "html"), "/blog/feed.xml");
        assert_eq!(
            paths.output_file("/blog", "feed.xml", "html"),
            PathBuf::from("blog/feed.xml")
        );
    }

    #[test]
    fn test_pretty_other_format() {
        let paths = PrettyOutputPaths;
        assert_eq!(paths.link("/api", "posts", "json"), "/api/posts.json");
        assert_eq!(
            paths.output_file("/api", "posts", "json"),
            PathBuf::from("api/posts.json")
        );
    }

    #[test]
    fn test_basic() {
        let paths = BasicOutputPaths;
        assert_eq!(paths.link("/blog", "hello", "html"), "/blog/hello.html");
        assert_eq!(paths.link("/", "hello", "html"), "/hello.html");
        assert_eq!(paths.link("/blog", "feed.xml", "html"), "/blog/feed.xml");
        assert_eq!(paths.link("/blog", "hello", ""), "/blog/hello");
        assert_eq!(
            paths.output_file("/blog", "hello", "html"),
            PathBuf::from("blog/hello.html")
        );
    }

    #[test]
    fn test_relative_dir() {
        assert_eq!(BasicOutputPaths.link(".", "hello", "html"), "/hello.html");
        assert_eq!(PrettyOutputPaths.link("blog/", "hello", "html"), "/blog/hello/");
    }
}
