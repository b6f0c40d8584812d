//! Output naming: where a resolved permalink is served and written.
//!
//! The permalink resolver produces a normalized path (`/blog/hello`) and
//! hands its directory and basename to an [`OutputPathResolver`]:
//!
//! ```text
//!                 PrettyOutputPaths            BasicOutputPaths
//! /blog/hello     /blog/hello/                 /blog/hello.html
//!                 blog/hello/index.html        blog/hello.html
//! /blog/feed.xml  /blog/feed.xml               /blog/feed.xml
//!                 blog/feed.xml                blog/feed.xml
//! ```
//!
//! Output files are relative to the output directory.

mod output;
mod view;

pub use output::{BasicOutputPaths, PrettyOutputPaths};
pub use view::PathExtension;

use std::path::PathBuf;

/// Naming service turning a directory + basename into a link and a file.
pub trait OutputPathResolver: Send + Sync {
    /// Link the variant is served at.
    fn link(&self, dir: &str, name: &str, format: &str) -> String;

    /// File the variant is written to, relative to the output directory.
    fn output_file(&self, dir: &str, name: &str, format: &str) -> PathBuf;
}

/// Native extension of a view (`post.blade.xml` → `xml`).
pub trait ViewExtension: Send + Sync {
    fn extension(&self, view: &str) -> String;
}

/// Naming service selected by `[build] pretty`.
pub fn output_paths(pretty: bool) -> Box<dyn OutputPathResolver> {
    if pretty {
        Box::new(PrettyOutputPaths)
    } else {
        Box::new(BasicOutputPaths)
    }
}
