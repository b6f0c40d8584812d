//! Permalink resolution for static site collections.
//!
//! Turns per-collection permalink templates like `blog/{date|Y/m}/{-title}`
//! into the link and output file of every rendered variant of an item.
//!
//! ```ignore
//! let output = address::output_paths(true);
//! let resolver = PermalinkResolver::new(output.as_ref(), &PathExtension, options);
//! for variant in resolver.resolve_all(page.permalink(), &page) { ... }
//! ```

pub mod address;
pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod page;
pub mod permalink;
pub mod utils;
