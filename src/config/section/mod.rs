//! Configuration section definitions.
//!
//! Each module corresponds to a section in `permalink.toml`:
//!
//! | Module       | TOML Section          | Purpose                                 |
//! |--------------|-----------------------|-----------------------------------------|
//! | `build`      | `[build]`             | Output format, pretty URLs, bare views  |
//! | `slug`       | `[build.slug]`        | Slug separator and transliteration      |
//! | `site`       | `[site]`              | Site URL for absolute links             |
//! | `collection` | `[collections.<name>]`| Per-collection permalink and views      |

pub mod build;
pub mod collection;
pub mod site;
pub mod slug;

pub use build::BuildSectionConfig;
pub use collection::CollectionConfig;
pub use site::SiteSectionConfig;
pub use slug::{SlugConfig, SlugSeparator};
