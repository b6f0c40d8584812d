//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`route`]: permalink cleaning (`clean_input_path`, `clean_output_path`, `split_link`)
//! - [`slug`]: URL slugification (`slugify`, `SlugOptions`)

pub mod route;
pub mod slug;

pub use route::{clean_input_path, clean_output_path, normalize, split_link};
pub use slug::{SlugOptions, slugify};
