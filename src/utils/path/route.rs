//! Permalink path normalization.
//!
//! Two cleaning passes:
//! - input: user-authored templates and callable results, before tokens and
//!   suffixes are applied
//! - output: fully assembled paths, before they reach the naming service
//!
//! Both guarantee exactly one leading `/` and no trailing `/` or `.`.

/// Strip leading/trailing `/` and `.`, then put back a single leading `/`.
///
/// # Examples
/// ```
/// use tola_permalink::utils::path::route::clean_input_path;
/// assert_eq!(clean_input_path("blog/posts/"), "/blog/posts");
/// assert_eq!(clean_input_path("./blog/."), "/blog");
/// assert_eq!(clean_input_path(""), "/");
/// ```
#[inline]
pub fn clean_input_path(path: &str) -> String {
    ensure_slash_at_beginning_only(path)
}

/// Collapse `//+` runs into `/`, then clean like [`clean_input_path`].
///
/// # Examples
/// ```
/// use tola_permalink::utils::path::route::clean_output_path;
/// assert_eq!(clean_output_path("/a//b"), "/a/b");
/// assert_eq!(clean_output_path("//blog///hello/."), "/blog/hello");
/// ```
pub fn clean_output_path(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(c);
    }
    ensure_slash_at_beginning_only(&collapsed)
}

/// Final normalization applied to every produced path. Idempotent.
#[inline]
pub fn normalize(path: &str) -> String {
    clean_output_path(path)
}

#[inline]
fn ensure_slash_at_beginning_only(path: &str) -> String {
    format!("/{}", path.trim_matches(['/', '.']))
}

/// Split a normalized path into `(directory, basename)`.
///
/// Mirrors `dirname`/`basename`: the directory of a top-level entry is `/`.
///
/// # Examples
/// ```
/// use tola_permalink::utils::path::route::split_link;
/// assert_eq!(split_link("/blog/2024/hello"), ("/blog/2024", "hello"));
/// assert_eq!(split_link("/hello"), ("/", "hello"));
/// assert_eq!(split_link("/"), ("/", ""));
/// ```
pub fn split_link(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(0) => ("/", &path[1..]),
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => (".", path),
    }
}
