//! Recomposing URLs, resolving references and removing dot-segments.

use super::split::{SplitUrl, split_url};
use alloc::string::String;
use alloc::vec::Vec;

/// Schemes that always carry an authority, even an empty one.
const AUTHORITY_SCHEMES: &[&str] = &["file", "ftp", "http", "https", "ws", "wss"];

/// Joins URL components back into a URL string.
///
/// `//authority` is emitted when the authority is non-empty or the scheme is
/// one that always has one; `?query` and `#fragment` only when non-empty.
///
/// ```rust
/// use librequests::url::unsplit_url;
///
/// assert_eq!(unsplit_url("http", "a", "b/c", "q", ""), "http://a/b/c?q");
/// assert_eq!(unsplit_url("mailto", "", "me@example.com", "", ""), "mailto:me@example.com");
/// ```
pub fn unsplit_url(scheme: &str, authority: &str, path: &str, query: &str, fragment: &str) -> String {
    let with_authority = !authority.is_empty() || AUTHORITY_SCHEMES.contains(&scheme);
    let needs_slash = with_authority && !path.is_empty() && !path.starts_with('/');

    let mut len = path.len();
    if !scheme.is_empty() {
        len += scheme.len() + 1;
    }
    if with_authority {
        len += 2 + authority.len() + usize::from(needs_slash);
    }
    if !query.is_empty() {
        len += 1 + query.len();
    }
    if !fragment.is_empty() {
        len += 1 + fragment.len();
    }

    let mut url = String::with_capacity(len);
    if !scheme.is_empty() {
        url.push_str(scheme);
        url.push(':');
    }
    if with_authority {
        url.push_str("//");
        url.push_str(authority);
        if needs_slash {
            url.push('/');
        }
    }
    url.push_str(path);
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    if !fragment.is_empty() {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

/// Recomposes a [`SplitUrl`].
pub fn unsplit(parts: &SplitUrl<'_>) -> String {
    unsplit_url(&parts.scheme, parts.authority, parts.path, parts.query, parts.fragment)
}

/// Removes `.` and `..` segments from a path.
///
/// Leading slashes are preserved as written; runs of slashes elsewhere
/// collapse. A `..` that would climb above the root of an absolute path is
/// dropped, while a relative path keeps unresolved `..` segments.
///
/// A path that reduces to nothing stays empty: `.` and `./` both normalize
/// to `""`, never to `/`.
///
/// ```rust
/// use librequests::url::normalize_path;
///
/// assert_eq!(normalize_path("/a/b/../../c"), "/c");
/// assert_eq!(normalize_path("a/../../b"), "../b");
/// assert_eq!(normalize_path("/a/./b/"), "/a/b/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let leading = path.len() - path.trim_start_matches('/').len();
    let absolute = leading > 0;

    let mut stack: Vec<&str> = Vec::new();
    for segment in path[leading..].split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if stack.last().is_some_and(|last| *last != "..") {
                    stack.pop();
                } else if !absolute {
                    stack.push("..");
                }
            }
            _ => stack.push(segment),
        }
    }

    let trailing = path == "."
        || path == ".."
        || path.ends_with('/')
        || path.ends_with("/.")
        || path.ends_with("/..");

    let body: usize = stack.iter().map(|s| s.len()).sum::<usize>() + stack.len().saturating_sub(1);
    let mut out = String::with_capacity(leading + body + 1);
    for _ in 0..leading {
        out.push('/');
    }
    for (i, segment) in stack.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.push_str(segment);
    }
    if trailing && !out.is_empty() && !out.ends_with('/') {
        out.push('/');
    }
    out
}

/// Resolves `reference` against `base`.
///
/// A reference with its own scheme is returned unchanged. Otherwise the
/// result takes the base scheme and, unless the reference names its own
/// authority, the base authority; the path is merged and dot-segments
/// removed. An empty reference path keeps the base path and, when the
/// reference has no query, the base query.
///
/// ```rust
/// use librequests::url::join_url;
///
/// let base = "http://a/b/c/d;p?q";
/// assert_eq!(join_url(base, "g"), "http://a/b/c/g");
/// assert_eq!(join_url(base, "../../../g"), "http://a/g");
/// assert_eq!(join_url(base, "?y"), "http://a/b/c/d;p?y");
/// assert_eq!(join_url(base, "//other/x"), "http://other/x");
/// ```
pub fn join_url(base: &str, reference: &str) -> String {
    if base.is_empty() {
        return String::from(reference);
    }

    let r = split_url(reference, "", true);
    if !r.scheme.is_empty() {
        return String::from(reference);
    }

    let b = split_url(base, "", true);
    let reference_has_authority = !r.authority.is_empty()
        || reference
            .trim_start_matches(|c: char| c <= ' ')
            .starts_with("//");

    if reference_has_authority {
        let path = normalize_path(r.path);
        return unsplit_url(&b.scheme, r.authority, &path, r.query, r.fragment);
    }

    if r.path.is_empty() {
        let query = if r.query.is_empty() { b.query } else { r.query };
        return unsplit_url(&b.scheme, b.authority, b.path, query, r.fragment);
    }

    let path = if r.path.starts_with('/') {
        normalize_path(r.path)
    } else {
        normalize_path(&merge(&b, r.path))
    };
    unsplit_url(&b.scheme, b.authority, &path, r.query, r.fragment)
}

/// Appends a relative path to the directory of the base path.
fn merge(base: &SplitUrl<'_>, relative: &str) -> String {
    if !base.authority.is_empty() && base.path.is_empty() {
        let mut merged = String::with_capacity(1 + relative.len());
        merged.push('/');
        merged.push_str(relative);
        return merged;
    }

    let directory = match base.path.rfind('/') {
        Some(slash) => &base.path[..=slash],
        None => "",
    };
    let mut merged = String::with_capacity(directory.len() + relative.len());
    merged.push_str(directory);
    merged.push_str(relative);
    merged
}
