//! The per-call cookie jar.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Cookie name to value mapping, accumulated across the redirects of one call.
///
/// A jar is owned by exactly one request. Callers hand in a jar by reference
/// and the client works on its own copy, so the caller's jar is never
/// changed by a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: BTreeMap<String, String>,
}

impl CookieJar {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self {
            cookies: BTreeMap::new(),
        }
    }

    /// Sets a cookie, returning the previous value.
    pub fn insert(&mut self, name: &str, value: &str) -> Option<String> {
        self.cookies.insert(String::from(name), String::from(value))
    }

    /// Value of cookie `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Removes cookie `name`.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.cookies.remove(name)
    }

    /// Merges cookies into the jar; later values overwrite same-named ones.
    pub fn merge<'a, I>(&mut self, cookies: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in cookies {
            self.insert(name, value);
        }
    }

    /// Empties the jar.
    pub fn clear(&mut self) {
        self.cookies.clear();
    }

    /// Number of cookies.
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Whether the jar is empty.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookies.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the jar as a `Cookie` request header value: `a=1; b=2`.
    ///
    /// Returns `None` for an empty jar.
    pub fn header_value(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let len = self
            .cookies
            .iter()
            .map(|(k, v)| k.len() + v.len() + 1)
            .sum::<usize>()
            + 2 * (self.cookies.len() - 1);
        let mut out = String::with_capacity(len);
        for (name, value) in &self.cookies {
            if !out.is_empty() {
                out.push_str("; ");
            }
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        Some(out)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for CookieJar {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut jar = CookieJar::new();
        jar.merge(iter);
        jar
    }
}
