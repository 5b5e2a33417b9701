//! An ordered header map with case-insensitive names.

use alloc::string::String;
use alloc::vec::Vec;

/// HTTP headers, kept in insertion order, with names compared ignoring ASCII case.
///
/// The map stores one value per name: inserting a name that is already
/// present (in any casing) replaces the value in place and keeps the
/// original spelling of the name.
///
/// ```rust
/// use librequests::network::application::http::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("Content-Type", "text/plain");
/// headers.insert("content-type", "application/json");
/// assert_eq!(headers.len(), 1);
/// assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the header `name`, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    /// Whether a header `name` is present, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Sets `name` to `value`, replacing every existing value for that name.
    ///
    /// Returns the first previous value.
    pub fn insert(&mut self, name: &str, value: &str) -> Option<String> {
        match self.position(name) {
            Some(i) => {
                let previous = core::mem::replace(&mut self.entries[i].1, String::from(value));
                let mut index = 0;
                self.entries.retain(|(key, _)| {
                    let keep = index <= i || !key.eq_ignore_ascii_case(name);
                    index += 1;
                    keep
                });
                Some(previous)
            }
            None => {
                self.entries.push((String::from(name), String::from(value)));
                None
            }
        }
    }

    /// Appends a header without replacing an existing one.
    ///
    /// Used when reading responses, where a name can legitimately repeat.
    /// [`get`](Self::get) returns the first occurrence.
    pub fn append(&mut self, name: &str, value: &str) {
        self.entries.push((String::from(name), String::from(value)));
    }

    /// Removes every header named `name`, in any casing.
    ///
    /// Returns the first removed value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let mut removed = None;
        self.entries.retain_mut(|(key, value)| {
            if key.eq_ignore_ascii_case(name) {
                if removed.is_none() {
                    removed = Some(core::mem::take(value));
                }
                false
            } else {
                true
            }
        });
        removed
    }

    /// All values for `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key.eq_ignore_ascii_case(name))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HeaderMap::new();
        for (name, value) in iter {
            map.insert(name.as_ref(), value.as_ref());
        }
        map
    }
}
