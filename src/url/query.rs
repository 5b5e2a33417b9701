//! `key=value&key=value` query strings, built on the percent codec.

use super::error::DecodeError;
use super::percent::{SafeSet, quote_plus, unquote_plus};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Encodes pairs as a form query string.
///
/// Keys and values are encoded with [`quote_plus`]; pairs with an empty key
/// are skipped.
///
/// ```rust
/// use librequests::url::{encode_query, SafeSet};
///
/// let qs = encode_query([("q", "rust lang"), ("page", "2")], &SafeSet::UNRESERVED);
/// assert_eq!(qs, "q=rust+lang&page=2");
/// ```
pub fn encode_query<I, K, V>(pairs: I, safe: &SafeSet) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        push_pair(&mut out, key.as_ref(), value.as_ref(), safe);
    }
    out
}

/// Encodes a multi-value mapping, repeating the key once per value.
///
/// ```rust
/// use librequests::url::{encode_query_seq, SafeSet};
///
/// let qs = encode_query_seq([("tag", ["a", "b"])], &SafeSet::UNRESERVED);
/// assert_eq!(qs, "tag=a&tag=b");
/// ```
pub fn encode_query_seq<I, K, VS, V>(entries: I, safe: &SafeSet) -> String
where
    I: IntoIterator<Item = (K, VS)>,
    K: AsRef<str>,
    VS: IntoIterator<Item = V>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, values) in entries {
        for value in values {
            push_pair(&mut out, key.as_ref(), value.as_ref(), safe);
        }
    }
    out
}

fn push_pair(out: &mut String, key: &str, value: &str, safe: &SafeSet) {
    if key.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push('&');
    }
    out.push_str(&quote_plus(key, safe));
    out.push('=');
    out.push_str(&quote_plus(value, safe));
}

/// Decodes a query string into `(key, value)` pairs in encounter order.
///
/// A segment without `=`, or with an empty value, is kept (with an empty
/// value) only when `keep_blank` is set. Segments with an empty key are
/// always dropped.
///
/// ```rust
/// use librequests::url::decode_query_pairs;
///
/// let pairs = decode_query_pairs("a=1&b=&c", true).unwrap();
/// assert_eq!(pairs.len(), 3);
/// assert_eq!(decode_query_pairs("a=1&b=&c", false).unwrap().len(), 1);
/// ```
pub fn decode_query_pairs(query: &str, keep_blank: bool) -> Result<Vec<(String, String)>, DecodeError> {
    let mut pairs = Vec::new();
    for_each_pair(query, keep_blank, |key, value| pairs.push((key, value)))?;
    Ok(pairs)
}

/// Decodes a query string into a mapping where the first value for a key wins.
pub fn decode_query(query: &str, keep_blank: bool) -> Result<BTreeMap<String, String>, DecodeError> {
    let mut map = BTreeMap::new();
    for_each_pair(query, keep_blank, |key, value| {
        map.entry(key).or_insert(value);
    })?;
    Ok(map)
}

/// Decodes a query string into a mapping from each key to all of its values,
/// in the order they appear.
pub fn decode_query_multi(query: &str, keep_blank: bool) -> Result<BTreeMap<String, Vec<String>>, DecodeError> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for_each_pair(query, keep_blank, |key, value| {
        map.entry(key).or_default().push(value);
    })?;
    Ok(map)
}

fn for_each_pair<F>(query: &str, keep_blank: bool, mut emit: F) -> Result<(), DecodeError>
where
    F: FnMut(String, String),
{
    for segment in query.split('&') {
        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (key, value),
            None => (segment, ""),
        };
        if key.is_empty() || (value.is_empty() && !keep_blank) {
            continue;
        }
        let key = unquote_plus(key)?.into_owned();
        let value = unquote_plus(value)?.into_owned();
        emit(key, value);
    }
    Ok(())
}
