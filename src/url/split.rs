//! Splitting URLs and authorities into their components.
//!
//! Every component borrows from the input. The only values that may be
//! allocated are the scheme and host, and only when they contain uppercase
//! ASCII that has to be lowered.

use alloc::borrow::Cow;

/// The five components of a URL.
///
/// Absent components are empty strings. The scheme is lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitUrl<'a> {
    /// The scheme, without the trailing `:`.
    pub scheme: Cow<'a, str>,
    /// The raw authority, without the leading `//`.
    pub authority: &'a str,
    /// The path, including its leading `/` when present.
    pub path: &'a str,
    /// The query, without the leading `?`.
    pub query: &'a str,
    /// The fragment, without the leading `#`.
    pub fragment: &'a str,
}

/// The components of an authority: `user:password@host:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authority<'a> {
    /// User name, present whenever the authority contains an `@`.
    pub username: Option<&'a str>,
    /// Password, present only when the user info contains a `:`.
    pub password: Option<&'a str>,
    /// Host, lower-cased unless it is an IPv6 literal. IPv6 literals are
    /// returned without their brackets.
    pub host: Option<Cow<'a, str>>,
    /// Port, absent when missing, non-numeric, or out of range.
    pub port: Option<u16>,
}

/// Splits `url` into scheme, authority, path, query and fragment.
///
/// `default_scheme` is used when the URL carries none. When `allow_fragments`
/// is false a `#` is left in the path or query.
///
/// ```rust
/// use librequests::url::split_url;
///
/// let parts = split_url("HTTPS://example.com/a?x=1#top", "", true);
/// assert_eq!(parts.scheme, "https");
/// assert_eq!(parts.authority, "example.com");
/// assert_eq!(parts.path, "/a");
/// assert_eq!(parts.query, "x=1");
/// assert_eq!(parts.fragment, "top");
/// ```
pub fn split_url<'a>(url: &'a str, default_scheme: &'a str, allow_fragments: bool) -> SplitUrl<'a> {
    let mut rest = url.trim_start_matches(|c: char| c <= ' ');

    let mut fragment = "";
    if allow_fragments {
        if let Some((head, tail)) = rest.split_once('#') {
            rest = head;
            fragment = tail;
        }
    }

    let mut query = "";
    if let Some((head, tail)) = rest.split_once('?') {
        rest = head;
        query = tail;
    }

    let mut scheme = Cow::Borrowed(default_scheme);
    if !rest.starts_with('/') {
        if let Some(colon) = rest.find(':') {
            let candidate = &rest[..colon];
            if is_scheme(candidate) {
                scheme = lower(candidate);
                rest = &rest[colon + 1..];
            }
        }
    }

    let (authority, path) = split_authority_path(rest);

    SplitUrl {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}

/// Splits an authority into user name, password, host and port.
///
/// Never fails: malformed pieces come back absent.
///
/// ```rust
/// use librequests::url::split_authority;
///
/// let auth = split_authority("user:p@ss@[::1]:8443");
/// assert_eq!(auth.username, Some("user"));
/// assert_eq!(auth.password, Some("p@ss"));
/// assert_eq!(auth.host.as_deref(), Some("::1"));
/// assert_eq!(auth.port, Some(8443));
/// ```
pub fn split_authority(authority: &str) -> Authority<'_> {
    let (username, password, hostport) = match authority.rsplit_once('@') {
        Some((userinfo, hostport)) => match userinfo.split_once(':') {
            Some((user, pass)) => (Some(user), Some(pass), hostport),
            None => (Some(userinfo), None, hostport),
        },
        None => (None, None, authority),
    };

    let (host, port) = if let Some(literal) = hostport.strip_prefix('[') {
        match literal.find(']') {
            Some(close) => {
                let host = &literal[..close];
                let port = literal[close + 1..].strip_prefix(':').and_then(parse_port);
                (non_empty(host).map(Cow::Borrowed), port)
            }
            None => (non_empty(hostport).map(Cow::Borrowed), None),
        }
    } else {
        let (host, port) = match hostport.rsplit_once(':') {
            Some((host, port)) => (host, parse_port(port)),
            None => (hostport, None),
        };
        (non_empty(host).map(lower), port)
    };

    Authority {
        username,
        password,
        host,
        port,
    }
}

/// Splits off a leading `//authority`, returning `(authority, path)`.
fn split_authority_path(rest: &str) -> (&str, &str) {
    match rest.strip_prefix("//") {
        Some(after) => match after.find('/') {
            Some(slash) => (&after[..slash], &after[slash..]),
            None => (after, ""),
        },
        None => ("", rest),
    }
}

fn is_scheme(candidate: &str) -> bool {
    candidate
        .as_bytes()
        .first()
        .is_some_and(|b| b.is_ascii_alphabetic())
        && !candidate.contains('/')
}

fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

pub(crate) fn lower(s: &str) -> Cow<'_, str> {
    if s.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(s.to_ascii_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}
