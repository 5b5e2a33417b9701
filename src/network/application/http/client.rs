use super::cookies::CookieJar;
use super::error::Error;
use super::headers::HeaderMap;
use super::response::Response;
use super::transport::{Endpoint, HttpConnection, Scheme, Transport, WireRequest};
use crate::url::{SafeSet, encode_query, join_url, split_authority, split_url, unquote};
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use base64ct::{Base64, Encoding};
use core::time::Duration;
use serde::Serialize;

/// Redirects followed when redirects are simply switched on.
pub const DEFAULT_REDIRECTS: u8 = 5;

/// Largest JSON body [`Options::json`] can serialize.
pub const MAX_JSON_BODY_LEN: usize = 1024;

/// The body type of responses produced by transport `T`.
pub type BodyOf<T> = <<T as Transport>::Connection as HttpConnection>::Body;

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

impl Method {
    /// The method name as sent on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    /// Whether requests with this method never carry a body.
    pub fn is_bodyless(&self) -> bool {
        matches!(self, Method::Get | Method::Head)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Method {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// How many redirects a call may follow.
///
/// `true` converts to [`DEFAULT_REDIRECTS`], `false` to zero, and a number is
/// taken as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirects(u8);

impl Redirects {
    /// Never follow redirects.
    pub const NONE: Redirects = Redirects(0);

    /// The redirect budget.
    pub fn limit(&self) -> u8 {
        self.0
    }
}

impl Default for Redirects {
    fn default() -> Self {
        Redirects(DEFAULT_REDIRECTS)
    }
}

impl From<bool> for Redirects {
    fn from(follow: bool) -> Self {
        if follow { Redirects::default() } else { Redirects::NONE }
    }
}

impl From<u8> for Redirects {
    fn from(limit: u8) -> Self {
        Redirects(limit)
    }
}

#[derive(Debug, Clone)]
enum JsonBody {
    Encoded(Vec<u8>),
    Failed,
}

/// Per-call request options.
///
/// ```rust
/// use core::time::Duration;
/// use librequests::network::application::http::{HeaderMap, Options};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("Accept", "application/json");
///
/// let options = Options::new()
///     .params(&[("page", "2")])
///     .headers(&headers)
///     .auth("user", "secret")
///     .timeout(Duration::from_secs(5))
///     .redirects(false);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Options<'a> {
    data: Option<&'a [u8]>,
    json: Option<JsonBody>,
    params: &'a [(&'a str, &'a str)],
    headers: Option<&'a HeaderMap>,
    cookies: Option<&'a CookieJar>,
    auth: Option<(&'a str, &'a str)>,
    stream: bool,
    timeout: Option<Duration>,
    redirects: Redirects,
}

impl<'a> Options<'a> {
    /// Options for a plain request: no body, redirects followed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw request body. Takes precedence over [`json`](Self::json).
    pub fn data(mut self, data: &'a [u8]) -> Self {
        self.data = Some(data);
        self
    }

    /// A body serialized as JSON, sent with `Content-Type: application/json`
    /// unless the headers already name a content type.
    ///
    /// A value that does not serialize within [`MAX_JSON_BODY_LEN`] bytes
    /// fails the request with [`Error::Serialize`].
    pub fn json<T: Serialize>(mut self, value: &T) -> Self {
        let mut buf = [0u8; MAX_JSON_BODY_LEN];
        self.json = Some(match serde_json_core::to_slice(value, &mut buf) {
            Ok(len) => JsonBody::Encoded(buf[..len].to_vec()),
            Err(_) => JsonBody::Failed,
        });
        self
    }

    /// Query parameters appended to the URL.
    pub fn params(mut self, params: &'a [(&'a str, &'a str)]) -> Self {
        self.params = params;
        self
    }

    /// Request headers. The caller's map is never modified.
    pub fn headers(mut self, headers: &'a HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Cookies to start the call's jar with. The caller's jar is never
    /// modified.
    pub fn cookies(mut self, cookies: &'a CookieJar) -> Self {
        self.cookies = Some(cookies);
        self
    }

    /// Basic authentication credentials, used unless the URL carries its own.
    pub fn auth(mut self, username: &'a str, password: &'a str) -> Self {
        self.auth = Some((username, password));
        self
    }

    /// Leave the body of the final response unread.
    pub fn stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Connect and read timeout, passed to the transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Redirect budget; accepts a `bool` or a `u8`.
    pub fn redirects(mut self, redirects: impl Into<Redirects>) -> Self {
        self.redirects = redirects.into();
        self
    }
}

/// A requests-style HTTP client.
///
/// Each call runs its own redirect loop over fresh connections from the
/// transport; nothing is shared between calls except the transport itself.
#[derive(Debug)]
pub struct Client<T: Transport> {
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Sends a request, following redirects.
    ///
    /// Redirects (301, 302, 303, 307, 308 with a `Location`) are followed
    /// until the budget runs out, at which point the last response is
    /// returned. Moving to another scheme, host or port drops the cookie jar,
    /// the credentials from [`Options::auth`] and any `Authorization` header.
    /// A 303, or a 301/302 answering a method other than `GET`/`HEAD`, is
    /// retried as `GET` without body and `Content-Type`.
    ///
    /// Unless [`Options::stream`] is set, the final body is read and the
    /// connection closed before returning.
    pub fn request(
        &mut self,
        method: Method,
        url: &str,
        options: Options<'_>,
    ) -> Result<Response<BodyOf<T>>, Error<T::Error>> {
        let mut state = RequestState::prepare::<T::Error>(method, url, &options)?;

        loop {
            let mut response = self.send(&state, options.timeout)?;
            state.cookies.merge(response.cookies());

            let status = response.status_code();
            if state.redirects > 0 && is_redirect(status) {
                let next = response
                    .header("Location")
                    .filter(|location| !location.is_empty())
                    .map(|location| join_url(&state.url, location));
                if let Some(next) = next {
                    response.close().map_err(Error::Transport)?;
                    state.redirect(status, next);
                    continue;
                }
            }

            if !options.stream {
                response.content().map_err(Error::Transport)?;
            }
            return Ok(response);
        }
    }

    /// Sends a `GET` request.
    pub fn get(&mut self, url: &str, options: Options<'_>) -> Result<Response<BodyOf<T>>, Error<T::Error>> {
        self.request(Method::Get, url, options)
    }

    /// Sends a `POST` request.
    pub fn post(&mut self, url: &str, options: Options<'_>) -> Result<Response<BodyOf<T>>, Error<T::Error>> {
        self.request(Method::Post, url, options)
    }

    /// Sends a `PUT` request.
    pub fn put(&mut self, url: &str, options: Options<'_>) -> Result<Response<BodyOf<T>>, Error<T::Error>> {
        self.request(Method::Put, url, options)
    }

    /// Sends a `PATCH` request.
    pub fn patch(&mut self, url: &str, options: Options<'_>) -> Result<Response<BodyOf<T>>, Error<T::Error>> {
        self.request(Method::Patch, url, options)
    }

    /// Sends a `DELETE` request.
    pub fn delete(&mut self, url: &str, options: Options<'_>) -> Result<Response<BodyOf<T>>, Error<T::Error>> {
        self.request(Method::Delete, url, options)
    }

    /// Sends a `HEAD` request.
    pub fn head(&mut self, url: &str, options: Options<'_>) -> Result<Response<BodyOf<T>>, Error<T::Error>> {
        self.request(Method::Head, url, options)
    }

    fn send(
        &mut self,
        state: &RequestState<'_>,
        timeout: Option<Duration>,
    ) -> Result<Response<BodyOf<T>>, Error<T::Error>> {
        let parts = split_url(&state.url, "", true);
        let scheme = Scheme::parse(&parts.scheme).ok_or(Error::UnsupportedScheme)?;
        let authority = split_authority(parts.authority);
        let host = authority.host.as_deref().ok_or(Error::MissingHost)?;

        let mut target = String::with_capacity(parts.path.len() + parts.query.len() + 1);
        target.push_str(parts.path);
        if !parts.query.is_empty() {
            target.push('?');
            target.push_str(parts.query);
        }

        let credentials = match (authority.username, state.auth) {
            (Some(username), _) => {
                let mut credentials = String::from(unquote(username)?);
                if let Some(password) = authority.password {
                    credentials.push(':');
                    credentials.push_str(&unquote(password)?);
                }
                Some(credentials)
            }
            (None, Some((username, password))) => {
                let mut credentials = String::with_capacity(username.len() + password.len() + 1);
                credentials.push_str(username);
                credentials.push(':');
                credentials.push_str(password);
                Some(credentials)
            }
            (None, None) => None,
        };

        let headers = match credentials {
            Some(credentials) => {
                let mut headers = state.headers.clone();
                let mut value = String::from("Basic ");
                value.push_str(&Base64::encode_string(credentials.as_bytes()));
                headers.insert("Authorization", &value);
                Cow::Owned(headers)
            }
            None => Cow::Borrowed(&state.headers),
        };

        let endpoint = Endpoint {
            scheme,
            host,
            port: authority.port,
        };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "http: {} {=str}://{=str}{=str}",
            state.method,
            scheme.as_str(),
            host,
            target.as_str()
        );

        let connection = self.transport.open(&endpoint, timeout).map_err(Error::Transport)?;
        let wire = connection
            .send(&WireRequest {
                method: state.method,
                target: &target,
                headers: &headers,
                body: state.body.as_deref(),
                cookies: &state.cookies,
            })
            .map_err(Error::Transport)?;

        Ok(Response::new(wire))
    }
}

/// The mutable state of one call. Owns its copies of headers and cookies.
struct RequestState<'a> {
    method: Method,
    url: String,
    headers: HeaderMap,
    cookies: CookieJar,
    body: Option<Cow<'a, [u8]>>,
    auth: Option<(&'a str, &'a str)>,
    redirects: u8,
}

impl<'a> RequestState<'a> {
    fn prepare<E>(method: Method, url: &str, options: &Options<'a>) -> Result<Self, Error<E>> {
        let mut headers = options.headers.cloned().unwrap_or_default();
        let cookies = options.cookies.cloned().unwrap_or_default();

        let body = match (options.data, &options.json) {
            (Some(data), _) => Some(Cow::Borrowed(data)),
            (None, Some(JsonBody::Encoded(json))) => {
                if !headers.contains("Content-Type") {
                    headers.insert("Content-Type", "application/json");
                }
                Some(Cow::Owned(json.clone()))
            }
            (None, Some(JsonBody::Failed)) => return Err(Error::Serialize),
            (None, None) => None,
        };

        let base = url.split_once('#').map_or(url, |(base, _)| base);
        let query = encode_query(options.params.iter().copied(), &SafeSet::UNRESERVED);
        let mut url = String::with_capacity(base.len() + query.len() + 1);
        url.push_str(base);
        if !query.is_empty() {
            url.push(if base.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }

        Ok(Self {
            method,
            url,
            headers,
            cookies,
            body,
            auth: options.auth,
            redirects: options.redirects.limit(),
        })
    }

    fn redirect(&mut self, status: u16, next: String) {
        if origin_changed(&self.url, &next) {
            #[cfg(feature = "defmt")]
            defmt::trace!("http: origin changed, dropping cookies and auth");
            self.cookies.clear();
            self.auth = None;
            self.headers.remove("Authorization");
        }

        if status == 303 || (matches!(status, 301 | 302) && !self.method.is_bodyless()) {
            #[cfg(feature = "defmt")]
            defmt::trace!("http: {} becomes GET after {=u16}", self.method, status);
            if self.method != Method::Head {
                self.method = Method::Get;
            }
            self.body = None;
            self.headers.remove("Content-Type");
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("http: redirect {=u16} to {=str}", status, next.as_str());
        self.redirects -= 1;
        self.url = next;
    }
}

fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 303 | 307 | 308)
}

fn origin_changed(current: &str, next: &str) -> bool {
    let current = split_url(current, "", true);
    let next = split_url(next, "", true);
    if current.scheme != next.scheme {
        return true;
    }
    let current = split_authority(current.authority);
    let next = split_authority(next.authority);
    current.host != next.host || current.port != next.port
}
