use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use http::Method;
use http::Uri;
use presign_core::time::{self, DateTime};
use presign_core::{Error, Result};

use crate::constants::*;

/// HTTP verb a temporary url authorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpVerb {
    /// Download an object.
    #[default]
    Get,
    /// Upload an object.
    Put,
    /// Delete an object.
    Delete,
    /// Read object metadata.
    Head,
    /// Browser-based form upload.
    Post,
}

impl HttpVerb {
    /// Uppercase textual form used in the string to sign.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Head => "HEAD",
            HttpVerb::Post => "POST",
        }
    }
}

impl Display for HttpVerb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpVerb> for Method {
    fn from(verb: HttpVerb) -> Self {
        match verb {
            HttpVerb::Get => Method::GET,
            HttpVerb::Put => Method::PUT,
            HttpVerb::Delete => Method::DELETE,
            HttpVerb::Head => Method::HEAD,
            HttpVerb::Post => Method::POST,
        }
    }
}

impl TryFrom<&Method> for HttpVerb {
    type Error = Error;

    fn try_from(method: &Method) -> Result<Self> {
        [
            HttpVerb::Get,
            HttpVerb::Put,
            HttpVerb::Delete,
            HttpVerb::Head,
            HttpVerb::Post,
        ]
        .into_iter()
        .find(|verb| Method::from(*verb) == *method)
        .ok_or_else(|| Error::invalid_input(format!("http method {method} can't be presigned")))
    }
}

/// PresignRequest describes the single operation a temporary url authorizes.
///
/// ```
/// use std::time::Duration;
/// use presign_huaweicloud_obs::{HttpVerb, PresignRequest};
///
/// let req = PresignRequest::new("photos/cat.jpg")
///     .with_verb(HttpVerb::Get)
///     .with_expires_in(Duration::from_secs(600))
///     .with_response_content_type("image/jpeg");
/// assert_eq!(req.queries().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignRequest {
    key: String,
    version_id: Option<String>,
    verb: HttpVerb,
    expires_in: Duration,
    queries: Vec<(String, String)>,
}

impl PresignRequest {
    /// Create a GET request for `key` valid for one hour.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version_id: None,
            verb: HttpVerb::Get,
            expires_in: Duration::from_secs(DEFAULT_EXPIRES_SECONDS),
            queries: Vec::new(),
        }
    }

    /// Set the http verb.
    pub fn with_verb(mut self, verb: HttpVerb) -> Self {
        self.verb = verb;
        self
    }

    /// Set how long the url stays valid.
    ///
    /// Only whole seconds count. No upper bound is enforced here although
    /// OBS recommends at most seven days.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Target a specific object version.
    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    /// Append a query override.
    ///
    /// Overrides keep the order they are added in and are never deduplicated.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.queries.push((name.into(), value.into()));
        self
    }

    /// Override the `Content-Type` of the response.
    pub fn with_response_content_type(self, v: impl Into<String>) -> Self {
        self.with_query(RESPONSE_CONTENT_TYPE, v)
    }

    /// Override the `Content-Language` of the response.
    pub fn with_response_content_language(self, v: impl Into<String>) -> Self {
        self.with_query(RESPONSE_CONTENT_LANGUAGE, v)
    }

    /// Override the `Cache-Control` of the response.
    pub fn with_response_cache_control(self, v: impl Into<String>) -> Self {
        self.with_query(RESPONSE_CACHE_CONTROL, v)
    }

    /// Override the `Content-Disposition` of the response.
    pub fn with_response_content_disposition(self, v: impl Into<String>) -> Self {
        self.with_query(RESPONSE_CONTENT_DISPOSITION, v)
    }

    /// Override the `Content-Encoding` of the response.
    pub fn with_response_content_encoding(self, v: impl Into<String>) -> Self {
        self.with_query(RESPONSE_CONTENT_ENCODING, v)
    }

    /// Override the `Expires` header of the response.
    pub fn with_response_expires(self, v: impl Into<String>) -> Self {
        self.with_query(RESPONSE_EXPIRES, v)
    }

    /// Object key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Object version, if any.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// Http verb.
    pub fn verb(&self) -> HttpVerb {
        self.verb
    }

    /// Validity duration.
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Query overrides in insertion order.
    pub fn queries(&self) -> &[(String, String)] {
        &self.queries
    }
}

/// PresignedUrl is the result of a successful presign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUrl {
    url: String,
    expires_at: i64,
}

impl PresignedUrl {
    pub(crate) fn new(url: String, expires_at: i64) -> Self {
        Self { url, expires_at }
    }

    /// The temporary url.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Absolute expiry in seconds since the unix epoch.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Absolute expiry as a datetime.
    pub fn expires_at_time(&self) -> Option<DateTime> {
        time::from_timestamp(self.expires_at)
    }

    /// Parse the url into an [`http::Uri`] for a transport to send.
    pub fn uri(&self) -> Result<Uri> {
        Ok(self.url.parse::<Uri>()?)
    }

    /// Consume and return the url.
    pub fn into_string(self) -> String {
        self.url
    }
}

impl Display for PresignedUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for PresignedUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
