use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use presign_core::{Error, Result};

use crate::Credential;

/// Protocol used in the scheme of the temporary url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// `http://`
    Http,
    /// `https://`
    #[default]
    Https,
}

impl Protocol {
    /// Scheme prefix including `://`.
    pub fn scheme_prefix(self) -> &'static str {
        match self {
            Protocol::Http => "http://",
            Protocol::Https => "https://",
        }
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => f.write_str("http"),
            Protocol::Https => f.write_str("https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("https") {
            Ok(Protocol::Https)
        } else if s.eq_ignore_ascii_case("http") {
            Ok(Protocol::Http)
        } else {
            Err(Error::config_invalid(format!("protocol must be http or https, got {s:?}")))
        }
    }
}

/// BucketContext identifies where a temporary url points and who signs it.
///
/// It is read-only to the signing pipeline.
#[derive(Clone, Default)]
pub struct BucketContext {
    /// Bucket name. Empty for account-level operations.
    ///
    /// Inserted verbatim into the canonical resource: bucket names are
    /// expected to be DNS-safe already.
    pub bucket_name: String,
    /// Host name, e.g. `obs.cn-north-4.myhuaweicloud.com`.
    pub host_name: String,
    /// Scheme of the produced url.
    pub protocol: Protocol,
    /// Signing credential.
    pub credential: Option<Credential>,
}

impl BucketContext {
    /// Create a context for `bucket_name` served by `host_name` over https.
    pub fn new(bucket_name: impl Into<String>, host_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            host_name: host_name.into(),
            protocol: Protocol::Https,
            credential: None,
        }
    }

    /// Set the protocol.
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Set the signing credential.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }
}

impl Debug for BucketContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketContext")
            .field("bucket_name", &self.bucket_name)
            .field("host_name", &self.host_name)
            .field("protocol", &self.protocol)
            // Credential's Debug already redacts.
            .field("credential", &self.credential)
            .finish()
    }
}
