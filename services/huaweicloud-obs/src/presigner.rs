use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use presign_core::time::{self, DateTime};
use presign_core::{Context, Error, ProvideCredential, Result, SigningCredential};

use crate::presign::{put_request, verb_request};
use crate::{
    presign_at, BucketContext, Credential, HttpVerb, PresignRequest, PresignedUrl, Protocol,
};

/// Presigner loads a credential on demand and presigns urls for one bucket.
///
/// The credential is cached after the first successful load and reloaded
/// only when it stops being valid.
#[derive(Clone, Debug)]
pub struct Presigner {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = Credential>>,
    bucket: String,
    host: String,
    protocol: Protocol,
    credential: Arc<Mutex<Option<Credential>>>,
    time: Option<DateTime>,
}

impl Presigner {
    /// Create a new presigner for `bucket` served by `host` over https.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = Credential>,
        bucket: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            bucket: bucket.into(),
            host: host.into(),
            protocol: Protocol::Https,
            credential: Arc::new(Mutex::new(None)),
            time: None,
        }
    }

    /// Set the protocol.
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to presign urls.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Presign `req`.
    pub async fn presign(&self, req: &PresignRequest) -> Result<PresignedUrl> {
        let credential = self.load_credential().await?;

        let ctx = BucketContext {
            bucket_name: self.bucket.clone(),
            host_name: self.host.clone(),
            protocol: self.protocol,
            credential: Some(credential),
        };
        presign_at(&ctx, req, self.time.unwrap_or_else(time::now))
    }

    /// Presign a GET url for `key`.
    pub async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<PresignedUrl> {
        self.presign(&verb_request(HttpVerb::Get, key, expires_in))
            .await
    }

    /// Presign a PUT url for `key`, optionally pinning its `Content-Type`.
    pub async fn presign_put(
        &self,
        key: &str,
        expires_in: Duration,
        content_type: Option<&str>,
    ) -> Result<PresignedUrl> {
        self.presign(&put_request(key, expires_in, content_type))
            .await
    }

    /// Presign a DELETE url for `key`.
    pub async fn presign_delete(&self, key: &str, expires_in: Duration) -> Result<PresignedUrl> {
        self.presign(&verb_request(HttpVerb::Delete, key, expires_in))
            .await
    }

    /// Presign a HEAD url for `key`.
    pub async fn presign_head(&self, key: &str, expires_in: Duration) -> Result<PresignedUrl> {
        self.presign(&verb_request(HttpVerb::Head, key, expires_in))
            .await
    }

    async fn load_credential(&self) -> Result<Credential> {
        let cached = self
            .credential
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(cred) = cached.filter(|c| c.is_valid()) {
            return Ok(cred);
        }

        let loaded = self
            .loader
            .provide_credential(&self.ctx)
            .await?
            .filter(|c| c.is_valid())
            .ok_or_else(|| Error::missing_credential("no valid credential could be loaded"))?;
        *self
            .credential
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        Ok(loaded)
    }
}
