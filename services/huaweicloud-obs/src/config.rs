use std::fmt::{Debug, Formatter};

use super::constants::*;
use presign_core::{utils::Redact, Context, Error, Result};

use crate::{BucketContext, Credential, Protocol};

/// Config carries all the configuration for Huawei Cloud OBS temporary urls.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HUAWEI_CLOUD_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HUAWEI_CLOUD_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `bucket` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HUAWEI_CLOUD_OBS_BUCKET`]
    ///
    /// Leave empty to sign account level resources.
    pub bucket: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HUAWEI_CLOUD_OBS_ENDPOINT`]
    pub endpoint: Option<String>,
    /// `protocol` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HUAWEI_CLOUD_OBS_PROTOCOL`]
    /// - `https` otherwise
    pub protocol: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set bucket
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set protocol, `http` or `https`.
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set win over env values.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(HUAWEI_CLOUD_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(HUAWEI_CLOUD_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(HUAWEI_CLOUD_OBS_BUCKET) {
            self.bucket.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(HUAWEI_CLOUD_OBS_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(HUAWEI_CLOUD_OBS_PROTOCOL) {
            self.protocol.get_or_insert(v);
        }

        self
    }

    /// Parse the configured protocol, defaulting to https.
    pub fn protocol(&self) -> Result<Protocol> {
        match &self.protocol {
            Some(v) => v.parse(),
            None => Ok(Protocol::default()),
        }
    }

    /// Build a [`BucketContext`] out of this config.
    ///
    /// The credential is only attached when both keys are present; signing
    /// without it fails later with a missing credential error.
    pub fn bucket_context(&self) -> Result<BucketContext> {
        let endpoint = self
            .endpoint
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("endpoint is required"))?;

        let mut ctx = BucketContext::new(self.bucket.clone().unwrap_or_default(), endpoint)
            .with_protocol(self.protocol()?);
        if let (Some(ak), Some(sk)) = (&self.access_key_id, &self.secret_access_key) {
            ctx = ctx.with_credential(Credential::new(ak, sk));
        }
        Ok(ctx)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "access_key_id",
                &self.access_key_id.as_ref().map(Redact::from),
            )
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(Redact::from),
            )
            .field("bucket", &self.bucket)
            .field("endpoint", &self.endpoint)
            .field("protocol", &self.protocol)
            .finish()
    }
}
