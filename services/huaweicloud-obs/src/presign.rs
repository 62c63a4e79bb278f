//! Temporary url signing for huaweicloud obs.
//!
//! - [Authenticating a Temporary URL](https://support.huaweicloud.com/intl/en-us/api-obs/obs_04_0011.html)

use std::time::Duration;

use log::{debug, error, info};
use presign_core::time::{self, DateTime};
use presign_core::{Error, Result, SigningCredential};

use crate::canonical::{canonical_query, canonical_resource};
use crate::constants::*;
use crate::sign::{signature, string_to_sign};
use crate::url::{build_url, UrlParts};
use crate::{BucketContext, HttpVerb, PresignRequest, PresignedUrl};

/// Presign `req` against `ctx` with the current time.
///
/// The returned url authorizes exactly one operation until
/// [`PresignedUrl::expires_at`].
pub fn presign(ctx: &BucketContext, req: &PresignRequest) -> Result<PresignedUrl> {
    presign_at(ctx, req, time::now())
}

/// Presign `req` against `ctx` as if the current time were `now`.
///
/// The same inputs always produce the same url.
pub fn presign_at(
    ctx: &BucketContext,
    req: &PresignRequest,
    now: DateTime,
) -> Result<PresignedUrl> {
    match build(ctx, req, now) {
        Ok(url) => {
            info!(
                "presigned {} url for {}/{} expiring at {}",
                req.verb(),
                ctx.bucket_name,
                req.key(),
                url.expires_at()
            );
            Ok(url)
        }
        Err(err) => {
            error!(
                "presign {} url for {}/{} failed: {err}",
                req.verb(),
                ctx.bucket_name,
                req.key()
            );
            Err(err)
        }
    }
}

fn build(ctx: &BucketContext, req: &PresignRequest, now: DateTime) -> Result<PresignedUrl> {
    validate(ctx, req)?;
    let cred = match &ctx.credential {
        Some(cred) if cred.is_valid() => cred,
        _ => {
            return Err(Error::missing_credential(
                "bucket context must carry both access key id and secret access key",
            ))
        }
    };

    let expires_at = expires_at(now, req.expires_in())?;
    debug!(
        "presign {} with expires_in {}s, expires at {}",
        req.key(),
        req.expires_in().as_secs(),
        expires_at
    );

    let resource = canonical_resource(&ctx.bucket_name, req.key())?;
    let query = canonical_query(expires_at, req.version_id(), req.queries())?;
    let string_to_sign = string_to_sign(req.verb(), expires_at, &resource)?;
    let signature = signature(&cred.secret_access_key, &string_to_sign)?;

    let url = build_url(&UrlParts {
        protocol: ctx.protocol,
        host: &ctx.host_name,
        resource: &resource,
        query: &query,
        access_key_id: &cred.access_key_id,
        signature: &signature,
    })?;

    Ok(PresignedUrl::new(url, expires_at))
}

fn validate(ctx: &BucketContext, req: &PresignRequest) -> Result<()> {
    if req.key().is_empty() {
        return Err(Error::invalid_input("object key must not be empty"));
    }
    if req.expires_in().as_secs() == 0 {
        return Err(Error::invalid_input("expires_in must be at least one second"));
    }
    if ctx.host_name.is_empty() {
        return Err(Error::invalid_input("host name must not be empty"));
    }
    if req.queries().iter().any(|(name, _)| name.is_empty()) {
        return Err(Error::invalid_input("query override name must not be empty"));
    }
    Ok(())
}

/// Absolute expiry in epoch seconds.
fn expires_at(now: DateTime, expires_in: Duration) -> Result<i64> {
    i64::try_from(expires_in.as_secs())
        .ok()
        .and_then(|secs| now.timestamp().checked_add(secs))
        .ok_or_else(|| {
            Error::invalid_input(format!(
                "expires_in of {}s overflows the expiry timestamp",
                expires_in.as_secs()
            ))
        })
}

/// Presign a GET url for `key`.
pub fn presign_get(ctx: &BucketContext, key: &str, expires_in: Duration) -> Result<PresignedUrl> {
    presign(ctx, &verb_request(HttpVerb::Get, key, expires_in))
}

/// Presign a PUT url for `key`.
///
/// A non-empty `content_type` travels as a `Content-Type` query override;
/// it is not part of the string to sign.
pub fn presign_put(
    ctx: &BucketContext,
    key: &str,
    expires_in: Duration,
    content_type: Option<&str>,
) -> Result<PresignedUrl> {
    presign(ctx, &put_request(key, expires_in, content_type))
}

/// Presign a DELETE url for `key`.
pub fn presign_delete(
    ctx: &BucketContext,
    key: &str,
    expires_in: Duration,
) -> Result<PresignedUrl> {
    presign(ctx, &verb_request(HttpVerb::Delete, key, expires_in))
}

/// Presign a HEAD url for `key`.
pub fn presign_head(ctx: &BucketContext, key: &str, expires_in: Duration) -> Result<PresignedUrl> {
    presign(ctx, &verb_request(HttpVerb::Head, key, expires_in))
}

pub(crate) fn verb_request(verb: HttpVerb, key: &str, expires_in: Duration) -> PresignRequest {
    PresignRequest::new(key)
        .with_verb(verb)
        .with_expires_in(expires_in)
}

pub(crate) fn put_request(
    key: &str,
    expires_in: Duration,
    content_type: Option<&str>,
) -> PresignRequest {
    let req = verb_request(HttpVerb::Put, key, expires_in);
    match content_type.filter(|v| !v.is_empty()) {
        Some(content_type) => req.with_query(CONTENT_TYPE, content_type),
        None => req,
    }
}
