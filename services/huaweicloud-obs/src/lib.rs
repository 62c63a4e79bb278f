//! Huawei Cloud OBS temporary url presigning.
//!
//! This crate produces presigned urls for Huawei Cloud Object Storage Service
//! (OBS) using the query string signature scheme: a url that carries its own
//! expiry and signature and authorizes exactly one http operation on one
//! object without any further credential.
//!
//! ## Overview
//!
//! The signature is `base64(hmac-sha1(secret, string_to_sign))` where the
//! string to sign is
//!
//! ```text
//! VERB + "\n" + Expires + "\n" + CanonicalizedResource
//! ```
//!
//! and the resulting url looks like
//!
//! ```text
//! https://<host>/<bucket>/<key>?Expires=<epoch>[&versionId=..][&<name>=<value>..]
//!     &AWSAccessKeyId=<id>&Signature=<signature>
//! ```
//!
//! Every piece is size checked: an input that would overflow the resource,
//! query, string to sign or final url fails with the matching error kind
//! instead of being truncated.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use presign_huaweicloud_obs::{presign, BucketContext, Credential, PresignRequest};
//!
//! # fn main() -> presign_core::Result<()> {
//! let ctx = BucketContext::new("test-bucket", "obs.cn-north-4.myhuaweicloud.com")
//!     .with_credential(Credential::new("access_key_id", "secret_access_key"));
//!
//! let req = PresignRequest::new("photos/cat.jpg")
//!     .with_expires_in(Duration::from_secs(600))
//!     .with_response_content_disposition("attachment");
//!
//! let url = presign(&ctx, &req)?;
//! println!("{url} valid until {}", url.expires_at());
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! [`Presigner`] loads credentials through a [`presign_core::ProvideCredential`]
//! and caches them between calls:
//!
//! ```no_run
//! use std::time::Duration;
//! use presign_core::Context;
//! use presign_huaweicloud_obs::{DefaultCredentialProvider, Presigner};
//!
//! #[tokio::main]
//! async fn main() -> presign_core::Result<()> {
//!     let presigner = Presigner::new(
//!         Context::new(),
//!         DefaultCredentialProvider::new(),
//!         "test-bucket",
//!         "obs.cn-north-4.myhuaweicloud.com",
//!     );
//!
//!     let url = presigner
//!         .presign_get("photos/cat.jpg", Duration::from_secs(3600))
//!         .await?;
//!     println!("{url}");
//!     Ok(())
//! }
//! ```
//!
//! ### Environment Variables
//!
//! ```bash
//! export HUAWEI_CLOUD_ACCESS_KEY_ID=your-access-key-id
//! export HUAWEI_CLOUD_SECRET_ACCESS_KEY=your-secret-access-key
//! export HUAWEI_CLOUD_OBS_BUCKET=your-bucket
//! export HUAWEI_CLOUD_OBS_ENDPOINT=obs.cn-north-4.myhuaweicloud.com
//! export HUAWEI_CLOUD_OBS_PROTOCOL=https
//! ```
//!
//! The first two feed [`EnvCredentialProvider`]; all of them feed [`Config::from_env`].

#![warn(missing_docs)]

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod bucket;
pub use bucket::{BucketContext, Protocol};

mod request;
pub use request::{HttpVerb, PresignRequest, PresignedUrl};

mod presign;
pub use presign::{presign, presign_at, presign_delete, presign_get, presign_head, presign_put};

mod presigner;
pub use presigner::Presigner;

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, StaticCredentialProvider,
};

mod canonical;
mod constants;
mod encode;
mod sign;
mod url;
