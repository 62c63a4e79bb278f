//! Core components for presigning object storage URLs.
//!
//! This crate provides the service-independent building blocks shared by the
//! presign service crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the environment implementation used to read configuration
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and credential validation (`SigningCredential`)
//! - **BoundedString**: A growable string with a hard size ceiling, used to assemble canonical forms and URLs
//!
//! ## Example
//!
//! ```
//! use presign_core::{BoundedString, ErrorKind};
//!
//! let mut s = BoundedString::new(8);
//! s.push_str("Expires=")?;
//! let err = s.push_str("1").unwrap_err();
//! assert_eq!(err.requested(), 9);
//!
//! // Callers decide which error kind an overflow maps to.
//! let err = err.into_error(ErrorKind::QueryTooLong, "query too long");
//! assert_eq!(err.kind(), ErrorKind::QueryTooLong);
//! # Ok::<(), presign_core::Overflow>(())
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`time`]: Time helpers
//! - [`utils`]: Redaction of sensitive values

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod buffer;
pub use buffer::{BoundedString, Overflow};

mod context;
pub use context::{Context, Env, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SigningCredential};

mod chain;
pub use chain::ProvideCredentialChain;
