//! Canonical resource and canonical query string of a temporary url.

use log::debug;
use presign_core::{BoundedString, ErrorKind, Overflow, Result};

use crate::constants::*;
use crate::encode::{encode_into, Slash};

/// Build the canonical resource.
///
/// ## Format
///
/// ```text
/// "/" + Bucket + "/" + UriEncode(ObjectKey)   # bucket present
/// "/"                                         # account level
/// ```
///
/// The bucket is inserted verbatim and only the object key is encoded. The
/// server recomputes the resource the same way, so this asymmetry must stay.
pub(crate) fn canonical_resource(bucket: &str, key: &str) -> Result<String> {
    build_resource(bucket, key).map_err(|e| {
        e.into_error(
            ErrorKind::ResourceTooLong,
            "canonical resource exceeds its size limit",
        )
    })
}

fn build_resource(bucket: &str, key: &str) -> std::result::Result<String, Overflow> {
    let mut s = BoundedString::new(MAX_CANONICAL_RESOURCE_SIZE);
    s.push('/')?;
    if !bucket.is_empty() {
        s.push_str(bucket)?.push('/')?;
        encode_into(&mut s, key.as_bytes(), Slash::Keep)?;
    }
    Ok(s.into_string())
}

/// Build the canonical query string.
///
/// The order is fixed:
///
/// 1. `Expires=<epoch seconds>`, always present.
/// 2. `&versionId=<encoded>`, if a non-empty version id is given.
/// 3. `&<encoded name>=<encoded value>` for every override, in caller order.
///
/// Overrides are neither sorted nor deduplicated.
pub(crate) fn canonical_query(
    expires_at: i64,
    version_id: Option<&str>,
    queries: &[(String, String)],
) -> Result<String> {
    let query = build_query(expires_at, version_id, queries).map_err(|e| {
        e.into_error(
            ErrorKind::QueryTooLong,
            "canonical query string exceeds its size limit",
        )
    })?;

    debug!("canonical query string: {query}");
    Ok(query)
}

fn build_query(
    expires_at: i64,
    version_id: Option<&str>,
    queries: &[(String, String)],
) -> std::result::Result<String, Overflow> {
    let mut s = BoundedString::new(MAX_QUERY_STRING_SIZE);
    s.push_str(EXPIRES)?.push('=')?.push_display(expires_at)?;

    if let Some(version_id) = version_id.filter(|v| !v.is_empty()) {
        s.push('&')?.push_str(VERSION_ID)?.push('=')?;
        encode_into(&mut s, version_id.as_bytes(), Slash::Encode)?;
    }

    for (name, value) in queries {
        s.push('&')?;
        encode_into(&mut s, name.as_bytes(), Slash::Encode)?;
        s.push('=')?;
        encode_into(&mut s, value.as_bytes(), Slash::Encode)?;
    }

    Ok(s.into_string())
}
