use presign_core::{BoundedString, ErrorKind, Overflow, Result};

use crate::constants::*;
use crate::encode::{encode_into, Slash};
use crate::Protocol;

/// Pieces of a temporary url that are already canonical.
pub(crate) struct UrlParts<'a> {
    pub protocol: Protocol,
    pub host: &'a str,
    pub resource: &'a str,
    pub query: &'a str,
    pub access_key_id: &'a str,
    pub signature: &'a str,
}

/// Assemble the final url.
///
/// ```text
/// <scheme>://<host><resource>?<query>&AWSAccessKeyId=<id>&Signature=<encoded signature>
/// ```
///
/// The access key id goes in verbatim. The signature is percent encoded
/// since base64 may yield `+`, `/` and `=`.
pub(crate) fn build_url(parts: &UrlParts<'_>) -> Result<String> {
    build(parts).map_err(|e| {
        e.into_error(
            ErrorKind::UrlTooLong,
            "temporary url exceeds its size limit",
        )
    })
}

fn build(parts: &UrlParts<'_>) -> std::result::Result<String, Overflow> {
    let mut s = BoundedString::new(MAX_TEMP_URL_SIZE);
    s.push_str(parts.protocol.scheme_prefix())?
        .push_str(parts.host)?
        .push_str(parts.resource)?
        .push('?')?
        .push_str(parts.query)?;

    s.push('&')?
        .push_str(ACCESS_KEY_ID)?
        .push('=')?
        .push_str(parts.access_key_id)?;

    s.push('&')?.push_str(SIGNATURE)?.push('=')?;
    encode_into(&mut s, parts.signature.as_bytes(), Slash::Encode)?;

    Ok(s.into_string())
}
