//! String to sign and signature of a temporary url.

use log::debug;
use presign_core::hash::base64_hmac_sha1;
use presign_core::{BoundedString, ErrorKind, Overflow, Result};

use crate::constants::*;
use crate::HttpVerb;

/// Build the string to sign.
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// Expires + "\n" +
/// CanonicalizedResource
/// ```
///
/// Temporary urls sign neither `Content-MD5` nor `Content-Type`; adding
/// those lines breaks server side verification.
pub(crate) fn string_to_sign(verb: HttpVerb, expires_at: i64, resource: &str) -> Result<String> {
    let s = build(verb, expires_at, resource).map_err(|e| {
        e.into_error(
            ErrorKind::StringToSignTooLong,
            "string to sign exceeds its size limit",
        )
    })?;

    debug!("string to sign: {s:?}");
    Ok(s)
}

fn build(verb: HttpVerb, expires_at: i64, resource: &str) -> std::result::Result<String, Overflow> {
    let mut s = BoundedString::new(MAX_STRING_TO_SIGN_SIZE);
    s.push_str(verb.as_str())?
        .push('\n')?
        .push_display(expires_at)?
        .push('\n')?
        .push_str(resource)?;
    Ok(s.into_string())
}

/// Sign `string_to_sign` with `secret_access_key`.
///
/// Returns `base64(hmac-sha1(secret, string_to_sign))` with any line breaks
/// removed. The result is not yet url encoded.
pub(crate) fn signature(secret_access_key: &str, string_to_sign: &str) -> Result<String> {
    let mut sig = base64_hmac_sha1(secret_access_key.as_bytes(), string_to_sign.as_bytes())?;
    sig.retain(|c| c != '\n' && c != '\r');
    Ok(sig)
}
