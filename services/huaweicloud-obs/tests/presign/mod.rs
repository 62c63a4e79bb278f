mod limits;
mod live;
mod ordering;
mod scenarios;

use chrono::{TimeZone, Utc};
use percent_encoding::percent_decode_str;
use presign_core::hash::base64_hmac_sha1;
use presign_core::time::DateTime;
use presign_huaweicloud_obs::{BucketContext, Credential, PresignedUrl};

pub const BUCKET: &str = "test-bucket";
pub const HOST: &str = "obs.example.com";
pub const ACCESS_KEY_ID: &str = "access_key";
pub const SECRET_ACCESS_KEY: &str = "secret123";

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One hour before 1700000000, so the default expiry lands exactly on it.
pub fn signing_time() -> DateTime {
    Utc.with_ymd_and_hms(2023, 11, 14, 21, 13, 20)
        .single()
        .expect("time must be valid")
}

pub fn bucket_context() -> BucketContext {
    BucketContext::new(BUCKET, HOST)
        .with_credential(Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY))
}

/// Split the query of `url` into decoded pairs, in order.
pub fn query_pairs(url: &PresignedUrl) -> Vec<(String, String)> {
    let uri = url.uri().expect("url must parse");
    let query = uri.query().expect("url must have a query");
    query
        .split('&')
        .map(|kv| {
            let (k, v) = kv.split_once('=').expect("pair must have '='");
            (decode(k), decode(v))
        })
        .collect()
}

pub fn query_value(url: &PresignedUrl, name: &str) -> Option<String> {
    query_pairs(url)
        .into_iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
}

pub fn decode(s: &str) -> String {
    percent_decode_str(s)
        .decode_utf8()
        .expect("must be valid utf-8")
        .into_owned()
}

/// Signature a server recomputes for `verb` on `resource`.
pub fn expected_signature(verb: &str, expires_at: i64, resource: &str) -> String {
    base64_hmac_sha1(
        SECRET_ACCESS_KEY.as_bytes(),
        format!("{verb}\n{expires_at}\n{resource}").as_bytes(),
    )
    .expect("hmac must succeed")
}
