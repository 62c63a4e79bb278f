use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used in huawei cloud services.
pub const HUAWEI_CLOUD_ACCESS_KEY_ID: &str = "HUAWEI_CLOUD_ACCESS_KEY_ID";
pub const HUAWEI_CLOUD_SECRET_ACCESS_KEY: &str = "HUAWEI_CLOUD_SECRET_ACCESS_KEY";
pub const HUAWEI_CLOUD_OBS_BUCKET: &str = "HUAWEI_CLOUD_OBS_BUCKET";
pub const HUAWEI_CLOUD_OBS_ENDPOINT: &str = "HUAWEI_CLOUD_OBS_ENDPOINT";
pub const HUAWEI_CLOUD_OBS_PROTOCOL: &str = "HUAWEI_CLOUD_OBS_PROTOCOL";

// Query parameters of a temporary url.
pub const EXPIRES: &str = "Expires";
pub const VERSION_ID: &str = "versionId";
pub const ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const SIGNATURE: &str = "Signature";
pub const CONTENT_TYPE: &str = "Content-Type";

// Response header overrides, carried as ordinary caller overrides.
pub const RESPONSE_CONTENT_TYPE: &str = "response-content-type";
pub const RESPONSE_CONTENT_LANGUAGE: &str = "response-content-language";
pub const RESPONSE_CACHE_CONTROL: &str = "response-cache-control";
pub const RESPONSE_CONTENT_DISPOSITION: &str = "response-content-disposition";
pub const RESPONSE_CONTENT_ENCODING: &str = "response-content-encoding";
pub const RESPONSE_EXPIRES: &str = "response-expires";

/// Default validity of a temporary url: one hour.
pub const DEFAULT_EXPIRES_SECONDS: u64 = 3600;

/// Longest bucket name accepted by the canonical resource budget.
pub const MAX_BUCKET_NAME_SIZE: usize = 255;
/// Longest object key, before encoding, accepted by the canonical resource budget.
pub const MAX_KEY_SIZE: usize = 1024;
/// `/` + bucket + `/` + fully percent-encoded key.
pub const MAX_CANONICAL_RESOURCE_SIZE: usize = 1 + MAX_BUCKET_NAME_SIZE + 1 + 3 * MAX_KEY_SIZE;
pub const MAX_QUERY_STRING_SIZE: usize = 1024;
pub const MAX_STRING_TO_SIGN_SIZE: usize = 4096;
pub const MAX_TEMP_URL_SIZE: usize = 4096;

/// Unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through, everything else
/// becomes `%XX`.
pub static OBS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Same as [`OBS_QUERY_ENCODE_SET`] but keeps `/` as a path separator.
pub static OBS_PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');
