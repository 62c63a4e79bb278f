use std::time::Duration;

use presign_huaweicloud_obs::{
    presign, presign_at, presign_delete, presign_get, presign_head, presign_put, HttpVerb,
    PresignRequest,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::*;

#[test]
fn test_get_object_url() {
    init();

    let req = PresignRequest::new("test-object.txt");
    let url = presign_at(&bucket_context(), &req, signing_time()).expect("must presign");

    assert_eq!(url.expires_at(), 1_700_000_000);
    assert_eq!(
        url.to_string(),
        "https://obs.example.com/test-bucket/test-object.txt?Expires=1700000000\
         &AWSAccessKeyId=access_key&Signature=X7xdWBzds7q1O443jTWqp%2F9k0Kw%3D"
    );
}

#[test_case(HttpVerb::Get, "X7xdWBzds7q1O443jTWqp/9k0Kw="; "get")]
#[test_case(HttpVerb::Put, "a7sUwW9YN7Gm5twMpqk3LriFnjs="; "put")]
#[test_case(HttpVerb::Delete, "FEZ7G4EoeFe3AgujjAWLSiCRfFU="; "delete")]
#[test_case(HttpVerb::Head, "SQmHhTHzmST9N9ceCdrj7Mfjz4s="; "head")]
fn test_signature_per_verb(verb: HttpVerb, signature: &str) {
    init();

    let req = PresignRequest::new("test-object.txt").with_verb(verb);
    let url = presign_at(&bucket_context(), &req, signing_time()).expect("must presign");

    assert_eq!(query_value(&url, "Signature").as_deref(), Some(signature));
}

#[test]
fn test_wrappers_sign_their_verb() {
    init();

    let ctx = bucket_context();
    let key = "test-object.txt";
    let expires_in = Duration::from_secs(900);
    let cases = [
        ("GET", presign_get(&ctx, key, expires_in)),
        ("PUT", presign_put(&ctx, key, expires_in, None)),
        ("DELETE", presign_delete(&ctx, key, expires_in)),
        ("HEAD", presign_head(&ctx, key, expires_in)),
    ];

    for (verb, url) in cases {
        let url = url.expect("must presign");
        // The first line of the string to sign is the verb: only then does
        // the recomputed signature match.
        let expected = expected_signature(verb, url.expires_at(), "/test-bucket/test-object.txt");
        assert_eq!(
            query_value(&url, "Signature"),
            Some(expected),
            "signature for {verb} must match"
        );
    }
}

#[test]
fn test_presign_returns_expiry_in_url() {
    init();

    let req = PresignRequest::new("test-object.txt").with_expires_in(Duration::from_secs(60));
    let url = presign(&bucket_context(), &req).expect("must presign");

    assert_eq!(
        query_value(&url, "Expires"),
        Some(url.expires_at().to_string())
    );
    let expires_at = url.expires_at_time().expect("expiry must be a valid time");
    assert_eq!(expires_at.timestamp(), url.expires_at());
}

#[test]
fn test_response_overrides() {
    init();

    let req = PresignRequest::new("test-object.txt")
        .with_response_content_type("text/plain")
        .with_response_cache_control("no-cache");
    let url = presign_at(&bucket_context(), &req, signing_time()).expect("must presign");

    let uri = url.uri().expect("url must parse");
    assert!(uri.query().expect("must have query").starts_with(
        "Expires=1700000000&response-content-type=text%2Fplain&response-cache-control=no-cache&"
    ));
    // Overrides are not part of the signed content.
    assert_eq!(
        query_value(&url, "Signature").as_deref(),
        Some("X7xdWBzds7q1O443jTWqp/9k0Kw=")
    );
}

#[test]
fn test_put_with_content_type() {
    init();

    let ctx = bucket_context();
    let url = presign_put(
        &ctx,
        "test-object.txt",
        Duration::from_secs(300),
        Some("application/json"),
    )
    .expect("must presign");

    assert_eq!(
        query_value(&url, "Content-Type").as_deref(),
        Some("application/json")
    );
    assert_eq!(
        query_value(&url, "Signature"),
        Some(expected_signature("PUT", url.expires_at(), "/test-bucket/test-object.txt"))
    );
}

#[test]
fn test_version_id() {
    init();

    let req =
        PresignRequest::new("test-object.txt").with_version_id("G001118A6803675A0000016F3B5C6E4E");
    let url = presign_at(&bucket_context(), &req, signing_time()).expect("must presign");

    assert_eq!(
        query_value(&url, "versionId").as_deref(),
        Some("G001118A6803675A0000016F3B5C6E4E")
    );
}

#[test]
fn test_nested_key_with_reserved_characters() {
    init();

    let req = PresignRequest::new("dir/sub dir/file+1.txt");
    let now = signing_time() + chrono::Duration::hours(1);
    let url = presign_at(&bucket_context(), &req, now).expect("must presign");

    let uri = url.uri().expect("url must parse");
    assert_eq!(uri.path(), "/test-bucket/dir/sub%20dir/file%2B1.txt");
    assert_eq!(
        query_value(&url, "Signature").as_deref(),
        Some("5g32aoKScZ6s41Qw3yYZFuu9+d0=")
    );
}

#[test]
fn test_http_method_conversion() {
    let req = PresignRequest::new("test-object.txt")
        .with_verb(HttpVerb::try_from(&http::Method::DELETE).expect("delete is supported"));
    let url = presign_at(&bucket_context(), &req, signing_time()).expect("must presign");
    assert_eq!(
        query_value(&url, "Signature").as_deref(),
        Some("FEZ7G4EoeFe3AgujjAWLSiCRfFU=")
    );
}
