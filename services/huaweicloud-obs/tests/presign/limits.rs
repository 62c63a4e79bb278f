use std::time::Duration;

use presign_core::ErrorKind;
use presign_huaweicloud_obs::{presign_at, BucketContext, Credential, PresignRequest};
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::*;

fn presign_err(ctx: &BucketContext, req: &PresignRequest) -> presign_core::Error {
    presign_at(ctx, req, signing_time()).expect_err("presign must fail")
}

#[test]
fn test_resource_too_long() {
    init();

    let req = PresignRequest::new(" ".repeat(1200));
    let err = presign_err(&bucket_context(), &req);
    assert_eq!(err.kind(), ErrorKind::ResourceTooLong);
    assert!(err.is_too_long());
}

#[test]
fn test_query_too_long() {
    init();

    let disposition = format!("attachment; filename=\"{}\"", "x".repeat(1024));
    let req = PresignRequest::new("test-object.txt").with_response_content_disposition(disposition);
    let err = presign_err(&bucket_context(), &req);
    assert_eq!(err.kind(), ErrorKind::QueryTooLong);
    assert!(err.is_too_long());
}

#[test]
fn test_query_too_long_by_many_overrides() {
    init();

    let req = (0..100).fold(PresignRequest::new("test-object.txt"), |req, i| {
        req.with_query(format!("x-param-{i}"), "value")
    });
    let err = presign_err(&bucket_context(), &req);
    assert_eq!(err.kind(), ErrorKind::QueryTooLong);
}

#[test]
fn test_url_too_long() {
    init();

    // Resource and query each fit on their own but not together.
    let req = PresignRequest::new(" ".repeat(1000)).with_query("x", "v".repeat(1000));
    let err = presign_err(&bucket_context(), &req);
    assert_eq!(err.kind(), ErrorKind::UrlTooLong);
    assert!(err.is_too_long());
}

#[test]
fn test_url_just_fits() {
    init();

    let req = PresignRequest::new(" ".repeat(1000)).with_query("x", "v".repeat(900));
    let url = presign_at(&bucket_context(), &req, signing_time()).expect("must presign");
    assert!(url.as_str().len() <= 4096);
}

#[test]
fn test_empty_key() {
    init();

    let err = presign_err(&bucket_context(), &PresignRequest::new(""));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    // Regardless of anything else.
    let err = presign_err(&BucketContext::default(), &PresignRequest::new(""));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_zero_expiry() {
    init();

    let req = PresignRequest::new("test-object.txt").with_expires_in(Duration::ZERO);
    let err = presign_err(&bucket_context(), &req);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test_case(None; "no credential")]
#[test_case(Some(Credential::new("", SECRET_ACCESS_KEY)); "no access key id")]
#[test_case(Some(Credential::new(ACCESS_KEY_ID, "")); "no secret access key")]
fn test_missing_credential(credential: Option<Credential>) {
    init();

    let mut ctx = bucket_context();
    ctx.credential = credential;
    let err = presign_err(&ctx, &PresignRequest::new("test-object.txt"));
    assert_eq!(err.kind(), ErrorKind::MissingCredential);
    assert!(!err.is_too_long());
}

#[test]
fn test_error_never_leaks_secret() {
    init();

    let req = PresignRequest::new(" ".repeat(1200));
    let err = presign_err(&bucket_context(), &req);
    assert!(!format!("{err} {err:?}").contains(SECRET_ACCESS_KEY));
}
