use presign_huaweicloud_obs::{presign_at, PresignRequest};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_query_order_is_fixed() {
    init();

    let req = PresignRequest::new("test-object.txt")
        .with_query("z-last-alphabetically", "1")
        .with_version_id("v1")
        .with_query("a-first-alphabetically", "2")
        .with_query("z-last-alphabetically", "3");
    let url = presign_at(&bucket_context(), &req, signing_time()).expect("must presign");

    let names: Vec<String> = query_pairs(&url).into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        names,
        vec![
            "Expires",
            "versionId",
            "z-last-alphabetically",
            "a-first-alphabetically",
            "z-last-alphabetically",
            "AWSAccessKeyId",
            "Signature",
        ]
    );
}

#[test]
fn test_same_input_same_url() {
    init();

    let req = PresignRequest::new("photos/2023/cat.jpg")
        .with_version_id("v1")
        .with_response_content_disposition("attachment; filename=\"cat.jpg\"");
    let urls: Vec<String> = (0..8)
        .map(|_| {
            presign_at(&bucket_context(), &req, signing_time())
                .expect("must presign")
                .into_string()
        })
        .collect();

    assert!(urls.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_concurrent_presign_is_deterministic() {
    init();

    let ctx = bucket_context();
    let req = PresignRequest::new("test-object.txt");
    let expected = presign_at(&ctx, &req, signing_time()).expect("must presign");

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| presign_at(&ctx, &req, signing_time())))
            .collect();
        for h in handles {
            let result = h.join().expect("thread must not panic");
            assert_eq!(result.expect("must presign"), expected);
        }
    });
}

#[test]
fn test_encoded_values_decode_to_original() {
    init();

    let cases = [
        "plain.txt",
        "with space and+plus.txt",
        "中文/目录/文件.txt",
        "!@#$%^&*()_+-=;:'><,?.txt",
        "a/b/c/",
        "emoji-🦀.bin",
    ];

    for key in cases {
        let req = PresignRequest::new(key)
            .with_version_id(key)
            .with_query(key, key);
        let url = presign_at(&bucket_context(), &req, signing_time()).expect("must presign");

        let path = url
            .as_str()
            .strip_prefix("https://obs.example.com/test-bucket/")
            .and_then(|rest| rest.split_once('?'))
            .map(|(path, _)| path)
            .expect("url must carry the bucket prefix");
        assert_eq!(decode(path), key, "object key must round trip");
        assert!(!path.contains(['?', '&', '#', ' ', '+']));

        let pairs = query_pairs(&url);
        assert_eq!(pairs[1], ("versionId".to_string(), key.to_string()));
        assert_eq!(pairs[2], (key.to_string(), key.to_string()));
    }
}
