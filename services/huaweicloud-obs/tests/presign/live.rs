use std::env;
use std::time::Duration;

use anyhow::Result;
use http::StatusCode;
use log::{debug, warn};
use presign_core::Context;
use presign_huaweicloud_obs::{presign_head, presign_put, BucketContext, Config};
use reqwest::Client;

/// Build a bucket context from env when live tests are enabled.
fn init_live_context() -> Option<BucketContext> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PRESIGN_HUAWEICLOUD_OBS_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let config = Config::new().from_env(&Context::new());
    Some(
        config
            .bucket_context()
            .expect("HUAWEI_CLOUD_OBS_* env must be set for live tests"),
    )
}

#[tokio::test]
async fn test_live_head_not_exist_object() -> Result<()> {
    let Some(ctx) = init_live_context() else {
        warn!("PRESIGN_HUAWEICLOUD_OBS_TEST is not set, skipped");
        return Ok(());
    };

    let url = presign_head(&ctx, "not_exist_file", Duration::from_secs(300))?;
    debug!("presigned url: {url}");

    let resp = Client::new().head(url.as_str()).send().await?;
    debug!("got response: {resp:?}");
    assert_eq!(StatusCode::NOT_FOUND.as_u16(), resp.status().as_u16());
    Ok(())
}

#[tokio::test]
async fn test_live_put_object() -> Result<()> {
    let Some(ctx) = init_live_context() else {
        warn!("PRESIGN_HUAWEICLOUD_OBS_TEST is not set, skipped");
        return Ok(());
    };

    let url = presign_put(&ctx, "presign_put_test", Duration::from_secs(300), None)?;
    debug!("presigned url: {url}");

    let resp = Client::new()
        .put(url.as_str())
        .body("Hello, World!")
        .send()
        .await?;
    let status = resp.status().as_u16();
    debug!("got response: {:?}", resp.text().await?);
    assert_eq!(StatusCode::OK.as_u16(), status);
    Ok(())
}
