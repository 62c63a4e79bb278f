//! Presign a temporary url from env configuration.
//!
//! ```bash
//! export HUAWEI_CLOUD_ACCESS_KEY_ID=your-access-key-id
//! export HUAWEI_CLOUD_SECRET_ACCESS_KEY=your-secret-access-key
//! export HUAWEI_CLOUD_OBS_BUCKET=your-bucket
//! export HUAWEI_CLOUD_OBS_ENDPOINT=obs.cn-north-4.myhuaweicloud.com
//! RUST_LOG=debug cargo run --example presign_url -- GET path/to/object.txt 3600
//! ```

use std::env;
use std::time::Duration;

use presign_core::time::{format_rfc3339, from_timestamp};
use presign_core::{Context, Error, Result};
use presign_huaweicloud_obs::{presign, Config, HttpVerb, PresignRequest};

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let mut args = env::args().skip(1);
    let method = args.next().unwrap_or_else(|| "GET".to_string());
    let key = args
        .next()
        .ok_or_else(|| Error::invalid_input("usage: presign_url <METHOD> <KEY> [SECONDS]"))?;
    let seconds = match args.next() {
        Some(v) => v
            .parse::<u64>()
            .map_err(|e| Error::invalid_input(format!("invalid expiry seconds {v:?}: {e}")))?,
        None => 3600,
    };

    let method = method
        .to_ascii_uppercase()
        .parse::<http::Method>()
        .map_err(|e| Error::invalid_input(format!("invalid method: {e}")))?;
    let verb = HttpVerb::try_from(&method)?;

    let ctx = Config::new().from_env(&Context::new()).bucket_context()?;
    let req = PresignRequest::new(key)
        .with_verb(verb)
        .with_expires_in(Duration::from_secs(seconds));

    let url = presign(&ctx, &req)?;
    println!("{url}");
    if let Some(t) = from_timestamp(url.expires_at()) {
        println!("expires at {}", format_rfc3339(t));
    }

    Ok(())
}
