//! Example of presigning through a credential chain with logging to see credential resolution

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use presign_core::utils::Redact;
use presign_core::{Context, ProvideCredential, Result};
use presign_huaweicloud_obs::{
    Credential, DefaultCredentialProvider, EnvCredentialProvider, Presigner,
    StaticCredentialProvider,
};

/// Wrapper that logs when credentials are loaded
#[derive(Debug)]
struct LoggingProvider<P> {
    name: String,
    inner: P,
}

impl<P> LoggingProvider<P> {
    fn new(name: impl Into<String>, provider: P) -> Self {
        Self {
            name: name.into(),
            inner: provider,
        }
    }
}

#[async_trait]
impl<P> ProvideCredential for LoggingProvider<P>
where
    P: ProvideCredential<Credential = Credential>,
{
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        info!("Attempting to load credentials from: {}", self.name);

        match self.inner.provide_credential(ctx).await {
            Ok(Some(cred)) => {
                info!("Successfully loaded credentials from: {}", self.name);
                debug!(
                    "Loaded credential with access_key_id: {:?}",
                    Redact::from(&cred.access_key_id)
                );
                Ok(Some(cred))
            }
            Ok(None) => {
                info!("No credentials found in: {}", self.name);
                Ok(None)
            }
            Err(e) => {
                info!("Error loading credentials from {}: {:?}", self.name, e);
                Err(e)
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Run with RUST_LOG=debug to see the resolution order.
    env_logger::init();

    let provider = DefaultCredentialProvider::new()
        .push_front(LoggingProvider::new(
            "static fallback",
            StaticCredentialProvider::new("demo_access_key", "demo_secret_key"),
        ))
        .push_front(LoggingProvider::new("environment", EnvCredentialProvider::new()));

    let presigner = Presigner::new(
        Context::new(),
        provider,
        "example-bucket",
        "obs.cn-north-4.myhuaweicloud.com",
    );

    let url = presigner
        .presign_get("hello.txt", Duration::from_secs(600))
        .await?;
    println!("{url}");

    Ok(())
}
