use crate::{constants::*, Credential};
use async_trait::async_trait;
use log::debug;
use presign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads Huawei Cloud credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `HUAWEI_CLOUD_ACCESS_KEY_ID`: The Huawei Cloud access key ID
/// - `HUAWEI_CLOUD_SECRET_ACCESS_KEY`: The Huawei Cloud secret access key
///
/// Both must be present and non-empty.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let access_key_id = envs
            .get(HUAWEI_CLOUD_ACCESS_KEY_ID)
            .filter(|v| !v.is_empty());
        let secret_access_key = envs
            .get(HUAWEI_CLOUD_SECRET_ACCESS_KEY)
            .filter(|v| !v.is_empty());

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential::new(ak, sk))),
            _ => {
                debug!("huaweicloud credential not found in env");
                Ok(None)
            }
        }
    }
}
