//! object_store Credential Bridge
//!
//! ドメインの `CredentialProvider` を object_store の Azure 認証に接続する

use async_trait::async_trait;
use object_store::azure::{AzureAccessKey, AzureCredential};
use object_store::CredentialProvider as ObjectStoreCredentialProvider;
use std::fmt;
use std::sync::Arc;

use crate::domain::repositories::credential_provider::{CredentialProvider, StorageCredential};

const STORE: &str = "MicrosoftAzure";

/// object_store から認証情報を要求されるたびに内側のプロバイダへ問い合わせる
pub struct ObjectStoreCredentialBridge {
    inner: Arc<dyn CredentialProvider>,
}

impl ObjectStoreCredentialBridge {
    pub fn new(inner: Arc<dyn CredentialProvider>) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for ObjectStoreCredentialBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectStoreCredentialBridge").finish_non_exhaustive()
    }
}

#[async_trait]
impl ObjectStoreCredentialProvider for ObjectStoreCredentialBridge {
    type Credential = AzureCredential;

    async fn get_credential(&self) -> object_store::Result<Arc<AzureCredential>> {
        let credential =
            self.inner
                .credential()
                .await
                .map_err(|e| object_store::Error::Generic {
                    store: STORE,
                    source: e.into(),
                })?;
        to_azure_credential(credential).map(Arc::new)
    }
}

/// ドメインの認証情報を object_store の形式に変換
pub fn to_azure_credential(credential: StorageCredential) -> object_store::Result<AzureCredential> {
    Ok(match credential {
        StorageCredential::AccessKey(key) => AzureCredential::AccessKey(AzureAccessKey::try_new(&key)?),
        StorageCredential::SasToken(token) => AzureCredential::SASToken(parse_sas_token(&token)),
        StorageCredential::BearerToken(token) => AzureCredential::BearerToken(token),
    })
}

/// `?sv=...&sig=...` をクエリのペアに分解（値はデコード済み）
pub fn parse_sas_token(token: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(token.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}
