//! Blob Client Factories
//!
//! BlobClientFactory の実装（Azure / ローカルディレクトリ）

use anyhow::{anyhow, Context, Result};
use log::debug;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::local::LocalFileSystem;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

use crate::adapter::auth::{AmbientCredentials, ObjectStoreCredentialBridge};
use crate::adapter::config::Config;
use crate::adapter::storage::object_store_repository::ObjectStoreBlobRepository;
use crate::domain::repositories::blob_repository::{BlobClientFactory, BlobRepository};
use crate::domain::repositories::credential_provider::CredentialProvider;

const BLOB_HOST_SUFFIX: &str = ".blob.core.windows.net";

/// `https://<account>.blob.core.windows.net/` からアカウント名を取り出す
pub fn account_name_from_url(account_url: &str) -> Result<String> {
    let url = Url::parse(account_url)
        .with_context(|| format!("Invalid storage account URL {}", account_url))?;
    let host = url
        .host_str()
        .ok_or_else(|| anyhow!("Storage account URL has no host: {}", account_url))?;

    host.strip_suffix(BLOB_HOST_SUFFIX)
        .filter(|account| !account.is_empty() && !account.contains('.'))
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Not an Azure Blob Storage account URL: {}", account_url))
}

/// Azure クライアントの認証方法
#[derive(Clone)]
pub enum AzureCredentials {
    /// 環境の `AZURE_*` 設定とマネージドIDを object_store に解決させる
    Ambient(AmbientCredentials),
    /// 注入されたプロバイダに毎回問い合わせる
    Provider(Arc<dyn CredentialProvider>),
}

/// gold コンテナにスコープされた Azure クライアントを作成するファクトリ
pub struct AzureClientFactory {
    account_url: String,
    container: String,
    credentials: AzureCredentials,
}

impl AzureClientFactory {
    /// 環境の認証設定を使うファクトリを作成
    pub fn new(config: &Config) -> Self {
        Self::with_credentials(
            config,
            AzureCredentials::Ambient(AmbientCredentials::from_env(config.use_azure_cli)),
        )
    }

    /// 認証情報を明示的に注入してファクトリを作成
    pub fn with_credential_provider(
        config: &Config,
        credential_provider: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self::with_credentials(config, AzureCredentials::Provider(credential_provider))
    }

    pub fn with_credentials(config: &Config, credentials: AzureCredentials) -> Self {
        Self {
            account_url: config.account_url.clone(),
            container: config.gold_container.clone(),
            credentials,
        }
    }
}

impl BlobClientFactory for AzureClientFactory {
    fn create_client(&self) -> Result<Arc<dyn BlobRepository>> {
        let account = account_name_from_url(&self.account_url)?;

        let builder = match &self.credentials {
            AzureCredentials::Ambient(ambient) => {
                debug!(
                    "Creating Azure client for {}/{} ({})",
                    account,
                    self.container,
                    ambient.kind()
                );
                ambient.apply(MicrosoftAzureBuilder::new())
            }
            AzureCredentials::Provider(provider) => {
                debug!(
                    "Creating Azure client for {}/{} (injected credential)",
                    account, self.container
                );
                MicrosoftAzureBuilder::new()
                    .with_credentials(Arc::new(ObjectStoreCredentialBridge::new(provider.clone())))
            }
        };

        let store = builder
            .with_account(account)
            .with_container_name(&self.container)
            .build()
            .context("Failed to create Azure Blob Storage client")?;

        Ok(Arc::new(ObjectStoreBlobRepository::new(Arc::new(store))))
    }
}

/// ローカルディレクトリをコンテナとして扱うファクトリ
///
/// blob `gold/2024-12-25.parquet` は `<root>/gold/2024-12-25.parquet` に対応する
pub struct LocalClientFactory {
    root: PathBuf,
}

impl LocalClientFactory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl BlobClientFactory for LocalClientFactory {
    fn create_client(&self) -> Result<Arc<dyn BlobRepository>> {
        let store = LocalFileSystem::new_with_prefix(&self.root)
            .with_context(|| format!("Failed to open local blob directory {}", self.root.display()))?;
        Ok(Arc::new(ObjectStoreBlobRepository::new(Arc::new(store))))
    }
}
