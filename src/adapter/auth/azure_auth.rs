//! Azure Authentication
//!
//! Azure Storage の認証情報
//!
//! 既定では `AmbientCredentials` が `AZURE_*` 変数を object_store の
//! `MicrosoftAzureBuilder` に渡し、認証の解決は builder 側のチェーンに任せる。
//! 明示的な認証情報は `StaticCredentialProvider` などの `CredentialProvider` で注入する。

use anyhow::Result;
use async_trait::async_trait;
use object_store::azure::{AzureConfigKey, MicrosoftAzureBuilder};

use crate::domain::repositories::credential_provider::{CredentialProvider, StorageCredential};

/// 固定の認証情報を返すプロバイダ
pub struct StaticCredentialProvider {
    credential: StorageCredential,
}

impl StaticCredentialProvider {
    pub fn new(credential: StorageCredential) -> Self {
        Self { credential }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn credential(&self) -> Result<StorageCredential> {
        Ok(self.credential.clone())
    }
}

const ENV_PREFIX: &str = "AZURE_";
const MSI_ENDPOINT_ENV: &str = "MSI_ENDPOINT";

/// 環境から解決する Azure の認証設定
///
/// builder の優先順位:
/// アクセストークン → 共有キー → ワークロードID → サービスプリンシパル → SAS →
/// Azure CLI（有効時のみ）→ マネージドID
#[derive(Debug, Clone)]
pub struct AmbientCredentials {
    vars: Vec<(AzureConfigKey, String)>,
    msi_endpoint: Option<String>,
    use_azure_cli: bool,
}

impl AmbientCredentials {
    /// プロセスの環境変数から作成
    pub fn from_env(use_azure_cli: bool) -> Self {
        Self::from_vars(std::env::vars(), use_azure_cli)
    }

    /// 変数の一覧から作成
    ///
    /// `AZURE_` で始まり object_store が解釈できるキーと `MSI_ENDPOINT` だけを取り込む。
    /// 値が空白のみの変数は無視する
    pub fn from_vars<I, K, V>(vars: I, use_azure_cli: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut ambient = Self {
            vars: Vec::new(),
            msi_endpoint: None,
            use_azure_cli,
        };

        for (key, value) in vars {
            let key = key.as_ref();
            let value = value.into();
            if value.trim().is_empty() {
                continue;
            }
            if key == MSI_ENDPOINT_ENV {
                ambient.msi_endpoint = Some(value);
            } else if key.starts_with(ENV_PREFIX) {
                if let Ok(config_key) = key.to_ascii_lowercase().parse::<AzureConfigKey>() {
                    ambient.vars.push((config_key, value));
                }
            }
        }

        ambient
    }

    /// builder に認証設定を適用する
    pub fn apply(&self, builder: MicrosoftAzureBuilder) -> MicrosoftAzureBuilder {
        let mut builder = self
            .vars
            .iter()
            .fold(builder, |builder, (key, value)| builder.with_config(*key, value));

        if let Some(endpoint) = &self.msi_endpoint {
            builder = builder.with_msi_endpoint(endpoint);
        }
        if self.use_azure_cli {
            builder = builder.with_use_azure_cli(true);
        }
        builder
    }

    /// builder が選ぶ認証方式の名前（ログ用）
    pub fn kind(&self) -> &'static str {
        let builder = self.apply(MicrosoftAzureBuilder::new());
        let is_set = |key: AzureConfigKey| builder.get_config_value(&key).is_some();
        let client_id = is_set(AzureConfigKey::ClientId);
        let tenant_id = is_set(AzureConfigKey::AuthorityId);

        if is_set(AzureConfigKey::Token) {
            "bearer token"
        } else if is_set(AzureConfigKey::AccessKey) {
            "access key"
        } else if client_id && tenant_id && is_set(AzureConfigKey::FederatedTokenFile) {
            "workload identity"
        } else if client_id && tenant_id && is_set(AzureConfigKey::ClientSecret) {
            "service principal"
        } else if is_set(AzureConfigKey::SasKey) {
            "sas token"
        } else if builder
            .get_config_value(&AzureConfigKey::UseAzureCli)
            .is_some_and(|value| {
                matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes" | "y")
            })
        {
            "azure cli"
        } else {
            "managed identity"
        }
    }
}
