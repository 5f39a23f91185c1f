//! Configuration
//!
//! JSON設定ファイルの読み込み。各項目は省略可能で、省略時は既定値を使う

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::adapter::storage::constants::AzureStorage;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// ストレージアカウントURL（`https://<account>.blob.core.windows.net/`）
    pub account_url: String,
    /// gold データのコンテナ
    pub gold_container: String,
    /// パイプライン出力のコンテナ
    pub pipeline_container: String,
    /// 他の認証設定がないとき、マネージドIDの代わりに Azure CLI のログインを使う
    pub use_azure_cli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_url: AzureStorage::AZURE_STORAGE_ACCOUNT_URL.to_string(),
            gold_container: AzureStorage::NSSP_CONTAINER_NAME.to_string(),
            pipeline_container: AzureStorage::RT_CONTAINER_NAME.to_string(),
            use_azure_cli: false,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        Self::load_from(Path::new(&*shellexpand::tilde(path)))
    }

    /// ファイルがあれば読み込み、なければ既定値を返す
    pub fn load_or_default(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(&*expanded);
        if path.exists() {
            Self::load_from(path)
        } else {
            info!("Config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// 展開済みのパスから読み込む
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
