//! Azure Storage Constants
//!
//! ストレージアカウントとコンテナの既定値

/// Azure Blob Storage の既定値
pub struct AzureStorage;

impl AzureStorage {
    pub const AZURE_STORAGE_ACCOUNT_URL: &'static str =
        "https://cfaazurebatchprd.blob.core.windows.net/";
    /// gold データの取得元
    pub const NSSP_CONTAINER_NAME: &'static str = "nssp-etl";
    /// パイプライン出力用（このクレートでは読み書きしない）
    pub const RT_CONTAINER_NAME: &'static str = "zs-test-pipeline-update";
}
