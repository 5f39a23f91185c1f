//! # Credential Provider Trait
//!
//! ストレージ認証情報の取得を抽象化
//!
//! 環境変数やCLIなどの暗黙的な認証解決をこの境界の外に置き、
//! テストでは固定の認証情報に差し替えられるようにする。

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

#[cfg(test)]
use mockall::automock;

/// ストレージ認証情報
#[derive(Clone, PartialEq, Eq)]
pub enum StorageCredential {
    /// ストレージアカウントの共有キー（base64）
    AccessKey(String),
    /// SASトークン（`sv=...&sig=...` 形式のクエリ文字列）
    SasToken(String),
    /// Entra ID のアクセストークン
    BearerToken(String),
}

impl StorageCredential {
    /// 認証方式の名前
    pub fn kind(&self) -> &'static str {
        match self {
            StorageCredential::AccessKey(_) => "access key",
            StorageCredential::SasToken(_) => "SAS token",
            StorageCredential::BearerToken(_) => "bearer token",
        }
    }
}

// 秘密情報をログに出さない
impl fmt::Debug for StorageCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorageCredential({}: <redacted>)", self.kind())
    }
}

/// 認証情報プロバイダ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// 認証情報を取得する
    ///
    /// # Errors
    ///
    /// 認証情報が見つからない、または取得に失敗した場合にエラーを返す
    async fn credential(&self) -> Result<StorageCredential>;
}
