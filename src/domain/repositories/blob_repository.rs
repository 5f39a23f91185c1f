//! # Blob Repository Trait
//!
//! コンテナ単位のblobダウンロードを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// blobリポジトリ
///
/// 1つのコンテナにスコープされたストレージクライアント
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobRepository: Send + Sync {
    /// blobの内容をすべてメモリにダウンロードする
    ///
    /// # Arguments
    ///
    /// * `blob_name` - コンテナ内のblobパス
    ///
    /// # Errors
    ///
    /// blobが存在しない場合や、通信・認証に失敗した場合にエラーを返す
    async fn download(&self, blob_name: &str) -> Result<Vec<u8>>;
}

/// blobクライアントのファクトリ
///
/// 認証情報の構築とクライアント生成を呼び出しごとに行う
#[cfg_attr(test, automock)]
pub trait BlobClientFactory: Send + Sync {
    fn create_client(&self) -> Result<Arc<dyn BlobRepository>>;
}
