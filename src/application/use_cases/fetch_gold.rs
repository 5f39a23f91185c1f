//! # Fetch Gold Data Use Case
//!
//! レポート日付の gold データを取得するユースケース

use chrono::NaiveDate;
use log::{error, info};
use polars::prelude::LazyFrame;
use std::sync::Arc;

use crate::application::use_cases::scan_blob::ScanBlobParquetUseCase;
use crate::domain::entities::gold_blob::gold_blob_path;
use crate::domain::errors::NsspError;
use crate::domain::repositories::blob_repository::BlobClientFactory;

/// gold データ取得ユースケース
///
/// 呼び出しごとにクライアントを生成し、`gold/<日付>.parquet` を読み込む
pub struct FetchGoldDataUseCase<F: BlobClientFactory + ?Sized> {
    client_factory: Arc<F>,
}

impl<F: BlobClientFactory + ?Sized> FetchGoldDataUseCase<F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `client_factory` - gold コンテナ用のクライアントファクトリ
    pub fn new(client_factory: Arc<F>) -> Self {
        Self { client_factory }
    }

    /// gold データを取得する
    ///
    /// # Arguments
    ///
    /// * `report_date` - レポート日付
    ///
    /// # Returns
    ///
    /// gold データの LazyFrame
    ///
    /// # Errors
    ///
    /// クライアント生成・認証・通信・blob不在・デコードのいずれで失敗しても
    /// `NsspError::Fetch` を返す。元のエラーはログに出力したうえで `source()` に保持する
    pub async fn execute(&self, report_date: NaiveDate) -> Result<LazyFrame, NsspError> {
        let path = gold_blob_path(report_date);
        info!("Pulling gold data from {}", path);

        let result: anyhow::Result<LazyFrame> = async {
            let client = self.client_factory.create_client()?;
            ScanBlobParquetUseCase::new(client).execute(&path).await
        }
        .await;

        result.map_err(|source| {
            error!("Failed to pull gold data for {}: {:#}", path, source);
            NsspError::fetch(path, source)
        })
    }
}
