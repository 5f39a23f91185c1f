//! # Scan Blob Parquet Use Case
//!
//! blob上のparquetファイルを LazyFrame として参照する

use anyhow::{Context, Result};
use log::debug;
use polars::prelude::*;
use polars_plan::plans::ScanSources;
use polars_utils::mmap::MemSlice;
use std::sync::Arc;

use crate::domain::repositories::blob_repository::BlobRepository;

/// parquet blob 参照ユースケース
///
/// blobをすべてメモリに読み込み、そのバッファを parquet スキャンのソースにする。
/// 列・行の絞り込みはスキャン時に適用される。blob の部分読み込みは行わない。
pub struct ScanBlobParquetUseCase<R: BlobRepository + ?Sized> {
    blob_repository: Arc<R>,
}

impl<R: BlobRepository + ?Sized> ScanBlobParquetUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `blob_repository` - コンテナにスコープされたblobリポジトリ
    pub fn new(blob_repository: Arc<R>) -> Self {
        Self { blob_repository }
    }

    /// blobを LazyFrame として読み込む
    ///
    /// # Arguments
    ///
    /// * `blob_name` - コンテナ内のblobパス
    ///
    /// # Errors
    ///
    /// ダウンロードまたはparquetメタデータの読み込みに失敗した場合、そのエラーをそのまま返す
    pub async fn execute(&self, blob_name: &str) -> Result<LazyFrame> {
        let bytes = self.blob_repository.download(blob_name).await?;
        debug!("Downloaded {} ({} bytes)", blob_name, bytes.len());

        let sources = ScanSources::Buffers(Arc::from([MemSlice::from_vec(bytes)]));
        let mut frame = LazyFrame::scan_parquet_sources(sources, ScanArgsParquet::default())
            .with_context(|| format!("Failed to scan parquet blob {}", blob_name))?;

        // スキーマを先に解決し、壊れたファイルをここで検出する
        let schema = frame
            .collect_schema()
            .with_context(|| format!("Failed to decode parquet blob {}", blob_name))?;
        debug!("{} has {} columns", blob_name, schema.len());

        Ok(frame)
    }
}
