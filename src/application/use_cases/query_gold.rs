//! # Query Gold Data Use Case
//!
//! gold データの取得と地域・疾病フィルタをまとめて行うユースケース

use log::info;
use polars::prelude::LazyFrame;
use std::sync::Arc;

use crate::application::dto::gold_query::GoldQuery;
use crate::application::use_cases::fetch_gold::FetchGoldDataUseCase;
use crate::domain::entities::disease::parse_disease;
use crate::domain::errors::NsspError;
use crate::domain::repositories::blob_repository::BlobClientFactory;
use crate::domain::services::nssp_filter::{filter_disease, filter_geography};

/// gold データ照会ユースケース
pub struct QueryGoldUseCase<F: BlobClientFactory + ?Sized> {
    fetch_use_case: FetchGoldDataUseCase<F>,
}

impl<F: BlobClientFactory + ?Sized> QueryGoldUseCase<F> {
    /// 新しいユースケースを作成
    pub fn new(client_factory: Arc<F>) -> Self {
        Self {
            fetch_use_case: FetchGoldDataUseCase::new(client_factory),
        }
    }

    /// 照会条件に従って gold データを取得・絞り込む
    ///
    /// 疾病名はダウンロード前に検証する
    ///
    /// # Errors
    ///
    /// 疾病名が不正な場合は `NsspError::InvalidDiseaseName`、
    /// 取得に失敗した場合は `NsspError::Fetch` を返す
    pub async fn execute(&self, query: &GoldQuery) -> Result<LazyFrame, NsspError> {
        let disease = query.disease.as_deref().filter(|d| !d.is_empty());
        if let Some(name) = disease {
            parse_disease(name)?;
        }

        let data = self.fetch_use_case.execute(query.report_date).await?;

        info!(
            "Filtering gold data: geo_values={:?}, disease={:?}",
            query.geo_values, disease
        );
        let data = filter_geography(data, Some(query.geo_values.as_slice()));
        filter_disease(data, disease)
    }
}
