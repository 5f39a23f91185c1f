//! # nssp-gold
//!
//! NSSP の gold データ（レポート日ごとのparquet）を Azure Blob Storage から取得し、
//! 地域・疾病で絞り込むライブラリ
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 疾病名の正規化、フィルタ、Repository trait
//! - **Application層**: blob参照・gold取得・照会のユースケース
//! - **Adapter層**: Azure認証、object_store、設定、出力
//! - **Driver層**: CLI、依存性注入
//!
//! ```no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use nssp_gold::adapter::config::Config;
//! use nssp_gold::adapter::storage::AzureClientFactory;
//! use nssp_gold::{filter_disease, filter_geography, FetchGoldDataUseCase};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::default();
//! let fetcher = FetchGoldDataUseCase::new(Arc::new(AzureClientFactory::new(&config)));
//!
//! let data = fetcher.execute(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()).await?;
//! let data = filter_geography(data, Some(&["FL", "WA"][..]));
//! let data = filter_disease(data, Some("covid"))?;
//! println!("{}", data.collect()?);
//! # Ok(())
//! # }
//! ```

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

pub use application::use_cases::fetch_gold::FetchGoldDataUseCase;
pub use domain::entities::disease::{parse_disease, Disease};
pub use domain::errors::NsspError;
pub use domain::services::nssp_filter::{filter_disease, filter_geography};
