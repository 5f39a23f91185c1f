//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ScanBlobParquetUseCase**: blob上のparquetを LazyFrame として参照
//! - **FetchGoldDataUseCase**: レポート日付の gold データを取得
//! - **QueryGoldUseCase**: 取得と地域・疾病フィルタ

pub mod fetch_gold;
pub mod query_gold;
pub mod scan_blob;
