//! # Gold Blob Path
//!
//! レポート日付から gold データの blob パスを組み立てる

use chrono::NaiveDate;

/// gold データを格納する仮想ディレクトリ
pub const GOLD_PREFIX: &str = "gold";

/// レポート日付に対応する blob パス（`gold/YYYY-MM-DD.parquet`）
pub fn gold_blob_path(report_date: NaiveDate) -> String {
    format!("{}/{}.parquet", GOLD_PREFIX, report_date.format("%Y-%m-%d"))
}
