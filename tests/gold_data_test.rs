//! Gold Data Integration Tests
//!
//! ローカルディレクトリを blob コンテナとして gold データの取得と絞り込みを検証

use chrono::NaiveDate;
use nssp_gold::adapter::storage::LocalClientFactory;
use nssp_gold::application::dto::gold_query::GoldQuery;
use nssp_gold::application::use_cases::query_gold::QueryGoldUseCase;
use nssp_gold::{filter_disease, filter_geography, FetchGoldDataUseCase, NsspError};
use polars::prelude::*;
use std::collections::HashSet;
use std::error::Error as _;
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
}

fn gold_frame() -> DataFrame {
    df!(
        "reference_date" => ["2024-12-21", "2024-12-21", "2024-12-21", "2024-12-21", "2024-12-14", "2024-12-14", "2024-12-14", "2024-12-14"],
        "geo_value" => ["FL", "WA", "CA", "NY", "FL", "WA", "CA", "TX"],
        "disease" => ["Influenza", "Influenza", "COVID-19", "Influenza", "COVID-19", "COVID-19", "Influenza", "Total"],
        "value" => [120i64, 45, 300, 80, 95, 60, 210, 1500]
    )
    .unwrap()
}

/// `<root>/gold/2024-12-25.parquet` を作成
fn write_gold_blob(root: &Path) {
    fs::create_dir_all(root.join("gold")).unwrap();
    let mut file = File::create(root.join("gold/2024-12-25.parquet")).unwrap();
    ParquetWriter::new(&mut file).finish(&mut gold_frame()).unwrap();
}

fn fetcher(root: &Path) -> FetchGoldDataUseCase<LocalClientFactory> {
    FetchGoldDataUseCase::new(Arc::new(LocalClientFactory::new(root)))
}

fn distinct(df: &DataFrame, column: &str) -> HashSet<String> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .flatten()
        .map(String::from)
        .collect()
}

#[tokio::test]
async fn test_fetch_and_filter_geography() {
    let dir = TempDir::new().unwrap();
    write_gold_blob(dir.path());

    let data = fetcher(dir.path()).execute(report_date()).await.unwrap();
    let geo_values = ["FL", "WA"];
    let filtered = filter_geography(data, Some(&geo_values[..])).collect().unwrap();

    assert_eq!(
        distinct(&filtered, "geo_value"),
        HashSet::from(["FL".to_string(), "WA".to_string()])
    );
    assert_eq!(filtered.height(), 4);
}

#[tokio::test]
async fn test_filter_geography_is_intersection_with_data() {
    let dir = TempDir::new().unwrap();
    write_gold_blob(dir.path());

    let data = fetcher(dir.path()).execute(report_date()).await.unwrap();
    let geo_values = vec!["TX".to_string(), "GU".to_string()];
    let filtered = filter_geography(data, Some(geo_values.as_slice())).collect().unwrap();

    assert_eq!(distinct(&filtered, "geo_value"), HashSet::from(["TX".to_string()]));
}

#[tokio::test]
async fn test_unfiltered_equals_source() {
    let dir = TempDir::new().unwrap();
    write_gold_blob(dir.path());

    let data = fetcher(dir.path()).execute(report_date()).await.unwrap();
    let empty: Vec<String> = vec![];
    let data = filter_geography(data, Some(empty.as_slice()));
    let data = filter_geography::<String>(data, None);
    let data = filter_disease(data, None).unwrap();
    let data = filter_disease(data, Some("")).unwrap();

    assert!(data.collect().unwrap().equals(&gold_frame()));
}

#[tokio::test]
async fn test_filter_disease_influenza() {
    let dir = TempDir::new().unwrap();
    write_gold_blob(dir.path());

    let data = fetcher(dir.path()).execute(report_date()).await.unwrap();
    let filtered = filter_disease(data, Some("Influenza")).unwrap().collect().unwrap();

    assert_eq!(
        distinct(&filtered, "disease"),
        HashSet::from(["Influenza".to_string()])
    );
    assert_eq!(filtered.height(), 4);
}

#[tokio::test]
async fn test_missing_date_fails_with_uniform_message() {
    let dir = TempDir::new().unwrap();
    write_gold_blob(dir.path());

    let missing = NaiveDate::from_ymd_opt(2024, 12, 18).unwrap();
    let err = fetcher(dir.path()).execute(missing).await.err().unwrap();

    assert_eq!(
        err.to_string(),
        "Failed to pull gold data for gold/2024-12-18.parquet."
    );
    assert!(err.source().is_some());
}

#[tokio::test]
async fn test_missing_container_fails_with_uniform_message() {
    let err = fetcher(Path::new("/nonexistent/nssp-gold/container"))
        .execute(report_date())
        .await
        .err()
        .unwrap();

    assert!(matches!(err, NsspError::Fetch { .. }));
    assert_eq!(
        err.to_string(),
        "Failed to pull gold data for gold/2024-12-25.parquet."
    );
}

#[tokio::test]
async fn test_query_use_case_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_gold_blob(dir.path());

    let use_case = QueryGoldUseCase::new(Arc::new(LocalClientFactory::new(dir.path())));
    let query = GoldQuery::new(report_date())
        .with_geo_values(vec!["FL".to_string(), "WA".to_string(), "CA".to_string()])
        .with_disease("COVID 19");

    let result = use_case.execute(&query).await.unwrap().collect().unwrap();

    let values: Vec<i64> = result
        .column("value")
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .collect();
    assert_eq!(values, vec![300, 95, 60]);
}
