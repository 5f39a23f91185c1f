//! # Gold Query DTO
//!
//! gold データ照会条件のData Transfer Object

use chrono::NaiveDate;
use serde::Deserialize;

/// gold データ照会条件
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoldQuery {
    /// レポート日付
    pub report_date: NaiveDate,
    /// 絞り込む地域コード（空なら全地域）
    #[serde(default)]
    pub geo_values: Vec<String>,
    /// 絞り込む疾病名（表記ゆれ可）
    #[serde(default)]
    pub disease: Option<String>,
}

impl GoldQuery {
    /// 絞り込みなしの照会条件を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nssp_gold::application::dto::gold_query::GoldQuery;
    ///
    /// let query = GoldQuery::new(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap())
    ///     .with_geo_values(vec!["FL".to_string(), "WA".to_string()])
    ///     .with_disease("flu");
    ///
    /// assert_eq!(query.geo_values.len(), 2);
    /// assert_eq!(query.disease.as_deref(), Some("flu"));
    /// ```
    pub fn new(report_date: NaiveDate) -> Self {
        Self {
            report_date,
            geo_values: Vec::new(),
            disease: None,
        }
    }

    /// 地域コードを設定
    pub fn with_geo_values(mut self, geo_values: Vec<String>) -> Self {
        self.geo_values = geo_values;
        self
    }

    /// 疾病名を設定
    pub fn with_disease(mut self, disease: impl Into<String>) -> Self {
        self.disease = Some(disease.into());
        self
    }
}
