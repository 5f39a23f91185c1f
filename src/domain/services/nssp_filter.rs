//! # NSSP Filter Service
//!
//! gold データの LazyFrame を地域・疾病で絞り込む
//!
//! いずれの関数も評価を行わず、述語を積んだ新しい LazyFrame を返す。
//! フィルタ条件が空の場合は入力をそのまま返す。

use polars::prelude::*;

use crate::domain::entities::disease::parse_disease;
use crate::domain::errors::NsspError;

/// 地域コードのカラム名
pub const GEO_COL: &str = "geo_value";
/// 疾病のカラム名
pub const DISEASE_COL: &str = "disease";

/// 指定した地域コードの行だけを残す
///
/// # Arguments
///
/// * `data` - gold データ
/// * `geo_values` - 残す地域コード。`None` または空の場合は絞り込まない
///
/// 存在しない地域コードは何にも一致しないだけで、エラーにはならない
pub fn filter_geography<S: AsRef<str>>(data: LazyFrame, geo_values: Option<&[S]>) -> LazyFrame {
    let geo_values = match geo_values {
        Some(values) if !values.is_empty() => values,
        _ => return data,
    };

    let values: Vec<&str> = geo_values.iter().map(AsRef::as_ref).collect();
    let members = Series::new(GEO_COL.into(), values);

    data.filter(col(GEO_COL).is_in(lit(members)))
}

/// 指定した疾病の行だけを残す
///
/// # Arguments
///
/// * `data` - gold データ
/// * `disease` - 疾病名（表記ゆれ可）。`None` または空文字の場合は絞り込まない
///
/// # Errors
///
/// 疾病名を正規化できない場合 `NsspError::InvalidDiseaseName` を返す
pub fn filter_disease(data: LazyFrame, disease: Option<&str>) -> Result<LazyFrame, NsspError> {
    let disease = match disease {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(data),
    };

    let canonical = parse_disease(disease)?;
    Ok(data.filter(col(DISEASE_COL).eq(lit(canonical))))
}
