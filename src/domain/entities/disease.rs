//! # Disease Value Object
//!
//! 疾病名の正規化
//!
//! 入力は大文字小文字を区別せず、固定の表記ゆれ一覧とだけ照合する。
//! 部分一致や曖昧一致は行わない。

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::NsspError;

/// `disease` カラムに格納されるインフルエンザの値
pub const FLU_KEY: &str = "Influenza";
/// `disease` カラムに格納されるCOVID-19の値
pub const COVID_KEY: &str = "COVID-19";

/// 正規化済みの疾病
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disease {
    Influenza,
    Covid19,
}

/// 小文字化した入力 → 疾病
const VARIANTS: &[(&str, Disease)] = &[
    ("covid", Disease::Covid19),
    ("covid19", Disease::Covid19),
    ("covid-19", Disease::Covid19),
    ("covid_19", Disease::Covid19),
    ("covid 19", Disease::Covid19),
    ("flu", Disease::Influenza),
    ("influenza", Disease::Influenza),
];

impl Disease {
    /// カラム上の正規表記を返す
    pub const fn as_str(&self) -> &'static str {
        match self {
            Disease::Influenza => FLU_KEY,
            Disease::Covid19 => COVID_KEY,
        }
    }

    /// 表記ゆれを含む疾病名を解析する
    ///
    /// # Errors
    ///
    /// 既知の表記に一致しない場合 `NsspError::InvalidDiseaseName` を返す
    pub fn parse(input: &str) -> Result<Self, NsspError> {
        let lowered = input.to_lowercase();
        VARIANTS
            .iter()
            .find(|(variant, _)| *variant == lowered)
            .map(|(_, disease)| *disease)
            .ok_or_else(|| NsspError::invalid_disease(input))
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Disease {
    type Err = NsspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// 疾病名を正規表記（`COVID-19` / `Influenza`）に変換する
///
/// ```
/// use nssp_gold::parse_disease;
///
/// assert_eq!(parse_disease("covid19").unwrap(), "COVID-19");
/// assert_eq!(parse_disease("Flu").unwrap(), "Influenza");
/// assert!(parse_disease("flu-19").is_err());
/// ```
pub fn parse_disease(input: &str) -> Result<&'static str, NsspError> {
    Disease::parse(input).map(|disease| disease.as_str())
}
