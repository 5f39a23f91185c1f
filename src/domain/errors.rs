//! # Domain Errors
//!
//! 呼び出し側に公開するエラー型

use thiserror::Error;

use super::entities::disease::Disease;

/// NSSPデータ取得・フィルタのエラー
#[derive(Debug, Error)]
pub enum NsspError {
    /// gold データの取得に失敗した
    ///
    /// メッセージは原因に関わらず同一。元のエラーは `source()` から辿れる
    #[error("Failed to pull gold data for {path}.")]
    Fetch {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// 疾病名を正規化できなかった
    #[error(
        "Could not parse disease name: {input}. Expecting one of {}, {}",
        Disease::Covid19,
        Disease::Influenza
    )]
    InvalidDiseaseName { input: String },
}

impl NsspError {
    /// 取得失敗エラーを作成
    pub fn fetch(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Fetch {
            path: path.into(),
            source,
        }
    }

    /// 不正な疾病名エラーを作成
    pub fn invalid_disease(input: impl Into<String>) -> Self {
        Self::InvalidDiseaseName {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_fetch_message_hides_cause() {
        let err = NsspError::fetch(
            "gold/2024-01-01.parquet",
            anyhow::anyhow!("403 AuthorizationFailure"),
        );

        assert_eq!(
            err.to_string(),
            "Failed to pull gold data for gold/2024-01-01.parquet."
        );
        assert!(!err.to_string().contains("403"));
    }

    #[test]
    fn test_fetch_keeps_source() {
        let err = NsspError::fetch("gold/2024-01-01.parquet", anyhow::anyhow!("not found"));

        let source = err.source().expect("fetch error should chain its cause");
        assert_eq!(source.to_string(), "not found");
    }

    #[test]
    fn test_invalid_disease_message() {
        let err = NsspError::invalid_disease("corvid19");
        assert_eq!(
            err.to_string(),
            "Could not parse disease name: corvid19. Expecting one of COVID-19, Influenza"
        );
    }
}
