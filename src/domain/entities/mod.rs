//! # Domain Entities
//!
//! バリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Disease**: 正規化済みの疾病（`Influenza` / `COVID-19`）
//! - **gold_blob**: レポート日付から blob パスへの変換

pub mod disease;
pub mod gold_blob;
