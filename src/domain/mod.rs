//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ストレージやCLIについて何も知らない
//! - データの表現には polars の `LazyFrame` を用いる
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: バリューオブジェクト（Disease, gold blob パス）
//! - **repositories**: Repository trait（blob取得、認証情報）
//! - **services**: Domain Service（地域・疾病フィルタ）
//! - **errors**: 公開エラー型

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
