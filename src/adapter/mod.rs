//! Adapter Layer
//!
//! 外部システム（Azure Blob Storage, ファイルシステム）との統合

pub mod auth;
pub mod config;
pub mod output;
pub mod storage;
