//! Authentication Module
//!
//! Azure認証関連の機能

pub mod azure_auth;
pub mod object_store_bridge;

pub use azure_auth::{AmbientCredentials, StaticCredentialProvider};
pub use object_store_bridge::ObjectStoreCredentialBridge;
