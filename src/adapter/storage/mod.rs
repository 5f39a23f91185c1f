//! Storage Adapter Modules
//!
//! blobストレージ統合のためのアダプターモジュール

pub mod client;
pub mod constants;
pub mod object_store_repository;

pub use client::{AzureClientFactory, AzureCredentials, LocalClientFactory};
pub use constants::AzureStorage;
