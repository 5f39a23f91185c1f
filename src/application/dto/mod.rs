//! # Data Transfer Objects

pub mod gold_query;
