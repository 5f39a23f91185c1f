//! # Domain Services
//!
//! gold データに対するビジネスルール（絞り込み）

pub mod nssp_filter;
