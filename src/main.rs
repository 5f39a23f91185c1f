//! nssp-gold - NSSP Gold Data Puller
//!
//! レポート日の gold データを取得し、地域・疾病で絞り込んで出力

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use nssp_gold::adapter::config::Config;
use nssp_gold::driver::{Args, GoldQueryWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = GoldQueryWorkflow::new(config);

    workflow.execute(args).await
}
