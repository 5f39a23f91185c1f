//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::output::FrameWriter;
use crate::adapter::storage::{AzureClientFactory, LocalClientFactory};
use crate::application::dto::gold_query::GoldQuery;
use crate::application::use_cases::query_gold::QueryGoldUseCase;
use crate::domain::repositories::blob_repository::BlobClientFactory;

use super::cli::Args;

/// 引数から照会条件を作る
pub fn query_from_args(args: &Args) -> GoldQuery {
    let geo_values = args
        .geo_values
        .iter()
        .map(|geo| geo.trim().to_string())
        .filter(|geo| !geo.is_empty())
        .collect();

    let query = GoldQuery::new(args.report_date).with_geo_values(geo_values);
    match &args.disease {
        Some(disease) => query.with_disease(disease.clone()),
        None => query,
    }
}

/// Gold Query Workflow
pub struct GoldQueryWorkflow {
    config: Config,
}

impl GoldQueryWorkflow {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 引数に応じてクライアントファクトリを選ぶ
    fn client_factory(&self, args: &Args) -> Arc<dyn BlobClientFactory> {
        match &args.local_dir {
            Some(dir) => {
                let dir = shellexpand::tilde(dir).to_string();
                info!("Reading blobs from local directory {}", dir);
                Arc::new(LocalClientFactory::new(dir))
            }
            None => {
                info!(
                    "Reading blobs from {} (container: {})",
                    self.config.account_url, self.config.gold_container
                );
                Arc::new(AzureClientFactory::new(&self.config))
            }
        }
    }

    /// Execute the gold query workflow
    pub async fn execute(&self, args: Args) -> Result<()> {
        let query = query_from_args(&args);
        info!("Report date: {}", query.report_date);

        let use_case = QueryGoldUseCase::new(self.client_factory(&args));
        let frame = use_case.execute(&query).await?;

        let mut df = frame.collect().context("Failed to evaluate gold data")?;
        println!("✓ {} rows for {}", df.height(), query.report_date);

        match &args.output {
            Some(output) => {
                let path = shellexpand::tilde(output).to_string();
                FrameWriter::write(&mut df, Path::new(&path))?;
                println!("✓ Wrote {}", path);
            }
            None => println!("{}", df),
        }

        Ok(())
    }
}
