//! Frame Output
//!
//! 照会結果をファイルへ書き出す

use anyhow::{bail, Context, Result};
use log::info;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Parquet,
    Csv,
}

impl OutputFormat {
    /// 拡張子から出力形式を決める
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("parquet") => Ok(OutputFormat::Parquet),
            Some("csv") => Ok(OutputFormat::Csv),
            _ => bail!(
                "Unsupported output file {} (expected .parquet or .csv)",
                path.display()
            ),
        }
    }
}

/// DataFrame をファイルに書き出す
pub struct FrameWriter;

impl FrameWriter {
    pub fn write(df: &mut DataFrame, path: &Path) -> Result<()> {
        let format = OutputFormat::from_path(path)?;
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;

        match format {
            OutputFormat::Parquet => {
                ParquetWriter::new(&mut file)
                    .with_compression(ParquetCompression::Snappy)
                    .finish(df)
                    .with_context(|| format!("Failed to write parquet {}", path.display()))?;
            }
            OutputFormat::Csv => {
                CsvWriter::new(&mut file)
                    .include_header(true)
                    .finish(df)
                    .with_context(|| format!("Failed to write CSV {}", path.display()))?;
            }
        }

        info!("Wrote {} rows to {}", df.height(), path.display());
        Ok(())
    }
}
