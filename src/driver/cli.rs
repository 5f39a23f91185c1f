//! CLI Argument Parsing
//!
//! CLIの引数解析

use chrono::NaiveDate;
use clap::Parser;

/// NSSP gold データを取得して地域・疾病で絞り込むCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "nssp-gold")]
#[command(about = "Pull NSSP gold data for a report date and filter it", long_about = None)]
pub struct Args {
    /// Report date (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    pub report_date: NaiveDate,

    /// Geography codes to keep (repeatable or comma separated)
    #[arg(short, long = "geo", value_delimiter = ',')]
    pub geo_values: Vec<String>,

    /// Disease to keep (e.g. covid, COVID-19, flu, Influenza)
    #[arg(long)]
    pub disease: Option<String>,

    /// Config file path (defaults are used when the file does not exist)
    #[arg(short, long, default_value = "./nssp-gold.json")]
    pub config: String,

    /// Read blobs from a local directory instead of Azure Blob Storage
    #[arg(long)]
    pub local_dir: Option<String>,

    /// Output file (.parquet or .csv); prints the result when omitted
    #[arg(short, long)]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_minimal() {
        let args = Args::parse_from(["nssp-gold", "--report-date", "2024-12-25"]);
        assert_eq!(args.report_date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert!(args.geo_values.is_empty());
        assert!(args.disease.is_none());
        assert_eq!(args.config, "./nssp-gold.json");
        assert!(args.local_dir.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_args_geo_repeated_and_delimited() {
        let args = Args::parse_from([
            "nssp-gold", "-d", "2024-12-25", "--geo", "FL,WA", "--geo", "CA",
        ]);
        assert_eq!(args.geo_values, vec!["FL", "WA", "CA"]);
    }

    #[test]
    fn test_args_combined() {
        let args = Args::parse_from([
            "nssp-gold",
            "-d",
            "2024-12-25",
            "--disease",
            "covid",
            "--local-dir",
            "/data/blobs",
            "-o",
            "out.csv",
            "-c",
            "/custom/config.json",
        ]);
        assert_eq!(args.disease.as_deref(), Some("covid"));
        assert_eq!(args.local_dir.as_deref(), Some("/data/blobs"));
        assert_eq!(args.output.as_deref(), Some("out.csv"));
        assert_eq!(args.config, "/custom/config.json");
    }

    #[test]
    fn test_args_invalid_date() {
        assert!(Args::try_parse_from(["nssp-gold", "-d", "2024-13-01"]).is_err());
        assert!(Args::try_parse_from(["nssp-gold"]).is_err());
    }
}
