// ABOUTME: Command-line host for generating Carewatch health reports
// ABOUTME: Builds single-subject or family reports and writes them as HTML, JSON, CSV, or TOON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Carewatch Report Generator
//!
//! ## Usage
//!
//! ```bash
//! # HTML report for one person, last 30 days
//! cargo run --bin carewatch-report -- --name "Margaret" --age 82 --status warning
//!
//! # Reproducible CSV export for 14 days
//! cargo run --bin carewatch-report -- --name "Walter" --status good --days 14 --format csv --seed 7
//!
//! # Family report from a JSON array of subjects, written to a directory
//! cargo run --bin carewatch-report -- --family family.json --format json --output reports/
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use uuid::Uuid;

use carewatch_reports::config::ReportConfig;
use carewatch_reports::exporters::{export_report, ExportFormat, ExportedReport};
use carewatch_reports::logging::LoggingConfig;
use carewatch_reports::models::{FamilyAggregation, HealthStatus, Subject, SubjectRequest};

#[derive(Parser)]
#[command(
    name = "carewatch-report",
    about = "Carewatch Health Report Generator",
    long_about = "Generate a health report for one monitored person or an aggregate report for a family"
)]
struct ReportArgs {
    /// Display name of the monitored person
    #[arg(long, required_unless_present = "family")]
    name: Option<String>,

    /// Age in whole years
    #[arg(long, default_value_t = 75)]
    age: u32,

    /// Relation to the account holder (e.g. Mother)
    #[arg(long, default_value = "")]
    relation: String,

    /// Health status (excellent, good, warning, critical)
    #[arg(long, default_value = "good")]
    status: String,

    /// Number of days to cover (defaults to `CAREWATCH_DEFAULT_DAYS` or 30)
    #[arg(long, allow_negative_numbers = true)]
    days: Option<i64>,

    /// JSON file holding an array of subjects for a family report
    #[arg(long, conflicts_with_all = ["name", "days"])]
    family: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Document)]
    format: FormatArg,

    /// Family aggregation mode (overrides `CAREWATCH_FAMILY_AGGREGATION`)
    #[arg(long, value_enum)]
    aggregation: Option<AggregationArg>,

    /// Random seed for reproducible output (overrides `CAREWATCH_RANDOM_SEED`)
    #[arg(long)]
    seed: Option<u64>,

    /// Output file or directory; stdout when omitted
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Document,
    Json,
    #[cfg(feature = "toon")]
    Toon,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Document => Self::Document,
            FormatArg::Json => Self::Json,
            #[cfg(feature = "toon")]
            FormatArg::Toon => Self::Toon,
            FormatArg::Csv => Self::Csv,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AggregationArg {
    Synthetic,
    Computed,
}

impl From<AggregationArg> for FamilyAggregation {
    fn from(arg: AggregationArg) -> Self {
        match arg {
            AggregationArg::Synthetic => Self::Synthetic,
            AggregationArg::Computed => Self::Computed,
        }
    }
}

fn main() -> Result<()> {
    let args = ReportArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = ReportConfig::from_env()?;
    if let Some(seed) = args.seed {
        config.random_seed = Some(seed);
    }
    if let Some(aggregation) = args.aggregation {
        config.family_aggregation = aggregation.into();
    }

    let assembler = config.assembler();
    let mut ctx = config.generation_context();
    let format = ExportFormat::from(args.format);

    let exported = if let Some(path) = &args.family {
        let subjects = load_family(path)?;
        let report = assembler.assemble_family_report(&subjects, &mut ctx)?;
        export_report((&report).into(), format)?
    } else {
        let subject = subject_from_args(&args)?;
        let days = args.days.unwrap_or_else(|| i64::from(config.default_days));
        let report = assembler.assemble_report(&subject, days, &mut ctx)?;
        export_report((&report).into(), format)?
    };

    write_output(&exported, args.output.as_deref())
}

fn subject_from_args(args: &ReportArgs) -> Result<Subject> {
    let name = args
        .name
        .clone()
        .ok_or_else(|| anyhow!("--name is required for a single-subject report"))?;
    let status: HealthStatus = args.status.parse()?;
    Ok(Subject::new(
        Uuid::new_v4().to_string(),
        name,
        args.age,
        args.relation.clone(),
        status,
    ))
}

fn load_family(path: &Path) -> Result<Vec<Subject>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read family file {}: {e}", path.display()))?;
    let requests: Vec<SubjectRequest> = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("Invalid family file {}: {e}", path.display()))?;
    let subjects = requests
        .into_iter()
        .map(Subject::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    info!(members = subjects.len(), path = %path.display(), "Loaded family");
    Ok(subjects)
}

fn write_output(exported: &ExportedReport, output: Option<&Path>) -> Result<()> {
    let Some(output) = output else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(exported.content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    let target = if output.is_dir() {
        output.join(&exported.file_name)
    } else {
        output.to_path_buf()
    };
    fs::write(&target, &exported.content)
        .map_err(|e| anyhow!("Failed to write {}: {e}", target.display()))?;

    info!(
        path = %target.display(),
        format = %exported.format,
        content_type = exported.content_type,
        bytes = exported.content.len(),
        "Report written"
    );
    Ok(())
}
