use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{fs, path::{Path, PathBuf}};

use lawmap_fixtures::{ItemValidator, Reporter, RunConfig, SchemaSet};

#[derive(Parser)]
#[command(name = "xtask", about = "lawmap-fixtures workspace tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Validate API/docs/EXAMPLES.graph.jsonl against API/docs/schemas
    ValidateFixtures {
        #[arg(long)]
        check_refs: bool,
    },
    /// Validate a single JSON record file against the graph item schema
    ValidateRecord { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::ValidateFixtures { check_refs } => validate_fixtures(check_refs).await,
        Cmd::ValidateRecord { file } => validate_record(&file).await,
    }
}

async fn validate_fixtures(check_refs: bool) -> Result<()> {
    let cfg = RunConfig::default().with_check_refs(check_refs);
    let mut reporter = Reporter::new(std::io::stdout(), std::io::stderr());
    let outcome = lawmap_fixtures::run(&cfg, &mut reporter).await.context("validate fixtures")?;
    if outcome.exit_code() != 0 {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}

async fn validate_record(path: &Path) -> Result<()> {
    let cfg = RunConfig::default();
    let schemas = SchemaSet::load(&cfg.schema_dir).await.context("load schemas")?;
    let validator = ItemValidator::compile(&schemas)?;
    let data_text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let data: serde_json::Value = serde_json::from_str(&data_text).with_context(|| "parse json")?;
    let errors = validator.validate(&data);
    if !errors.is_empty() {
        eprintln!("Invalid: {}", path.display());
        for e in errors {
            eprintln!("- {}", e);
        }
        std::process::exit(1);
    }
    println!("OK: {}", path.display());
    Ok(())
}
