// lawmap-fixtures/src/main.rs

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lawmap_fixtures::{run, Reporter, RunConfig};

#[derive(Parser)]
#[command(
    name = "validate-fixtures",
    version,
    about = "Validate the graph fixture file against the graph item schema"
)]
struct Args {
    /// Repository root holding API/docs (defaults to this crate's directory)
    #[arg(long)]
    root: Option<PathBuf>,
    /// Directory with graph_{item,node,edge}.schema.json
    #[arg(long)]
    schema_dir: Option<PathBuf>,
    /// JSONL fixture to check
    #[arg(long)]
    fixture: Option<PathBuf>,
    /// Also report edges that point at node ids missing from the file
    #[arg(long)]
    check_refs: bool,
}

impl Args {
    fn into_config(self) -> RunConfig {
        let base = match self.root {
            Some(r) => RunConfig::from_root(r),
            None => RunConfig::default(),
        };
        base.with_schema_dir(self.schema_dir)
            .with_fixture(self.fixture)
            .with_check_refs(self.check_refs)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cfg = Args::parse().into_config();
    let mut reporter = Reporter::new(std::io::stdout(), std::io::stderr());
    let outcome = run(&cfg, &mut reporter)
        .await
        .with_context(|| format!("validate {}", cfg.fixture.display()))?;
    std::process::exit(outcome.exit_code());
}
