pub mod config;
pub mod error;
pub mod graph;
pub mod registry;
pub mod report;
pub mod scanner;
pub mod schema;

pub use config::RunConfig;
pub use error::FixtureError;
pub use graph::{Edge, GraphItem, Node};
pub use registry::{ItemValidator, Violation};
pub use report::{LineFailure, Outcome, Reporter, RunSummary};
pub use scanner::Scanner;
pub use schema::{SchemaId, SchemaSet};

use std::io::Write;
use tracing::info;

/// Loads the schemas, compiles the item validator, then scans the fixture.
///
/// A missing fixture is an [`Outcome`], not an error: it is reported and the
/// run ends before any line is read. Schema problems are fatal errors.
pub async fn run<O: Write, E: Write>(
    cfg: &RunConfig,
    reporter: &mut Reporter<O, E>,
) -> Result<Outcome, FixtureError> {
    let schemas = SchemaSet::load(&cfg.schema_dir).await?;
    let validator = ItemValidator::compile(&schemas)?;
    info!(dir = %cfg.schema_dir.display(), "schemas compiled");

    if !tokio::fs::try_exists(&cfg.fixture).await.unwrap_or(false) {
        reporter.fixture_missing(&cfg.fixture)?;
        return Ok(Outcome::FixtureMissing(cfg.fixture.clone()));
    }

    let summary = Scanner::new(&validator)
        .with_ref_check(cfg.check_refs)
        .scan_file(&cfg.fixture, reporter)
        .await?;
    info!(
        records = summary.records,
        nodes = summary.nodes,
        edges = summary.edges,
        errors = summary.errors,
        "fixture scanned"
    );
    Ok(reporter.finish(summary)?)
}
