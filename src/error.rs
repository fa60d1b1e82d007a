// lawmap-fixtures/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a run before or during the scan.
///
/// Per-line problems (bad JSON, schema violations) are never surfaced here;
/// they are reported and counted by the scanner.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("read schema {name} from {}: {source}", path.display())]
    SchemaRead {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse schema {name} from {}: {source}", path.display())]
    SchemaParse {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("compile schema {name}: {reason}")]
    SchemaCompile { name: &'static str, reason: String },

    #[error("read fixture {}: {source}", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing diagnostics to stdout/stderr failed.
    #[error("write report: {0}")]
    Report(#[from] std::io::Error),
}

pub type Result<T, E = FixtureError> = std::result::Result<T, E>;
