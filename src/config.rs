// lawmap-fixtures/src/config.rs

use std::path::{Path, PathBuf};

/// Schema directory, relative to the repository root.
pub const SCHEMA_DIR: &str = "API/docs/schemas";
/// Fixture file, relative to the repository root.
pub const FIXTURE_FILE: &str = "API/docs/EXAMPLES.graph.jsonl";

/// Resolved inputs for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub schema_dir: PathBuf,
    pub fixture: PathBuf,
    pub check_refs: bool,
}

impl RunConfig {
    /// Fixed layout under `root`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            schema_dir: root.join(SCHEMA_DIR),
            fixture: root.join(FIXTURE_FILE),
            check_refs: false,
        }
    }

    /// The directory this crate was built from, which holds `API/docs`.
    pub fn default_root() -> &'static Path {
        Path::new(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn with_schema_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(d) = dir { self.schema_dir = d; }
        self
    }

    pub fn with_fixture(mut self, file: Option<PathBuf>) -> Self {
        if let Some(f) = file { self.fixture = f; }
        self
    }

    pub fn with_check_refs(mut self, on: bool) -> Self {
        self.check_refs = on;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self { Self::from_root(Self::default_root()) }
}
