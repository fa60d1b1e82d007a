// lawmap-fixtures/src/report.rs

use std::{io::Write, path::{Path, PathBuf}};

use crate::{graph::RefProblem, registry::Violation};

pub const PASSED_MESSAGE: &str = "Fixture validation passed.";

/// Why a single fixture line was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum LineFailure {
    InvalidJson { line: u64 },
    Schema { line: u64, violations: Vec<Violation> },
    Reference(RefProblem),
}

impl LineFailure {
    pub fn line(&self) -> u64 {
        match self {
            Self::InvalidJson { line } | Self::Schema { line, .. } => *line,
            Self::Reference(p) => p.line(),
        }
    }
}

/// Counters for one pass over a fixture file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Physical lines read, blank ones included.
    pub lines: u64,
    pub records: u64,
    pub errors: u64,
    pub nodes: u64,
    pub edges: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed(RunSummary),
    Failed(RunSummary),
    FixtureMissing(PathBuf),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed(_) => 0,
            Self::Failed(_) | Self::FixtureMissing(_) => 1,
        }
    }
}

/// Writes diagnostics as they happen: failures to `err`, the success line to `out`.
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self { Self { out, err } }

    pub fn fixture_missing(&mut self, path: &Path) -> std::io::Result<()> {
        writeln!(self.err, "Missing examples file: {}", path.display())?;
        self.err.flush()
    }

    pub fn line_failed(&mut self, failure: &LineFailure) -> std::io::Result<()> {
        match failure {
            LineFailure::InvalidJson { line } => writeln!(self.err, "Line {line}: invalid JSON")?,
            LineFailure::Schema { line, violations } => {
                writeln!(self.err, "Line {line}: schema errors")?;
                for v in violations {
                    writeln!(self.err, "  {v}")?;
                }
            }
            LineFailure::Reference(RefProblem::DanglingEdge { line, missing }) => {
                writeln!(self.err, "Line {line}: edge references unknown node {missing}")?
            }
            LineFailure::Reference(RefProblem::DuplicateNode { line, id }) => {
                writeln!(self.err, "Line {line}: duplicate node id {id}")?
            }
        }
        self.err.flush()
    }

    /// Prints the closing line and decides pass/fail.
    pub fn finish(&mut self, summary: RunSummary) -> std::io::Result<Outcome> {
        if summary.errors > 0 {
            writeln!(self.err, "Validation failed with {} error(s).", summary.errors)?;
            self.err.flush()?;
            return Ok(Outcome::Failed(summary));
        }
        writeln!(self.out, "{PASSED_MESSAGE}")?;
        self.out.flush()?;
        Ok(Outcome::Passed(summary))
    }

    pub fn into_inner(self) -> (O, E) { (self.out, self.err) }
}
