// lawmap-fixtures/src/scanner.rs

use std::{io::Write, path::Path};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::{
    error::{FixtureError, Result},
    graph::{GraphItem, RefIndex},
    registry::ItemValidator,
    report::{LineFailure, Reporter, RunSummary},
};

/// Streams a fixture file and validates every non-blank line on its own.
pub struct Scanner<'a> {
    validator: &'a ItemValidator,
    refs: Option<RefIndex>,
}

impl<'a> Scanner<'a> {
    pub fn new(validator: &'a ItemValidator) -> Self {
        Self { validator, refs: None }
    }

    /// Also decode records into graph items and check edge endpoints once
    /// the whole file has been read.
    pub fn with_ref_check(mut self, enabled: bool) -> Self {
        self.refs = enabled.then(RefIndex::new);
        self
    }

    pub async fn scan_file<O: Write, E: Write>(
        self,
        path: &Path,
        reporter: &mut Reporter<O, E>,
    ) -> Result<RunSummary> {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| FixtureError::FixtureRead { path: path.to_path_buf(), source })?;
        info!(path = %path.display(), "scanning fixture");
        self.scan(path, BufReader::new(file), reporter).await
    }

    /// `path` only labels read errors; lines come from `reader`.
    pub async fn scan<R, O, E>(
        mut self,
        path: &Path,
        mut reader: R,
        reporter: &mut Reporter<O, E>,
    ) -> Result<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        O: Write,
        E: Write,
    {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|source| FixtureError::FixtureRead { path: path.to_path_buf(), source })?;
            if n == 0 { break; }
            summary.lines += 1;
            let line_no = summary.lines;

            let text = String::from_utf8_lossy(&buf);
            let trimmed = trim_line(&text);
            if trimmed.is_empty() { continue; }
            summary.records += 1;

            if let Some(failure) = self.check_line(line_no, trimmed, &mut summary) {
                summary.errors += 1;
                reporter.line_failed(&failure)?;
            }
        }

        if let Some(refs) = self.refs.take() {
            for problem in refs.problems() {
                summary.errors += 1;
                reporter.line_failed(&LineFailure::Reference(problem))?;
            }
        }
        debug!(
            lines = summary.lines,
            records = summary.records,
            errors = summary.errors,
            "scan finished"
        );
        Ok(summary)
    }

    fn check_line(
        &mut self,
        line: u64,
        text: &str,
        summary: &mut RunSummary,
    ) -> Option<LineFailure> {
        let record: serde_json::Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => {
                debug!(line, error = %e, "invalid JSON");
                return Some(LineFailure::InvalidJson { line });
            }
        };

        let violations = self.validator.validate(&record);
        if !violations.is_empty() {
            return Some(LineFailure::Schema { line, violations });
        }

        match record.get("type").and_then(serde_json::Value::as_str) {
            Some("node") => summary.nodes += 1,
            Some("edge") => summary.edges += 1,
            _ => {}
        }
        if let Some(refs) = self.refs.as_mut() {
            // The schema is the authority on shape; records it admits but the
            // typed model cannot hold are left out of the reference check.
            match serde_json::from_value::<GraphItem>(record) {
                Ok(item) => refs.record(line, item),
                Err(e) => debug!(line, error = %e, "record skipped by reference check"),
            }
        }
        None
    }
}

/// Whitespace and byte-order marks on either side of a line.
fn trim_line(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
