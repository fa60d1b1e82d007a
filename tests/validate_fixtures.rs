use std::{fs, path::Path};

use lawmap_fixtures::{run, FixtureError, Outcome, Reporter, RunConfig, SchemaId};
use tempfile::TempDir;

/// Item schema requiring `id` and `type`, with node/edge refs that only pin `type`.
fn write_schemas(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(SchemaId::Item.file_name()), r#"{
        "type": "object",
        "required": ["id", "type"],
        "anyOf": [
            { "$ref": "graph_node.schema.json" },
            { "$ref": "graph_edge.schema.json" }
        ]
    }"#).unwrap();
    for (id, tag) in [(SchemaId::Node, "node"), (SchemaId::Edge, "edge")] {
        let doc = format!(r#"{{ "properties": {{ "type": {{ "const": "{tag}" }} }} }}"#);
        fs::write(dir.join(id.file_name()), doc).unwrap();
    }
}

fn workspace(fixture: Option<&str>) -> (TempDir, RunConfig) {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = RunConfig::from_root(tmp.path());
    write_schemas(&cfg.schema_dir);
    if let Some(body) = fixture {
        fs::write(&cfg.fixture, body).unwrap();
    }
    (tmp, cfg)
}

async fn check(cfg: &RunConfig) -> (Outcome, String, String) {
    let mut reporter = Reporter::new(Vec::new(), Vec::new());
    let outcome = run(cfg, &mut reporter).await.unwrap();
    let (out, err) = reporter.into_inner();
    (outcome, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[tokio::test]
async fn valid_fixture_passes_quietly() {
    let body = "{\"id\":\"n1\",\"type\":\"node\"}\n{\"id\":\"e1\",\"type\":\"edge\"}\n";
    let (_tmp, cfg) = workspace(Some(body));
    let (outcome, out, err) = check(&cfg).await;
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(out, "Fixture validation passed.\n");
    assert_eq!(err, "");
}

#[tokio::test]
async fn parse_error_on_line_four() {
    let body = concat!(
        "{\"id\":\"n1\",\"type\":\"node\"}\n",
        "{\"id\":\"e1\",\"type\":\"edge\",\"source\":\"n1\"}\n",
        "\n",
        "{not json}\n",
    );
    let (_tmp, cfg) = workspace(Some(body));
    let (outcome, out, err) = check(&cfg).await;
    assert_eq!(outcome.exit_code(), 1);
    match outcome {
        Outcome::Failed(s) => {
            assert_eq!(s.errors, 1);
            assert_eq!(s.records, 3);
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(out.is_empty());
    assert_eq!(err, "Line 4: invalid JSON\nValidation failed with 1 error(s).\n");
}

#[tokio::test]
async fn error_count_matches_invalid_lines() {
    let body = concat!(
        "{\"type\":\"node\"}\n",
        "\n",
        "{\"id\":\"a\",\"type\":\"widget\"}\n",
        "{oops\n",
        "{\"id\":\"b\",\"type\":\"edge\"}\n",
        "\n\n",
    );
    let (_tmp, cfg) = workspace(Some(body));
    let (outcome, _, err) = check(&cfg).await;
    assert!(matches!(outcome, Outcome::Failed(s) if s.errors == 3));
    assert!(err.contains("Line 1: schema errors"));
    assert!(err.contains("Line 3: schema errors"));
    assert!(err.contains("Line 4: invalid JSON"));
    assert!(!err.contains("Line 2"));
    assert!(!err.contains("Line 6"));
    assert!(err.ends_with("Validation failed with 3 error(s).\n"));
}

#[tokio::test]
async fn empty_and_blank_only_fixtures_pass() {
    for body in ["", "\n\n   \n\t\n"] {
        let (_tmp, cfg) = workspace(Some(body));
        let (outcome, out, err) = check(&cfg).await;
        assert!(matches!(outcome, Outcome::Passed(s) if s.errors == 0 && s.records == 0));
        assert_eq!(out, "Fixture validation passed.\n");
        assert!(err.is_empty());
    }
}

#[tokio::test]
async fn missing_fixture_is_reported_without_scanning() {
    let (_tmp, cfg) = workspace(None);
    let (outcome, out, err) = check(&cfg).await;
    assert_eq!(outcome, Outcome::FixtureMissing(cfg.fixture.clone()));
    assert_eq!(outcome.exit_code(), 1);
    assert!(out.is_empty());
    assert_eq!(err, format!("Missing examples file: {}\n", cfg.fixture.display()));
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let body = "{\"type\":\"node\"}\nnull\n{bad\n{\"id\":\"x\",\"type\":\"edge\"}\n";
    let (_tmp, cfg) = workspace(Some(body));
    let first = check(&cfg).await;
    let second = check(&cfg).await;
    assert_eq!(first, second);
    assert_eq!(first.0.exit_code(), 1);
}

#[tokio::test]
async fn missing_schema_is_fatal() {
    let (_tmp, cfg) = workspace(Some("{}\n"));
    fs::remove_file(cfg.schema_dir.join(SchemaId::Edge.file_name())).unwrap();
    let mut reporter = Reporter::new(Vec::new(), Vec::new());
    let err = run(&cfg, &mut reporter).await.unwrap_err();
    assert!(matches!(err, FixtureError::SchemaRead { name: "graph_edge.schema.json", .. }));
    let (out, errout) = reporter.into_inner();
    assert!(out.is_empty() && errout.is_empty());
}

#[tokio::test]
async fn shipped_fixture_matches_shipped_schemas() {
    let cfg = RunConfig::default().with_check_refs(true);
    let (outcome, out, err) = check(&cfg).await;
    assert_eq!(err, "");
    assert_eq!(out, "Fixture validation passed.\n");
    match outcome {
        Outcome::Passed(s) => {
            assert!(s.nodes > 0);
            assert!(s.edges > 0);
        }
        other => panic!("expected pass, got {other:?}"),
    }
}

#[tokio::test]
async fn shipped_schemas_reject_malformed_graph_items() {
    let tmp = tempfile::tempdir().unwrap();
    let fixture = tmp.path().join("bad.jsonl");
    fs::write(&fixture, concat!(
        "{\"type\":\"node\",\"id\":\"a\"}\n",
        "{\"type\":\"edge\",\"edge_type\":\"CITES\",\"from_id\":\"a\"}\n",
        "{\"type\":\"leaf\",\"id\":\"c\",\"labels\":[\"X\"]}\n",
        "{\"type\":\"node\",\"id\":\"d\",\"labels\":[\"X\"]}\n",
    )).unwrap();
    let cfg = RunConfig::default().with_fixture(Some(fixture));
    let (outcome, _, err) = check(&cfg).await;
    assert!(matches!(outcome, Outcome::Failed(s) if s.errors == 3 && s.nodes == 1));
    assert!(!err.contains("Line 4"));
}

#[tokio::test]
async fn fixture_saved_with_byte_order_mark_passes() {
    let (_tmp, cfg) = workspace(Some("\u{feff}{\"id\":\"n1\",\"type\":\"node\"}\r\n"));
    let (outcome, out, err) = check(&cfg).await;
    assert!(matches!(outcome, Outcome::Passed(s) if s.records == 1));
    assert_eq!(out, "Fixture validation passed.\n");
    assert_eq!(err, "");
}
