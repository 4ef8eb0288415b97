//! Replaying a recorded event log through the loader

use std::path::PathBuf;

use testlens_core::{SourceLocator, TestStatus};
use testlens_runner::{load, LoadSource};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[tokio::test]
async fn test_calc_run_fixture_loads_failures_first() {
    let results = load(
        LoadSource::File(fixture("calc_run.jsonl")),
        SourceLocator::default(),
    )
    .await
    .unwrap();

    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["TestDivide", "TestAdd", "TestNetwork"]);

    let divide = &results.records()[0];
    assert_eq!(divide.status, TestStatus::Fail);
    assert_eq!(divide.location(), Some(("calc_test.go", 42)));
    assert_eq!(divide.output_lines.len(), 3);

    assert_eq!(results.records()[1].status, TestStatus::Pass);
    assert_eq!(results.records()[2].status, TestStatus::Skip);
    assert_eq!(results.passed_count(), 1);
    assert_eq!(results.failed_count(), 1);
}

#[tokio::test]
async fn test_missing_fixture_is_a_load_error() {
    let err = load(
        LoadSource::File(fixture("does_not_exist.jsonl")),
        SourceLocator::default(),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("Event log not found"));
}
