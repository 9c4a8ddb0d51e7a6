//! Validation rules exercised through the public parse + validate API
use workflow_check::{parse_document, validate_document, ValidationResult};

fn validate(text: &str) -> ValidationResult {
    let doc = parse_document(text).expect("parse workflow");
    validate_document(&doc)
}

#[test]
fn test_minimal_workflow_is_clean() {
    let result = validate("jobs:\n  build:\n    steps:\n      - run: x\non: push\n");
    assert_eq!(result.issues().count(), 0);
    assert_eq!(result.warnings().count(), 0);
    assert!(result.is_valid());
}

#[test]
fn test_workflow_without_jobs() {
    let result = validate("on: push\n");
    assert_eq!(result.issues().collect::<Vec<_>>(), ["No jobs defined"]);
    assert!(!result.is_valid());
}

#[test]
fn test_warnings_do_not_invalidate() {
    let result = validate(
        "jobs:\n  deploy_release:\n    steps:\n      - uses: actions/checkout@v2\non: push\n",
    );
    let warnings: Vec<_> = result.warnings().collect();

    assert_eq!(result.issues().count(), 0);
    assert_eq!(warnings.len(), 2);
    assert!(warnings
        .iter()
        .any(|w| w.contains("actions/checkout@v2") && w.contains("deploy_release")));
    assert!(warnings
        .iter()
        .any(|w| w.contains("permissions: contents: write") && w.contains("deploy_release")));
    assert!(result.is_valid());
}

#[test]
fn test_realistic_workflow() {
    let workflow = r#"
name: CI
on:
  push:
    branches: [main]
  pull_request:
env:
  CARGO_TERM_COLOR: always
jobs:
  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        rust: [stable, beta]
    steps:
      - uses: actions/checkout@v4
      - uses: actions/cache@v3
        with:
          path: target
      - name: Test
        run: cargo test --all
  publish-release:
    needs: test
    if: startsWith(github.ref, 'refs/tags/')
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - with:
          token: ${{ secrets.TOKEN }}
  lint:
    uses: ./.github/workflows/lint.yml
"#;
    let result = validate(workflow);

    assert_eq!(result.jobs, ["test", "publish-release", "lint"]);
    assert_eq!(
        result.issues().collect::<Vec<_>>(),
        [
            "Step 1 in job 'publish-release' has no name, uses, or run",
            "Job 'lint' has no steps",
        ]
    );
    assert_eq!(
        result.warnings().collect::<Vec<_>>(),
        [
            "Step 1 in job 'test' uses old action version: actions/cache@v3",
            "Job 'publish-release' may need 'permissions: contents: write'",
        ]
    );
}

#[test]
fn test_null_trigger_still_counts() {
    let result = validate("on:\njobs:\n  build:\n    steps:\n      - name: noop\n");
    assert!(result.is_valid());
}

#[test]
fn test_every_step_without_identity_is_reported() {
    let result = validate(
        "on: push\njobs:\n  a:\n    steps:\n      - {}\n      - run: ok\n      - shell: bash\n",
    );
    assert_eq!(
        result.issues().collect::<Vec<_>>(),
        [
            "Step 0 in job 'a' has no name, uses, or run",
            "Step 2 in job 'a' has no name, uses, or run",
        ]
    );
}
