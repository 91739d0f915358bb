//! Integration test: `.textlintrc` generation end-to-end.
//!
//! Writes a `package.json` into a scratch directory, runs
//! `create_config_file`, and inspects the file it leaves behind.

use serde_json::Value;
use std::fs;
use tempfile::TempDir;
use textlint_core::{
    create_config_file, rc_file_path, CreateConfigFileOptions, InitError, MemoryLogger,
};

const MANIFEST: &str = r#"{
  "name": "docs",
  "dependencies": {
    "textlint-rule-no-todo": "^2.0.0",
    "textlint-plugin-html": "^1.0.0"
  },
  "devDependencies": {
    "textlint-filter-rule-comments": "^1.0.0",
    "textlint-rule-helper": "^2.0.0",
    "textlint-rule-no-todo": "^2.1.0",
    "@scope/textlint-rule-foo": "^0.1.0"
  }
}"#;

fn project(manifest: Option<&str>) -> TempDir {
    let tmp = TempDir::new().expect("temp dir");
    if let Some(content) = manifest {
        fs::write(tmp.path().join("package.json"), content).expect("write manifest");
    }
    tmp
}

fn read_rc(tmp: &TempDir) -> Value {
    let content = fs::read_to_string(rc_file_path(tmp.path())).expect("rc file should exist");
    serde_json::from_str(&content).expect("rc file should be JSON")
}

#[tokio::test]
async fn creates_rc_with_installed_rules_and_filters() {
    let tmp = project(Some(MANIFEST));
    let logger = MemoryLogger::new();
    let options = CreateConfigFileOptions::new(tmp.path()).verbose(true);

    let code = create_config_file(&options, &logger).await.expect("init should succeed");
    assert_eq!(code, 0);

    let rc = read_rc(&tmp);
    assert_eq!(
        rc,
        serde_json::json!({
            "filters": { "comments": true },
            "rules": { "no-todo": true, "@scope/foo": true }
        })
    );
    assert_eq!(logger.logs(), vec![".textlintrc is created."]);
    assert!(logger.errors().is_empty());
}

#[tokio::test]
async fn quiet_run_logs_nothing() {
    let tmp = project(Some(MANIFEST));
    let logger = MemoryLogger::new();

    let code = create_config_file(&CreateConfigFileOptions::new(tmp.path()), &logger)
        .await
        .expect("init should succeed");

    assert_eq!(code, 0);
    assert!(logger.logs().is_empty());
}

#[tokio::test]
async fn second_run_refuses_to_overwrite() {
    let tmp = project(Some(MANIFEST));
    let logger = MemoryLogger::new();
    let options = CreateConfigFileOptions::new(tmp.path());

    assert_eq!(create_config_file(&options, &logger).await.unwrap(), 0);
    let first = fs::read_to_string(rc_file_path(tmp.path())).unwrap();

    assert_eq!(create_config_file(&options, &logger).await.unwrap(), 1);
    let second = fs::read_to_string(rc_file_path(tmp.path())).unwrap();

    assert_eq!(first, second);
    assert_eq!(logger.errors(), vec![".textlintrc is already existed."]);
}

#[tokio::test]
async fn existing_rc_is_left_untouched() {
    let tmp = project(Some(MANIFEST));
    let rc = rc_file_path(tmp.path());
    fs::write(&rc, "{ \"rules\": {} }").unwrap();

    let logger = MemoryLogger::new();
    let code = create_config_file(&CreateConfigFileOptions::new(tmp.path()), &logger)
        .await
        .unwrap();

    assert_eq!(code, 1);
    assert_eq!(fs::read_to_string(&rc).unwrap(), "{ \"rules\": {} }");
}

#[tokio::test]
async fn missing_manifest_produces_empty_sections() {
    let tmp = project(None);
    let logger = MemoryLogger::new();

    let code = create_config_file(&CreateConfigFileOptions::new(tmp.path()), &logger)
        .await
        .unwrap();

    assert_eq!(code, 0);
    assert_eq!(read_rc(&tmp), serde_json::json!({ "filters": {}, "rules": {} }));
}

#[tokio::test]
async fn output_uses_two_space_indent() {
    let tmp = project(Some(r#"{ "dependencies": { "textlint-rule-a": "1" } }"#));
    create_config_file(&CreateConfigFileOptions::new(tmp.path()), &MemoryLogger::new())
        .await
        .unwrap();

    let content = fs::read_to_string(rc_file_path(tmp.path())).unwrap();
    assert_eq!(
        content,
        "{\n  \"filters\": {},\n  \"rules\": {\n    \"a\": true\n  }\n}"
    );
}

#[tokio::test]
async fn colliding_rule_names_are_written_once() {
    let tmp = project(Some(
        r#"{ "dependencies": { "atextlint-rule-b": "1", "abtextlint-rule-": "1" } }"#,
    ));
    create_config_file(&CreateConfigFileOptions::new(tmp.path()), &MemoryLogger::new())
        .await
        .unwrap();

    let content = fs::read_to_string(rc_file_path(tmp.path())).unwrap();
    assert_eq!(content.matches("\"ab\"").count(), 1);
    assert_eq!(read_rc(&tmp)["rules"], serde_json::json!({ "ab": true }));
}

#[tokio::test]
async fn directory_at_rc_path_is_a_write_error() {
    let tmp = project(Some(MANIFEST));
    let rc = rc_file_path(tmp.path());
    fs::create_dir(&rc).unwrap();

    let logger = MemoryLogger::new();
    let err = create_config_file(&CreateConfigFileOptions::new(tmp.path()), &logger)
        .await
        .unwrap_err();

    let InitError::Write { path, .. } = &err else {
        panic!("expected write error, got {err:?}");
    };
    assert_eq!(path, &rc);
    assert!(logger.errors().is_empty());
    assert!(rc.is_dir());
}
