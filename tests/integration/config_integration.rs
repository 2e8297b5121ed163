//! Integration tests for the configuration layers

use super::test_utils::{stderr, write_yaml, yedit_command};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use yedit::config::{ConfigLoader, GITHUB_WORKSPACE_ENV};

#[test]
fn test_loader_file_then_env_then_github_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("yedit.toml");
    fs::write(&config_file, "workspace_root = \"/from/file\"\n").unwrap();

    let mut vars = HashMap::new();
    vars.insert(GITHUB_WORKSPACE_ENV.to_string(), "/from/github".to_string());

    let config = ConfigLoader::load_with_env(None, &vars).unwrap();
    assert_eq!(config.workspace_root, Some(PathBuf::from("/from/github")));

    let config = ConfigLoader::load_with_env(Some(&config_file), &vars).unwrap();
    assert_eq!(config.workspace_root, Some(PathBuf::from("/from/file")));

    vars.insert("YEDIT_WORKSPACE_ROOT".to_string(), "/from/env".to_string());
    let config = ConfigLoader::load_with_env(Some(&config_file), &vars).unwrap();
    assert_eq!(config.workspace_root, Some(PathBuf::from("/from/env")));
}

#[test]
fn test_config_file_root_is_enforced() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("workspace");
    fs::create_dir(&workspace).unwrap();
    let outside = write_yaml(temp_dir.path(), "outside.yaml", "a: 1\n");
    let config_file = temp_dir.path().join("yedit.toml");
    fs::write(
        &config_file,
        format!("workspace_root = {:?}\n", workspace.to_str().unwrap()),
    )
    .unwrap();

    let output = yedit_command(temp_dir.path())
        .args([
            "--config",
            config_file.to_str().unwrap(),
            outside.to_str().unwrap(),
            r#"[{"path":"a","value":2}]"#,
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("must be under workspace root"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_yaml(temp_dir.path(), "values.yaml", "a: 1\n");

    let output = yedit_command(temp_dir.path())
        .args([
            "--config",
            "absent.toml",
            file.to_str().unwrap(),
            r#"[{"path":"a","value":2}]"#,
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).starts_with("Error: configuration error"),
        "stderr={:?}",
        stderr(&output)
    );
    assert_eq!(fs::read_to_string(&file).unwrap(), "a: 1\n");
}
