//! Library-level tests of the edit pipeline

use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use yedit::document::Document;
use yedit::edit::{DottedPath, EditSet};
use yedit::editor::{EditRequest, Editor};
use yedit::error::EditError;
use yedit::workspace::TargetResolver;

fn editor(dir: &TempDir) -> Editor {
    Editor::new(TargetResolver::new(None, dir.path().to_path_buf()))
}

fn get(document: &Document, path: &str) -> Option<Value> {
    document.get(&DottedPath::parse(path).unwrap()).cloned()
}

#[test]
fn test_helm_values_patch() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("values.yaml");
    fs::write(
        &file,
        "# Default values\nimage:\n  repository: nginx\n  tag: latest\nservice:\n  type: ClusterIP\n  port: 80\n",
    )
    .unwrap();

    let outcome = editor(&temp_dir)
        .run(&EditRequest::new(
            "values.yaml",
            r#"[
                {"path": "image.tag", "value": "1.25.3"},
                {"path": "service.port", "value": 8080},
                {"path": "ingress.hosts", "value": ["a.example.com", "b.example.com"]},
                {"path": "resources.limits", "value": {"cpu": "500m", "memory": "128Mi"}}
            ]"#,
        ))
        .unwrap();
    assert_eq!(outcome.applied, 4);

    let reloaded = Document::load(&file).unwrap();
    assert_eq!(get(&reloaded, "image.repository"), Some(Value::from("nginx")));
    assert_eq!(get(&reloaded, "image.tag"), Some(Value::from("1.25.3")));
    assert_eq!(get(&reloaded, "service.port"), Some(Value::from(8080)));
    assert_eq!(
        get(&reloaded, "resources.limits.memory"),
        Some(Value::from("128Mi"))
    );

    let keys: Vec<&str> = reloaded
        .root()
        .keys()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(keys, ["image", "service", "ingress", "resources"]);
}

#[test]
fn test_applying_twice_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("values.yaml");
    fs::write(&file, "a: 5\nlist: [1, 2]\n").unwrap();
    let request = EditRequest::new(
        &file,
        r#"[{"path":"a.b","value":1},{"path":"list","value":"flat"},{"path":"x.y.z","value":[1]}]"#,
    );

    editor(&temp_dir).run(&request).unwrap();
    let once = fs::read_to_string(&file).unwrap();
    editor(&temp_dir).run(&request).unwrap();
    let twice = fs::read_to_string(&file).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once, "a:\n  b: 1\nlist: flat\nx:\n  y:\n    z:\n    - 1\n");
}

#[test]
fn test_empty_edit_list_rewrites_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("values.yaml");
    fs::write(&file, "a: {b: 1}\n").unwrap();

    let outcome = editor(&temp_dir).run(&EditRequest::new(&file, "[]")).unwrap();
    assert_eq!(outcome.applied, 0);
    assert_eq!(fs::read_to_string(&file).unwrap(), "a:\n  b: 1\n");
}

#[test]
fn test_edit_set_applies_to_in_memory_document() {
    let mut document = Document::parse("x:\n  y: 1\n", Path::new("inline.yaml")).unwrap();
    let edits = EditSet::parse(r#"[{"path":"x.y","value":2}]"#).unwrap();
    edits.apply(document.root_mut()).unwrap();

    assert_eq!(get(&document, "x.y"), Some(Value::from(2)));
    assert_eq!(document.root().len(), 1);
}

#[test]
fn test_invalid_segment_error_is_index_qualified() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("values.yaml");
    fs::write(&file, "a: 1\n").unwrap();

    let err = editor(&temp_dir)
        .run(&EditRequest::new(&file, r#"[{"path":"a","value":1},{"path":"b..c","value":1}]"#))
        .unwrap_err();
    assert!(matches!(err, EditError::InvalidPath { index: 1, .. }));
    assert_eq!(err.to_string(), "edit[1]: invalid path \"b..c\": empty segment");
    assert_eq!(fs::read_to_string(&file).unwrap(), "a: 1\n");
}
