use konflux_fs::{Error, NormalizedPath, ResourceFormat, ResourceStore};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
struct TestResource {
    name: String,
    count: i32,
}

#[rstest]
#[case("resource.yaml", "name: test\ncount: 42")]
#[case("resource.yml", "name: test\ncount: 42")]
#[case("resource.json", r#"{"name": "test", "count": 42}"#)]
#[case("resource.toml", "name = \"test\"\ncount = 42")]
fn load_detects_format_from_extension(#[case] file: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(file);
    fs::write(&file_path, content).unwrap();

    let loaded: TestResource = ResourceStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(
        loaded,
        TestResource {
            name: "test".into(),
            count: 42
        }
    );
}

#[test]
fn load_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("absent.yaml"));

    let result: konflux_fs::Result<TestResource> = ResourceStore::new().load(&path);

    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn load_rejects_unknown_fields() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("resource.yaml");
    fs::write(&file_path, "name: test\ncount: 1\nextra: true").unwrap();

    let result: konflux_fs::Result<TestResource> =
        ResourceStore::new().load(&NormalizedPath::new(&file_path));

    match result {
        Err(Error::ConfigParse {
            path,
            format,
            message,
        }) => {
            assert_eq!(path, file_path);
            assert_eq!(format, "YAML");
            assert!(message.contains("extra"), "unexpected message: {message}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn load_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("resource.xyz");
    fs::write(&file_path, "data").unwrap();

    let result: konflux_fs::Result<TestResource> =
        ResourceStore::new().load(&NormalizedPath::new(&file_path));

    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[rstest]
#[case("config/konflux.YML", ResourceFormat::Yaml)]
#[case("config/konflux.json", ResourceFormat::Json)]
#[case("config/konflux.toml", ResourceFormat::Toml)]
fn format_from_root_file_extension(#[case] file: &str, #[case] expected: ResourceFormat) {
    assert_eq!(ResourceFormat::from_path(&NormalizedPath::new(file)).unwrap(), expected);
}

#[test]
fn format_requires_an_extension() {
    let result = ResourceFormat::from_path(&NormalizedPath::new("config/konflux"));
    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension.is_empty()));
}

#[test]
fn toml_parse_error_names_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("resource.toml");
    fs::write(&file_path, "name = \"test\"\ncount = \"many\"").unwrap();

    let result: konflux_fs::Result<TestResource> =
        ResourceStore::new().load(&NormalizedPath::new(&file_path));

    assert!(matches!(result, Err(Error::ConfigParse { format, .. }) if format == "TOML"));
}

#[test]
fn save_yaml_then_load() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("nested/out.yaml"));
    let original = TestResource {
        name: "saved".into(),
        count: 7,
    };

    let store = ResourceStore::new();
    store.save_yaml(&path, &original).unwrap();
    let loaded: TestResource = store.load(&path).unwrap();

    assert_eq!(loaded, original);
}
