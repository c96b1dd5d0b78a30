use konflux_fs::{Error, NormalizedPath, io};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn temp_files_in(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect()
}

#[test]
fn write_atomic_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("a/b/c.yaml"));

    io::write_atomic(&path, b"hello").unwrap();

    assert_eq!(fs::read_to_string(path.to_native()).unwrap(), "hello");
}

#[test]
fn write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.txt");
    fs::write(&file_path, "original").unwrap();

    io::write_atomic(&NormalizedPath::new(&file_path), b"updated").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
}

#[test]
fn write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    io::write_atomic(&NormalizedPath::new(temp.path().join("target.txt")), b"content").unwrap();

    assert_eq!(temp_files_in(temp.path()), Vec::<String>::new());
}

#[test]
fn failed_rename_removes_temp_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("occupied");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "x").unwrap();

    let result = io::write_atomic(&NormalizedPath::new(&target), b"content");

    assert!(matches!(result, Err(Error::Io { .. })), "got {result:?}");
    assert_eq!(temp_files_in(temp.path()), Vec::<String>::new());
    assert!(target.join("keep.txt").is_file());
}

#[test]
fn read_text_nonexistent_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let result = io::read_text(&NormalizedPath::new(temp.path().join("nope.txt")));
    assert!(matches!(result, Err(Error::NotFound { .. })));
}
