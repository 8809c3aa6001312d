use pretty_assertions::assert_eq;
use serde::Deserialize;
use specrepo_fs::{ConfigStore, Error, NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct Settings {
    repos_dir: String,
}

#[test]
fn test_list_subdirectories_sorted_and_filtered() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("zeta")).unwrap();
    fs::create_dir(root.join("alpha")).unwrap();
    fs::create_dir(root.join(".cache")).unwrap();
    fs::write(root.join("README"), "not a repo").unwrap();

    let names = io::list_subdirectories(&NormalizedPath::new(root)).unwrap();
    assert_eq!(names, vec!["alpha".to_string(), "zeta".to_string()]);
}

#[test]
fn test_list_files_skips_directories() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("Foo")).unwrap();
    fs::write(root.join("b.txt"), "").unwrap();
    fs::write(root.join("a.txt"), "").unwrap();

    let names = io::list_files(&NormalizedPath::new(root)).unwrap();
    assert_eq!(names, vec!["a.txt".to_string(), "b.txt".to_string()]);
}

#[test]
fn test_listing_missing_directory_is_empty() {
    let names = io::list_subdirectories(&NormalizedPath::new("/nonexistent/specs/repos")).unwrap();
    assert!(names.is_empty());
}

#[test]
fn test_is_empty_dir() {
    let temp = TempDir::new().unwrap();
    let dir = NormalizedPath::new(temp.path());
    assert!(io::is_empty_dir(&dir).unwrap());
    assert!(io::is_empty_dir(&dir.join("missing")).unwrap());

    fs::write(temp.path().join("file"), "x").unwrap();
    assert!(!io::is_empty_dir(&dir).unwrap());
}

#[test]
fn test_remove_missing_dir_is_ok() {
    let temp = TempDir::new().unwrap();
    let dir = NormalizedPath::new(temp.path()).join("never-created");
    assert!(io::remove_dir_all(&dir).is_ok());
}

#[test]
fn test_read_text_if_exists() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join("notes.txt");
    assert_eq!(io::read_text_if_exists(&path).unwrap(), None);

    fs::write(path.to_native(), "hello").unwrap();
    assert_eq!(io::read_text_if_exists(&path).unwrap().as_deref(), Some("hello"));
}

#[test]
fn test_load_toml_and_yaml() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "repos_dir = \"/tmp/a\"\n").unwrap();
    fs::write(temp.path().join("config.yml"), "repos_dir: /tmp/b\n").unwrap();

    let store = ConfigStore::new();
    let root = NormalizedPath::new(temp.path());
    let toml: Settings = store.load(&root.join("config.toml")).unwrap();
    let yaml: Settings = store.load(&root.join("config.yml")).unwrap();

    assert_eq!(toml.repos_dir, "/tmp/a");
    assert_eq!(yaml.repos_dir, "/tmp/b");
}

#[test]
fn test_load_if_exists_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join("config.toml");
    let loaded: Option<Settings> = ConfigStore::new().load_if_exists(&path).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_load_invalid_yaml_reports_format() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.yaml"), "repos_dir: [unclosed").unwrap();

    let path = NormalizedPath::new(temp.path()).join("broken.yaml");
    let err = ConfigStore::new().load::<Settings>(&path).unwrap_err();
    match err {
        Error::ConfigParse { format, .. } => assert_eq!(format, "YAML"),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn test_load_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.ini"), "x=1").unwrap();

    let path = NormalizedPath::new(temp.path()).join("config.ini");
    let err = ConfigStore::new().load::<Settings>(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "ini"));
}
