//! Repository manager scenarios against real git repositories

use pretty_assertions::assert_eq;
use rstest::rstest;
use specrepo_core::{Error, LintOptions, RepoManager, ReposConfig, ToolVersion};
use specrepo_meta::VERSIONS_FILENAME;
use specrepo_test_utils::git::{self, CHANGE_MARKER};
use specrepo_test_utils::repo::ReposRoot;
use specrepo_test_utils::specs;
use std::path::Path;

fn manager(root: &ReposRoot) -> RepoManager {
    let config = ReposConfig::new(root.repos_dir()).with_tool_version(ToolVersion::new(0, 1, 0));
    RepoManager::new(config)
}

fn url(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_add_without_name_or_url_creates_nothing() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");

    let err = manager.add("", &url(&upstream), None).unwrap_err();
    assert!(err.is_informative());
    let err = manager.add("master", "", None).unwrap_err();
    assert!(err.is_informative());

    assert!(manager.list().unwrap().is_empty());
}

#[test]
fn test_add_clones_upstream() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");

    let repo = manager.add("master", &url(&upstream), None).unwrap();

    assert_eq!(repo.name, "master");
    assert!(root.repo_dir("master").join("Foo/1.0.0/Foo.spec.yml").is_file());
    let status = manager.status(&repo).unwrap();
    assert_eq!(status.remote_url, Some(url(&upstream)));
    assert_eq!(status.branch, Some(git::head_branch(&upstream)));
}

#[test]
fn test_add_checks_out_requested_branch() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    git::commit_on_branch(&upstream, "dev", "DEV", "development\n");

    manager.add("master", &url(&upstream), Some("dev")).unwrap();

    assert_eq!(git::head_branch(&root.repo_dir("master")), "dev");
    root.assert_file_contains("master", "DEV", "development");
}

#[test]
fn test_add_unknown_branch_cleans_up() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");

    let err = manager.add("master", &url(&upstream), Some("nope")).unwrap_err();

    assert!(matches!(err, Error::Git(_)), "got {err:?}");
    assert!(!root.repo_dir("master").exists());
}

#[test]
fn test_add_unreachable_url_leaves_no_directory() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let missing = root.repos_dir().join("..").join("upstreams").join("missing");

    let err = manager.add("master", &url(&missing), None).unwrap_err();

    assert!(!err.is_informative());
    assert!(!root.repo_dir("master").exists());
}

#[test]
fn test_add_twice_is_informative() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("master", &url(&upstream), None).unwrap();

    let err = manager.add("master", &url(&upstream), None).unwrap_err();

    assert!(err.is_informative());
    assert!(err.to_string().contains("already exists"));
    assert!(root.repo_dir("master").join("README").is_file());
}

#[test]
fn test_update_pulls_changes_from_source_repo() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("repo1", &url(&upstream), None).unwrap();
    manager.add("repo2", &url(&root.repo_dir("repo1")), None).unwrap();

    git::make_change(&root.repo_dir("repo1"));
    manager.update(Some("repo2")).unwrap();

    root.assert_file_contains("repo2", "README", CHANGE_MARKER);
}

#[test]
fn test_update_all_updates_every_repo() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("repo1", &url(&upstream), None).unwrap();
    manager.add("repo2", &url(&root.repo_dir("repo1")), None).unwrap();
    manager.add("repo3", &url(&root.repo_dir("repo1")), None).unwrap();

    git::make_change(&root.repo_dir("repo1"));
    let updated = manager.update(None).unwrap();

    let names: Vec<&str> = updated.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["repo1", "repo2", "repo3"]);
    root.assert_file_contains("repo2", "README", CHANGE_MARKER);
    root.assert_file_contains("repo3", "README", CHANGE_MARKER);
}

#[test]
fn test_update_refuses_incompatible_repo() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("repo1", &url(&upstream), None).unwrap();
    manager.add("repo2", &url(&root.repo_dir("repo1")), None).unwrap();
    root.write_versions("repo2", VERSIONS_FILENAME, &specs::versions_yaml(Some("999.0.0"), None));

    git::make_change(&root.repo_dir("repo1"));
    let err = manager.update(Some("repo2")).unwrap_err();

    assert!(err.is_informative());
    assert!(err.to_string().contains("999.0.0"));
    root.assert_file_lacks("repo2", "README", CHANGE_MARKER);
}

#[test]
fn test_incompatible_repo_blocks_bulk_update() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("repo1", &url(&upstream), None).unwrap();
    manager.add("repo2", &url(&root.repo_dir("repo1")), None).unwrap();
    manager.add("repo3", &url(&root.repo_dir("repo1")), None).unwrap();
    root.write_versions("repo3", VERSIONS_FILENAME, &specs::versions_yaml(Some("999.0.0"), None));

    git::make_change(&root.repo_dir("repo1"));
    assert!(manager.update(None).unwrap_err().is_informative());

    root.assert_file_lacks("repo2", "README", CHANGE_MARKER);
}

#[rstest]
#[case(Some("0.0.1"), None, true)]
#[case(Some("999.0.0"), None, false)]
#[case(None, Some("999.0.0"), true)]
#[case(Some("0.1.0"), Some("0.0.1"), true)]
#[case(Some("0.0.1"), Some("unreleased"), true)]
#[case(Some("0.1.0+build.1"), None, true)]
fn test_is_compatible(
    #[case] min: Option<&str>,
    #[case] last: Option<&str>,
    #[case] expected: bool,
) {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("repo1", &url(&upstream), None).unwrap();
    root.write_versions("repo1", VERSIONS_FILENAME, &specs::versions_yaml(min, last));

    assert_eq!(manager.is_compatible("repo1").unwrap(), expected);
}

#[test]
fn test_last_that_is_not_a_version_is_ignored() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("repo1", &url(&upstream), None).unwrap();
    root.write_versions("repo1", VERSIONS_FILENAME, "min: \"0.0.1\"\nlast: [1, 2]\n");

    assert!(manager.is_compatible("repo1").unwrap());
}

#[test]
fn test_update_runs_with_compatible_repo() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("repo1", &url(&upstream), None).unwrap();
    manager.add("repo2", &url(&root.repo_dir("repo1")), None).unwrap();
    root.write_versions("repo2", VERSIONS_FILENAME, &specs::versions_yaml(Some("0.0.1"), None));

    git::make_change(&root.repo_dir("repo1"));
    let updated = manager.update(Some("repo2")).unwrap();

    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].name, "repo2");
    root.assert_file_contains("repo2", "README", CHANGE_MARKER);
}

#[test]
fn test_repo_without_manifest_is_compatible() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("repo1", &url(&upstream), None).unwrap();

    assert!(manager.is_compatible("repo1").unwrap());
}

#[test]
fn test_lint_reports_missing_license_type() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    specs::write_spec(&upstream, "Bar", "0.1.0", &specs::unlicensed_spec_yaml("Bar", "0.1.0"));
    git::commit_all(&git2::Repository::open(&upstream).unwrap(), "Add Bar");
    manager.add("master", &url(&upstream), None).unwrap();

    let err = manager
        .lint(Some("master"), LintOptions::default())
        .unwrap_err();

    assert!(err.is_informative());
    assert!(err.to_string().contains("Missing license type"), "{err}");
    assert!(err.to_string().contains("Bar/0.1.0/Bar.spec.yml"));
}

#[test]
fn test_lint_of_clean_repo_returns_report() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let upstream = root.upstream("specs");
    manager.add("master", &url(&upstream), None).unwrap();

    let reports = manager.lint(None, LintOptions::default()).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].specs_checked, 1);
    assert!(reports[0].issues.is_empty());
}

#[test]
fn test_lint_fixture_directory_by_path() {
    let root = ReposRoot::new();
    let manager = manager(&root);
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/spec-repos/master");

    let err = manager
        .lint(fixture.to_str(), LintOptions { only_errors: true })
        .unwrap_err();

    assert!(err.to_string().contains("Banjo/0.3.0/Banjo.spec.yml - ERROR | Missing license type"));
}
