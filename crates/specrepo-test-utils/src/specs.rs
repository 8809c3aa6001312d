//! Spec file and compatibility manifest contents.

use std::fs;
use std::path::{Path, PathBuf};

/// YAML for a spec that passes every lint check.
pub fn valid_spec_yaml(name: &str, version: &str) -> String {
    format!(
        "name: {name}\n\
         version: {version}\n\
         summary: {name} does useful things.\n\
         homepage: https://example.com/{name}\n\
         license:\n  type: MIT\n  file: LICENSE\n\
         source:\n  git: https://example.com/{name}.git\n  tag: {version}\n"
    )
}

/// YAML for a spec with no license at all.
pub fn unlicensed_spec_yaml(name: &str, version: &str) -> String {
    format!(
        "name: {name}\n\
         version: {version}\n\
         summary: {name} does useful things.\n\
         homepage: https://example.com/{name}\n\
         source:\n  git: https://example.com/{name}.git\n  tag: {version}\n"
    )
}

/// Write `<root>/<name>/<version>/<name>.spec.yml` and return its path.
pub fn write_spec(root: &Path, name: &str, version: &str, content: &str) -> PathBuf {
    let dir = root.join(name).join(version);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{name}.spec.yml"));
    fs::write(&path, content).unwrap();
    path
}

/// A compatibility manifest with the given keys.
pub fn versions_yaml(min: Option<&str>, last: Option<&str>) -> String {
    let mut yaml = String::from("---\n");
    if let Some(min) = min {
        yaml.push_str(&format!("min: \"{min}\"\n"));
    }
    if let Some(last) = last {
        yaml.push_str(&format!("last: \"{last}\"\n"));
    }
    yaml
}
