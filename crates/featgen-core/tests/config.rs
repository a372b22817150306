use std::path::PathBuf;

use featgen_core::config::{GlobalConfig, UnversionedPolicy};
use tempfile::TempDir;

#[test]
fn test_default_jobs_nonzero() {
    let config = GlobalConfig::default();
    assert!(config.resolve.jobs > 0, "jobs should be > 0");
}

#[test]
fn test_default_platform_paths() {
    let config = GlobalConfig::default();
    assert_eq!(config.platform.checkout, PathBuf::from("../open-liberty"));
    assert_eq!(config.platform.feature_group, "io.openliberty.features");
    assert!(config
        .platform
        .visibility_path()
        .ends_with("dev/com.ibm.websphere.appserver.features/visibility"));
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = GlobalConfig::from_toml_str("").unwrap();
    assert_eq!(config.resolve.unversioned, UnversionedPolicy::Drop);
    assert!(!config.resolve.package_names);
}

#[test]
fn test_parse_from_toml() {
    let toml = r#"
[platform]
checkout = "/src/open-liberty"
feature-group = "com.example.features"

[resolve]
jobs = 2
unversioned = "pass-through"
package-names = true
"#;
    let config = GlobalConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.platform.checkout, PathBuf::from("/src/open-liberty"));
    assert_eq!(config.platform.feature_group, "com.example.features");
    assert_eq!(config.resolve.jobs, 2);
    assert_eq!(config.resolve.unversioned, UnversionedPolicy::PassThrough);
    assert!(config.resolve.package_names);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = GlobalConfig::from_toml_str("[resolve]\njobs = \"many\"").unwrap_err();
    assert!(err.to_string().contains("Configuration error"), "got: {err}");
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = GlobalConfig::discover(tmp.path()).unwrap();
    assert_eq!(config.platform.feature_group, "io.openliberty.features");
}

#[test]
fn test_load_reads_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("featgen.toml"), "[resolve]\njobs = 3\n").unwrap();
    let config = GlobalConfig::discover(tmp.path()).unwrap();
    assert_eq!(config.resolve.jobs, 3);
}
