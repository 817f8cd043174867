//! Configuration layer for cc-explorer.
//!
//! ## Layers
//! - `types`: Configuration type definitions
//! - `loading`: File lookup and parsing

mod error;
mod loading;
mod types;

pub use error::{ConfigError, ConfigFormat};
pub use loading::PROJECT_CONFIG_FILES;
pub use types::{Config, ScanConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScanOptions;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scan.include_hidden, None);
        assert_eq!(config.scan.recursive, None);
        assert!(config.scan.exclude_dirs.is_empty());
        assert_eq!(config.scan_options(), ScanOptions::default());
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".cc-explorer.yaml");
        fs::write(
            &path,
            "scan:\n  include_hidden: true\n  exclude_dirs:\n    - dist\n    - target\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.scan.include_hidden, Some(true));
        assert_eq!(config.scan.recursive, None);
        assert_eq!(config.scan.exclude_dirs, vec!["dist", "target"]);

        let options = config.scan_options();
        assert!(options.include_hidden);
        assert!(options.recursive);
    }

    #[test]
    fn test_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".cc-explorer.json");
        fs::write(&path, r#"{"scan": {"recursive": false}}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.scan.recursive, Some(false));
        assert!(!config.scan_options().recursive);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".cc-explorer.toml");
        fs::write(&path, "[scan]\ninclude_hidden = true\nexclude_dirs = [\"build\"]\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.scan.include_hidden, Some(true));
        assert_eq!(config.scan.exclude_dirs, vec!["build"]);
    }

    #[test]
    fn test_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "[scan]").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(&err, ConfigError::UnsupportedFormat(p) if *p == path));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/.cc-explorer.yaml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_unsupported_extension_checked_before_read() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/config.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_parse_error_carries_format_and_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".cc-explorer.toml");
        fs::write(&path, "[scan\ninclude_hidden = ").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        match &err {
            ConfigError::Parse { format, .. } => assert_eq!(*format, ConfigFormat::Toml),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.path(), path);
        assert!(err.to_string().starts_with("Invalid TOML in config file"));
    }

    #[test]
    fn test_format_from_path() {
        use std::path::Path;
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new(".cc-explorer")), None);
    }

    #[test]
    fn test_load_prefers_project_config() {
        let project = TempDir::new().unwrap();
        let global_dir = TempDir::new().unwrap();
        let global = global_dir.path().join("config.yaml");
        fs::write(project.path().join(".cc-explorer.yml"), "scan:\n  recursive: false\n").unwrap();
        fs::write(&global, "scan:\n  include_hidden: true\n").unwrap();

        let config = Config::load_from(Some(project.path()), Some(&global));
        assert_eq!(config.scan.recursive, Some(false));
        assert_eq!(config.scan.include_hidden, None);
    }

    #[test]
    fn test_load_falls_back_to_global() {
        let project = TempDir::new().unwrap();
        let global_dir = TempDir::new().unwrap();
        let global = global_dir.path().join("config.yaml");
        fs::write(&global, "scan:\n  include_hidden: true\n").unwrap();

        let config = Config::load_from(Some(project.path()), Some(&global));
        assert_eq!(config.scan.include_hidden, Some(true));
    }

    #[test]
    fn test_load_skips_broken_file() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".cc-explorer.yaml"), "scan: [unclosed").unwrap();
        fs::write(project.path().join(".cc-explorer.json"), r#"{"scan": {"recursive": false}}"#)
            .unwrap();

        let config = Config::load_from(Some(project.path()), None);
        assert_eq!(config.scan.recursive, Some(false));
    }

    #[test]
    fn test_load_defaults_when_nothing_found() {
        let project = TempDir::new().unwrap();
        let config = Config::load_from(Some(project.path()), None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_scanner_config_extends_excluded_dirs() {
        let config = Config {
            scan: ScanConfig {
                exclude_dirs: vec!["dist".to_string()],
                ..Default::default()
            },
        };
        let scanner_config = config.scanner_config();
        assert!(scanner_config.excluded_dirs().iter().any(|d| d == "dist"));
        assert!(scanner_config.excluded_dirs().iter().any(|d| d == "node_modules"));
    }
}
