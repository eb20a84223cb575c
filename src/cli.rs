//! Command line arguments for the resource inspector

use clap::Parser;
use config::ConfigError;
use std::path::PathBuf;

use crate::config::InspectorConfig;

/// Print metadata for resources in a directory-backed resource tree
#[derive(Parser, Debug)]
#[command(name = "module-resource", version)]
pub struct Cli {
    /// Configuration file to use instead of ./modres.toml and MODRES_* variables
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Resource paths to inspect (defaults to "/")
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

impl Cli {
    /// Loads the configuration named by `--config`, or the default sources.
    pub fn load_config(&self) -> Result<InspectorConfig, ConfigError> {
        match &self.config {
            Some(path) => InspectorConfig::from_file(path),
            None => InspectorConfig::load(),
        }
    }

    pub fn resource_paths(&self) -> Vec<String> {
        if self.paths.is_empty() {
            vec!["/".to_string()]
        } else {
            self.paths.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::io::Write;

    #[test]
    fn test_paths_default_to_root() {
        let cli = Cli::try_parse_from(["module-resource"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.resource_paths(), vec!["/"]);
    }

    #[test]
    fn test_paths_and_config_flag() {
        let cli = Cli::try_parse_from([
            "module-resource",
            "--config",
            "/etc/modres.toml",
            "/icons/",
            "/data/notes.txt",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/modres.toml")));
        assert_eq!(cli.resource_paths(), vec!["/icons/", "/data/notes.txt"]);

        let short = Cli::try_parse_from(["module-resource", "-c", "x.toml"]).unwrap();
        assert_eq!(short.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_help_is_available() {
        let err = Cli::try_parse_from(["module-resource", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_config_flag_reads_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "source_dir = \"/srv/bundle\"").unwrap();
        writeln!(file, "max_file_size_kb = 2").unwrap();

        let cli = Cli::try_parse_from([
            OsStr::new("module-resource"),
            OsStr::new("--config"),
            file.path().as_os_str(),
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.source_dir, "/srv/bundle");
        assert_eq!(config.max_file_size_bytes(), 2048);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let cli = Cli {
            config: Some(missing),
            paths: Vec::new(),
        };
        assert!(cli.load_config().is_err());
    }
}
