//! Configuration loader

use std::path::Path;

use tms_utils::{home_dir, Result, TmsError};

use super::{Config, ConfigFile};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and resolve configuration, degrading to defaults
    ///
    /// A missing file is the normal case and yields [`Config::default`]. An
    /// unreadable or malformed file is reported as a warning and also yields
    /// the default rather than aborting.
    pub fn load_or_default(path: &Path, cwd: &Path) -> Config {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Config::default();
        }

        match Self::load_from_path(path) {
            Ok(file) => {
                let config = file.resolve(&home_dir(), cwd);
                tracing::debug!(
                    "Loaded {} search root(s) from {}",
                    config.search_roots.len(),
                    path.display()
                );
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path).map_err(|e| TmsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parse configuration from string
    ///
    /// An empty document is treated as an empty configuration.
    pub fn parse(content: &str, path: &Path) -> Result<ConfigFile> {
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(content).map_err(|e| TmsError::ConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchRoot;
    use tempfile::tempdir;

    const EXAMPLE_CONFIG: &str = r##"
# tmux-sessionizer configuration

# Depth used by search paths that do not set their own.
max_depth: 2

search_paths:
  - path: /srv/code
  - path: /srv/work
    depth: 3
  # Listed but never scanned
  - path: /srv/archive
    depth: 0
"##;

    #[test]
    fn test_parse_example_config() {
        let file = ConfigLoader::parse(EXAMPLE_CONFIG, Path::new("config.yaml")).unwrap();
        assert_eq!(file.max_depth, 2);
        assert_eq!(file.search_paths.len(), 3);
        assert_eq!(file.search_paths[0].depth, None);
        assert_eq!(file.search_paths[1].depth, Some(3));
        assert_eq!(file.search_paths[2].depth, Some(0));
    }

    #[test]
    fn test_parse_empty_config() {
        let file = ConfigLoader::parse("", Path::new("config.yaml")).unwrap();
        assert!(file.search_paths.is_empty());
        assert_eq!(file.max_depth, 1);
    }

    #[test]
    fn test_parse_partial_config() {
        let file = ConfigLoader::parse("max_depth: 4\n", Path::new("config.yaml")).unwrap();
        assert!(file.search_paths.is_empty());
        assert_eq!(file.max_depth, 4);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = ConfigLoader::parse("search_paths: [unclosed", Path::new("config.yaml"));
        assert!(matches!(result, Err(TmsError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_parse_wrong_shape() {
        let result = ConfigLoader::parse("search_paths: 12\n", Path::new("config.yaml"));
        assert!(matches!(result, Err(TmsError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = ConfigLoader::load_or_default(&dir.path().join("config.yaml"), dir.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_malformed_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "max_depth: [not, a, number]\n").unwrap();

        let config = ConfigLoader::load_or_default(&path, dir.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_path_resolves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, EXAMPLE_CONFIG).unwrap();

        let config = ConfigLoader::load_or_default(&path, dir.path());
        assert_eq!(
            config.search_roots,
            vec![
                SearchRoot::new("/srv/code", 2),
                SearchRoot::new("/srv/work", 3),
                SearchRoot::new("/srv/archive", 0),
            ]
        );
    }

    #[test]
    fn test_load_from_path_missing_is_error() {
        let dir = tempdir().unwrap();
        let result = ConfigLoader::load_from_path(&dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(TmsError::FileRead { .. })));
    }
}
