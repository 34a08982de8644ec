use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Location of the exported header, relative to the home directory
pub const OUTPUT_SUBPATH: &str = "jeu_desprit/collision/collision_loop.h";

fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Fixed decimal places for coordinates; shortest round-trip when absent
    #[serde(default)]
    pub precision: Option<u8>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    /// Load the first readable config file from the search paths
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file; a missing file is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }
}

/// `<home>/jeu_desprit/collision/collision_loop.h`
pub fn default_output_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine the home directory")?;
    Ok(home.join(OUTPUT_SUBPATH))
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("collision_loop.toml"));
    paths.push(PathBuf::from(".collision_loop.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("collision_loop").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".collision_loop.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.precision, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_load_from() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("collision_loop.toml");
        fs::write(&path, "precision = 6\nverbose = true\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();
        assert_eq!(config.precision, Some(6));
        assert!(config.verbose);
    }

    #[test]
    fn test_load_from_missing() {
        let dir = tempdir().unwrap();
        let err = FileConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_from_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "precision = \"lots\"\n").unwrap();
        assert!(FileConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_output_subpath() {
        let path = PathBuf::from("/home/someone").join(OUTPUT_SUBPATH);
        assert!(path.ends_with("jeu_desprit/collision/collision_loop.h"));
    }
}
