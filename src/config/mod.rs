use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTPUT: &str = "parkmap-session.json";

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_center() -> (f64, f64) {
    (30.617, -96.336)
}
fn default_zoom() -> u8 {
    15
}
fn default_min_zoom() -> u8 {
    0
}
fn default_max_zoom() -> u8 {
    19
}
fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}
fn default_attribution() -> String {
    "© OpenStreetMap contributors".to_string()
}
fn default_viewport_width() -> u32 {
    800
}
fn default_viewport_height() -> u32 {
    600
}

/// Map surface settings: initial view, zoom limits and base tiles
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MapConfig {
    /// Initial view center as [lat, lon]
    #[serde(default = "default_center")]
    pub center: (f64, f64),
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: u8,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_attribution")]
    pub attribution: String,
    /// Pixel size used when fitting bounds
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_zoom > self.max_zoom {
            bail!(
                "min_zoom ({}) must not exceed max_zoom ({})",
                self.min_zoom,
                self.max_zoom
            );
        }
        if self.viewport_width == 0 || self.viewport_height == 0 {
            bail!("viewport size must be non-zero");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FileConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub map: MapConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
            output: None,
            verbose: false,
            map: MapConfig::default(),
        }
    }
}

impl FileConfig {
    /// Load the first parseable config file from the standard locations.
    ///
    /// Files that fail to parse are returned in `rejected`, not logged.
    pub fn load() -> ConfigSearch {
        Self::load_from(&get_config_paths())
    }

    pub fn load_from(paths: &[PathBuf]) -> ConfigSearch {
        let mut search = ConfigSearch::default();

        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        search.found = Some((path.clone(), config));
                        break;
                    }
                    Err(e) => search.rejected.push((path.clone(), e.to_string())),
                }
            }
        }

        search
    }

    /// Load an explicitly named config file; unlike [`FileConfig::load`] errors are fatal
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Outcome of config discovery
#[derive(Debug, Default)]
pub struct ConfigSearch {
    /// First file that parsed, with its path
    pub found: Option<(PathBuf, FileConfig)>,
    /// Files that exist but failed to parse, with the parse error
    pub rejected: Vec<(PathBuf, String)>,
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("parkmap.toml"));
    paths.push(PathBuf::from(".parkmap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("parkmap").join("config.toml"));
        paths.push(config_dir.join("parkmap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".parkmap.toml"));
        paths.push(home.join(".config").join("parkmap").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.map, MapConfig::default());
        assert_eq!(config.map.center, (30.617, -96.336));
        assert_eq!(config.map.zoom, 15);
    }

    #[test]
    fn test_partial_map_table() {
        let config: FileConfig = toml::from_str(
            r#"
            backend_url = "http://campus.example:8080"
            [map]
            center = [40.0, -100.0]
            zoom = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.backend_url, "http://campus.example:8080");
        assert_eq!(config.map.center, (40.0, -100.0));
        assert_eq!(config.map.zoom, 12);
        assert_eq!(config.map.max_zoom, 19);
        assert!(config.map.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_zoom() {
        let map = MapConfig {
            min_zoom: 10,
            max_zoom: 5,
            ..MapConfig::default()
        };
        assert!(map.validate().is_err());
    }

    #[test]
    fn test_load_from_skips_unparseable_file() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("parkmap.toml");
        let good = dir.path().join(".parkmap.toml");
        let missing = dir.path().join("missing.toml");
        std::fs::write(&broken, "timeout_secs = \"soon\"\n").unwrap();
        std::fs::write(&good, "verbose = true\n").unwrap();

        let search = FileConfig::load_from(&[missing, broken.clone(), good.clone()]);

        assert_eq!(search.rejected.len(), 1);
        assert_eq!(search.rejected[0].0, broken);
        let (path, config) = search.found.as_ref().unwrap();
        assert_eq!(path, &good);
        assert!(config.verbose);
    }

    #[test]
    fn test_load_from_nothing_found_uses_defaults() {
        let dir = tempdir().unwrap();
        let search = FileConfig::load_from(&[dir.path().join("none.toml")]);

        assert!(search.found.is_none());
        assert!(search.rejected.is_empty());
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("parkmap.toml");
        std::fs::write(&path, "timeout_secs = 5\nverbose = true\n").unwrap();

        let config = FileConfig::from_path(&path).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.verbose);

        assert!(FileConfig::from_path(&dir.path().join("missing.toml")).is_err());
    }
}
