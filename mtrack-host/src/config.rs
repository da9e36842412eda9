//! TOML configuration for a multi-track readout.
//!
//! ```toml
//! max_size_y = 512
//! attribute_prefix = "ROI"
//!
//! [tracks]
//! start = [0, 100]
//! end = [9, 149]
//! bin = [2]
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mtrack_core::UserTracks;

use crate::consts::{DEFAULT_ATTRIBUTE_PREFIX, DEFAULT_MAX_SIZE_Y};
use crate::errors::MultiTrackError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiTrackConfig {
    /// Sensor height in rows.
    pub max_size_y: usize,
    /// Prefix of the per-track attribute names.
    pub attribute_prefix: String,
    /// Initial track arrays.
    pub tracks: UserTracks,
}

impl Default for MultiTrackConfig {
    fn default() -> Self {
        MultiTrackConfig {
            max_size_y: DEFAULT_MAX_SIZE_Y,
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_string(),
            tracks: UserTracks::default(),
        }
    }
}

impl FromStr for MultiTrackConfig {
    type Err = MultiTrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

///
/// Read a multi-track configuration from a TOML file.
///
/// # Arguments
///
/// - path: path to the configuration file
///
pub fn load_config(path: &Path) -> Result<MultiTrackConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = MultiTrackConfig::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    fn test_empty_config_uses_defaults() {
        let config: MultiTrackConfig = "".parse().unwrap();
        assert_eq!(config, MultiTrackConfig::default());
        assert_eq!(config.max_size_y, 1024);
        assert_eq!(config.attribute_prefix, "ROI");
    }

    #[rstest]
    fn test_partial_tracks() {
        let config: MultiTrackConfig = "max_size_y = 256\n[tracks]\nstart = [0, 50]\n"
            .parse()
            .unwrap();
        assert_eq!(config.max_size_y, 256);
        assert_eq!(config.tracks, UserTracks::new(vec![0, 50], vec![], vec![]));
    }

    #[rstest]
    fn test_invalid_config() {
        let err = "max_size_y = \"tall\""
            .parse::<MultiTrackConfig>()
            .unwrap_err();
        assert!(matches!(err, MultiTrackError::InvalidConfig(_)));
    }

    #[rstest]
    fn test_load_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "max_size_y = 512\nattribute_prefix = \"TRK\"\n\n[tracks]\nstart = [0, 100]\nend = [9, 149]\nbin = [2]"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.max_size_y, 512);
        assert_eq!(config.attribute_prefix, "TRK");
        assert_eq!(
            config.tracks,
            UserTracks::new(vec![0, 100], vec![9, 149], vec![2])
        );
    }

    #[rstest]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
