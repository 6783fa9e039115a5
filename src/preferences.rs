//! Player preferences
//!
//! Persisted separately from the game config as a small JSON file.
//! Loading never fails: a missing or unreadable file means defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// The help banner was closed with "don't show again"
    pub banner_dismissed: bool,
}

impl Preferences {
    /// Default file name next to the working directory
    pub const FILE_NAME: &'static str = "bucketball_prefs.json";

    /// Load preferences, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(prefs) => {
                    log::info!("Loaded preferences from {}", path.display());
                    prefs
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable preferences {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default preferences");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read preferences {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Preferences saved to {}", path.display());
        Ok(())
    }

    /// Whether the help banner should be shown at the start of a throw
    pub fn show_banner(&self) -> bool {
        !self.banner_dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(dir.path().join("absent.json"));
        assert_eq!(prefs, Preferences::default());
        assert!(prefs.show_banner());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Preferences::FILE_NAME);
        let prefs = Preferences {
            banner_dismissed: true,
        };
        prefs.save(&path).unwrap();
        let loaded = Preferences::load(&path);
        assert!(loaded.banner_dismissed);
        assert!(!loaded.show_banner());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Preferences::FILE_NAME);
        std::fs::write(&path, "{ banner_dismissed: yes").unwrap();
        assert_eq!(Preferences::load(&path), Preferences::default());
    }
}
