use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Storage root used when none is given.
pub const DEFAULT_ROOT: &str = ".pronote";
const DEFAULT_FILE_NAME: &str = "notes.json";

/// Where the note store keeps its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storage root directory, created on first write
    pub root: PathBuf,
    /// File name inside `root`
    pub file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl StoreConfig {
    /// Config with the default file name under `root`.
    pub fn at(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn file_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.root, PathBuf::from(".pronote"));
        assert_eq!(config.file_name, "notes.json");
        assert_eq!(config.file_path(), PathBuf::from(".pronote/notes.json"));
    }

    #[test]
    fn test_at_root() {
        let config = StoreConfig::at("/tmp/notes-root");
        assert_eq!(config.file_path(), PathBuf::from("/tmp/notes-root/notes.json"));
    }

    #[test]
    fn test_serialization() {
        let config = StoreConfig::at("data");
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
