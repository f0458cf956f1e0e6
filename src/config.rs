use std::path::PathBuf;

/// Default location of the collection file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/quickcache.jsonl";

/// Runtime settings for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(data_file: P) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}
