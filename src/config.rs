use crate::storage::DEFAULT_DATA_FILE;
use std::path::PathBuf;

/// Runtime settings for a shell session
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where snapshots are written after each mutation
    pub data_file: PathBuf,
    /// Read `data_file` into the store before the first prompt
    pub load_on_start: bool,
}

impl Config {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            load_on_start: false,
        }
    }

    pub fn with_load_on_start(mut self, load: bool) -> Self {
        self.load_on_start = load;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_DATA_FILE)
    }
}
