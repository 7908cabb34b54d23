use std::path::PathBuf;

use super::DataSource;
use crate::error::LoadError;

/// A JSON fixture on the local filesystem.
pub struct FileSource {
    path: PathBuf,
    label: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

impl DataSource for FileSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(std::fs::read(&self.path)?)
    }
}
