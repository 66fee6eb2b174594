use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::DatasetSource;
use std::path::PathBuf;

/// Reads the dataset from a local JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn fetch(&self) -> Result<Vec<Entry>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
