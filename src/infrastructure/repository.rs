use crate::domain::Entry;
use crate::error::Result;

/// Where the dataset comes from.
pub trait DatasetSource {
    /// Retrieve every entry of the dataset.
    fn fetch(&self) -> Result<Vec<Entry>>;

    /// Short description for logs and status lines.
    fn describe(&self) -> String;
}

/// Checks whether a preview URL can be loaded.
pub trait MediaProbe {
    fn is_reachable(&self, url: &str) -> bool;
}
