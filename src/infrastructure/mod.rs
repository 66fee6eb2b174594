pub mod file_source;
pub mod http_source;
pub mod logging;
pub mod opener;
pub mod repository;

#[cfg(test)]
pub mod test_utils;

pub use file_source::*;
pub use http_source::*;
pub use logging::*;
pub use opener::*;
pub use repository::*;
