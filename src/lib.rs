pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;
