// Core business logic lives here - the brain of the operation
pub mod error;
pub mod models;
pub mod providers;
pub mod search;
pub mod theme;

pub use error::Error;
pub use models::{SearchResult, Status};
pub use theme::Theme;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
